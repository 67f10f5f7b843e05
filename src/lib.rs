//! A word-tiles library for Rust.
//! <br>
//! This crate models the tiles of word games like Scrabble or Boggle, and finds all the ways a
//! word can be spelled with them. Tiles can hold more than one letter (`"qu"`) or be used as one of
//! several letters (`"a/b"`).
//! The rules of a game (turns, scoring, word lists) are up to the user of the crate: it provides
//! collections of tiles, the primitives to move tiles between them, and the search.
//!
//! # How to use `word_tiles`
//! Create a [`TileCollection`] for every place that holds tiles: the bag, the board, a play
//! area. Draw tiles with [`select_random`](TileCollection::select_random), move them with
//! [`exchange_with`](TileCollection::exchange_with), and check whether a word can be spelled
//! with [`search`](TileCollection::search).
//!
//! A collection caches the prefixes it has spelled, so repeated searches on the same tiles are
//! cheap. The cache is cleared whenever the tiles of the collection change.
//!
//! # Basic usage
//!  ```
//! use word_tiles::{Error, SearchOptions, TileCollection};
//!
//! let mut board = TileCollection::from_values(&["qu", "e", "s", "t", "a/i"])?;
//! let options = SearchOptions::new().with_require_unique(true);
//! let found = board.search("quest", &options)?;
//! assert_eq!(found.len(), 1);
//!
//! // move the tiles of the first solution to an empty play area
//! let mut play = board.empty_clone();
//! for (slot, tile) in found[0].iter().enumerate() {
//!     let target = play[slot].id();
//!     board.exchange_with(&mut play, tile.id(), target)?;
//! }
//! assert_eq!(play.render(), "quest");
//! assert_eq!(board.render(), "a");
//! # Ok::<(), Error>(())
//! ```
mod collection;
mod error;
mod tiles;

pub use crate::collection::{
    CollectionId, Decomposition, SearchOptions, TileCollection, ITERATION_CAP,
};
pub use crate::error::Error;
pub use crate::tiles::{Tile, TileId, VALUE_SEPARATOR};
