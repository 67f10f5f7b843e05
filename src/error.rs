use crate::{CollectionId, TileId};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Errors that can be returned
pub enum Error {
    /// A tile id was not present in the collection it was expected in
    #[error("Tile {id} not found in collection {collection}")]
    TileNotFound { id: TileId, collection: CollectionId },

    /// Positional access outside the collection
    #[error("Index {index} out of range for collection of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Not enough tiles to draw from
    #[error("Requested {requested} random tiles, but only {available} available")]
    ExhaustedSource { requested: usize, available: usize },

    /// The search needed more passes than allowed
    #[error("Search for \"{target}\" exceeded {iterations} iterations")]
    SearchOverrun { target: String, iterations: usize },

    /// Tile notation like "a/b" could not be parsed
    #[error("Invalid tile notation \"{0}\"")]
    InvalidTile(String),
}
