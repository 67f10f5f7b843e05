//! Basic types for working with word-game tiles.
mod id;
mod tile;

/// Separator between alternative values in tile notation, e.g. `"a/b"`.
pub const VALUE_SEPARATOR: char = '/';

pub use id::TileId;
pub use tile::Tile;
