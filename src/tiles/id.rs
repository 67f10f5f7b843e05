use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_TILE_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identity of a [`Tile`](crate::Tile).
///
/// Ids are handed out from a process wide counter and never reused. An id restored from a
/// number (e.g. when deserializing) moves the counter past it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "u64", into = "u64")
)]
pub struct TileId(u64);

impl TileId {
    pub(crate) fn next() -> TileId {
        TileId(NEXT_TILE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl From<u64> for TileId {
    fn from(id: u64) -> TileId {
        NEXT_TILE_ID.fetch_max(id.saturating_add(1), Ordering::Relaxed);
        TileId(id)
    }
}

impl From<TileId> for u64 {
    fn from(id: TileId) -> u64 {
        id.0
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}
