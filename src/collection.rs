mod options;
mod search;

use self::search::{resolve, Search, SolvedCache};
use crate::{Error, Tile, TileId};
use rand::Rng;
use std::fmt;
use std::ops::Index;
use std::slice::Iter;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::instrument;

pub use options::{SearchOptions, ITERATION_CAP};

/// An ordered list of tiles whose values spell a target string.
pub type Decomposition = Vec<Tile>;

static NEXT_COLLECTION_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identity of a [`TileCollection`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CollectionId(u64);

impl CollectionId {
    fn next() -> CollectionId {
        CollectionId(NEXT_COLLECTION_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

/// An ordered multiset of tiles: a bag, a rack, a board or a play area.
///
/// Tiles are identified by id, which is unique within a collection. The collection remembers
/// the prefixes it has spelled in earlier [`search`](TileCollection::search) calls; this cache
/// is cleared by every operation that changes the tiles.
///
/// With the `serde` feature only the tiles are serialized; a deserialized collection gets a
/// fresh id and an empty cache.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileCollection {
    #[cfg_attr(feature = "serde", serde(skip, default = "CollectionId::next"))]
    id: CollectionId,
    tiles: Vec<Tile>,
    #[cfg_attr(feature = "serde", serde(skip))]
    solved: SolvedCache,
}

impl Default for TileCollection {
    fn default() -> Self {
        TileCollection::new(Vec::new())
    }
}

/// A new collection with the same tiles (same ids), a fresh id and an empty cache.
impl Clone for TileCollection {
    fn clone(&self) -> Self {
        TileCollection::new(self.tiles.clone())
    }
}

/// Display the first value of every tile.
impl fmt::Display for TileCollection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl Index<usize> for TileCollection {
    type Output = Tile;
    fn index(&self, index: usize) -> &Self::Output {
        &self.tiles[index]
    }
}

impl FromIterator<Tile> for TileCollection {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        TileCollection::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TileCollection {
    type Item = &'a Tile;
    type IntoIter = Iter<'a, Tile>;
    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

impl TileCollection {
    /// Create a collection from a list of tiles.
    pub fn new(tiles: Vec<Tile>) -> TileCollection {
        TileCollection {
            id: CollectionId::next(),
            tiles,
            solved: SolvedCache::new(),
        }
    }

    /// Create a collection of `len` empty tiles, e.g. an empty play area.
    pub fn empty(len: usize) -> TileCollection {
        (0..len).map(|_| Tile::empty()).collect()
    }

    /// Create a collection from tile notation, see [`Tile::from_str`](std::str::FromStr).
    /// ## Errors
    /// If one of the values is not valid tile notation.
    /// ## Examples
    /// ```
    /// use word_tiles::{Error, TileCollection};
    /// let rack = TileCollection::from_values(&["qu", "i", "t", "e/a"])?;
    /// assert_eq!(rack.render(), "quite");
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_values<S: AsRef<str>>(values: &[S]) -> Result<TileCollection, Error> {
        values
            .iter()
            .map(|value| value.as_ref().parse::<Tile>())
            .collect()
    }

    /// Create a bag of tiles from a distribution of `(notation, count, score)`,
    /// like the letter distribution of a game.
    /// ## Errors
    /// If one of the notations is not valid tile notation.
    pub fn from_distribution<S: AsRef<str>>(
        distribution: &[(S, usize, i32)],
    ) -> Result<TileCollection, Error> {
        let mut tiles = Vec::new();
        for (notation, count, score) in distribution {
            let tile = notation.as_ref().parse::<Tile>()?.with_score(*score);
            if *count > 0 {
                tiles.extend((1..*count).map(|_| tile.duplicate()));
                tiles.push(tile);
            }
        }
        Ok(TileCollection::new(tiles))
    }

    pub fn id(&self) -> CollectionId {
        self.id
    }

    /// Return the number of tiles, empty tiles included.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn iter(&self) -> Iter<Tile> {
        self.tiles.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Return the position of the tile with `id`.
    pub fn position(&self, id: TileId) -> Option<usize> {
        self.tiles.iter().position(|tile| tile.id() == id)
    }

    pub fn find(&self, id: TileId) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.id() == id)
    }

    pub fn contains(&self, id: TileId) -> bool {
        self.position(id).is_some()
    }

    /// Return the number of empty slots.
    pub fn empty_slots(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_empty()).count()
    }

    /// Return the position of the first empty slot.
    pub fn first_empty_slot(&self) -> Option<usize> {
        self.tiles.iter().position(Tile::is_empty)
    }

    /// Concatenate the first value of every tile. Empty tiles add nothing.
    pub fn render(&self) -> String {
        self.tiles.iter().filter_map(Tile::first_value).collect()
    }

    /// Return the sum of the tile scores.
    pub fn score(&self) -> i32 {
        self.tiles.iter().map(Tile::score).sum()
    }

    fn invalidate(&mut self) {
        self.solved.clear();
    }

    /// Append `tile` and return a reference to it.
    pub fn add(&mut self, tile: Tile) -> &Tile {
        self.invalidate();
        self.tiles.push(tile);
        &self.tiles[self.tiles.len() - 1]
    }

    /// Put `tile` at `position`, and return the tile that was there.
    /// ## Errors
    /// If `position` is out of range.
    pub fn replace_at(&mut self, tile: Tile, position: usize) -> Result<Tile, Error> {
        let len = self.tiles.len();
        let slot = self
            .tiles
            .get_mut(position)
            .ok_or(Error::IndexOutOfRange {
                index: position,
                len,
            })?;
        let previous = std::mem::replace(slot, tile);
        self.invalidate();
        Ok(previous)
    }

    /// Swap our tile `this_id` with the tile `other_id` of `other`.
    /// Each tile takes the position of the other one.
    /// ## Errors
    /// If `this_id` is not in `self` or `other_id` is not in `other`. Nothing is changed then.
    /// ## Examples
    /// ```
    /// use word_tiles::{Error, TileCollection};
    /// let mut rack = TileCollection::from_values(&["a", "b"])?;
    /// let mut board = TileCollection::empty(2);
    /// let (a, slot) = (rack[0].id(), board[1].id());
    /// rack.exchange_with(&mut board, a, slot)?;
    /// assert_eq!(rack.render(), "b");
    /// assert_eq!(board.render(), "a");
    /// assert_eq!(board[1].id(), a);
    /// # Ok::<(), Error>(())
    /// ```
    #[instrument(skip(self, other), fields(collection = %self.id, other_collection = %other.id))]
    pub fn exchange_with(
        &mut self,
        other: &mut TileCollection,
        this_id: TileId,
        other_id: TileId,
    ) -> Result<(), Error> {
        let this_position = self.position(this_id).ok_or(Error::TileNotFound {
            id: this_id,
            collection: self.id,
        })?;
        let other_position = other.position(other_id).ok_or(Error::TileNotFound {
            id: other_id,
            collection: other.id,
        })?;
        std::mem::swap(
            &mut self.tiles[this_position],
            &mut other.tiles[other_position],
        );
        self.invalidate();
        other.invalidate();
        Ok(())
    }

    /// Remove a random tile, or replace it with a duplicate of `replacement`.
    /// Return the removed tile, or `None` if the collection is empty.
    pub fn remove_random<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        replacement: Option<&Tile>,
    ) -> Option<Tile> {
        if self.tiles.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.tiles.len());
        self.remove_at(index, replacement)
    }

    /// Remove the tile at `index`, or replace it with a duplicate of `replacement`.
    /// Return the removed tile, or `None` if `index` is out of range.
    pub fn remove_at(&mut self, index: usize, replacement: Option<&Tile>) -> Option<Tile> {
        if index >= self.tiles.len() {
            return None;
        }
        self.invalidate();
        let removed = match replacement {
            Some(tile) => std::mem::replace(&mut self.tiles[index], tile.duplicate()),
            None => self.tiles.remove(index),
        };
        Some(removed)
    }

    /// Remove the tile with `id`, or replace it with a duplicate of `replacement`.
    /// The order of the other tiles is kept.
    /// Return the removed tile, or `None` if there is no tile with `id`.
    pub fn remove_by_id(&mut self, id: TileId, replacement: Option<&Tile>) -> Option<Tile> {
        let index = self.position(id)?;
        self.remove_at(index, replacement)
    }

    /// Put the tiles in a random order.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut shuffled = Vec::with_capacity(self.tiles.len());
        while let Some(tile) = self.remove_random(rng, None) {
            shuffled.push(tile);
        }
        self.tiles = shuffled;
        self.invalidate();
    }

    /// Return a collection of the same length with only empty tiles.
    pub fn empty_clone(&self) -> TileCollection {
        TileCollection::empty(self.tiles.len())
    }

    /// Move all our tiles to the end of `destination`, leaving empty tiles in their place.
    pub fn drain_into(&mut self, destination: &mut TileCollection) {
        destination.tiles.reserve(self.tiles.len());
        for slot in self.tiles.iter_mut() {
            destination.tiles.push(std::mem::replace(slot, Tile::empty()));
        }
        self.invalidate();
        destination.invalidate();
    }

    /// Draw `size` random tiles into a new collection. With a `replacement`, every drawn tile is
    /// replaced by a duplicate of it.
    /// ## Errors
    /// If there are not enough tiles to draw from. The collection is not changed then.
    /// ## Examples
    /// ```
    /// use rand::{rngs::StdRng, SeedableRng};
    /// use word_tiles::{Error, TileCollection};
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let mut bag = TileCollection::from_values(&["a", "b", "c", "d"])?;
    /// let hand = bag.select_random(&mut rng, 3, None)?;
    /// assert_eq!((hand.len(), bag.len()), (3, 1));
    /// assert!(bag.select_random(&mut rng, 2, None).is_err());
    /// # Ok::<(), Error>(())
    /// ```
    #[instrument(skip(self, rng, replacement), fields(collection = %self.id))]
    pub fn select_random<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        size: usize,
        replacement: Option<&Tile>,
    ) -> Result<TileCollection, Error> {
        let available = self.tiles.len();
        let exhausted = Error::ExhaustedSource {
            requested: size,
            available,
        };
        let enough = match replacement {
            Some(_) => size == 0 || available > 0,
            None => size <= available,
        };
        if !enough {
            return Err(exhausted);
        }
        let mut selected = Vec::with_capacity(size);
        for _ in 0..size {
            let tile = self
                .remove_random(rng, replacement)
                .ok_or_else(|| exhausted.clone())?;
            selected.push(tile);
        }
        Ok(TileCollection::new(selected))
    }

    /// Find every way to spell `target` with our tiles.
    ///
    /// A decomposition is a list of tiles, such that `target` is the concatenation of one value
    /// of each tile. A tile may appear more than once, unless
    /// [`require_unique`](SearchOptions::with_require_unique) is set. Decompositions are
    /// returned once per distinct sequence of tile ids.
    ///
    /// Solved prefixes of `target` are cached and reused by later searches, until the
    /// collection is changed. An empty `target` has no decompositions.
    ///
    /// ## Errors
    /// [`Error::SearchOverrun`] if the search needs more than
    /// [`iteration_cap`](SearchOptions::with_iteration_cap) passes.
    /// ## Examples
    /// ```
    /// use word_tiles::{Error, SearchOptions, TileCollection};
    /// let mut tiles = TileCollection::from_values(&["a", "ba", "b"])?;
    /// let found = tiles.search("aba", &SearchOptions::new())?;
    /// assert_eq!(found.len(), 2);
    /// let unique = tiles.search("aba", &SearchOptions::new().with_require_unique(true))?;
    /// assert_eq!(unique.len(), 1);
    /// assert_eq!(unique[0].len(), 2);
    /// # Ok::<(), Error>(())
    /// ```
    #[instrument(skip(self, options), fields(collection = %self.id))]
    pub fn search(
        &mut self,
        target: &str,
        options: &SearchOptions,
    ) -> Result<Vec<Decomposition>, Error> {
        let found = Search::new(&self.tiles, &mut self.solved, target, options).run()?;
        Ok(found
            .iter()
            .map(|positions| {
                resolve(&self.tiles, positions)
                    .into_iter()
                    .cloned()
                    .collect()
            })
            .collect())
    }

    /// Check if `target` can be spelled with our tiles under the constraints of `options`.
    /// ## Errors
    /// See [`search`](TileCollection::search).
    pub fn can_spell(&mut self, target: &str, options: &SearchOptions) -> Result<bool, Error> {
        let options = options.clone().with_select_first(true);
        Ok(!self.search(target, &options)?.is_empty())
    }

    /// Return the prefixes remembered from earlier searches.
    pub fn cached_prefixes(&self) -> Vec<&str> {
        let mut prefixes: Vec<&str> = self.solved.keys().map(String::as_str).collect();
        prefixes.sort_unstable();
        prefixes
    }

    /// Forget all solved prefixes.
    pub fn clear_cache(&mut self) {
        self.invalidate();
    }
}
