use crate::Tile;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Maximum number of passes of a single search, see [`TileCollection::search`](crate::TileCollection::search).
pub const ITERATION_CAP: usize = 100_000;

type Constraint = Arc<dyn Fn(&[&Tile]) -> bool + Send + Sync>;

/// Constraints for a [`search`](crate::TileCollection::search).
///
/// All constraints are filters on complete decompositions, they do not prune the search.
/// ## Examples
/// ```
/// use word_tiles::SearchOptions;
/// let options = SearchOptions::new()
///     .with_require_unique(true)
///     .with_tile_limit(4)
///     .with_constraint(|tiles| tiles.iter().all(|tile| tile.score() < 10));
/// assert!(options.require_unique());
/// ```
#[derive(Clone)]
pub struct SearchOptions {
    select_first: bool,
    require_unique: bool,
    tile_limit: Option<usize>,
    constraint: Option<Constraint>,
    iteration_cap: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            select_first: false,
            require_unique: false,
            tile_limit: None,
            constraint: None,
            iteration_cap: ITERATION_CAP,
        }
    }
}

impl fmt::Debug for SearchOptions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SearchOptions")
            .field("select_first", &self.select_first)
            .field("require_unique", &self.require_unique)
            .field("tile_limit", &self.tile_limit)
            .field("constraint", &self.constraint.is_some())
            .field("iteration_cap", &self.iteration_cap)
            .finish()
    }
}

impl SearchOptions {
    /// No constraints: return every decomposition.
    pub fn new() -> SearchOptions {
        SearchOptions::default()
    }

    /// Stop at the first decomposition that satisfies the constraints.
    pub fn with_select_first(mut self, select_first: bool) -> SearchOptions {
        self.select_first = select_first;
        self
    }

    /// Reject decompositions that use the same tile more than once.
    pub fn with_require_unique(mut self, require_unique: bool) -> SearchOptions {
        self.require_unique = require_unique;
        self
    }

    /// Reject decompositions of more than `limit` tiles.
    pub fn with_tile_limit(mut self, limit: usize) -> SearchOptions {
        self.tile_limit = Some(limit);
        self
    }

    /// Reject decompositions for which `constraint` returns `false`.
    /// It is only called for decompositions that pass the other constraints.
    pub fn with_constraint<F>(mut self, constraint: F) -> SearchOptions
    where
        F: Fn(&[&Tile]) -> bool + Send + Sync + 'static,
    {
        self.constraint = Some(Arc::new(constraint));
        self
    }

    /// Change the maximum number of search passes (default [`ITERATION_CAP`]).
    pub fn with_iteration_cap(mut self, iteration_cap: usize) -> SearchOptions {
        self.iteration_cap = iteration_cap;
        self
    }

    pub fn select_first(&self) -> bool {
        self.select_first
    }

    pub fn require_unique(&self) -> bool {
        self.require_unique
    }

    pub fn tile_limit(&self) -> Option<usize> {
        self.tile_limit
    }

    pub fn iteration_cap(&self) -> usize {
        self.iteration_cap
    }

    /// Check if `tiles` passes all constraints.
    pub fn accepts(&self, tiles: &[&Tile]) -> bool {
        if let Some(limit) = self.tile_limit {
            if tiles.len() > limit {
                return false;
            }
        }
        if self.require_unique {
            let mut seen = HashSet::with_capacity(tiles.len());
            if !tiles.iter().all(|tile| seen.insert(tile.id())) {
                return false;
            }
        }
        match &self.constraint {
            Some(constraint) => constraint(tiles),
            None => true,
        }
    }
}
