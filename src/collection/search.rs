//! Best-first decomposition of a target string over the tiles of a collection.
//!
//! The search keeps a frontier of spelled prefixes of the target, each with every tile sequence
//! found so far that spells it. The shortest prefix is always expanded first, so when a prefix
//! leaves the frontier all of its decompositions are known and it can be moved to the
//! [`SolvedCache`]. Cached prefixes are reused as sections in later searches on the same
//! collection.
use super::options::SearchOptions;
use crate::{Error, Tile};
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::{debug, trace};

/// A decomposition as positions in the collection.
pub(super) type Positions = Vec<usize>;

/// Solved prefix string → all of its decompositions.
/// Only valid for the tile contents it was computed with.
pub(super) type SolvedCache = HashMap<String, Vec<Positions>>;

/// The decompositions of one frontier prefix, without duplicates.
#[derive(Debug, Default)]
struct Candidates {
    sequences: Vec<Positions>,
    seen: HashSet<Positions>,
}

impl Candidates {
    fn start() -> Candidates {
        let mut candidates = Candidates::default();
        candidates.push(Positions::new());
        candidates
    }

    fn push(&mut self, sequence: Positions) {
        if self.seen.insert(sequence.clone()) {
            self.sequences.push(sequence);
        }
    }
}

pub(super) struct Search<'a> {
    tiles: &'a [Tile],
    solved: &'a mut SolvedCache,
    target: &'a str,
    options: &'a SearchOptions,
    sections: Vec<String>,
    /// Unfinished prefixes, keyed by their length in bytes.
    frontier: BTreeMap<usize, Candidates>,
}

impl<'a> Search<'a> {
    pub(super) fn new(
        tiles: &'a [Tile],
        solved: &'a mut SolvedCache,
        target: &'a str,
        options: &'a SearchOptions,
    ) -> Search<'a> {
        let mut sections: Vec<String> = Vec::new();
        for section in tiles.iter().flat_map(Tile::values).chain(solved.keys()) {
            if !section.is_empty() && !sections.contains(section) {
                sections.push(section.clone());
            }
        }
        let mut frontier = BTreeMap::new();
        frontier.insert(0, Candidates::start());
        Search {
            tiles,
            solved,
            target,
            options,
            sections,
            frontier,
        }
    }

    /// Run the search to completion.
    pub(super) fn run(mut self) -> Result<Vec<Positions>, Error> {
        if self.target.is_empty() {
            return Ok(Vec::new());
        }
        let mut iterations = 0;
        loop {
            if let Some(found) = self.solved.get(self.target) {
                let found = self.accepted(found);
                debug!(solutions = found.len(), iterations, "search finished");
                return Ok(found);
            }
            if self.options.select_first() {
                if let Some(candidates) = self.frontier.get(&self.target.len()) {
                    let first = self.accepted(&candidates.sequences);
                    if !first.is_empty() {
                        debug!(iterations, "search found first solution");
                        return Ok(first);
                    }
                }
            }
            let (len, candidates) = match pop_first(&mut self.frontier) {
                Some(entry) => entry,
                None => {
                    debug!(iterations, "search exhausted");
                    return Ok(Vec::new());
                }
            };
            iterations += 1;
            if iterations > self.options.iteration_cap() {
                debug!(iterations, "search overrun");
                return Err(Error::SearchOverrun {
                    target: String::from(self.target),
                    iterations: self.options.iteration_cap(),
                });
            }
            if let Some(first) = self.expand(len, candidates.sequences) {
                debug!(iterations, "search found first solution");
                return Ok(vec![first]);
            }
        }
    }

    /// Finalize the prefix of `len` bytes and extend its decompositions with every section that
    /// fits the remaining suffix. Under `select_first`, return the first complete
    /// decomposition that passes the constraints.
    fn expand(&mut self, len: usize, so_far: Vec<Positions>) -> Option<Positions> {
        let target = self.target;
        let prefix = &target[..len];
        let suffix = &target[len..];
        trace!(prefix, count = so_far.len(), "expand prefix");
        if !prefix.is_empty() {
            self.solved.insert(String::from(prefix), so_far.clone());
        }
        for section in &self.sections {
            if !suffix.starts_with(section.as_str()) {
                continue;
            }
            let next = len + section.len();
            let complete = next == target.len();
            let parts = match self.solved.get(section) {
                Some(cached) => cached.clone(),
                None => self
                    .tiles
                    .iter()
                    .enumerate()
                    .filter(|(_, tile)| tile.matches(section))
                    .map(|(position, _)| vec![position])
                    .collect(),
            };
            let candidates = self.frontier.entry(next).or_default();
            for part in &parts {
                for base in &so_far {
                    let mut sequence = base.clone();
                    sequence.extend_from_slice(part);
                    if complete
                        && self.options.select_first()
                        && self.options.accepts(&resolve(self.tiles, &sequence))
                    {
                        return Some(sequence);
                    }
                    candidates.push(sequence);
                }
            }
        }
        None
    }

    /// The sequences that pass the constraints; only the first one under `select_first`.
    fn accepted(&self, sequences: &[Positions]) -> Vec<Positions> {
        let mut accepted = sequences
            .iter()
            .filter(|sequence| self.options.accepts(&resolve(self.tiles, sequence)));
        if self.options.select_first() {
            accepted.next().cloned().into_iter().collect()
        } else {
            accepted.cloned().collect()
        }
    }
}

fn pop_first<V>(map: &mut BTreeMap<usize, V>) -> Option<(usize, V)> {
    let key = *map.keys().next()?;
    map.remove(&key).map(|value| (key, value))
}

/// Map positions to tiles. Positions always come from the same tile list.
pub(super) fn resolve<'t>(tiles: &'t [Tile], positions: &[usize]) -> Vec<&'t Tile> {
    positions.iter().filter_map(|&position| tiles.get(position)).collect()
}
