use super::{TileId, VALUE_SEPARATOR};
use crate::error::Error;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A game piece that can spell one of its `values`.
///
/// Regular tiles have a single value, like `"e"` or `"qu"`. Special tiles may have several
/// alternative values (`"a/b"`): a search may use any one of them, never their concatenation.
/// A tile without values is *empty*: it marks an unfilled slot, never matches a search and
/// renders as nothing.
///
/// Tiles are compared by identity. `clone()` gives another handle to the same tile (same id),
/// use [`duplicate`](Tile::duplicate) for a new tile with the same contents.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    id: TileId,
    values: Vec<String>,
    score: i32,
    specials: Vec<String>,
}

impl Tile {
    /// Create a new tile that can spell any of `values`.
    /// Empty strings are dropped, so `Tile::new([""])` is an empty tile.
    /// ## Examples
    /// ```
    /// use word_tiles::Tile;
    /// let tile = Tile::new(["a", "b"]);
    /// assert_eq!(tile.values(), ["a", "b"]);
    /// assert!(!tile.is_empty());
    /// ```
    pub fn new<I, S>(values: I) -> Tile
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Tile {
            id: TileId::next(),
            values: values
                .into_iter()
                .map(Into::<String>::into)
                .filter(|value| !value.is_empty())
                .collect(),
            score: 0,
            specials: Vec::new(),
        }
    }

    /// Create a regular tile with a single value.
    pub fn letter<S: Into<String>>(value: S) -> Tile {
        Tile::new(std::iter::once(value))
    }

    /// An empty tile, a placeholder for an unfilled slot.
    pub fn empty() -> Tile {
        Tile::new(Vec::<String>::new())
    }

    /// Set the score, and return the modified tile.
    pub fn with_score(mut self, score: i32) -> Tile {
        self.score = score;
        self
    }

    /// Add special tags, and return the modified tile. Tags already present are ignored.
    pub fn with_specials<I, S>(mut self, specials: I) -> Tile
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for special in specials.into_iter().map(Into::<String>::into) {
            if !self.specials.contains(&special) {
                self.specials.push(special);
            }
        }
        self
    }

    /// Return a new tile with the same values, score and specials, but a fresh id.
    /// ## Examples
    /// ```
    /// use word_tiles::Tile;
    /// let tile = Tile::letter("q").with_score(10);
    /// let copy = tile.duplicate();
    /// assert_ne!(tile.id(), copy.id());
    /// assert_eq!(copy.score(), 10);
    /// ```
    #[must_use]
    pub fn duplicate(&self) -> Tile {
        Tile {
            id: TileId::next(),
            ..self.clone()
        }
    }

    /// Identity of this tile.
    pub fn id(&self) -> TileId {
        self.id
    }

    /// Alternative values this tile can spell.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// The value used when the tile is rendered, `None` for an empty tile.
    pub fn first_value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn specials(&self) -> &[String] {
        &self.specials
    }

    pub fn has_special(&self, special: &str) -> bool {
        self.specials.iter().any(|s| s == special)
    }

    /// Check if the tile is an empty slot.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check if one of our values is exactly `section`.
    pub fn matches(&self, section: &str) -> bool {
        self.values.iter().any(|value| value == section)
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Tile {}

impl Hash for Tile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Show the values separated by `/`, or `.` for an empty tile.
impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            return write!(f, ".");
        }
        write!(f, "{}", self.values.join(&VALUE_SEPARATOR.to_string()))
    }
}

/// Parse tile notation: `"e"`, `"qu"` or alternatives like `"a/b"`.
/// ## Errors
/// If the notation is blank or contains a blank alternative.
impl FromStr for Tile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(VALUE_SEPARATOR)
            .map(str::trim)
            .map(|value| {
                if value.is_empty() {
                    Err(Error::InvalidTile(String::from(s)))
                } else {
                    Ok(value)
                }
            })
            .collect::<Result<Vec<_>, Error>>()?;
        Ok(Tile::new(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let tile = Tile::empty();
        assert!(tile.is_empty());
        assert_eq!(tile.first_value(), None);
        assert!(!tile.matches(""));
        assert_eq!(tile.to_string(), ".");
        assert!(Tile::new([""]).is_empty());
    }

    #[test]
    fn test_parse() -> Result<(), Error> {
        let tile: Tile = "qu".parse()?;
        assert_eq!(tile.values(), ["qu"]);
        let tile: Tile = "a/ b".parse()?;
        assert_eq!(tile.values(), ["a", "b"]);
        assert!(tile.matches("b"));
        assert!(!tile.matches("ab"));
        assert_eq!(tile.to_string(), "a/b");
        Ok(())
    }

    #[test]
    fn test_parse_error() {
        assert_eq!("".parse::<Tile>(), Err(Error::InvalidTile(String::new())));
        assert_eq!(
            "a//b".parse::<Tile>(),
            Err(Error::InvalidTile(String::from("a//b")))
        );
    }

    #[test]
    fn test_identity() {
        let a = Tile::letter("a");
        let b = Tile::letter("a");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
        assert_ne!(a, a.duplicate());
    }

    #[test]
    fn test_duplicate_keeps_contents() {
        let tile = Tile::new(["a", "b"])
            .with_score(3)
            .with_specials(["double", "double", "gold"]);
        let copy = tile.duplicate();
        assert_eq!(copy.values(), tile.values());
        assert_eq!(copy.score(), 3);
        assert_eq!(copy.specials(), ["double", "gold"]);
        assert!(copy.has_special("gold"));
        assert!(!copy.has_special("silver"));
        assert!(Tile::empty().duplicate().is_empty());
    }
}
