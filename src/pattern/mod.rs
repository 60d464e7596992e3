//! Pattern decoding for the Life 1.06 and RLE text formats.
//!
//! Decoders are pure: they take lines of text and return a dense matrix of
//! [`ConwayState`]s plus its inclusive bounds. File and network access stay
//! with the caller.
//!
//! # Formats
//!
//! ```text
//! Life 1.06 (one live cell per line):
//!   #Life 1.06
//!   0 0
//!   1 0
//!   0 1
//!
//! RLE (header, then run-length encoded rows):
//!   #N Glider
//!   x = 3, y = 3, rule = B3/S23
//!   bo$2bo$3o!
//! ```

mod life;
mod rle;

use std::path::Path;

pub use life::life;
pub use rle::{RleHeader, rle};

use crate::compute::{Automaton, AutomatonError, ConwayState, Coordinate, Neighborhood};
use crate::schema::RuleSet;

pub const LIFE_FORMAT_URL: &str = "https://conwaylife.com/wiki/Life_1.06";
pub const RLE_FORMAT_URL: &str = "https://conwaylife.com/wiki/Run_Length_Encoded";

/// Decoding failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("Malformed Life 1.06 coordinate on line {line}: '{content}' (see {})", LIFE_FORMAT_URL)]
    MalformedCoordinate { line: usize, content: String },
    #[error("Life 1.06 coordinates span {min} to {max}, too wide for a grid (see {})", LIFE_FORMAT_URL)]
    BoundingBoxTooLarge { min: Coordinate, max: Coordinate },
    #[error("RLE data is missing its header line (see {})", RLE_FORMAT_URL)]
    MissingHeader,
    #[error("Malformed RLE header line: '{line}' (see {})", RLE_FORMAT_URL)]
    MalformedHeader { line: String },
    #[error("Malformed RLE rule '{rule}' (see {})", RLE_FORMAT_URL)]
    MalformedRule { rule: String },
}

/// A decoded pattern: `(ymax + 1)` rows of `(xmax + 1)` states.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternData {
    pub xmax: i32,
    pub ymax: i32,
    pub states: Vec<Vec<ConwayState>>,
    /// Rules declared by the pattern, if any.
    pub rules: Option<RuleSet>,
}

impl PatternData {
    #[inline]
    pub fn max_coord(&self) -> Coordinate {
        Coordinate::new(self.xmax, self.ymax)
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.states.iter().flatten().filter(|s| s.alive).count()
    }

    /// Build an automaton of exactly this pattern's size, applying any
    /// declared rules.
    pub fn into_automaton(
        self,
        neighborhood: Neighborhood,
    ) -> Result<Automaton<ConwayState>, AutomatonError> {
        let automaton = Automaton::from_matrix(neighborhood, self.states, self.xmax, self.ymax)?;
        Ok(match self.rules {
            Some(rules) => automaton.with_rules(rules),
            None => automaton,
        })
    }
}

/// Supported pattern text formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternFormat {
    Life,
    Rle,
}

impl PatternFormat {
    /// Guess the format from a file extension (`.rle`, `.life`, `.lif`).
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "rle" => Some(PatternFormat::Rle),
            "life" | "lif" => Some(PatternFormat::Life),
            _ => None,
        }
    }

    pub fn decode(&self, text: &str) -> Result<PatternData, PatternError> {
        match self {
            PatternFormat::Life => life(text.lines()),
            PatternFormat::Rle => rle(text.lines()),
        }
    }
}
