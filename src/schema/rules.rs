//! Birth/survival rule sets for Life-like automata.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Neighbor counts that bring a dead cell to life (`birth`) or keep a live
/// cell alive (`survival`).
///
/// Serialized in the usual `B3/S23` notation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RuleSet {
    pub birth: BTreeSet<u8>,
    pub survival: BTreeSet<u8>,
}

impl Default for RuleSet {
    /// Conway's Game of Life, B3/S23.
    fn default() -> Self {
        Self::new([3], [2, 3])
    }
}

impl RuleSet {
    pub fn new(
        birth: impl IntoIterator<Item = u8>,
        survival: impl IntoIterator<Item = u8>,
    ) -> Self {
        Self {
            birth: birth.into_iter().collect(),
            survival: survival.into_iter().collect(),
        }
    }

    /// HighLife, B36/S23.
    pub fn high_life() -> Self {
        Self::new([3, 6], [2, 3])
    }

    /// Day & Night, B3678/S34678.
    pub fn day_and_night() -> Self {
        Self::new([3, 6, 7, 8], [3, 4, 6, 7, 8])
    }

    #[inline]
    pub fn is_birth(&self, alive_neighbors: usize) -> bool {
        u8::try_from(alive_neighbors).is_ok_and(|n| self.birth.contains(&n))
    }

    #[inline]
    pub fn is_survival(&self, alive_neighbors: usize) -> bool {
        u8::try_from(alive_neighbors).is_ok_and(|n| self.survival.contains(&n))
    }
}

/// Rule strings that are not of the form `B<digits>/S<digits>`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Malformed rule '{0}': expected B<digits>/S<digits> (e.g. B3/S23)")]
pub struct RuleParseError(pub String);

fn parse_counts(digits: &str) -> Option<BTreeSet<u8>> {
    digits
        .chars()
        .map(|c| c.to_digit(10).map(|d| d as u8))
        .collect()
}

impl FromStr for RuleSet {
    type Err = RuleParseError;

    /// Parses `B3/S23`, case-insensitive, either part first. Digit lists may
    /// be empty (`B2/S` is Seeds).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || RuleParseError(s.to_string());

        let (first, second) = s.trim().split_once('/').ok_or_else(err)?;
        let mut birth = None;
        let mut survival = None;

        for part in [first.trim(), second.trim()] {
            let mut chars = part.chars();
            let slot = match chars.next() {
                Some('b' | 'B') => &mut birth,
                Some('s' | 'S') => &mut survival,
                _ => return Err(err()),
            };
            if slot.is_some() {
                return Err(err());
            }
            *slot = Some(parse_counts(chars.as_str()).ok_or_else(err)?);
        }

        match (birth, survival) {
            (Some(birth), Some(survival)) => Ok(Self { birth, survival }),
            _ => Err(err()),
        }
    }
}

impl TryFrom<String> for RuleSet {
    type Error = RuleParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<RuleSet> for String {
    fn from(rules: RuleSet) -> Self {
        rules.to_string()
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("B")?;
        for n in &self.birth {
            write!(f, "{n}")?;
        }
        f.write_str("/S")?;
        for n in &self.survival {
            write!(f, "{n}")?;
        }
        Ok(())
    }
}
