//! Integer grid coordinates.

use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// An immutable (x, y) point on the grid.
///
/// Also used for relative offsets (neighborhoods, spawn positions) and, when
/// holding the largest valid coordinate of a grid, as an inclusive bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether `other` lies in the closed rectangle `[0, self.x] x [0, self.y]`.
    #[inline]
    pub fn contains(&self, other: Coordinate) -> bool {
        (0..=self.x).contains(&other.x) && (0..=self.y).contains(&other.y)
    }

    /// Component-wise addition, `None` on `i32` overflow.
    #[inline]
    pub fn checked_add(self, rhs: Coordinate) -> Option<Coordinate> {
        Some(Coordinate::new(
            self.x.checked_add(rhs.x)?,
            self.y.checked_add(rhs.y)?,
        ))
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    #[inline]
    fn add(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coordinate {
    type Output = Coordinate;

    #[inline]
    fn sub(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
