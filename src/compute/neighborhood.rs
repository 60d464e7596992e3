//! Neighborhood shapes and toroidal neighbor resolution.
//!
//! Neighbor coordinates are resolved once per cell when a grid is built and
//! cached in a [`Cell`]. Offsets that fall off an edge wrap to the opposite
//! edge, so the grid behaves as a torus.

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Moore neighborhood, clockwise from the upper left.
///
/// ```text
/// +---+---+---+
/// | 1 | 2 | 3 |
/// +---+---+---+
/// | 8 | C | 4 |
/// +---+---+---+
/// | 7 | 6 | 5 |
/// +---+---+---+
/// ```
pub const MOORE_OFFSETS: [Coordinate; 8] = [
    Coordinate::new(-1, -1),
    Coordinate::new(0, -1),
    Coordinate::new(1, -1),
    Coordinate::new(1, 0),
    Coordinate::new(1, 1),
    Coordinate::new(0, 1),
    Coordinate::new(-1, 1),
    Coordinate::new(-1, 0),
];

/// Von Neumann neighborhood: up, right, down, left.
pub const VON_NEUMANN_OFFSETS: [Coordinate; 4] = [
    Coordinate::new(0, -1),
    Coordinate::new(1, 0),
    Coordinate::new(0, 1),
    Coordinate::new(-1, 0),
];

/// The set of relative offsets counted as a cell's neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Neighborhood {
    /// The 8 orthogonally and diagonally adjacent cells.
    #[default]
    Moore,
    /// The 4 orthogonally adjacent cells.
    VonNeumann,
}

impl Neighborhood {
    /// Ordered offsets for this neighborhood.
    #[inline]
    pub fn offsets(&self) -> &'static [Coordinate] {
        match self {
            Neighborhood::Moore => &MOORE_OFFSETS,
            Neighborhood::VonNeumann => &VON_NEUMANN_OFFSETS,
        }
    }

    /// Resolve the neighbors of `coord` on a torus whose largest coordinate
    /// is `max_coord`. Order follows [`Neighborhood::offsets`].
    ///
    /// Duplicates are kept: on grids one or two cells wide the same
    /// coordinate (or the cell itself) can appear more than once.
    pub fn neighbors_of(&self, coord: Coordinate, max_coord: Coordinate) -> Vec<Coordinate> {
        self.offsets()
            .iter()
            .map(|&offset| wrap(coord + offset, max_coord))
            .collect()
    }
}

/// Wrap a single axis value that stepped at most one cell past `[0, max]`.
#[inline]
fn wrap_axis(v: i32, max: i32) -> Option<i32> {
    if v < 0 {
        Some(max)
    } else if v > max {
        Some(0)
    } else {
        None
    }
}

/// Wrap a candidate neighbor coordinate back onto the grid.
///
/// A candidate past a corner wraps on both axes at once, otherwise only the
/// axis that left the grid is wrapped.
pub fn wrap(candidate: Coordinate, max_coord: Coordinate) -> Coordinate {
    match (
        wrap_axis(candidate.x, max_coord.x),
        wrap_axis(candidate.y, max_coord.y),
    ) {
        (Some(x), Some(y)) => Coordinate::new(x, y),
        (Some(x), None) => Coordinate::new(x, candidate.y),
        (None, Some(y)) => Coordinate::new(candidate.x, y),
        (None, None) => candidate,
    }
}

/// A grid position together with its cached, wrap-resolved neighbors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub coord: Coordinate,
    pub neighbors: Vec<Coordinate>,
}

impl Cell {
    pub fn new(coord: Coordinate, neighborhood: Neighborhood, max_coord: Coordinate) -> Self {
        Self {
            coord,
            neighbors: neighborhood.neighbors_of(coord, max_coord),
        }
    }
}
