//! Toroidal Life - Conway's Game of Life on a wrap-around grid.
//!
//! Cells live on a rectangular grid whose edges join, so every cell has a
//! full neighborhood. Each generation is computed from the previous one only
//! and written into a second buffer.
//!
//! # Architecture
//!
//! The crate is split into three modules:
//!
//! - `compute`: Coordinates, neighborhoods, cell states and the automaton
//! - `pattern`: Life 1.06 and RLE decoders
//! - `schema`: Rules, palettes, configuration and seeding
//!
//! # Example
//!
//! ```rust
//! use toroidal_life::{
//!     compute::{Automaton, ConwayState, Neighborhood},
//!     pattern::PatternFormat,
//! };
//!
//! let mut grid = Automaton::uniform(Neighborhood::Moore, ConwayState::DEAD, 15, 15)?;
//! let glider = PatternFormat::Rle
//!     .decode("x = 3, y = 3, rule = B3/S23\nbo$2bo$3o!")?
//!     .into_automaton(Neighborhood::Moore)?;
//! grid.spawn_centered(&glider)?;
//!
//! grid.run(4);
//! assert_eq!(grid.population(), 5);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod compute;
pub mod pattern;
pub mod schema;

// Re-export commonly used types
pub use compute::{Automaton, ConwayState, Coordinate, GenerationStats, Neighborhood};
pub use pattern::{PatternData, PatternFormat};
pub use schema::{Pattern, RuleSet, Seed, SimulationConfig};
