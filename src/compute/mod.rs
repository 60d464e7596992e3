//! Compute module - Grid topology, cell states and generational evolution.

mod automaton;
mod coordinate;
mod neighborhood;
mod state;

pub use automaton::*;
pub use coordinate::*;
pub use neighborhood::*;
pub use state::*;
