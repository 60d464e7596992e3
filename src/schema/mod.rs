//! Schema module - Configuration, rules, palettes and seeding types.

mod builtin;
mod config;
mod palette;
mod rules;
mod seed;

pub use builtin::*;
pub use config::*;
pub use palette::*;
pub use rules::*;
pub use seed::*;
