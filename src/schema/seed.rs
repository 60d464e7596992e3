//! Seed types for initializing Life simulations.

use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use super::{BuiltinPattern, ConfigError, SimulationConfig};
use crate::compute::{Automaton, AutomatonError, ConwayState, Coordinate};
use crate::pattern::{PatternData, PatternError, PatternFormat};

/// Initial configuration of a simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seed {
    /// Pattern to use for seeding.
    pub pattern: Pattern,
}

impl Default for Seed {
    fn default() -> Self {
        Self {
            pattern: Pattern::Random {
                density: 0.5,
                seed: None,
            },
        }
    }
}

/// Initial configuration sources.
///
/// Decoded patterns are centered on the grid and their declared rules, if
/// any, replace the configured ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    /// Uniform random fill.
    Random {
        /// Probability that a cell starts alive (0.0-1.0).
        density: f64,
        /// Random seed. Entropy is used when absent.
        #[serde(default)]
        seed: Option<u64>,
    },
    /// One of the bundled patterns.
    Builtin { name: BuiltinPattern },
    /// A `.rle`, `.life` or `.lif` file on disk.
    File { path: PathBuf },
    /// Inline RLE text.
    Rle { data: String },
    /// Inline Life 1.06 text.
    Life { data: String },
    /// Live cells as `(x, y)` grid coordinates.
    Custom { cells: Vec<(i32, i32)> },
}

impl Seed {
    /// Build the generation-0 automaton described by `config` and this seed.
    pub fn build(&self, config: &SimulationConfig) -> Result<Automaton<ConwayState>, SeedError> {
        config.validate()?;

        let mut grid = Automaton::uniform(
            config.neighborhood,
            ConwayState::DEAD,
            config.xmax(),
            config.ymax(),
        )?
        .with_rules(config.rules.clone());
        if let Some(colors) = &config.colors {
            grid.set_colors(colors.iter().cloned());
        }

        match &self.pattern {
            Pattern::Random { density, seed } => {
                if !(0.0..=1.0).contains(density) {
                    return Err(SeedError::InvalidDensity(*density));
                }
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(*seed),
                    None => StdRng::from_entropy(),
                };
                grid.randomize(*density, &mut rng);
            }
            Pattern::Builtin { name } => place(&mut grid, name.pattern_data())?,
            Pattern::File { path } => {
                let format = PatternFormat::from_path(path)
                    .ok_or_else(|| SeedError::UnknownFormat(path.clone()))?;
                let text = std::fs::read_to_string(path)?;
                log::debug!("Loaded {:?} pattern from {}", format, path.display());
                place(&mut grid, format.decode(&text)?)?;
            }
            Pattern::Rle { data } => place(&mut grid, PatternFormat::Rle.decode(data)?)?,
            Pattern::Life { data } => place(&mut grid, PatternFormat::Life.decode(data)?)?,
            Pattern::Custom { cells } => {
                for &(x, y) in cells {
                    grid.set_state(Coordinate::new(x, y), ConwayState::ALIVE)?;
                }
            }
        }

        log::debug!(
            "Seeded {}x{} grid with {} live cells",
            grid.width(),
            grid.height(),
            grid.population()
        );
        Ok(grid)
    }
}

fn place(grid: &mut Automaton<ConwayState>, mut pattern: PatternData) -> Result<(), SeedError> {
    if let Some(rules) = pattern.rules.take() {
        grid.set_rules(rules);
    }
    let pattern = pattern.into_automaton(grid.neighborhood())?;
    grid.spawn_centered(&pattern)?;
    Ok(())
}

/// Seeding errors.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read pattern file: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Automaton(#[from] AutomatonError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Unrecognised pattern file extension: {0} (expected .rle, .life or .lif)")]
    UnknownFormat(PathBuf),
    #[error("Random density must be within [0, 1], got {0}")]
    InvalidDensity(f64),
}
