//! Automaton - the grid container and generation driver.
//!
//! Owns the static topology (one [`Cell`] per coordinate with its cached
//! neighbors) and two same-shaped state buffers. Each generation reads only
//! from the current buffer and writes into the other, then swaps them.

use rand::Rng;

use super::{Cell, CellState, ConwayState, Coordinate, Neighborhood};
use crate::schema::{Color, Palette};

/// Grid construction and addressing errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AutomatonError {
    #[error("Grid bounds must be non-negative, got xmax={xmax}, ymax={ymax}")]
    InvalidDimensions { xmax: i32, ymax: i32 },
    #[error("State matrix has {found} rows, expected {expected}")]
    RowCountMismatch { expected: usize, found: usize },
    #[error("State matrix row {row} has {found} cells, expected {expected}")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Coordinate {coord} is outside the grid bounded by {max}")]
    OutOfBounds { coord: Coordinate, max: Coordinate },
}

/// How every cell of a new automaton is initialized.
#[derive(Debug, Clone, PartialEq)]
pub enum InitialState<S> {
    /// The same state replicated into every cell.
    Uniform(S),
    /// One state per cell, `ymax + 1` rows of `xmax + 1` entries.
    Matrix(Vec<Vec<S>>),
}

/// A toroidal 2D cellular automaton.
#[derive(Debug, Clone)]
pub struct Automaton<S: CellState> {
    xmax: i32,
    ymax: i32,
    generation: u64,
    neighborhood: Neighborhood,
    /// Row-major topology, fixed after construction.
    cells: Vec<Cell>,
    /// Current generation, row-major.
    states: Vec<S>,
    /// Write buffer for the next generation (swapped with `states`).
    next_states: Vec<S>,
    rules: S::Rules,
    palette: Palette,
}

impl<S: CellState> Automaton<S> {
    /// Build an automaton covering `[0, xmax] x [0, ymax]`.
    ///
    /// Neighbor lists for every cell are resolved here, once.
    pub fn new(
        neighborhood: Neighborhood,
        initial: InitialState<S>,
        xmax: i32,
        ymax: i32,
    ) -> Result<Self, AutomatonError> {
        if xmax < 0 || ymax < 0 {
            return Err(AutomatonError::InvalidDimensions { xmax, ymax });
        }
        let width = xmax as usize + 1;
        let height = ymax as usize + 1;

        let states: Vec<S> = match initial {
            InitialState::Uniform(state) => vec![state; width * height],
            InitialState::Matrix(rows) => {
                if rows.len() != height {
                    return Err(AutomatonError::RowCountMismatch {
                        expected: height,
                        found: rows.len(),
                    });
                }
                if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != width)
                {
                    return Err(AutomatonError::RowLengthMismatch {
                        row,
                        expected: width,
                        found: cells.len(),
                    });
                }
                rows.into_iter().flatten().collect()
            }
        };

        let max_coord = Coordinate::new(xmax, ymax);
        let cells: Vec<Cell> = (0..=ymax)
            .flat_map(|y| (0..=xmax).map(move |x| Coordinate::new(x, y)))
            .map(|coord| Cell::new(coord, neighborhood, max_coord))
            .collect();

        log::debug!(
            "Built {}x{} {:?} automaton ({} cells)",
            width,
            height,
            neighborhood,
            cells.len()
        );

        Ok(Self {
            xmax,
            ymax,
            generation: 0,
            neighborhood,
            cells,
            next_states: states.clone(),
            states,
            rules: S::Rules::default(),
            palette: S::default_palette(),
        })
    }

    /// Every cell starts as a copy of `state`.
    pub fn uniform(
        neighborhood: Neighborhood,
        state: S,
        xmax: i32,
        ymax: i32,
    ) -> Result<Self, AutomatonError> {
        Self::new(neighborhood, InitialState::Uniform(state), xmax, ymax)
    }

    /// Cells start from an explicit `(ymax + 1) x (xmax + 1)` matrix.
    pub fn from_matrix(
        neighborhood: Neighborhood,
        states: Vec<Vec<S>>,
        xmax: i32,
        ymax: i32,
    ) -> Result<Self, AutomatonError> {
        Self::new(neighborhood, InitialState::Matrix(states), xmax, ymax)
    }

    /// Replace the transition rules (builder form).
    pub fn with_rules(mut self, rules: S::Rules) -> Self {
        self.rules = rules;
        self
    }

    #[inline]
    pub fn xmax(&self) -> i32 {
        self.xmax
    }

    #[inline]
    pub fn ymax(&self) -> i32 {
        self.ymax
    }

    /// Largest valid coordinate.
    #[inline]
    pub fn max_coord(&self) -> Coordinate {
        Coordinate::new(self.xmax, self.ymax)
    }

    /// Number of columns (`xmax + 1`).
    #[inline]
    pub fn width(&self) -> usize {
        self.xmax as usize + 1
    }

    /// Number of rows (`ymax + 1`).
    #[inline]
    pub fn height(&self) -> usize {
        self.ymax as usize + 1
    }

    #[inline]
    pub fn midpoint(&self) -> Coordinate {
        Coordinate::new(self.xmax / 2, self.ymax / 2)
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn neighborhood(&self) -> Neighborhood {
        self.neighborhood
    }

    pub fn rules(&self) -> &S::Rules {
        &self.rules
    }

    pub fn set_rules(&mut self, rules: S::Rules) {
        self.rules = rules;
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Override display colors. See [`Palette::set_colors`].
    pub fn set_colors(&mut self, colors: impl IntoIterator<Item = Color>) {
        self.palette.set_colors(colors);
    }

    /// Row-major flat index of `coord`, if it lies on the grid.
    #[inline]
    fn index(&self, coord: Coordinate) -> Option<usize> {
        self.max_coord()
            .contains(coord)
            .then(|| coord.y as usize * self.width() + coord.x as usize)
    }

    fn out_of_bounds(&self, coord: Coordinate) -> AutomatonError {
        AutomatonError::OutOfBounds {
            coord,
            max: self.max_coord(),
        }
    }

    /// Current state at `coord`.
    #[inline]
    pub fn state(&self, coord: Coordinate) -> Option<&S> {
        self.index(coord).map(|i| &self.states[i])
    }

    /// Display color of the current state at `coord`.
    pub fn color(&self, coord: Coordinate) -> Option<&Color> {
        self.state(coord)
            .and_then(|state| self.palette.get(state.color_index()))
    }

    /// Cached topology for `coord`.
    pub fn cell(&self, coord: Coordinate) -> Option<&Cell> {
        self.index(coord).map(|i| &self.cells[i])
    }

    /// Current states, row-major.
    pub fn states(&self) -> &[S] {
        &self.states
    }

    /// Current states row by row, `y = 0` first.
    pub fn rows(&self) -> impl Iterator<Item = &[S]> + '_ {
        self.states.chunks(self.width())
    }

    /// Copy of the current states as a `(ymax + 1) x (xmax + 1)` matrix.
    pub fn to_matrix(&self) -> Vec<Vec<S>> {
        self.rows().map(<[S]>::to_vec).collect()
    }

    /// Number of live cells in the current generation.
    pub fn population(&self) -> usize {
        self.states.iter().filter(|s| s.is_alive()).count()
    }

    /// Overwrite a single cell.
    pub fn set_state(&mut self, coord: Coordinate, state: S) -> Result<(), AutomatonError> {
        let i = self.index(coord).ok_or_else(|| self.out_of_bounds(coord))?;
        self.states[i] = state;
        Ok(())
    }

    /// Overlay `pattern`'s current states with its `(0, 0)` placed at `offset`.
    ///
    /// No clipping or wrapping: the whole pattern must fit, otherwise nothing
    /// is written.
    pub fn spawn(&mut self, offset: Coordinate, pattern: &Automaton<S>) -> Result<(), AutomatonError> {
        let max = self.max_coord();
        let rejected = match offset.checked_add(pattern.max_coord()) {
            _ if !max.contains(offset) => Some(offset),
            Some(far) if max.contains(far) => None,
            Some(far) => Some(far),
            None => Some(Coordinate::new(
                offset.x.saturating_add(pattern.xmax()),
                offset.y.saturating_add(pattern.ymax()),
            )),
        };
        if let Some(corner) = rejected {
            log::warn!(
                "Rejected {}x{} spawn at {}: grid is {}x{}",
                pattern.width(),
                pattern.height(),
                offset,
                self.width(),
                self.height()
            );
            return Err(self.out_of_bounds(corner));
        }

        let width = self.width();
        for (y, row) in pattern.rows().enumerate() {
            let start = (offset.y as usize + y) * width + offset.x as usize;
            self.states[start..start + row.len()].clone_from_slice(row);
        }
        Ok(())
    }

    /// Spawn `pattern` so its midpoint lands on this grid's midpoint.
    pub fn spawn_centered(&mut self, pattern: &Automaton<S>) -> Result<(), AutomatonError> {
        self.spawn(self.midpoint() - pattern.midpoint(), pattern)
    }

    /// Reset every cell to the default state. Topology and generation are kept.
    pub fn clear(&mut self) {
        self.states.fill(S::default());
    }

    /// Advance one generation.
    ///
    /// Every next state is computed from the current buffer only, then the
    /// buffers are swapped, so visiting order cannot leak updated states.
    pub fn evolve(&mut self) {
        let width = self.width();
        let current = &self.states;
        let rules = &self.rules;

        for ((cell, state), next) in self
            .cells
            .iter()
            .zip(current.iter())
            .zip(self.next_states.iter_mut())
        {
            let neighbors = cell
                .neighbors
                .iter()
                .map(|n| &current[n.y as usize * width + n.x as usize]);
            *next = state.change_state(neighbors, rules);
        }

        std::mem::swap(&mut self.states, &mut self.next_states);
        self.generation += 1;
        log::trace!("Evolved to generation {}", self.generation);
    }

    /// Evolve `generations` times.
    pub fn run(&mut self, generations: u64) {
        for _ in 0..generations {
            self.evolve();
        }
    }
}

impl Automaton<ConwayState> {
    /// Fill the grid at random, each cell alive with probability `density`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, density: f64, rng: &mut R) {
        let p = if density.is_nan() {
            0.0
        } else {
            density.clamp(0.0, 1.0)
        };
        for state in &mut self.states {
            *state = ConwayState::new(rng.gen_bool(p));
        }
    }
}

/// Per-generation summary for progress reporting.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GenerationStats {
    pub generation: u64,
    pub population: usize,
    pub cells: usize,
    pub density: f64,
}

impl GenerationStats {
    pub fn from_automaton<S: CellState>(automaton: &Automaton<S>) -> Self {
        let population = automaton.population();
        let cells = automaton.states().len();
        Self {
            generation: automaton.generation(),
            population,
            cells,
            density: population as f64 / cells as f64,
        }
    }
}
