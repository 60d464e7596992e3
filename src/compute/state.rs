//! Cell states and their transition rules.

use std::fmt;

use crate::schema::{Color, Palette, RuleSet};

/// Capability interface for the per-cell state of an automaton.
///
/// States are immutable values: [`CellState::change_state`] returns the next
/// state rather than mutating in place. Transition configuration shared by
/// every cell (e.g. a [`RuleSet`]) is owned by the automaton and passed in by
/// reference.
pub trait CellState: Clone + Default + PartialEq + fmt::Debug {
    /// Shared transition configuration.
    type Rules: Clone + Default + fmt::Debug;

    /// Compute the next state from the current states of this cell's neighbors.
    fn change_state<'a, I>(&self, neighbors: I, rules: &Self::Rules) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        Self: 'a;

    /// Liveness flag, used for population counts.
    fn is_alive(&self) -> bool;

    /// Index of this state's display color within the palette.
    fn color_index(&self) -> usize;

    /// Palette used by a freshly constructed automaton, one color per state.
    fn default_palette() -> Palette;
}

/// Two-state Life-like cell (alive or dead) following a birth/survival [`RuleSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ConwayState {
    pub alive: bool,
}

impl ConwayState {
    pub const ALIVE: ConwayState = ConwayState { alive: true };
    pub const DEAD: ConwayState = ConwayState { alive: false };

    #[inline]
    pub const fn new(alive: bool) -> Self {
        Self { alive }
    }
}

impl CellState for ConwayState {
    type Rules = RuleSet;

    /// Count live neighbors, then apply survival rules to a live cell and
    /// birth rules to a dead one.
    fn change_state<'a, I>(&self, neighbors: I, rules: &RuleSet) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let alive_count = neighbors.into_iter().filter(|n| n.alive).count();
        let alive = if self.alive {
            rules.is_survival(alive_count)
        } else {
            rules.is_birth(alive_count)
        };
        Self { alive }
    }

    #[inline]
    fn is_alive(&self) -> bool {
        self.alive
    }

    /// Alive uses the first palette color, dead the second.
    #[inline]
    fn color_index(&self) -> usize {
        if self.alive { 0 } else { 1 }
    }

    fn default_palette() -> Palette {
        Palette::new(vec![
            Color::from_static("#F6AE2D"),
            Color::from_static("#315771"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(cell: ConwayState, alive_neighbors: usize, rules: &RuleSet) -> ConwayState {
        let neighbors: Vec<ConwayState> = (0..8)
            .map(|i| ConwayState::new(i < alive_neighbors))
            .collect();
        cell.change_state(&neighbors, rules)
    }

    #[test]
    fn test_dead_cell_birth() {
        let rules = RuleSet::default();
        assert_eq!(step(ConwayState::DEAD, 3, &rules), ConwayState::ALIVE);
        for n in [0, 1, 2, 4, 5, 6, 7, 8] {
            assert_eq!(step(ConwayState::DEAD, n, &rules), ConwayState::DEAD, "{n}");
        }
    }

    #[test]
    fn test_live_cell_survival() {
        let rules = RuleSet::default();
        assert_eq!(step(ConwayState::ALIVE, 2, &rules), ConwayState::ALIVE);
        assert_eq!(step(ConwayState::ALIVE, 3, &rules), ConwayState::ALIVE);
        for n in [0, 1, 4, 5, 6, 7, 8] {
            assert_eq!(step(ConwayState::ALIVE, n, &rules), ConwayState::DEAD, "{n}");
        }
    }

    #[test]
    fn test_custom_rules() {
        let rules = RuleSet::high_life();
        assert_eq!(step(ConwayState::DEAD, 6, &rules), ConwayState::ALIVE);
        assert_eq!(step(ConwayState::DEAD, 6, &RuleSet::default()), ConwayState::DEAD);
    }

    #[test]
    fn test_change_state_leaves_inputs_untouched() {
        let cell = ConwayState::ALIVE;
        let neighbors = [ConwayState::ALIVE; 4];
        let next = cell.change_state(&neighbors, &RuleSet::default());
        assert_eq!(next, ConwayState::DEAD);
        assert_eq!(cell, ConwayState::ALIVE);
        assert!(neighbors.iter().all(|n| n.alive));
    }

    #[test]
    fn test_color_index() {
        let palette = ConwayState::default_palette();
        assert_eq!(palette.len(), 2);
        assert_eq!(
            palette.get(ConwayState::ALIVE.color_index()),
            Some(&palette.colors()[0])
        );
        assert_eq!(
            palette.get(ConwayState::DEAD.color_index()),
            Some(&palette.colors()[1])
        );
    }

    #[test]
    fn test_default_is_dead() {
        assert_eq!(ConwayState::default(), ConwayState::DEAD);
        assert!(!ConwayState::default().is_alive());
    }
}
