//! Built-in Life patterns.

use serde::{Deserialize, Serialize};

use crate::compute::{ConwayState, Coordinate};
use crate::pattern::PatternData;

const GLIDER: &[(i32, i32)] = &[(2, 0), (0, 1), (2, 1), (1, 2), (2, 2)];

#[rustfmt::skip]
const PULSAR: &[(i32, i32)] = &[
    (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
    (0, 2), (5, 2), (7, 2), (12, 2),
    (0, 3), (5, 3), (7, 3), (12, 3),
    (0, 4), (5, 4), (7, 4), (12, 4),
    (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
    (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
    (0, 8), (5, 8), (7, 8), (12, 8),
    (0, 9), (5, 9), (7, 9), (12, 9),
    (0, 10), (5, 10), (7, 10), (12, 10),
    (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
];

#[rustfmt::skip]
const CLOVER_LEAF: &[(i32, i32)] = &[
    (3, 0), (5, 0),
    (1, 1), (2, 1), (3, 1), (5, 1), (6, 1), (7, 1),
    (0, 2), (4, 2), (8, 2),
    (0, 3), (2, 3), (6, 3), (8, 3),
    (1, 4), (2, 4), (4, 4), (6, 4), (7, 4),
    (1, 6), (2, 6), (4, 6), (6, 6), (7, 6),
    (0, 7), (2, 7), (6, 7), (8, 7),
    (0, 8), (4, 8), (8, 8),
    (1, 9), (2, 9), (3, 9), (5, 9), (6, 9), (7, 9),
    (3, 10), (5, 10),
];

#[rustfmt::skip]
const CLOVER_LEAF_INTERCHANGE: &[(i32, i32)] = &[
    (4, 0), (8, 0),
    (3, 1), (5, 1), (7, 1), (9, 1),
    (3, 2), (5, 2), (7, 2), (9, 2),
    (1, 3), (2, 3), (5, 3), (7, 3), (10, 3), (11, 3),
    (0, 4), (5, 4), (7, 4), (12, 4),
    (1, 5), (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5), (11, 5),
    (1, 7), (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7), (11, 7),
    (0, 8), (5, 8), (7, 8), (12, 8),
    (1, 9), (2, 9), (5, 9), (7, 9), (10, 9), (11, 9),
    (3, 10), (5, 10), (7, 10), (9, 10),
    (3, 11), (5, 11), (7, 11), (9, 11),
    (4, 12), (8, 12),
];

/// Named patterns that ship with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinPattern {
    /// 3x3 spaceship, period 4.
    Glider,
    /// 13x13 oscillator, period 3.
    Pulsar,
    /// 9x11 oscillator, period 4.
    CloverLeaf,
    /// 13x13 still life.
    CloverLeafInterchange,
}

impl BuiltinPattern {
    pub const ALL: [BuiltinPattern; 4] = [
        BuiltinPattern::Glider,
        BuiltinPattern::Pulsar,
        BuiltinPattern::CloverLeaf,
        BuiltinPattern::CloverLeafInterchange,
    ];

    fn layout(&self) -> (i32, i32, &'static [(i32, i32)]) {
        match self {
            BuiltinPattern::Glider => (3, 3, GLIDER),
            BuiltinPattern::Pulsar => (13, 13, PULSAR),
            BuiltinPattern::CloverLeaf => (9, 11, CLOVER_LEAF),
            BuiltinPattern::CloverLeafInterchange => (13, 13, CLOVER_LEAF_INTERCHANGE),
        }
    }

    /// Dense pattern data for this pattern (default B3/S23 rules).
    pub fn pattern_data(&self) -> PatternData {
        let (width, height, alive) = self.layout();
        let states = (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| {
                        let here = Coordinate::new(x, y);
                        ConwayState::new(alive.iter().any(|&c| Coordinate::from(c) == here))
                    })
                    .collect()
            })
            .collect();

        PatternData {
            xmax: width - 1,
            ymax: height - 1,
            states,
            rules: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::{Automaton, Neighborhood};

    fn on_grid(pattern: BuiltinPattern) -> Automaton<ConwayState> {
        let mut grid = Automaton::uniform(Neighborhood::Moore, ConwayState::DEAD, 24, 24).unwrap();
        let pattern = pattern.pattern_data().into_automaton(Neighborhood::Moore).unwrap();
        grid.spawn(Coordinate::new(6, 6), &pattern).unwrap();
        grid
    }

    fn period(pattern: BuiltinPattern) -> Option<u64> {
        let mut grid = on_grid(pattern);
        let start = grid.states().to_vec();
        (1..=8).find(|_| {
            grid.evolve();
            grid.states() == start.as_slice()
        })
    }

    #[test]
    fn test_dimensions_and_population() {
        let expected = [
            (BuiltinPattern::Glider, 2, 2, 5),
            (BuiltinPattern::Pulsar, 12, 12, 48),
            (BuiltinPattern::CloverLeaf, 8, 10, 40),
            (BuiltinPattern::CloverLeafInterchange, 12, 12, 56),
        ];
        for (pattern, xmax, ymax, population) in expected {
            let data = pattern.pattern_data();
            assert_eq!((data.xmax, data.ymax), (xmax, ymax), "{pattern:?}");
            assert_eq!(data.states.len(), ymax as usize + 1);
            assert!(data.states.iter().all(|r| r.len() == xmax as usize + 1));
            assert_eq!(data.population(), population, "{pattern:?}");
        }
    }

    #[test]
    fn test_oscillator_periods() {
        assert_eq!(period(BuiltinPattern::Pulsar), Some(3));
        assert_eq!(period(BuiltinPattern::CloverLeaf), Some(4));
        assert_eq!(period(BuiltinPattern::CloverLeafInterchange), Some(1));
    }

    #[test]
    fn test_glider_moves() {
        let mut grid = on_grid(BuiltinPattern::Glider);
        grid.run(4);
        assert_eq!(grid.population(), 5);
        let moved: Vec<Coordinate> = GLIDER
            .iter()
            .map(|&(x, y)| Coordinate::new(x + 7, y + 7))
            .collect();
        assert!(moved.iter().all(|&c| grid.state(c) == Some(&ConwayState::ALIVE)));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&BuiltinPattern::CloverLeafInterchange).unwrap();
        assert_eq!(json, "\"clover_leaf_interchange\"");
        let parsed: BuiltinPattern = serde_json::from_str("\"pulsar\"").unwrap();
        assert_eq!(parsed, BuiltinPattern::Pulsar);
    }
}
