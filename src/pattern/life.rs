//! Life 1.06 decoder.

use std::collections::HashSet;

use super::{PatternData, PatternError};
use crate::compute::{ConwayState, Coordinate};

fn parse_coordinate(line: &str) -> Option<Coordinate> {
    let mut fields = line.split_whitespace();
    let x = fields.next()?.parse().ok()?;
    let y = fields.next()?.parse().ok()?;
    match fields.next() {
        Some(_) => None,
        None => Some(Coordinate::new(x, y)),
    }
}

/// Decode Life 1.06: one `x y` live cell per line, `#` lines are comments.
///
/// The bounding box is inferred from the largest coordinates. If any
/// coordinate is negative the whole pattern is shifted so the smallest one
/// becomes 0.
pub fn life<I, L>(lines: I) -> Result<PatternData, PatternError>
where
    I: IntoIterator<Item = L>,
    L: AsRef<str>,
{
    let mut alive = HashSet::new();
    let mut min = Coordinate::new(0, 0);
    let mut max = Coordinate::new(0, 0);

    for (i, line) in lines.into_iter().enumerate() {
        let line = line.as_ref().trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let coord = parse_coordinate(line).ok_or_else(|| PatternError::MalformedCoordinate {
            line: i + 1,
            content: line.to_string(),
        })?;
        min = Coordinate::new(min.x.min(coord.x), min.y.min(coord.y));
        max = Coordinate::new(max.x.max(coord.x), max.y.max(coord.y));
        alive.insert(coord);
    }

    let (Some(xmax), Some(ymax)) = (max.x.checked_sub(min.x), max.y.checked_sub(min.y)) else {
        return Err(PatternError::BoundingBoxTooLarge { min, max });
    };
    let states = (0..=ymax)
        .map(|y| {
            (0..=xmax)
                .map(|x| ConwayState::new(alive.contains(&(Coordinate::new(x, y) + min))))
                .collect()
        })
        .collect();

    log::debug!(
        "Decoded Life 1.06 pattern: {} live cells in {}x{}",
        alive.len(),
        i64::from(xmax) + 1,
        i64::from(ymax) + 1
    );

    Ok(PatternData {
        xmax,
        ymax,
        states,
        rules: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALIVE: ConwayState = ConwayState::ALIVE;
    const DEAD: ConwayState = ConwayState::DEAD;

    #[test]
    fn test_decode_l_tromino() {
        let pattern = life("0 0\n1 0\n0 1".lines()).unwrap();
        assert_eq!(pattern.xmax, 1);
        assert_eq!(pattern.ymax, 1);
        assert_eq!(pattern.states, vec![vec![ALIVE, ALIVE], vec![ALIVE, DEAD]]);
        assert_eq!(pattern.rules, None);
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let text = "#Life 1.06\n#D A glider\n\n1 0\n2 1\n0 2\n1 2\n2 2\n";
        let pattern = life(text.lines()).unwrap();
        assert_eq!((pattern.xmax, pattern.ymax), (2, 2));
        assert_eq!(pattern.population(), 5);
        assert_eq!(pattern.states[0], vec![DEAD, ALIVE, DEAD]);
        assert_eq!(pattern.states[1], vec![DEAD, DEAD, ALIVE]);
        assert_eq!(pattern.states[2], vec![ALIVE, ALIVE, ALIVE]);
    }

    #[test]
    fn test_bounding_box_from_origin() {
        // Non-negative input keeps its absolute position.
        let pattern = life(["3 2"]).unwrap();
        assert_eq!((pattern.xmax, pattern.ymax), (3, 2));
        assert_eq!(pattern.population(), 1);
        assert_eq!(pattern.states[2][3], ALIVE);
        assert!(pattern.states.iter().all(|row| row.len() == 4));
    }

    #[test]
    fn test_negative_coordinates_shifted() {
        let pattern = life(["-1 -1", "0 -1", "1 1"]).unwrap();
        assert_eq!((pattern.xmax, pattern.ymax), (2, 2));
        assert_eq!(pattern.states[0], vec![ALIVE, ALIVE, DEAD]);
        assert_eq!(pattern.states[1], vec![DEAD, DEAD, DEAD]);
        assert_eq!(pattern.states[2], vec![DEAD, DEAD, ALIVE]);
    }

    #[test]
    fn test_empty_input_is_single_dead_cell() {
        let pattern = life(Vec::<String>::new()).unwrap();
        assert_eq!(pattern.states, vec![vec![DEAD]]);
    }

    #[test]
    fn test_malformed_coordinate() {
        let err = life("#Life 1.06\n0 0\n1 x".lines()).unwrap_err();
        assert_eq!(
            err,
            PatternError::MalformedCoordinate {
                line: 3,
                content: "1 x".to_string()
            }
        );
        assert!(life(["5"]).is_err());
        assert!(life(["1 2 3"]).is_err());
        assert!(life(["1.5 2"]).is_err());
    }

    #[test]
    fn test_unrepresentable_bounding_box() {
        let err = life(["-2147483648 0", "2147483647 0"]).unwrap_err();
        assert_eq!(
            err,
            PatternError::BoundingBoxTooLarge {
                min: Coordinate::new(i32::MIN, 0),
                max: Coordinate::new(i32::MAX, 0)
            }
        );
        assert!(life(["0 -2147483648", "0 2147483647"]).is_err());
    }
}
