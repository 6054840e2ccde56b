//! Attack target computation.

use crate::game::Unit;

/// Check whether a defender stands within an attacker's reach.
///
/// Range is an inclusive Manhattan distance; walls never block attacks.
#[must_use]
#[inline]
pub fn in_range(attacker: &Unit, defender: &Unit, range: u32) -> bool {
    attacker.pos.manhattan(defender.pos) <= range
}

/// Compute the live enemy units an attacker may strike this turn.
///
/// A unit that has already attacked this turn has no targets; friendly
/// units are never targets.
#[must_use]
pub fn targets_in_range<'a>(attacker: &Unit, units: &'a [Unit], range: u32) -> Vec<&'a Unit> {
    if attacker.has_attacked {
        return Vec::new();
    }

    units
        .iter()
        .filter(|unit| unit.side != attacker.side)
        .filter(|unit| in_range(attacker, unit, range))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Coord, Side};

    fn unit_at(id: &str, side: Side, pos: Coord) -> Unit {
        Unit::new(id.to_string(), side, 0, 100, pos)
    }

    #[test]
    fn test_targets_within_manhattan_range() {
        let attacker = unit_at("p1-0", Side::One, Coord::new(5, 5));
        let units = vec![
            attacker.clone(),
            unit_at("p2-0", Side::Two, Coord::new(6, 5)), // distance 1
            unit_at("p2-1", Side::Two, Coord::new(7, 6)), // distance 3
            unit_at("p2-2", Side::Two, Coord::new(9, 9)), // distance 8
        ];

        let close = targets_in_range(&attacker, &units, 1);
        assert_eq!(close.len(), 1);
        assert_eq!(close[0].id, "p2-0");

        let far = targets_in_range(&attacker, &units, 3);
        let ids: Vec<&str> = far.iter().map(|unit| unit.id.as_str()).collect();
        assert_eq!(ids, vec!["p2-0", "p2-1"]);
    }

    #[test]
    fn test_friendlies_never_targeted() {
        let attacker = unit_at("p1-0", Side::One, Coord::new(5, 5));
        let units = vec![
            attacker.clone(),
            unit_at("p1-1", Side::One, Coord::new(5, 6)),
        ];

        assert!(targets_in_range(&attacker, &units, 5).is_empty());
    }

    #[test]
    fn test_spent_attacker_has_no_targets() {
        let mut attacker = unit_at("p1-0", Side::One, Coord::new(5, 5));
        attacker.has_attacked = true;
        let units = vec![
            attacker.clone(),
            unit_at("p2-0", Side::Two, Coord::new(5, 6)),
        ];

        assert!(targets_in_range(&attacker, &units, 5).is_empty());
    }

    #[test]
    fn test_walls_do_not_block_attacks() {
        // Targeting only measures distance; terrain is irrelevant.
        let attacker = unit_at("p1-0", Side::One, Coord::new(0, 0));
        let units = vec![
            attacker.clone(),
            unit_at("p2-0", Side::Two, Coord::new(0, 3)),
        ];

        let targets = targets_in_range(&attacker, &units, 3);
        assert_eq!(targets.len(), 1);
    }
}
