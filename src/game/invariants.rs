//! Battle invariants - sanity checks that detect bugs.
//!
//! These should NEVER trigger in a correctly implemented engine. They are
//! not gameplay rules; the intent resolver already enforces those. They are
//! bug detectors for use in tests and debug builds.

use std::collections::HashSet;

use crate::game::{Battle, Coord};

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all battle invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(battle: &Battle) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    let mut occupied: HashSet<Coord> = HashSet::new();
    for unit in battle.units() {
        if !occupied.insert(unit.pos) {
            violations.push(InvariantViolation {
                message: format!(
                    "two live units share cell ({}, {})",
                    unit.pos.x, unit.pos.y
                ),
            });
        }

        if !battle.grid().in_bounds(unit.pos) {
            violations.push(InvariantViolation {
                message: format!("unit {:?} is out of bounds at {:?}", unit.id, unit.pos),
            });
        }

        if battle.grid().is_wall(unit.pos) {
            violations.push(InvariantViolation {
                message: format!("unit {:?} stands on a wall at {:?}", unit.id, unit.pos),
            });
        }

        match battle.stats(unit) {
            None => violations.push(InvariantViolation {
                message: format!(
                    "unit {:?} references unknown archetype {}",
                    unit.id, unit.archetype
                ),
            }),
            Some(stats) => {
                if unit.hp == 0 {
                    violations.push(InvariantViolation {
                        message: format!("defeated unit {:?} still in the collection", unit.id),
                    });
                }
                if unit.hp > stats.max_hp {
                    violations.push(InvariantViolation {
                        message: format!(
                            "unit {:?} has hp {} above max {}",
                            unit.id, unit.hp, stats.max_hp
                        ),
                    });
                }
            }
        }
    }

    if let Some(winner) = battle.winner() {
        let loser = winner.opponent();
        let survivors = battle.live_count(loser);
        if survivors > 0 {
            violations.push(InvariantViolation {
                message: format!("{loser} lost but still has {survivors} live units"),
            });
        }
    }

    if battle.turn() == 0 {
        violations.push(InvariantViolation {
            message: "turn counter is zero (rounds start at 1)".to_string(),
        });
    }

    violations
}

/// Assert all battle invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(battle: &Battle) {
    let violations = check_invariants(battle);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Battle invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_battle: &Battle) {}
