//! Units and the two sides of a match.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::Coord;

/// One of the two players in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Player 1, deployed on the left edge of the board.
    One,
    /// Player 2, deployed on the right edge of the board.
    Two,
}

impl Side {
    /// Get the opposing side.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    /// Player number as shown to users (1 or 2).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Side::One => 1,
            Side::Two => 2,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.number())
    }
}

/// Unique identifier for a unit within a match (e.g. `"p1-0"`).
pub type UnitId = String;

/// A combat unit on the board.
///
/// Units only exist while alive: a unit whose hp reaches zero is removed
/// from the battle's collection in the same step that dealt the damage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Unique identifier within the match.
    pub id: UnitId,
    /// Owning side.
    pub side: Side,
    /// Index of this unit's stat block in the match catalog.
    pub archetype: usize,
    /// Current hit points, always > 0 for a live unit.
    pub hp: u32,
    /// Position on the board.
    pub pos: Coord,
    /// Whether this unit has moved this turn.
    pub has_moved: bool,
    /// Whether this unit has attacked this turn.
    pub has_attacked: bool,
}

impl Unit {
    /// Create a new unit at full health with fresh per-turn flags.
    #[must_use]
    pub fn new(id: UnitId, side: Side, archetype: usize, max_hp: u32, pos: Coord) -> Self {
        Self {
            id,
            side,
            archetype,
            hp: max_hp,
            pos,
            has_moved: false,
            has_attacked: false,
        }
    }

    /// Clear the per-turn action flags.
    pub fn reset_flags(&mut self) {
        self.has_moved = false;
        self.has_attacked = false;
    }
}
