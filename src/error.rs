//! Error types for match configuration.
//!
//! Invalid *intents* (moving out of range, attacking out of turn, acting
//! after the match is decided) are not errors: intent application returns
//! `false` and leaves the state untouched. [`ConfigError`] covers the other
//! class: a level or catalog that can never produce a valid match.

use std::fmt;

use crate::game::Coord;

/// Configuration faults detected at match creation.
///
/// Any of these means `Battle::new` produced no state at all, as opposed to
/// a rejected intent against an otherwise healthy match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Level declares a board with side length zero.
    ZeroBoardSize,
    /// Level asks for zero units per side.
    ZeroUnitsPerSide,
    /// A wall coordinate lies outside the board.
    WallOutOfBounds {
        /// The offending wall cell.
        wall: Coord,
        /// Board side length.
        size: u16,
    },
    /// The same wall cell is listed twice.
    DuplicateWall(Coord),
    /// The archetype catalog has no entries to spawn from.
    EmptyCatalog,
    /// An archetype stat block is unusable (zero max hp).
    InvalidArchetype {
        /// Name of the offending archetype.
        name: String,
    },
    /// A caller-supplied deployment places units illegally.
    BadDeployment(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroBoardSize => write!(f, "board side length must be > 0"),
            ConfigError::ZeroUnitsPerSide => write!(f, "units per side must be > 0"),
            ConfigError::WallOutOfBounds { wall, size } => {
                write!(
                    f,
                    "wall at ({}, {}) is outside the {size}x{size} board",
                    wall.x, wall.y
                )
            }
            ConfigError::DuplicateWall(wall) => {
                write!(f, "wall at ({}, {}) is listed twice", wall.x, wall.y)
            }
            ConfigError::EmptyCatalog => write!(f, "archetype catalog is empty"),
            ConfigError::InvalidArchetype { name } => {
                write!(f, "archetype {name:?} has zero max hp")
            }
            ConfigError::BadDeployment(reason) => write!(f, "bad deployment: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Result type for match configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;
