//! Combat engine for two-player grid tactics.
//!
//! Implements the match rules on top of static content:
//! - Board grid with indexed wall lookups
//! - Seeded shuffle-and-pop unit deployment
//! - BFS movement reachability under blocking
//! - Manhattan-range targeting and damage resolution
//! - Turn alternation and win detection

pub mod battle;
pub mod catalog;
pub mod grid;
pub mod invariants;
pub mod movement;
pub mod spawn;
pub mod targeting;
pub mod unit;

pub use battle::Battle;
pub use catalog::{ArchetypeStats, Catalog, Level, standard_levels};
pub use grid::{Coord, Grid};
pub use invariants::{InvariantViolation, assert_invariants, check_invariants};
pub use unit::{Side, Unit, UnitId};
