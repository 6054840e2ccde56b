// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Skirmish: a deterministic two-player grid-tactics combat engine.
//!
//! This crate is the rules core of a turn-based tactics game. It owns unit
//! deployment, movement reachability, attack resolution, turn alternation
//! and win detection; rendering and input belong to a host, which feeds
//! user intents in and draws the state snapshot that comes back out.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │        Host / Renderer (UI)         │
//! ├─────────────────────────────────────┤
//! │   Battle (intents -> state)         │
//! ├─────────────────────────────────────┤
//! │   Content (levels, archetypes)      │
//! └─────────────────────────────────────┘
//! ```
//!
//! Intents that break the rules are rejected silently (`false`, no state
//! change); only broken *configuration*, an invalid level or archetype
//! catalog, is an error, raised at match creation before any state exists.
//!
//! # Example
//!
//! ```
//! use skirmish::{Battle, Catalog, standard_levels};
//!
//! let levels = standard_levels();
//! let mut battle = Battle::new(&levels[0], Catalog::standard(), 42)?;
//!
//! // Offer the first unit's reachable cells as move destinations.
//! let id = battle.units()[0].id.clone();
//! let destinations = battle.reachable_cells(&id);
//! assert!(!destinations.is_empty());
//! battle.end_turn();
//! # Ok::<(), skirmish::ConfigError>(())
//! ```

pub mod error;
pub mod game;

pub use error::{ConfigError, ConfigResult};

// Re-export key game types at crate root for convenience
pub use game::{
    ArchetypeStats, Battle, Catalog, Coord, Grid, Level, Side, Unit, UnitId, standard_levels,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_level_match_setup() {
        let levels = standard_levels();
        let battle = Battle::new(&levels[0], Catalog::standard(), 7).unwrap();
        assert_eq!(battle.active_side(), Side::One);
        assert_eq!(battle.units().len(), 8);
    }
}
