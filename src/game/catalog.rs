//! Static match content: archetype stat blocks and level definitions.
//!
//! Both are plain configuration data. The engine never computes them; a host
//! may supply its own catalog and levels, and the built-in set reproduces the
//! reference configuration (four archetypes, four levels).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::game::Coord;

/// Immutable stat block for one unit archetype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeStats {
    /// Machine-readable archetype name (e.g. `"infantry"`).
    pub name: String,
    /// Maximum (and starting) hit points, always > 0.
    pub max_hp: u32,
    /// Damage dealt per attack.
    pub attack: u32,
    /// Attack range as inclusive Manhattan distance.
    pub range: u32,
    /// Movement allowance in path steps per turn.
    pub movement: u32,
    /// Display icon for the rendering collaborator.
    pub icon: String,
    /// Display name for the rendering collaborator.
    pub display_name: String,
    /// One-line flavour text for the rendering collaborator.
    pub description: String,
}

/// An ordered, fixed set of archetype stat blocks.
///
/// Units reference entries by index; the order is part of the match
/// configuration and matters for seeded spawn determinism.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Stat blocks in definition order.
    entries: Vec<ArchetypeStats>,
}

impl Catalog {
    /// Build a catalog from a list of stat blocks.
    #[must_use]
    pub fn new(entries: Vec<ArchetypeStats>) -> Self {
        Self { entries }
    }

    /// The reference catalog: infantry, tank, scout and artillery.
    #[must_use]
    pub fn standard() -> Self {
        let entry = |name: &str,
                     max_hp: u32,
                     attack: u32,
                     range: u32,
                     movement: u32,
                     icon: &str,
                     display_name: &str,
                     description: &str| ArchetypeStats {
            name: name.to_string(),
            max_hp,
            attack,
            range,
            movement,
            icon: icon.to_string(),
            display_name: display_name.to_string(),
            description: description.to_string(),
        };

        Self::new(vec![
            entry("infantry", 100, 25, 1, 3, "\u{2694}", "Infantry", "Balanced fighter"),
            entry("tank", 200, 40, 1, 2, "\u{1f6e1}", "Tank", "Heavy armor, slow"),
            entry("scout", 60, 15, 1, 5, "\u{26a1}", "Scout", "Fast & fragile"),
            entry("artillery", 50, 50, 3, 2, "\u{1f3af}", "Artillery", "Long range sniper"),
        ])
    }

    /// Number of archetypes in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get a stat block by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ArchetypeStats> {
        self.entries.get(index)
    }

    /// Look up an archetype index by name.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name == name)
    }

    /// Validate the catalog as match configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog is empty or any stat block has zero
    /// max hp.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.entries.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        for entry in &self.entries {
            if entry.max_hp == 0 {
                return Err(ConfigError::InvalidArchetype {
                    name: entry.name.clone(),
                });
            }
        }
        Ok(())
    }
}

/// An immutable battlefield definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    /// Display name of the level.
    pub name: String,
    /// Side length of the square board.
    pub size: u16,
    /// Wall cells, unique and within bounds.
    pub walls: Vec<Coord>,
    /// Number of units to spawn per side.
    pub units_per_side: u32,
}

impl Level {
    /// Validate the level as match configuration.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero board size, zero units per side, a wall
    /// outside the board, or a duplicated wall cell.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.size == 0 {
            return Err(ConfigError::ZeroBoardSize);
        }
        if self.units_per_side == 0 {
            return Err(ConfigError::ZeroUnitsPerSide);
        }

        let mut seen = HashSet::with_capacity(self.walls.len());
        for &wall in &self.walls {
            if wall.x >= self.size || wall.y >= self.size {
                return Err(ConfigError::WallOutOfBounds {
                    wall,
                    size: self.size,
                });
            }
            if !seen.insert(wall) {
                return Err(ConfigError::DuplicateWall(wall));
            }
        }
        Ok(())
    }
}

/// The reference level set.
#[must_use]
pub fn standard_levels() -> Vec<Level> {
    let walls = |cells: &[(u16, u16)]| cells.iter().map(|&(x, y)| Coord::new(x, y)).collect();

    vec![
        Level {
            name: "Open Field".to_string(),
            size: 10,
            walls: walls(&[(4, 4), (5, 4), (4, 5), (5, 5)]),
            units_per_side: 4,
        },
        Level {
            name: "The Corridor".to_string(),
            size: 12,
            walls: walls(&[
                (3, 0), (3, 1), (3, 2), (3, 3), (3, 4), (3, 6), (3, 7), (3, 8), (3, 9), (3, 10),
                (3, 11),
                (8, 0), (8, 1), (8, 2), (8, 3), (8, 4), (8, 6), (8, 7), (8, 8), (8, 9), (8, 10),
                (8, 11),
            ]),
            units_per_side: 5,
        },
        Level {
            name: "Fortress Siege".to_string(),
            size: 14,
            walls: walls(&[
                (5, 5), (6, 5), (7, 5), (8, 5),
                (5, 8), (6, 8), (7, 8), (8, 8),
                (5, 6), (5, 7), (8, 6), (8, 7),
                (1, 1), (1, 12), (12, 1), (12, 12),
            ]),
            units_per_side: 6,
        },
        Level {
            name: "Labyrinth".to_string(),
            size: 14,
            walls: walls(&[
                (2, 2), (2, 3), (2, 4), (2, 5), (2, 6),
                (4, 2), (5, 2), (6, 2), (7, 2), (8, 2),
                (8, 4), (8, 5), (8, 6), (8, 7), (8, 8),
                (10, 2), (10, 3), (10, 4), (10, 5), (10, 6),
                (4, 10), (5, 10), (6, 10), (7, 10), (8, 10),
            ]),
            units_per_side: 7,
        },
    ]
}
