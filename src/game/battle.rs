//! Authoritative battle state and intent resolution.
//!
//! A [`Battle`] is the single source of truth for one match. User intents
//! (move, attack, end turn) arrive as method calls that either apply fully
//! or reject with `false` and no state change; there is no partially
//! applied intent. Selection is a caller concern: callers hold unit ids and
//! look units up here, never copies of unit state.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::game::{
    ArchetypeStats, Catalog, Coord, Grid, Level, Side, Unit, movement, spawn, targeting,
};

/// The full state of one match.
#[derive(Debug, Clone, Serialize)]
pub struct Battle {
    /// Board geometry and walls.
    grid: Grid,
    /// Archetype stat blocks for this match.
    catalog: Catalog,
    /// All live units; defeated units are removed immediately.
    units: Vec<Unit>,
    /// The side whose turn it is.
    active: Side,
    /// Round counter, starting at 1 and advancing when control returns to
    /// player 1.
    turn: u32,
    /// The winning side once the match is decided.
    winner: Option<Side>,
}

impl Battle {
    /// Start a new match on the given level.
    ///
    /// Deployment is seeded: the same level, catalog and seed produce the
    /// same starting state.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the level or catalog cannot produce a
    /// valid match; no state is created in that case.
    pub fn new(level: &Level, catalog: Catalog, seed: u64) -> ConfigResult<Self> {
        level.validate()?;
        catalog.validate()?;

        let grid = build_grid(level)?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let units = spawn::spawn_units(&grid, &catalog, level.units_per_side, &mut rng);

        Ok(Self {
            grid,
            catalog,
            units,
            active: Side::One,
            turn: 1,
            winner: None,
        })
    }

    /// Start a match from a fixed deployment instead of the seeded spawner.
    ///
    /// Intended for hosts and tests that need exact unit placement.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the level or catalog is invalid, or if
    /// the deployment breaks placement rules (duplicate ids or cells, cells
    /// on walls or out of bounds, unknown archetypes, hp outside `1..=max`).
    pub fn from_units(level: &Level, catalog: Catalog, units: Vec<Unit>) -> ConfigResult<Self> {
        level.validate()?;
        catalog.validate()?;
        let grid = build_grid(level)?;

        for (i, unit) in units.iter().enumerate() {
            if units[..i].iter().any(|other| other.id == unit.id) {
                return Err(ConfigError::BadDeployment(format!(
                    "duplicate unit id {:?}",
                    unit.id
                )));
            }
            if units[..i].iter().any(|other| other.pos == unit.pos) {
                return Err(ConfigError::BadDeployment(format!(
                    "two units share cell ({}, {})",
                    unit.pos.x, unit.pos.y
                )));
            }
            if !grid.in_bounds(unit.pos) {
                return Err(ConfigError::BadDeployment(format!(
                    "unit {:?} is out of bounds",
                    unit.id
                )));
            }
            if grid.is_wall(unit.pos) {
                return Err(ConfigError::BadDeployment(format!(
                    "unit {:?} stands on a wall",
                    unit.id
                )));
            }
            let Some(stats) = catalog.get(unit.archetype) else {
                return Err(ConfigError::BadDeployment(format!(
                    "unit {:?} references unknown archetype {}",
                    unit.id, unit.archetype
                )));
            };
            if unit.hp == 0 || unit.hp > stats.max_hp {
                return Err(ConfigError::BadDeployment(format!(
                    "unit {:?} has hp {} outside 1..={}",
                    unit.id, unit.hp, stats.max_hp
                )));
            }
        }

        Ok(Self {
            grid,
            catalog,
            units,
            active: Side::One,
            turn: 1,
            winner: None,
        })
    }

    /// Board geometry for this match.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Archetype catalog for this match.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// All live units, in no particular order.
    #[must_use]
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Look up a live unit by id.
    #[must_use]
    pub fn unit(&self, id: &str) -> Option<&Unit> {
        self.units.iter().find(|unit| unit.id == id)
    }

    /// Stat block for a unit.
    #[must_use]
    pub fn stats(&self, unit: &Unit) -> Option<&ArchetypeStats> {
        self.catalog.get(unit.archetype)
    }

    /// The side whose turn it is.
    #[must_use]
    pub const fn active_side(&self) -> Side {
        self.active
    }

    /// Current round number, starting at 1.
    #[must_use]
    pub const fn turn(&self) -> u32 {
        self.turn
    }

    /// The winning side, if the match is decided.
    #[must_use]
    pub const fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Number of live units belonging to a side.
    #[must_use]
    pub fn live_count(&self, side: Side) -> usize {
        self.units.iter().filter(|unit| unit.side == side).count()
    }

    /// Cells the given unit may move to this turn.
    ///
    /// Empty for unknown ids, units that already moved, and decided matches.
    #[must_use]
    pub fn reachable_cells(&self, id: &str) -> Vec<Coord> {
        if self.winner.is_some() {
            return Vec::new();
        }
        let Some(unit) = self.unit(id) else {
            return Vec::new();
        };
        let Some(stats) = self.catalog.get(unit.archetype) else {
            return Vec::new();
        };
        movement::reachable_cells(unit, &self.units, &self.grid, stats.movement)
    }

    /// Enemy units the given unit may attack this turn.
    ///
    /// Empty for unknown ids, units that already attacked, and decided
    /// matches.
    #[must_use]
    pub fn attack_targets(&self, id: &str) -> Vec<&Unit> {
        if self.winner.is_some() {
            return Vec::new();
        }
        let Some(unit) = self.unit(id) else {
            return Vec::new();
        };
        let Some(stats) = self.catalog.get(unit.archetype) else {
            return Vec::new();
        };
        targeting::targets_in_range(unit, &self.units, stats.range)
    }

    /// Apply a move intent.
    ///
    /// Returns `false` without touching state unless the match is
    /// undecided, the unit belongs to the active side, it has not moved
    /// this turn, and the destination is reachable.
    pub fn apply_move(&mut self, id: &str, dest: Coord) -> bool {
        if self.winner.is_some() {
            return false;
        }
        let Some(idx) = self.units.iter().position(|unit| unit.id == id) else {
            return false;
        };

        {
            let unit = &self.units[idx];
            if unit.side != self.active || unit.has_moved {
                return false;
            }
            let Some(stats) = self.catalog.get(unit.archetype) else {
                return false;
            };
            let reachable =
                movement::reachable_cells(unit, &self.units, &self.grid, stats.movement);
            if !reachable.contains(&dest) {
                return false;
            }
        }

        let unit = &mut self.units[idx];
        unit.pos = dest;
        unit.has_moved = true;
        debug!(unit = %unit.id, x = dest.x, y = dest.y, "unit moved");
        true
    }

    /// Apply an attack intent.
    ///
    /// Returns `false` without touching state unless the match is
    /// undecided, the attacker belongs to the active side and has not
    /// attacked this turn, and the defender is an enemy within range.
    /// Damage is floored at zero hp; a defeated defender is removed in the
    /// same step, and the win condition is evaluated after removal.
    pub fn apply_attack(&mut self, attacker_id: &str, defender_id: &str) -> bool {
        if self.winner.is_some() {
            return false;
        }
        let Some(a_idx) = self.units.iter().position(|unit| unit.id == attacker_id) else {
            return false;
        };
        let Some(d_idx) = self.units.iter().position(|unit| unit.id == defender_id) else {
            return false;
        };
        if a_idx == d_idx {
            return false;
        }

        let damage = {
            let attacker = &self.units[a_idx];
            let defender = &self.units[d_idx];
            if attacker.side != self.active || attacker.has_attacked {
                return false;
            }
            if defender.side != self.active.opponent() {
                return false;
            }
            let Some(stats) = self.catalog.get(attacker.archetype) else {
                return false;
            };
            if !targeting::in_range(attacker, defender, stats.range) {
                return false;
            }
            stats.attack
        };

        self.units[a_idx].has_attacked = true;
        let hp = self.units[d_idx].hp.saturating_sub(damage);
        self.units[d_idx].hp = hp;
        debug!(
            attacker = attacker_id,
            defender = defender_id,
            damage,
            hp,
            "attack resolved"
        );

        if hp == 0 {
            self.units.swap_remove(d_idx);
            self.check_winner();
        }
        true
    }

    /// Apply an end-turn intent.
    ///
    /// Rejected once the match is decided. Otherwise clears every unit's
    /// per-turn flags, hands control to the other side, and advances the
    /// round counter when control returns to player 1, as one atomic
    /// transition.
    pub fn end_turn(&mut self) -> bool {
        if self.winner.is_some() {
            return false;
        }

        for unit in &mut self.units {
            unit.reset_flags();
        }
        self.active = self.active.opponent();
        if self.active == Side::One {
            self.turn += 1;
        }
        debug!(active = %self.active, turn = self.turn, "turn ended");
        true
    }

    /// Serialize the full state as a JSON snapshot for a renderer.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn snapshot(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Evaluate the win condition after a unit removal.
    ///
    /// Player 1's elimination is checked first: should both sides ever be
    /// emptied by one step, player 2 takes the match. That ordering is the
    /// documented tie-break.
    fn check_winner(&mut self) {
        let one_alive = self.units.iter().any(|unit| unit.side == Side::One);
        let two_alive = self.units.iter().any(|unit| unit.side == Side::Two);

        if !one_alive {
            self.winner = Some(Side::Two);
            debug!(winner = %Side::Two, "match decided");
        } else if !two_alive {
            self.winner = Some(Side::One);
            debug!(winner = %Side::One, "match decided");
        }
    }
}

/// Build the wall-indexed grid for a validated level.
fn build_grid(level: &Level) -> ConfigResult<Grid> {
    let mut grid = Grid::new(level.size).ok_or(ConfigError::ZeroBoardSize)?;
    for &wall in &level.walls {
        grid.set_wall(wall);
    }
    Ok(grid)
}
