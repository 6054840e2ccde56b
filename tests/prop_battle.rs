//! Property-based tests for the combat engine.
//!
//! These tests verify reachability, damage resolution and turn mechanics
//! over randomized boards and deployments.
//! Run with: cargo test --release prop_battle

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use skirmish::game::movement::reachable_cells;
use skirmish::game::spawn::spawn_units;
use skirmish::{ArchetypeStats, Battle, Catalog, Coord, Grid, Level, Side, Unit};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Open level with no walls.
fn open_level(size: u16, units_per_side: u32) -> Level {
    Level {
        name: "prop".to_string(),
        size,
        walls: Vec::new(),
        units_per_side,
    }
}

/// Level with a deterministic wall pattern derived from a seed.
fn walled_level(size: u16, units_per_side: u32, wall_seed: u64) -> Level {
    // Roughly one wall per five cells, keeping both spawn zones open so the
    // deployment itself stays off the walls under test here.
    let mut walls = Vec::new();
    let mut state = wall_seed | 1;
    for y in 0..size {
        for x in 3..size.saturating_sub(3) {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            if state % 5 == 0 {
                walls.push(Coord::new(x, y));
            }
        }
    }
    Level {
        name: "prop-walled".to_string(),
        size,
        walls,
        units_per_side,
    }
}

/// Catalog with a single archetype of the given stats.
fn mono_catalog(max_hp: u32, attack: u32, range: u32, movement: u32) -> Catalog {
    Catalog::new(vec![ArchetypeStats {
        name: "trooper".to_string(),
        max_hp,
        attack,
        range,
        movement,
        icon: "T".to_string(),
        display_name: "Trooper".to_string(),
        description: "test archetype".to_string(),
    }])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Every reachable cell is in bounds, off walls, unoccupied, and within
    /// the unit's Manhattan movement budget.
    #[test]
    fn prop_reachable_cells_are_legal(
        size in 6u16..16,
        seed in any::<u64>(),
        wall_seed in any::<u64>(),
    ) {
        let level = walled_level(size, 3, wall_seed);
        let battle = Battle::new(&level, Catalog::standard(), seed).unwrap();

        for unit in battle.units() {
            let stats = battle.stats(unit).unwrap();
            for cell in battle.reachable_cells(&unit.id) {
                prop_assert!(battle.grid().in_bounds(cell));
                prop_assert!(!battle.grid().is_wall(cell));
                prop_assert!(
                    battle.units().iter().all(|other| other.pos != cell),
                    "reachable cell {cell:?} is occupied"
                );
                prop_assert!(
                    unit.pos.manhattan(cell) <= stats.movement,
                    "cell {cell:?} beyond movement {} of {:?}",
                    stats.movement,
                    unit.pos
                );
                prop_assert!(cell != unit.pos, "origin must be excluded");
            }
        }
    }

    /// A spent unit reaches nothing and targets nothing.
    #[test]
    fn prop_spent_flags_empty_results(
        size in 6u16..14,
        seed in any::<u64>(),
    ) {
        let battle = Battle::new(&open_level(size, 2), Catalog::standard(), seed).unwrap();
        let grid = battle.grid();

        for unit in battle.units() {
            let mut spent = unit.clone();
            spent.has_moved = true;
            spent.has_attacked = true;

            prop_assert!(reachable_cells(&spent, battle.units(), grid, 10).is_empty());
            prop_assert!(
                skirmish::game::targeting::targets_in_range(&spent, battle.units(), 10)
                    .is_empty()
            );
        }
    }

    /// Damage is max(0, hp - attack): hp drops by exactly the attack value,
    /// and a defender at or below the attack value is removed.
    #[test]
    fn prop_attack_damage_formula(
        hp in 1u32..500,
        attack in 1u32..500,
    ) {
        let catalog = mono_catalog(500, attack, 2, 2);
        let mut defender = Unit::new("p2-0".to_string(), Side::Two, 0, 500, Coord::new(5, 4));
        defender.hp = hp;
        let units = vec![
            Unit::new("p1-0".to_string(), Side::One, 0, 500, Coord::new(4, 4)),
            defender,
        ];
        let mut battle = Battle::from_units(&open_level(10, 1), catalog, units).unwrap();

        prop_assert!(battle.apply_attack("p1-0", "p2-0"));

        match battle.unit("p2-0") {
            Some(survivor) => {
                prop_assert!(hp > attack);
                prop_assert_eq!(survivor.hp, hp - attack);
            }
            None => {
                prop_assert!(hp <= attack);
                prop_assert_eq!(battle.winner(), Some(Side::One));
            }
        }
    }

    /// End-turn alternates the active side strictly and advances the round
    /// counter once per two calls; all flags are clear afterwards.
    #[test]
    fn prop_end_turn_alternation(
        seed in any::<u64>(),
        rounds in 1u32..20,
    ) {
        let mut battle = Battle::new(&open_level(10, 3), Catalog::standard(), seed).unwrap();

        for round in 0..rounds {
            prop_assert_eq!(battle.active_side(), Side::One);
            prop_assert_eq!(battle.turn(), round + 1);

            prop_assert!(battle.end_turn());
            prop_assert_eq!(battle.active_side(), Side::Two);
            prop_assert_eq!(battle.turn(), round + 1);

            prop_assert!(battle.end_turn());
            for unit in battle.units() {
                prop_assert!(!unit.has_moved);
                prop_assert!(!unit.has_attacked);
            }
        }
    }

    /// Deployment is a pure function of (grid, catalog, seed).
    #[test]
    fn prop_spawn_deterministic(
        size in 4u16..20,
        per_side in 1u32..6,
        seed in any::<u64>(),
    ) {
        let grid = Grid::new(size).unwrap();
        let catalog = Catalog::standard();

        let mut rng1 = ChaCha8Rng::seed_from_u64(seed);
        let mut rng2 = ChaCha8Rng::seed_from_u64(seed);
        let units1 = spawn_units(&grid, &catalog, per_side, &mut rng1);
        let units2 = spawn_units(&grid, &catalog, per_side, &mut rng2);

        prop_assert_eq!(units1, units2);
    }

    /// Spawned deployments never collide, whatever the board and seed.
    #[test]
    fn prop_spawn_collision_free(
        size in 1u16..20,
        per_side in 1u32..40,
        seed in any::<u64>(),
    ) {
        let grid = Grid::new(size).unwrap();
        let catalog = Catalog::standard();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let units = spawn_units(&grid, &catalog, per_side, &mut rng);

        let mut cells: Vec<Coord> = units.iter().map(|unit| unit.pos).collect();
        cells.sort_unstable_by_key(|c| (c.x, c.y));
        cells.dedup();
        prop_assert_eq!(cells.len(), units.len());
    }

    /// Once a winner exists, every intent is rejected and nothing changes.
    #[test]
    fn prop_decided_match_is_terminal(seed in any::<u64>()) {
        let catalog = mono_catalog(10, 10, 2, 2);
        let units = vec![
            Unit::new("p1-0".to_string(), Side::One, 0, 10, Coord::new(4, 4)),
            Unit::new("p1-1".to_string(), Side::One, 0, 10, Coord::new(0, 0)),
            Unit::new("p2-0".to_string(), Side::Two, 0, 10, Coord::new(5, 4)),
        ];
        let mut battle = Battle::from_units(&open_level(10, 1), catalog, units).unwrap();
        prop_assert!(battle.apply_attack("p1-0", "p2-0"));
        prop_assert_eq!(battle.winner(), Some(Side::One));

        let before = battle.snapshot().unwrap();
        // Seed only picks an arbitrary probe destination.
        let x = u16::try_from(seed % 10).unwrap();
        prop_assert!(!battle.apply_move("p1-1", Coord::new(x, 1)));
        prop_assert!(!battle.apply_attack("p1-1", "p1-0"));
        prop_assert!(!battle.end_turn());
        prop_assert_eq!(battle.snapshot().unwrap(), before);
    }
}
