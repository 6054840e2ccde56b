//! Deterministic unit deployment.
//!
//! Each side owns a fixed zone of columns on its edge of the board. Free
//! cells in the zone are collected up front, shuffled and popped, so spawn
//! placement is collision-free by construction: there is no retry loop to
//! starve when the free-cell pool runs low. A zone with fewer free cells
//! than requested yields fewer units, never an error or a hang.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::warn;

use crate::game::{Catalog, Coord, Grid, Side, Unit};

/// Width of each side's deployment zone in columns, clamped to the board.
const SPAWN_ZONE_COLUMNS: u16 = 3;

/// Column range of a side's deployment zone on a board of the given size.
fn zone_columns(side: Side, size: u16) -> std::ops::Range<u16> {
    let width = SPAWN_ZONE_COLUMNS.min(size);
    match side {
        Side::One => 0..width,
        Side::Two => (size - width)..size,
    }
}

/// Spawn the initial unit collection for both sides.
///
/// Archetypes are drawn uniformly from the catalog, which the caller has
/// already validated as non-empty. Unit ids are `"p1-0"`, `"p1-1"`, …,
/// unique within the match. Same grid, catalog and RNG state produce the
/// same deployment.
pub fn spawn_units<R: Rng>(
    grid: &Grid,
    catalog: &Catalog,
    units_per_side: u32,
    rng: &mut R,
) -> Vec<Unit> {
    let mut units: Vec<Unit> = Vec::new();

    for side in [Side::One, Side::Two] {
        let mut free: Vec<Coord> = grid
            .coords()
            .filter(|&coord| zone_columns(side, grid.size()).contains(&coord.x))
            .filter(|&coord| !grid.is_wall(coord))
            .filter(|&coord| units.iter().all(|unit| unit.pos != coord))
            .collect();
        free.shuffle(rng);

        let requested = usize::try_from(units_per_side).unwrap_or(usize::MAX);
        if free.len() < requested {
            warn!(
                side = %side,
                requested,
                available = free.len(),
                "spawn zone starved, deploying fewer units"
            );
        }

        for index in 0..requested.min(free.len()) {
            let Some(pos) = free.pop() else { break };
            let archetype = rng.gen_range(0..catalog.len());
            let Some(stats) = catalog.get(archetype) else {
                break;
            };
            units.push(Unit::new(
                format!("p{}-{index}", side.number()),
                side,
                archetype,
                stats.max_hp,
                pos,
            ));
        }
    }

    units
}
