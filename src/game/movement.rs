//! Movement reachability search.
//!
//! Reachability is true shortest-path reachability, not a Manhattan disc:
//! every step of a path must land on an in-bounds, non-wall cell that no
//! live unit occupies, so walls and units can force detours or cut cells
//! off entirely even when they are within raw Manhattan range.

use std::collections::VecDeque;

use crate::game::{Coord, Grid, Unit};

/// Compute the cells a unit may move to this turn.
///
/// Breadth-first search from the unit's cell over the 4-connected grid with
/// a path budget of `movement` steps. Each cell is enqueued at most once, so
/// the first visit is at shortest-path distance. The origin is marked
/// visited before traversal and never appears in the result. A unit that
/// has already moved this turn reaches nothing.
#[must_use]
pub fn reachable_cells(unit: &Unit, units: &[Unit], grid: &Grid, movement: u32) -> Vec<Coord> {
    if unit.has_moved {
        return Vec::new();
    }

    let cells = grid.cell_count();
    let mut occupied = vec![false; cells];
    for other in units {
        if other.id != unit.id
            && let Some(idx) = grid.index(other.pos)
        {
            occupied[idx] = true;
        }
    }

    let mut visited = vec![false; cells];
    let Some(origin) = grid.index(unit.pos) else {
        return Vec::new();
    };
    visited[origin] = true;

    let mut result = Vec::new();
    let mut queue = VecDeque::new();
    queue.push_back((unit.pos, 0u32));

    while let Some((pos, dist)) = queue.pop_front() {
        if dist == movement {
            continue;
        }

        let (adjacent, count) = pos.adjacent(grid.size());
        for &next in &adjacent[..count as usize] {
            let Some(idx) = grid.index(next) else {
                continue;
            };
            if visited[idx] || occupied[idx] || grid.is_wall(next) {
                continue;
            }
            visited[idx] = true;
            result.push(next);
            queue.push_back((next, dist + 1));
        }
    }

    result
}
