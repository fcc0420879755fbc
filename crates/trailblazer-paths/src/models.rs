//! Concrete cost models for terrain and maze worlds.
//!
//! Terrain worlds store elevations; a step costs its Euclidean length plus a
//! penalty proportional to the elevation change. Maze worlds store
//! [`WALL`](trailblazer_core::WALL)/[`FLOOR`](trailblazer_core::FLOOR)
//! markers; cardinal floor-to-floor steps cost 1 and everything else is
//! impassable.

use trailblazer_core::{Loc, World};

use crate::traits::{CostFn, HeuristicFn};

/// Multiplier applied to elevation change in terrain costs and estimates.
pub const ELEVATION_PENALTY: f64 = 100.0;

/// Panics unless `from` and `to` are identical or grid-adjacent. The
/// cost/heuristic contracts only cover single grid steps.
#[inline]
fn check_step(kind: &str, from: Loc, to: Loc) {
    assert!(
        from.is_adjacent(to),
        "{kind}: locations {from} and {to} are not grid-adjacent"
    );
}

/// Euclidean length of a single grid step (1 for cardinal, √2 for diagonal).
#[inline]
fn step_length(from: Loc, to: Loc) -> f64 {
    let dr = (from.row - to.row) as f64;
    let dc = (from.col - to.col) as f64;
    dr.hypot(dc)
}

// ---------------------------------------------------------------------------
// Terrain
// ---------------------------------------------------------------------------

/// Terrain step cost: Euclidean step distance plus scaled elevation change.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerrainCost;

impl CostFn for TerrainCost {
    fn cost(&self, from: Loc, to: Loc, world: &World) -> f64 {
        check_step("terrain cost", from, to);
        if from == to {
            return 0.0;
        }
        let climb = (world.at(to) - world.at(from)).abs();
        step_length(from, to) + ELEVATION_PENALTY * climb
    }
}

/// Terrain estimate: straight-line distance plus the scaled total elevation
/// delta.
///
/// Admissible for [`TerrainCost`]: any path is at least as long as the
/// straight line, and its summed elevation changes are at least the net
/// elevation difference.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerrainHeuristic;

impl HeuristicFn for TerrainHeuristic {
    fn estimate(&self, from: Loc, to: Loc, world: &World) -> f64 {
        let dr = (from.row - to.row) as f64;
        let dc = (from.col - to.col) as f64;
        let climb = (world.at(to) - world.at(from)).abs();
        dr.hypot(dc) + ELEVATION_PENALTY * climb
    }
}

// ---------------------------------------------------------------------------
// Maze
// ---------------------------------------------------------------------------

/// Maze step cost: 1 for a cardinal floor-to-floor move, infinite for a
/// diagonal move or any move touching a wall cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct MazeCost;

impl CostFn for MazeCost {
    fn cost(&self, from: Loc, to: Loc, world: &World) -> f64 {
        check_step("maze cost", from, to);
        if from == to {
            return 0.0;
        }
        let diagonal = from.row != to.row && from.col != to.col;
        if diagonal || world.is_wall(from) || world.is_wall(to) {
            return f64::INFINITY;
        }
        1.0
    }
}

/// Maze estimate: Manhattan distance.
///
/// Admissible for [`MazeCost`]: every step costs at least 1 and changes the
/// Manhattan distance by at most 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct MazeHeuristic;

impl HeuristicFn for MazeHeuristic {
    #[inline]
    fn estimate(&self, from: Loc, to: Loc, _world: &World) -> f64 {
        ((from.row - to.row).abs() + (from.col - to.col).abs()) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trailblazer_core::{FLOOR, WALL};

    fn flat_terrain() -> World {
        World::new(4, 4, 0.5)
    }

    #[test]
    fn terrain_identity_step_is_free() {
        let w = flat_terrain();
        let p = Loc::new(1, 1);
        assert_eq!(TerrainCost.cost(p, p, &w), 0.0);
    }

    #[test]
    fn terrain_flat_steps() {
        let w = flat_terrain();
        let c = TerrainCost.cost(Loc::new(1, 1), Loc::new(1, 2), &w);
        assert!((c - 1.0).abs() < 1e-12);
        let d = TerrainCost.cost(Loc::new(1, 1), Loc::new(2, 2), &w);
        assert!((d - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn terrain_climb_is_penalized() {
        let mut w = flat_terrain();
        w.set(Loc::new(0, 1), 0.7);
        let c = TerrainCost.cost(Loc::new(0, 0), Loc::new(0, 1), &w);
        assert!((c - (1.0 + ELEVATION_PENALTY * 0.2)).abs() < 1e-9);
        // Descending is penalized the same as climbing.
        let back = TerrainCost.cost(Loc::new(0, 1), Loc::new(0, 0), &w);
        assert!((c - back).abs() < 1e-12);
    }

    #[test]
    fn terrain_heuristic_never_exceeds_single_step_cost() {
        let mut w = flat_terrain();
        w.set(Loc::new(2, 2), 0.9);
        let from = Loc::new(2, 1);
        let to = Loc::new(2, 2);
        let h = TerrainHeuristic.estimate(from, to, &w);
        let c = TerrainCost.cost(from, to, &w);
        assert!(h <= c + 1e-12);
    }

    #[test]
    #[should_panic(expected = "not grid-adjacent")]
    fn terrain_cost_rejects_non_adjacent() {
        let w = flat_terrain();
        TerrainCost.cost(Loc::new(0, 0), Loc::new(0, 2), &w);
    }

    #[test]
    fn maze_cardinal_floor_step() {
        let w = World::new(3, 3, FLOOR);
        assert_eq!(MazeCost.cost(Loc::new(0, 0), Loc::new(0, 1), &w), 1.0);
    }

    #[test]
    fn maze_diagonal_is_impassable() {
        let w = World::new(3, 3, FLOOR);
        assert_eq!(
            MazeCost.cost(Loc::new(0, 0), Loc::new(1, 1), &w),
            f64::INFINITY
        );
    }

    #[test]
    fn maze_walls_are_impassable() {
        let mut w = World::new(3, 3, FLOOR);
        w.set(Loc::new(0, 1), WALL);
        assert_eq!(
            MazeCost.cost(Loc::new(0, 0), Loc::new(0, 1), &w),
            f64::INFINITY
        );
        assert_eq!(
            MazeCost.cost(Loc::new(0, 1), Loc::new(0, 2), &w),
            f64::INFINITY
        );
    }

    #[test]
    fn maze_identity_step_is_free() {
        let mut w = World::new(3, 3, FLOOR);
        w.set(Loc::new(1, 1), WALL);
        // Identity is free even on a wall cell.
        assert_eq!(MazeCost.cost(Loc::new(1, 1), Loc::new(1, 1), &w), 0.0);
    }

    #[test]
    #[should_panic(expected = "not grid-adjacent")]
    fn maze_cost_rejects_non_adjacent() {
        let w = World::new(3, 3, FLOOR);
        MazeCost.cost(Loc::new(0, 0), Loc::new(2, 2), &w);
    }

    #[test]
    fn maze_heuristic_is_manhattan() {
        let w = World::new(5, 5, FLOOR);
        assert_eq!(
            MazeHeuristic.estimate(Loc::new(0, 0), Loc::new(3, 4), &w),
            7.0
        );
        assert_eq!(
            MazeHeuristic.estimate(Loc::new(2, 2), Loc::new(2, 2), &w),
            0.0
        );
    }
}
