use trailblazer_core::{Loc, World};

/// Edge-cost contract for the search engine.
///
/// `from` and `to` must be identical or grid-adjacent (8-way); anything else
/// is a caller bug and implementations panic. The returned cost must be
/// non-negative; `f64::INFINITY` marks an impassable edge.
pub trait CostFn {
    /// Cost of moving from `from` to the adjacent `to`. 0 when `from == to`.
    fn cost(&self, from: Loc, to: Loc, world: &World) -> f64;
}

/// Remaining-cost estimator for A*.
///
/// Must be admissible: never overestimate the true remaining cost from
/// `from` to `to`. A non-admissible estimator silently yields valid but
/// possibly suboptimal paths — the engine cannot detect this.
pub trait HeuristicFn {
    /// Estimated cost remaining from `from` to `to`. Non-negative.
    fn estimate(&self, from: Loc, to: Loc, world: &World) -> f64;
}

impl<F> CostFn for F
where
    F: Fn(Loc, Loc, &World) -> f64,
{
    fn cost(&self, from: Loc, to: Loc, world: &World) -> f64 {
        self(from, to, world)
    }
}

impl<F> HeuristicFn for F
where
    F: Fn(Loc, Loc, &World) -> f64,
{
    fn estimate(&self, from: Loc, to: Loc, world: &World) -> f64 {
        self(from, to, world)
    }
}

/// The always-zero estimator: degrades A* to plain Dijkstra.
///
/// This is the supported way to select "Dijkstra mode" — there is no
/// separate code path in the engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl HeuristicFn for ZeroHeuristic {
    #[inline]
    fn estimate(&self, _from: Loc, _to: Loc, _world: &World) -> f64 {
        0.0
    }
}
