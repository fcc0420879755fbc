//! The shortest-path search engine: generalized Dijkstra/A*.

use trailblazer_core::{Loc, World};

use crate::queue::MinQueue;
use crate::traits::{CostFn, HeuristicFn};

/// Progress notifications emitted during a search.
///
/// A renderer can color cells as they change state; a headless caller can
/// rely on the default no-op methods. Notifications are synchronous side
/// effects of the search loop; nothing is read back from the observer.
pub trait SearchObserver {
    /// `loc` gained a live entry in the priority queue.
    fn frontier(&mut self, _loc: Loc) {}

    /// `loc` was dequeued as minimum and permanently finalized.
    fn finalized(&mut self, _loc: Loc) {}
}

/// An observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// The queue was exhausted without reaching the goal.
///
/// The sole recoverable failure of [`shortest_path`]; every other misuse
/// (out-of-bounds endpoints, NaN priorities, non-adjacent cost queries)
/// panics instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("no path exists from {start} to {end}")]
pub struct NoPath {
    pub start: Loc,
    pub end: Loc,
}

/// Per-cell search state, created fresh for each call and discarded with it.
#[derive(Clone, Copy)]
struct CellState {
    /// Finalized: dequeued as minimum, never relaxed again.
    visited: bool,
    /// Has a live, not-yet-finalized queue entry.
    enqueued: bool,
    /// Best known cost from the start, +inf until first relaxed.
    cost_so_far: f64,
    /// Predecessor on the best known path.
    parent: Loc,
}

/// Compute the shortest path from `start` to `end` over `world`.
///
/// Returns the full location sequence including both endpoints, or
/// [`NoPath`] when the goal is unreachable. `start == end` short-circuits to
/// `[start]` without consulting the cost model.
///
/// With an admissible `heuristic` the result is minimum-cost; pass
/// [`ZeroHeuristic`](crate::ZeroHeuristic) for plain Dijkstra. When several
/// optimal paths exist, which one is returned follows the queue's
/// insertion-order tie-break and is deterministic.
///
/// Panics if `start` or `end` is out of bounds.
pub fn shortest_path<C, H, O>(
    world: &World,
    start: Loc,
    end: Loc,
    cost: &C,
    heuristic: &H,
    observer: &mut O,
) -> Result<Vec<Loc>, NoPath>
where
    C: CostFn,
    H: HeuristicFn,
    O: SearchObserver,
{
    assert!(
        world.in_bounds(start),
        "shortest_path: start {start} out of bounds"
    );
    assert!(
        world.in_bounds(end),
        "shortest_path: end {end} out of bounds"
    );

    if start == end {
        return Ok(vec![start]);
    }

    let cols = world.num_cols();
    let idx = |l: Loc| l.row as usize * cols + l.col as usize;

    let mut state = vec![
        CellState {
            visited: false,
            enqueued: false,
            cost_so_far: f64::INFINITY,
            parent: start,
        };
        world.num_rows() * cols
    ];
    state[idx(start)].cost_so_far = 0.0;

    let mut queue = MinQueue::new();
    queue.enqueue(start, heuristic.estimate(start, end, world));
    state[idx(start)].enqueued = true;
    observer.frontier(start);

    let mut reached = false;
    while !queue.is_empty() {
        let n = queue.dequeue_min();
        let ni = idx(n);
        state[ni].visited = true;
        state[ni].enqueued = false;
        observer.finalized(n);

        if n == end {
            reached = true;
            break;
        }

        let n_cost = state[ni].cost_so_far;
        for adj in n.neighbors_8() {
            if !world.in_bounds(adj) {
                continue;
            }
            let ai = idx(adj);
            if state[ai].visited {
                continue;
            }
            let via_n = n_cost + cost.cost(n, adj, world);
            assert!(!via_n.is_nan(), "cost model returned NaN for {n} -> {adj}");
            // Covers both the fresh case (cost_so_far is +inf, so any
            // finite edge admits) and re-relaxation; an infinite edge can
            // never improve on +inf and is naturally dropped.
            if via_n >= state[ai].cost_so_far {
                continue;
            }
            state[ai].cost_so_far = via_n;
            state[ai].parent = n;
            let f = via_n + heuristic.estimate(adj, end, world);
            if state[ai].enqueued {
                queue.decrease_key(adj, f);
            } else {
                queue.enqueue(adj, f);
                state[ai].enqueued = true;
                observer.frontier(adj);
            }
        }
    }

    if !reached {
        log::debug!("no path from {start} to {end}");
        return Err(NoPath { start, end });
    }

    // Walk parent links back from the goal; the start is its own parent.
    let mut path = vec![end];
    let mut cur = end;
    while cur != start {
        cur = state[idx(cur)].parent;
        path.push(cur);
    }
    path.reverse();
    log::debug!(
        "path from {start} to {end}: {} cells, cost {}",
        path.len(),
        state[idx(end)].cost_so_far
    );
    Ok(path)
}

/// [`shortest_path`] without an observer.
pub fn shortest_path_with<C, H>(
    world: &World,
    start: Loc,
    end: Loc,
    cost: &C,
    heuristic: &H,
) -> Result<Vec<Loc>, NoPath>
where
    C: CostFn,
    H: HeuristicFn,
{
    shortest_path(world, start, end, cost, heuristic, &mut NoopObserver)
}

/// Total cost of a path under `cost`: the sum over consecutive steps.
pub fn path_cost<C: CostFn>(world: &World, path: &[Loc], cost: &C) -> f64 {
    path.windows(2).map(|w| cost.cost(w[0], w[1], world)).sum()
}
