//! Dijkstra/A* shortest-path search over 2D grid worlds.
//!
//! This crate provides the trailblazer search engine and its supporting
//! pieces:
//!
//! - **Shortest-path search** ([`shortest_path`]) — generalized Dijkstra/A*
//!   over a weighted grid graph, with optional progress observation.
//! - **Decreasable-priority queue** ([`MinQueue`]) — an indexed binary
//!   min-heap with O(log n) `enqueue`/`dequeue_min`/`decrease_key`.
//! - **Cost/heuristic contracts** ([`CostFn`], [`HeuristicFn`]) — pluggable
//!   edge-cost and remaining-cost estimators, with concrete terrain and maze
//!   models in [`models`].
//!
//! # Dijkstra vs. A*
//!
//! There is no separate Dijkstra code path: passing [`ZeroHeuristic`] (or any
//! estimator that always returns 0) degrades A* to plain Dijkstra. With an
//! *admissible* heuristic the returned path cost is identical; A* merely
//! visits fewer cells. A heuristic that can overestimate makes the engine
//! return a valid but possibly suboptimal path, with no error raised — this
//! is a precondition on the caller, not a detectable condition.

pub mod models;
pub mod queue;
pub mod search;
pub mod traits;

pub use models::{MazeCost, MazeHeuristic, TerrainCost, TerrainHeuristic};
pub use queue::MinQueue;
pub use search::{
    NoPath, NoopObserver, SearchObserver, path_cost, shortest_path, shortest_path_with,
};
pub use traits::{CostFn, HeuristicFn, ZeroHeuristic};
