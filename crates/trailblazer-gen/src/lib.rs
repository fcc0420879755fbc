//! World generators for the trailblazer pathfinding engine.
//!
//! Two generators, both producing a [`World`](trailblazer_core::World) the
//! search engine consumes without knowing where it came from:
//!
//! - **Fractal terrain** ([`TerrainGen`]): diamond-square subdivision with
//!   smoothing, yielding elevations normalized to `[0, 1]`.
//! - **MST maze** ([`MazeGen`]): Kruskal's algorithm over a randomized
//!   lattice, yielding a wall/floor grid whose floor cells form a spanning
//!   tree (every cell reachable, no cycles).

pub mod maze;
pub mod terrain;

pub use maze::MazeGen;
pub use terrain::TerrainGen;
