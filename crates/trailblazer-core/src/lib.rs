//! **trailblazer-core** — value types and world model for the trailblazer
//! pathfinding engine.
//!
//! This crate provides the foundational types shared across the *trailblazer*
//! workspace: grid locations and edges ([`Loc`], [`Edge`]) and the read-only
//! cost grid the search engine consumes ([`World`]).

pub mod loc;
pub mod world;

pub use loc::{Edge, Loc};
pub use world::{FLOOR, WALL, World};
