//! Minimax ("bottleneck") pathfinding on 2D grids.
//!
//! Given a grid of non-negative values, find a 4-directional path between two
//! cells that minimizes the **largest** value it passes through, rather than
//! the sum. The search is a Dijkstra variant driven by a binary min-heap with
//! lazy deletion of stale frontier entries.
//!
//! - [`solve`] / [`solve_rows`] — one-shot, top-left to bottom-right
//! - [`PathRange::solve`] / [`PathRange::bottleneck_path`] — reusable caches,
//!   custom endpoints and custom [`BottleneckPather`]s
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbour enumeration |
//! | [`BottleneckPather`] : [`Pather`] | per-cell values |
//!
//! [`RadiationGrid`](safepath_core::RadiationGrid) implements both, with
//! in-bounds orthogonal moves.

mod bottleneck;
mod error;
mod path;
mod pathrange;
mod traits;

pub use bottleneck::{solve, solve_rows};
pub use error::SolveError;
pub use path::BottleneckPath;
pub use pathrange::PathRange;
pub use traits::{BottleneckPather, Pather};
