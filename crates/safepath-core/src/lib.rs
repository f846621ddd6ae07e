//! **safepath-core** — grid model for the safe-path solver.
//!
//! This crate provides the coordinate types and the immutable radiation
//! matrix consumed by `safepath-paths`: [`Cell`], [`Range`] and
//! [`RadiationGrid`], together with [`GridError`] for rejected shapes.

pub mod geom;
pub mod grid;

pub use geom::{Cell, Range};
pub use grid::{GridError, RadiationGrid};
