//! Core types shared by the generator, the movement simulation and the renderer.
//!
//! ## Coordinates
//!
//! Grids are addressed as `(row, col)`. When drawn, the column is the
//! horizontal axis and the row the vertical axis, with row 0 at the bottom
//! (heatmap convention).
//!
//! - [`Pose`]: Trolley position on the grid, no heading
//! - [`CellState`]: Four-way cell classification with fixed ordinals
//! - [`RandomSource`]: Injectable uniform random generator

mod cell;
mod pose;
mod random;

pub use cell::CellState;
pub use pose::Pose;
pub use random::{RandomSource, ScriptedRandom, SeededRandom};
