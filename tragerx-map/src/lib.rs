//! # TragerX Map
//!
//! Synthetic store map for the TragerX autonomous trolley fleet demo.
//!
//! ## Overview
//!
//! The map is an occupancy grid with four semantic cell states:
//!
//! - **Unknown** - Not observed
//! - **Free** - Traversable floor
//! - **TentativeObstacle** - Obstacle seen but not confirmed
//! - **ConfirmedObstacle** - Walls and shelving
//!
//! There is no real mapping here. Grids come from a fixed layout and the
//! trolley pose is the grid center, optionally jittered by the movement
//! simulation.
//!
//! ## Pipeline
//!
//! ```text
//! GridGenerator ──► (OccupancyGrid, Pose) ──► MapRenderer ──► RenderedMap ──► PNG / SVG
//!                          ▲
//!                 SimulatedMovement (jitter, RandomSource)
//! ```
//!
//! Every stage is a pure function of its inputs; nothing is shared between
//! calls.
//!
//! ## Quick Start
//!
//! ```rust
//! use tragerx_map::{generate, render, ADMIN_MAP_SIZE};
//!
//! let (grid, pose) = generate(ADMIN_MAP_SIZE).unwrap();
//! let map = render(&grid, pose);
//! assert_eq!(map.width_px(), map.height_px());
//! ```

#![warn(missing_docs)]

// Core types
pub mod core;

// Grid generation
pub mod grid;

// Movement simulation
pub mod motion;

// Rendering (raster and SVG)
pub mod render;

pub use crate::core::{CellState, Pose, RandomSource, ScriptedRandom, SeededRandom};

pub use grid::{
    ADMIN_MAP_SIZE, CellCounts, ConfigError, GridGenerator, MapLayout, OccupancyGrid,
    USER_MAP_SIZE, generate,
};

pub use motion::{MovementConfig, MovementFrame, SimulatedMovement, perturb};

pub use render::{Color, MapRenderer, RenderConfig, RenderError, RenderedMap, render};
