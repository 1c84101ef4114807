//! Synthetic occupancy grid generation.
//!
//! The store map is not built from sensor data. A fixed [`MapLayout`] is
//! painted over an all-Free grid:
//!
//! ```text
//!            cols 15..20      cols 25..30     cols 35..45
//! rows 0..10        wall
//! rows 25..30                  tentative
//! rows 35..45                                  unknown
//! rows N-9..N       wall
//! ```
//!
//! Everything else is Free.
//!
//! The trolley pose is always the grid center. Grids smaller than the
//! layout keep whatever part of each region fits.
//!
//! ## Example
//!
//! ```rust
//! use tragerx_map::grid::{generate, ADMIN_MAP_SIZE};
//! use tragerx_map::{CellState, Pose};
//!
//! let (grid, pose) = generate(ADMIN_MAP_SIZE).unwrap();
//! assert_eq!(grid[(27, 27)], CellState::TentativeObstacle);
//! assert_eq!(pose, Pose::new(25, 25));
//! ```

mod error;
mod generator;
mod layout;
mod storage;

pub use error::ConfigError;
pub use generator::{ADMIN_MAP_SIZE, GridGenerator, MAX_MAP_SIZE, USER_MAP_SIZE, generate};
pub use layout::{MapLayout, Region, Span};
pub use storage::{CellCounts, OccupancyGrid};
