//! Deterministic synthetic map generation.

use log::debug;

use crate::core::{CellState, Pose};

use super::{ConfigError, MapLayout, OccupancyGrid};

/// Default map size of the admin dashboard.
pub const ADMIN_MAP_SIZE: usize = 50;

/// Default map size of the user "my trolley" card.
pub const USER_MAP_SIZE: usize = 30;

/// Largest accepted map size.
pub const MAX_MAP_SIZE: usize = 4096;

/// Generates occupancy grids from a [`MapLayout`].
///
/// Output depends only on the layout and the size, so repeated calls
/// return identical grids.
#[derive(Clone, Debug, Default)]
pub struct GridGenerator {
    layout: MapLayout,
}

impl GridGenerator {
    /// Create a generator for a custom layout.
    pub fn new(layout: MapLayout) -> Self {
        Self { layout }
    }

    /// Build a `size × size` grid and the pose at its center.
    ///
    /// Sizes of 0 or above [`MAX_MAP_SIZE`] are rejected. Any other size is
    /// accepted; regions reaching past the grid edge are clipped and regions
    /// entirely outside are skipped.
    pub fn generate(&self, size: usize) -> Result<(OccupancyGrid, Pose), ConfigError> {
        if size == 0 {
            return Err(ConfigError::InvalidConfiguration(
                "map size must be positive".to_string(),
            ));
        }
        if size > MAX_MAP_SIZE {
            return Err(ConfigError::InvalidConfiguration(format!(
                "map size {} exceeds maximum {}",
                size, MAX_MAP_SIZE
            )));
        }
        self.layout.validate()?;

        let mut grid = OccupancyGrid::uniform(size, CellState::Free);

        for region in self.layout.regions(size) {
            match (region.rows.clip(size), region.cols.clip(size)) {
                (Some(rows), Some(cols)) => {
                    if rows.len() < region.rows.len() || cols.len() < region.cols.len() {
                        debug!(
                            "{} clipped to rows {:?} cols {:?} for size {}",
                            region.name, rows, cols, size
                        );
                    }
                    grid.fill(rows, cols, region.state);
                }
                _ => debug!("{} lies outside a {}x{} grid, skipped", region.name, size, size),
            }
        }

        Ok((grid, Pose::center(size)))
    }
}

/// Generate a map with the default store layout.
pub fn generate(size: usize) -> Result<(OccupancyGrid, Pose), ConfigError> {
    GridGenerator::default().generate(size)
}
