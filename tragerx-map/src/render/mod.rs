//! Map rendering.
//!
//! [`MapRenderer::render`] turns an [`OccupancyGrid`](crate::grid::OccupancyGrid)
//! and a [`Pose`](crate::core::Pose) into a [`RenderedMap`]: one color per
//! cell from the categorical [`ColorScale`] plus a single trolley marker.
//! The rendered map has two outputs:
//!
//! - **Raster**: [`RenderedMap::to_rgba_image`] / [`RenderedMap::save_png`]
//! - **SVG**: [`RenderedMap::to_svg`] / [`RenderedMap::save_svg`]
//!
//! | State | Scale position | Color |
//! |-------|----------------|-------|
//! | Unknown | 0 | black |
//! | Free | 1/3 | light grey `rgba(204,204,204,1)` |
//! | Tentative obstacle | 2/3 | yellow |
//! | Confirmed obstacle | 1 | red |
//!
//! The marker is blue, 12 px across by default, and centered on the cell
//! it sits on: column → x, row → y, row 0 at the bottom.
//!
//! ```rust
//! use tragerx_map::render::{render, Color};
//! use tragerx_map::{CellState, OccupancyGrid, Pose};
//!
//! let grid = OccupancyGrid::uniform(10, CellState::Free);
//! let map = render(&grid, Pose::new(3, 3));
//! let img = map.to_rgba_image();
//! assert_eq!(img.get_pixel(35, 65).0, Color::BLUE.to_array());
//! ```

mod palette;
mod raster;
mod scene;
mod svg;

use thiserror::Error;

pub use palette::{Color, ColorScale, ColorStop, Palette};
pub use scene::{MAX_RASTER_SIDE, MapRenderer, Marker, RenderConfig, RenderedMap, render};

/// Failure writing a rendered map to disk.
#[derive(Error, Debug)]
pub enum RenderError {
    /// PNG encoding or file error from the image crate
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// File write error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raster side would exceed [`MAX_RASTER_SIDE`]
    #[error("Raster of {side} px exceeds the {max} px limit")]
    TooLarge {
        /// Requested side length (saturated at `u32::MAX`)
        side: u32,
        /// Largest allowed side length
        max: u32,
    },
}
