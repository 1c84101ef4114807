//! Shared helpers for the integration tests.

#![allow(dead_code)]

use image::RgbaImage;
use tragerx_map::{CellState, Color, OccupancyGrid, RenderedMap};

/// All-Free grid of the given size.
pub fn free_grid(size: usize) -> OccupancyGrid {
    OccupancyGrid::uniform(size, CellState::Free)
}

/// Pixel at the center of cell `(row, col)`.
pub fn cell_center_pixel(map: &RenderedMap, img: &RgbaImage, row: usize, col: usize) -> Color {
    let (x, y) = map.cell_origin_px(row as i64, col as i64);
    let half = map.cell_px() as i64 / 2;
    let p = img.get_pixel((x + half) as u32, (y + half) as u32).0;
    Color {
        r: p[0],
        g: p[1],
        b: p[2],
        a: p[3],
    }
}

/// Number of pixels equal to `color`.
pub fn count_pixels(img: &RgbaImage, color: Color) -> usize {
    let target = color.to_array();
    img.pixels().filter(|p| p.0 == target).count()
}
