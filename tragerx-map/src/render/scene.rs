//! Map renderer and the rendered map scene.

use serde::{Deserialize, Serialize};

use crate::core::Pose;
use crate::grid::{ConfigError, OccupancyGrid};

use super::palette::{Color, ColorScale, Palette};

/// Largest raster side in pixels.
pub const MAX_RASTER_SIDE: u32 = 16_384;

/// Renderer configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Side length of one cell in pixels (cells are square)
    pub cell_px: u32,
    /// Marker diameter in pixels
    pub marker_diameter: f32,
    /// Figure title
    pub title: String,
    /// Legend label of the marker
    pub marker_label: String,
    /// Cell and marker colors
    pub palette: Palette,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cell_px: 10,
            marker_diameter: 12.0,
            title: "SLAM Map and Navigation".to_string(),
            marker_label: "TragerX Position".to_string(),
            palette: Palette::default(),
        }
    }
}

impl RenderConfig {
    /// Check that a `size × size` grid renders to a raster of sane size.
    pub fn validate(&self, size: usize) -> Result<(), ConfigError> {
        if self.cell_px == 0 {
            return Err(ConfigError::InvalidConfiguration(
                "render.cell_px must be positive".to_string(),
            ));
        }
        let side = (size as u64).saturating_mul(self.cell_px as u64);
        if side > MAX_RASTER_SIDE as u64 {
            return Err(ConfigError::InvalidConfiguration(format!(
                "{} cells of {} px is a {} px raster, maximum is {}",
                size, self.cell_px, side, MAX_RASTER_SIDE
            )));
        }
        Ok(())
    }
}

/// The trolley marker overlaid on the map.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    /// Grid position, not clamped
    pub pose: Pose,
    /// Fill color
    pub color: Color,
    /// Diameter in pixels
    pub diameter: f32,
    /// Legend label
    pub label: String,
}

/// A color-mapped map with one marker.
///
/// Produced by [`MapRenderer::render`]; turned into pixels with
/// [`RenderedMap::to_rgba_image`] or into SVG with [`RenderedMap::to_svg`].
///
/// Pixel layout: column `c` spans x in `[c * cell_px, (c + 1) * cell_px)`,
/// row `r` spans y in `[(size - 1 - r) * cell_px, (size - r) * cell_px)`,
/// so row 0 sits at the bottom of the image.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedMap {
    pub(super) size: usize,
    pub(super) cell_px: u32,
    pub(super) colors: Vec<Color>,
    pub(super) marker: Marker,
    pub(super) title: String,
    pub(super) legend: Vec<(String, Color)>,
}

impl RenderedMap {
    /// Grid side length in cells.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell side length in pixels.
    pub fn cell_px(&self) -> u32 {
        self.cell_px
    }

    /// Width of the map area in pixels (equal to the height).
    ///
    /// Saturates at `u32::MAX`; see [`RenderedMap::raster_side_px`].
    pub fn width_px(&self) -> u32 {
        u32::try_from(self.side_px_u64()).unwrap_or(u32::MAX)
    }

    /// Raster side length, or `None` above [`MAX_RASTER_SIDE`].
    pub fn raster_side_px(&self) -> Option<u32> {
        let side = self.side_px_u64();
        (side <= MAX_RASTER_SIDE as u64).then_some(side as u32)
    }

    fn side_px_u64(&self) -> u64 {
        (self.size as u64).saturating_mul(self.cell_px as u64)
    }

    /// Height of the map area in pixels.
    pub fn height_px(&self) -> u32 {
        self.width_px()
    }

    /// Figure title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The marker.
    pub fn marker(&self) -> &Marker {
        &self.marker
    }

    /// Legend entries for the four cell states, in ordinal order.
    pub fn legend(&self) -> &[(String, Color)] {
        &self.legend
    }

    /// Color of cell `(row, col)`, or `None` outside the grid.
    pub fn cell_color(&self, row: usize, col: usize) -> Option<Color> {
        if row < self.size && col < self.size {
            Some(self.colors[row * self.size + col])
        } else {
            None
        }
    }

    /// Top-left pixel of cell `(row, col)`. Accepts off-grid cells.
    pub fn cell_origin_px(&self, row: i64, col: i64) -> (i64, i64) {
        let px = self.cell_px as i64;
        let x = col * px;
        let y = (self.size as i64 - 1 - row) * px;
        (x, y)
    }

    /// Pixel center of the marker, using the same mapping as the cells.
    pub fn marker_center_px(&self) -> (f32, f32) {
        let (x, y) = self.cell_origin_px(self.marker.pose.row as i64, self.marker.pose.col as i64);
        let half = self.cell_px as f32 / 2.0;
        (x as f32 + half, y as f32 + half)
    }

    /// Whether the marker lies over a grid cell.
    pub fn marker_on_grid(&self) -> bool {
        self.marker.pose.in_bounds(self.size)
    }
}

/// Converts grids and poses into [`RenderedMap`]s.
#[derive(Clone, Debug)]
pub struct MapRenderer {
    config: RenderConfig,
    scale: ColorScale,
}

impl Default for MapRenderer {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

impl MapRenderer {
    /// Create a renderer.
    pub fn new(config: RenderConfig) -> Self {
        let scale = ColorScale::from_palette(&config.palette);
        Self { config, scale }
    }

    /// The color scale in use.
    pub fn scale(&self) -> &ColorScale {
        &self.scale
    }

    /// Render a grid with the marker at `pose`.
    ///
    /// An off-grid pose is not an error: the marker keeps its position and
    /// simply falls outside the map area.
    pub fn render(&self, grid: &OccupancyGrid, pose: Pose) -> RenderedMap {
        let colors = grid
            .as_slice()
            .iter()
            .map(|&state| self.scale.color_for(state))
            .collect();

        let legend = crate::core::CellState::ALL
            .iter()
            .map(|&state| (state.label().to_string(), self.scale.color_for(state)))
            .collect();

        RenderedMap {
            size: grid.size(),
            cell_px: self.config.cell_px.max(1),
            colors,
            marker: Marker {
                pose,
                color: self.config.palette.marker,
                diameter: self.config.marker_diameter,
                label: self.config.marker_label.clone(),
            },
            title: self.config.title.clone(),
            legend,
        }
    }
}

/// Render with the default configuration.
pub fn render(grid: &OccupancyGrid, pose: Pose) -> RenderedMap {
    MapRenderer::default().render(grid, pose)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellState;

    #[test]
    fn test_cell_colors_follow_states() {
        let grid = OccupancyGrid::from_fn(2, |row, col| CellState::from_u8((row * 2 + col) as u8));
        let map = render(&grid, Pose::new(0, 0));

        assert_eq!(map.cell_color(0, 0), Some(Color::BLACK));
        assert_eq!(map.cell_color(0, 1), Some(Color::LIGHT_GREY));
        assert_eq!(map.cell_color(1, 0), Some(Color::YELLOW));
        assert_eq!(map.cell_color(1, 1), Some(Color::RED));
        assert_eq!(map.cell_color(2, 0), None);
    }

    #[test]
    fn test_row_zero_at_bottom() {
        let grid = OccupancyGrid::uniform(10, CellState::Free);
        let map = render(&grid, Pose::new(3, 3));

        assert_eq!(map.cell_origin_px(0, 0), (0, 90));
        assert_eq!(map.cell_origin_px(9, 0), (0, 0));
        assert_eq!(map.cell_origin_px(3, 3), (30, 60));
        assert_eq!(map.marker_center_px(), (35.0, 65.0));
    }

    #[test]
    fn test_square_aspect() {
        let grid = OccupancyGrid::uniform(7, CellState::Free);
        let map = render(&grid, Pose::new(0, 0));
        assert_eq!(map.width_px(), 70);
        assert_eq!(map.width_px(), map.height_px());
    }

    #[test]
    fn test_off_grid_marker_is_kept() {
        let grid = OccupancyGrid::uniform(5, CellState::Free);
        let map = render(&grid, Pose::new(-2, 8));

        assert_eq!(map.marker().pose, Pose::new(-2, 8));
        assert!(!map.marker_on_grid());
        assert_eq!(map.marker_center_px(), (85.0, 65.0));
    }

    #[test]
    fn test_custom_config() {
        let config = RenderConfig {
            cell_px: 0,
            title: "Trolley Location".to_string(),
            ..RenderConfig::default()
        };
        let map = MapRenderer::new(config).render(&OccupancyGrid::uniform(3, CellState::Free), Pose::new(1, 1));
        assert_eq!(map.cell_px(), 1);
        assert_eq!(map.title(), "Trolley Location");
        assert_eq!(map.legend().len(), 4);
    }

    #[test]
    fn test_huge_cells_do_not_overflow() {
        let config = RenderConfig {
            cell_px: 100_000_000,
            ..RenderConfig::default()
        };
        let map = MapRenderer::new(config.clone())
            .render(&OccupancyGrid::uniform(50, CellState::Free), Pose::new(25, 25));

        assert_eq!(map.width_px(), u32::MAX);
        assert_eq!(map.raster_side_px(), None);
        assert!(config.validate(50).is_err());
    }

    #[test]
    fn test_validate_raster_bound() {
        let config = RenderConfig::default();
        assert!(config.validate(50).is_ok());
        assert!(config.validate(1638).is_ok());
        assert!(config.validate(1639).is_err());
        // Largest grid with default cells
        assert!(config.validate(crate::grid::MAX_MAP_SIZE).is_err());

        let zero = RenderConfig {
            cell_px: 0,
            ..RenderConfig::default()
        };
        assert!(zero.validate(10).is_err());
    }
}
