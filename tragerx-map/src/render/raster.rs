//! RGBA raster output.

use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};

use super::RenderError;
use super::scene::{MAX_RASTER_SIDE, RenderedMap};

impl RenderedMap {
    /// Rasterize the map area.
    ///
    /// The image is exactly `width_px × height_px`. Marker pixels that fall
    /// outside it are dropped, so an off-grid marker is invisible here.
    ///
    /// # Panics
    ///
    /// If the raster is larger than [`MAX_RASTER_SIDE`]. [`Self::save_png`]
    /// reports that case as an error instead.
    pub fn to_rgba_image(&self) -> RgbaImage {
        assert!(
            self.raster_side_px().is_some(),
            "raster side {} px exceeds {}",
            self.width_px(),
            MAX_RASTER_SIDE
        );
        let side = self.width_px();
        let px = self.cell_px;
        let mut img = RgbaImage::new(side, side);

        for (i, color) in self.colors.iter().enumerate() {
            let row = i / self.size;
            let col = i % self.size;
            let (x0, y0) = self.cell_origin_px(row as i64, col as i64);
            let pixel = Rgba(color.to_array());
            for dy in 0..px {
                for dx in 0..px {
                    img.put_pixel(x0 as u32 + dx, y0 as u32 + dy, pixel);
                }
            }
        }

        self.draw_marker(&mut img);
        img
    }

    /// Filled disc centered on the marker cell.
    fn draw_marker(&self, img: &mut RgbaImage) {
        let (cx, cy) = self.marker_center_px();
        let radius = (self.marker.diameter / 2.0).max(0.5);
        let r2 = radius * radius;
        let pixel = Rgba(self.marker.color.to_array());

        let (w, h) = (img.width() as i64, img.height() as i64);
        let x_min = ((cx - radius).floor() as i64).max(0);
        let x_max = ((cx + radius).ceil() as i64).min(w);
        let y_min = ((cy - radius).floor() as i64).max(0);
        let y_max = ((cy + radius).ceil() as i64).min(h);

        for y in y_min..y_max {
            for x in x_min..x_max {
                // Distance from pixel center
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                if dx * dx + dy * dy <= r2 {
                    img.put_pixel(x as u32, y as u32, pixel);
                }
            }
        }
    }

    /// Write the raster as PNG.
    pub fn save_png(&self, path: &Path) -> Result<(), RenderError> {
        if self.raster_side_px().is_none() {
            return Err(RenderError::TooLarge {
                side: self.width_px(),
                max: MAX_RASTER_SIDE,
            });
        }
        self.to_rgba_image().save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }
}
