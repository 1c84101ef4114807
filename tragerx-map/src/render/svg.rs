//! SVG output.
//!
//! The SVG shows the title, the color-mapped grid, the trolley marker and a
//! legend. Unlike the raster, an off-grid marker is still drawn at its true
//! position outside the map area.

use std::fmt::Write;
use std::path::Path;

use super::RenderError;
use super::scene::RenderedMap;

/// Padding around the map in pixels.
const PADDING: f32 = 20.0;
/// Vertical space reserved for the title.
const TITLE_HEIGHT: f32 = 30.0;
/// Vertical space reserved for the legend.
const LEGEND_HEIGHT: f32 = 110.0;

impl RenderedMap {
    /// Render to an SVG document.
    pub fn to_svg(&self) -> String {
        let mut svg = String::new();

        let map_px = self.width_px() as f32;
        let width = map_px + 2.0 * PADDING;
        let height = map_px + 2.0 * PADDING + TITLE_HEIGHT + LEGEND_HEIGHT;

        writeln!(&mut svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#).unwrap();
        writeln!(
            &mut svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"#,
            width, height, width, height
        )
        .unwrap();

        writeln!(
            &mut svg,
            r##"  <rect width="100%" height="100%" fill="#FFFFFF"/>"##
        )
        .unwrap();

        writeln!(
            &mut svg,
            r##"  <text x="{:.0}" y="22" font-family="sans-serif" font-size="16" font-weight="bold" text-anchor="middle" fill="#333">{}</text>"##,
            width / 2.0,
            escape(&self.title)
        )
        .unwrap();

        writeln!(
            &mut svg,
            r#"  <g transform="translate({:.0}, {:.0})">"#,
            PADDING,
            PADDING + TITLE_HEIGHT
        )
        .unwrap();

        self.render_grid(&mut svg);
        self.render_marker(&mut svg);

        writeln!(&mut svg, "  </g>").unwrap();

        self.render_legend(&mut svg, PADDING + TITLE_HEIGHT + map_px + 10.0);

        writeln!(&mut svg, "</svg>").unwrap();
        svg
    }

    /// One rect per horizontal run of equal colors.
    fn render_grid(&self, svg: &mut String) {
        let px = self.cell_px as f32;

        writeln!(svg, r#"    <g id="grid" shape-rendering="crispEdges">"#).unwrap();

        for row in 0..self.size {
            let cells = &self.colors[row * self.size..(row + 1) * self.size];
            let (_, y) = self.cell_origin_px(row as i64, 0);

            let mut start = 0;
            while start < cells.len() {
                let color = cells[start];
                let mut end = start + 1;
                while end < cells.len() && cells[end] == color {
                    end += 1;
                }

                writeln!(
                    svg,
                    r#"      <rect x="{:.0}" y="{}" width="{:.0}" height="{:.0}" fill="{}"/>"#,
                    start as f32 * px,
                    y,
                    (end - start) as f32 * px,
                    px,
                    color.to_hex()
                )
                .unwrap();

                start = end;
            }
        }

        writeln!(svg, "    </g>").unwrap();
    }

    fn render_marker(&self, svg: &mut String) {
        let (cx, cy) = self.marker_center_px();

        writeln!(svg, r#"    <g id="marker">"#).unwrap();
        writeln!(
            svg,
            r#"      <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}" stroke="white" stroke-width="1"><title>{} {}</title></circle>"#,
            cx,
            cy,
            self.marker.diameter / 2.0,
            self.marker.color.to_hex(),
            escape(&self.marker.label),
            self.marker.pose
        )
        .unwrap();
        writeln!(svg, "    </g>").unwrap();
    }

    fn render_legend(&self, svg: &mut String, y_offset: f32) {
        writeln!(
            svg,
            r#"  <g id="legend" font-family="sans-serif" font-size="12" transform="translate({:.0}, {:.0})">"#,
            PADDING, y_offset
        )
        .unwrap();

        let mut entry_y = 0.0;
        for (label, color) in &self.legend {
            writeln!(
                svg,
                r##"    <rect x="0" y="{:.0}" width="15" height="15" fill="{}" stroke="#CCC"/>"##,
                entry_y,
                color.to_hex()
            )
            .unwrap();
            writeln!(
                svg,
                r##"    <text x="20" y="{:.0}" fill="#333">{}</text>"##,
                entry_y + 12.0,
                escape(label)
            )
            .unwrap();
            entry_y += 20.0;
        }

        writeln!(
            svg,
            r#"    <circle cx="7.5" cy="{:.1}" r="6" fill="{}" stroke="white" stroke-width="1"/>"#,
            entry_y + 7.5,
            self.marker.color.to_hex()
        )
        .unwrap();
        writeln!(
            svg,
            r##"    <text x="20" y="{:.0}" fill="#333">{}</text>"##,
            entry_y + 12.0,
            escape(&self.marker.label)
        )
        .unwrap();

        writeln!(svg, "  </g>").unwrap();
    }

    /// Write the SVG to a file.
    pub fn save_svg(&self, path: &Path) -> Result<(), RenderError> {
        std::fs::write(path, self.to_svg())?;
        Ok(())
    }
}

/// Escape text content for XML.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CellState, Pose};
    use crate::grid::OccupancyGrid;
    use crate::render::render;

    #[test]
    fn test_svg_render_basic() {
        let map = render(&OccupancyGrid::uniform(10, CellState::Free), Pose::new(3, 3));
        let svg = map.to_svg();

        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        assert!(svg.contains("SLAM Map and Navigation"));
        assert!(svg.contains("TragerX Position"));
        // Uniform grid collapses to one run per row
        assert_eq!(svg.matches(r##"fill="#CCCCCC""##).count(), 10 + 1);
    }

    #[test]
    fn test_svg_marker_position() {
        let map = render(&OccupancyGrid::uniform(10, CellState::Free), Pose::new(3, 3));
        let svg = map.to_svg();
        assert!(svg.contains(r##"cx="35.0" cy="65.0" r="6.0" fill="#0000FF""##));
    }

    #[test]
    fn test_svg_off_grid_marker_kept() {
        let map = render(&OccupancyGrid::uniform(5, CellState::Free), Pose::new(-2, 8));
        let svg = map.to_svg();
        assert!(svg.contains(r#"cx="85.0" cy="65.0""#));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a<b & \"c\">"), "a&lt;b &amp; &quot;c&quot;&gt;");
    }
}
