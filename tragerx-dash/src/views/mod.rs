//! Text dashboards.
//!
//! Each view writes its report to any `io::Write` and its images to the
//! configured output directory. Files are always PNG or SVG.

pub mod admin;
pub mod user;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use image::RgbImage;
use tracing::info;
use tragerx_map::RenderedMap;

use crate::branding::logo_image;
use crate::error::Result;

/// Write `map` as `<stem>.png` and `<stem>.svg` under `dir`.
pub fn save_map(dir: &Path, stem: &str, map: &RenderedMap) -> Result<(PathBuf, PathBuf)> {
    std::fs::create_dir_all(dir)?;

    let png = dir.join(format!("{}.png", stem));
    let svg = dir.join(format!("{}.svg", stem));
    map.save_png(&png)?;
    map.save_svg(&svg)?;

    info!("Saved {} and {}", png.display(), svg.display());
    Ok((png, svg))
}

/// Write an RGB image as `<name>` (PNG) under `dir`.
pub fn save_image(dir: &Path, name: &str, img: &RgbImage) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;

    let path = dir.join(name);
    img.save_with_format(&path, image::ImageFormat::Png)?;

    info!("Saved {}", path.display());
    Ok(path)
}

/// Write the logo shown at the top of every dashboard.
pub fn save_logo(dir: &Path) -> Result<PathBuf> {
    save_image(dir, "logo.png", &logo_image())
}

/// Section heading with an underline.
pub(crate) fn heading(out: &mut impl Write, title: &str) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "-".repeat(title.chars().count()))?;
    Ok(())
}

/// Horizontal bar scaled so `max` fills `width` characters.
pub(crate) fn bar(value: u32, max: u32, width: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let len = (value as usize * width).div_ceil(max as usize).min(width);
    "#".repeat(len)
}

pub(crate) fn pause(ms: u64) {
    if ms > 0 {
        std::thread::sleep(Duration::from_millis(ms));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tragerx_map::{CellState, OccupancyGrid, Pose, render};

    #[test]
    fn test_bar() {
        assert_eq!(bar(0, 20, 10), "");
        assert_eq!(bar(20, 20, 10), "##########");
        assert_eq!(bar(10, 20, 10), "#####");
        assert_eq!(bar(1, 20, 10), "#");
        assert_eq!(bar(5, 0, 10), "");
    }

    #[test]
    fn test_heading() {
        let mut out = Vec::new();
        heading(&mut out, "Fleet").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\nFleet\n-----\n");
    }

    #[test]
    fn test_save_map_creates_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let map = render(&OccupancyGrid::uniform(4, CellState::Free), Pose::new(2, 2));

        let (png, svg) = save_map(&nested, "map", &map).unwrap();
        assert!(png.exists());
        assert!(svg.exists());
        assert_eq!(png.file_name().unwrap(), "map.png");
    }

    #[test]
    fn test_save_logo() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_logo(dir.path()).unwrap();

        let img = image::open(&path).unwrap().into_rgb8();
        assert_eq!(img.dimensions(), (150, 150));
        assert_eq!(img.get_pixel(75, 75).0, [53, 106, 195]);
    }
}
