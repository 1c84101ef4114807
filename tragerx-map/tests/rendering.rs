//! Map renderer properties and file output.

mod common;

use common::{cell_center_pixel, count_pixels, free_grid};
use tragerx_map::render::{ColorScale, Palette};
use tragerx_map::{
    ADMIN_MAP_SIZE, CellState, Color, MapRenderer, Pose, RenderConfig, generate, render,
};

#[test]
fn test_all_free_grid_with_marker() {
    let map = render(&free_grid(10), Pose::new(3, 3));
    let img = map.to_rgba_image();

    assert_eq!(img.dimensions(), (100, 100));
    assert_eq!(cell_center_pixel(&map, &img, 3, 3), Color::BLUE);

    // Every cell away from the marker is light grey
    for row in 0..10usize {
        for col in 0..10usize {
            if row.abs_diff(3) > 1 || col.abs_diff(3) > 1 {
                assert_eq!(cell_center_pixel(&map, &img, row, col), Color::LIGHT_GREY);
            }
        }
    }

    // Only two colors in the whole raster
    let blue = count_pixels(&img, Color::BLUE);
    let grey = count_pixels(&img, Color::LIGHT_GREY);
    assert!(blue > 0);
    assert_eq!(blue + grey, 100 * 100);
}

#[test]
fn test_render_is_pure() {
    let (grid, pose) = generate(ADMIN_MAP_SIZE).unwrap();

    let first = render(&grid, pose);
    let second = render(&grid, pose);

    assert_eq!(first, second);
    assert_eq!(first.to_rgba_image(), second.to_rgba_image());
    assert_eq!(first.to_svg(), second.to_svg());
}

#[test]
fn test_admin_map_colors_match_cells() {
    let (grid, pose) = generate(ADMIN_MAP_SIZE).unwrap();
    let map = render(&grid, pose);
    let scale = ColorScale::default();

    for (row, col, state) in grid.iter() {
        assert_eq!(map.cell_color(row, col), Some(scale.color_for(state)));
    }

    let img = map.to_rgba_image();
    assert_eq!(cell_center_pixel(&map, &img, 5, 16), Color::RED);
    assert_eq!(cell_center_pixel(&map, &img, 27, 27), Color::YELLOW);
    assert_eq!(cell_center_pixel(&map, &img, 40, 40), Color::BLACK);
    assert_eq!(cell_center_pixel(&map, &img, 30, 30), Color::LIGHT_GREY);
    assert_eq!(cell_center_pixel(&map, &img, 25, 25), Color::BLUE);
}

#[test]
fn test_marker_tracks_pose_axes() {
    // Column drives x, row drives y: swapping them must move the marker
    let grid = free_grid(20);
    let a = render(&grid, Pose::new(2, 15));
    let b = render(&grid, Pose::new(15, 2));

    assert_ne!(a.marker_center_px(), b.marker_center_px());
    assert_eq!(a.marker_center_px(), (155.0, 175.0));
    assert_eq!(b.marker_center_px(), (25.0, 45.0));

    let img = a.to_rgba_image();
    assert_eq!(cell_center_pixel(&a, &img, 2, 15), Color::BLUE);
    assert_eq!(cell_center_pixel(&a, &img, 15, 2), Color::LIGHT_GREY);
}

#[test]
fn test_custom_palette() {
    let config = RenderConfig {
        cell_px: 4,
        palette: Palette {
            free: Color::WHITE,
            marker: Color::rgb(0, 128, 0),
            ..Palette::default()
        },
        ..RenderConfig::default()
    };
    let renderer = MapRenderer::new(config);
    let map = renderer.render(&free_grid(5), Pose::new(-3, -3));
    let img = map.to_rgba_image();

    assert_eq!(img.dimensions(), (20, 20));
    assert_eq!(count_pixels(&img, Color::WHITE), 400);
    assert_eq!(renderer.scale().color_for(CellState::Free), Color::WHITE);
}

#[test]
fn test_save_png_and_svg() {
    let dir = tempfile::tempdir().unwrap();
    let (grid, pose) = generate(30).unwrap();
    let map = render(&grid, pose);

    let png_path = dir.path().join("map.png");
    let svg_path = dir.path().join("map.svg");
    map.save_png(&png_path).unwrap();
    map.save_svg(&svg_path).unwrap();

    let loaded = image::open(&png_path).unwrap().into_rgba8();
    assert_eq!(loaded, map.to_rgba_image());

    let svg = std::fs::read_to_string(&svg_path).unwrap();
    assert!(svg.starts_with("<?xml"));
    assert!(svg.contains("TragerX Position"));
}

#[test]
fn test_save_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let map = render(&free_grid(3), Pose::new(1, 1));
    let path = dir.path().join("missing").join("map.svg");
    assert!(map.save_svg(&path).is_err());
}
