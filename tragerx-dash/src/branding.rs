//! Logo and QR-style connect image.
//!
//! The QR image is a visual stand-in: random modules plus the three finder
//! squares. It does not encode anything.

use image::{Rgb, RgbImage};
use tragerx_map::RandomSource;

const LOGO_SIZE: u32 = 150;
const LOGO_FILL: Rgb<u8> = Rgb([53, 106, 195]);
const LOGO_INSET: u32 = 10;
const LOGO_OUTLINE: u32 = 3;

const QR_SIZE: u32 = 200;
const QR_MODULE_PX: u32 = 10;
/// Modules per side
const QR_MODULES: u32 = QR_SIZE / QR_MODULE_PX;
const QR_DENSITY: f32 = 0.3;
/// Top-left module of each finder square, as (x, y)
const QR_FINDERS: [(u32, u32); 3] = [(0, 0), (0, 17), (17, 0)];

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Blue square with a white outline.
pub fn logo_image() -> RgbImage {
    let mut img = RgbImage::from_pixel(LOGO_SIZE, LOGO_SIZE, LOGO_FILL);

    let (lo, hi) = (LOGO_INSET, LOGO_SIZE - LOGO_INSET);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let inside = (lo..=hi).contains(&x) && (lo..=hi).contains(&y);
        let near_edge = x < lo + LOGO_OUTLINE
            || x > hi - LOGO_OUTLINE
            || y < lo + LOGO_OUTLINE
            || y > hi - LOGO_OUTLINE;
        if inside && near_edge {
            *pixel = WHITE;
        }
    }
    img
}

/// Random module pattern with finder squares in three corners.
pub fn qr_code_image(rng: &mut impl RandomSource) -> RgbImage {
    let mut img = RgbImage::from_pixel(QR_SIZE, QR_SIZE, WHITE);

    for my in 0..QR_MODULES {
        for mx in 0..QR_MODULES {
            if rng.chance(QR_DENSITY) {
                fill_module(&mut img, mx, my, BLACK);
            }
        }
    }

    for (fx, fy) in QR_FINDERS {
        for dy in 0..3 {
            for dx in 0..3 {
                fill_module(&mut img, fx + dx, fy + dy, BLACK);
            }
        }
        fill_module(&mut img, fx + 1, fy + 1, WHITE);
    }
    img
}

fn fill_module(img: &mut RgbImage, mx: u32, my: u32, color: Rgb<u8>) {
    let (x0, y0) = (mx * QR_MODULE_PX, my * QR_MODULE_PX);
    for y in y0..y0 + QR_MODULE_PX {
        for x in x0..x0 + QR_MODULE_PX {
            img.put_pixel(x, y, color);
        }
    }
}
