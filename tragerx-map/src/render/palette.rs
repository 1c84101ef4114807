//! Colors and the categorical occupancy color scale.

use serde::{Deserialize, Serialize};

use crate::core::CellState;

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha (255 = opaque)
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Light grey (0.8 intensity).
    pub const LIGHT_GREY: Color = Color::rgb(204, 204, 204);
    /// Opaque yellow.
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    /// Opaque red.
    pub const RED: Color = Color::rgb(255, 0, 0);
    /// Opaque blue.
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from unit-range float components.
    pub fn from_unit(r: f32, g: f32, b: f32, a: f32) -> Self {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0) as u8;
        Self {
            r: q(r),
            g: q(g),
            b: q(b),
            a: q(a),
        }
    }

    /// `#RRGGBB` (alpha dropped).
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// CSS `rgba(r,g,b,a)` with alpha in [0, 1].
    pub fn to_css_rgba(self) -> String {
        let alpha = self.a as f32 / 255.0;
        format!("rgba({},{},{},{})", self.r, self.g, self.b, alpha)
    }

    /// Components as an array, for `image::Rgba`.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    fn lerp(self, other: Color, t: f32) -> Color {
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }
}

/// Colors for each cell state plus the trolley marker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Unknown cells
    pub unknown: Color,
    /// Free cells
    pub free: Color,
    /// Tentative obstacles
    pub tentative: Color,
    /// Confirmed obstacles
    pub confirmed: Color,
    /// Trolley marker
    pub marker: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            unknown: Color::BLACK,
            free: Color::from_unit(0.8, 0.8, 0.8, 1.0),
            tentative: Color::YELLOW,
            confirmed: Color::RED,
            marker: Color::BLUE,
        }
    }
}

/// A position on the scale and its color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    /// Position in [0, 1]
    pub position: f32,
    /// Color at that position
    pub color: Color,
}

/// Ordered color scale keyed by normalized category index.
///
/// Positions between stops interpolate linearly; cell states always land
/// exactly on a stop.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorScale {
    stops: Vec<ColorStop>,
}

impl ColorScale {
    /// Scale with one stop per cell state at `ordinal / 3`.
    pub fn from_palette(palette: &Palette) -> Self {
        let colors = [
            palette.unknown,
            palette.free,
            palette.tentative,
            palette.confirmed,
        ];
        let stops = CellState::ALL
            .iter()
            .zip(colors)
            .map(|(state, color)| ColorStop {
                position: state.normalized(),
                color,
            })
            .collect();
        Self { stops }
    }

    /// The stops in ascending order.
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Color at a scale position, clamped to [first, last] stop.
    pub fn color_at(&self, position: f32) -> Color {
        let Some(first) = self.stops.first() else {
            return Color::BLACK;
        };
        if position <= first.position {
            return first.color;
        }
        for pair in self.stops.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if position <= hi.position {
                let span = hi.position - lo.position;
                if span <= 0.0 {
                    return hi.color;
                }
                return lo.color.lerp(hi.color, (position - lo.position) / span);
            }
        }
        self.stops[self.stops.len() - 1].color
    }

    /// Color assigned to a cell state.
    #[inline]
    pub fn color_for(&self, state: CellState) -> Color {
        self.color_at(state.normalized())
    }

    /// `[[position, "rgba(..)"], ...]` pairs in the plotting-library format.
    pub fn to_css_stops(&self) -> Vec<(f32, String)> {
        self.stops
            .iter()
            .map(|s| (s.position, s.color.to_css_rgba()))
            .collect()
    }
}

impl Default for ColorScale {
    fn default() -> Self {
        Self::from_palette(&Palette::default())
    }
}
