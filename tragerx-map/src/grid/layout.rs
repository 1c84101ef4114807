//! Fixed obstacle layout of the synthetic store map.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::core::CellState;

use super::ConfigError;

/// Half-open index interval `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// First index (inclusive)
    pub start: usize,
    /// Last index (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a span.
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of indices covered.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span covers nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Intersect with `[0, size)`. `None` if nothing remains.
    pub fn clip(&self, size: usize) -> Option<Range<usize>> {
        let end = self.end.min(size);
        (self.start < end).then_some(self.start..end)
    }
}

/// A rectangular block painted with one state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    /// Short name used in log output
    pub name: &'static str,
    /// Row interval
    pub rows: Span,
    /// Column interval
    pub cols: Span,
    /// State written into the block
    pub state: CellState,
}

/// Obstacle layout. Regions are painted in order over an all-Free grid:
/// wall bands, then the tentative block, then the unknown block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapLayout {
    /// Columns occupied by the confirmed-obstacle wall bands
    pub wall_columns: Span,

    /// Depth of the top and bottom wall bands in rows.
    ///
    /// The top band covers rows `r < depth`, the bottom band rows
    /// `r > size - depth`.
    pub wall_band_depth: usize,

    /// Square block of tentative obstacles (same span for rows and columns)
    pub tentative: Option<Span>,

    /// Square block of unobserved cells (same span for rows and columns)
    pub unknown: Option<Span>,
}

impl Default for MapLayout {
    fn default() -> Self {
        Self {
            wall_columns: Span::new(15, 20),
            wall_band_depth: 10,
            tentative: Some(Span::new(25, 30)),
            unknown: Some(Span::new(35, 45)),
        }
    }
}

impl MapLayout {
    /// Layout with no regions at all; generates an all-Free grid.
    pub fn empty() -> Self {
        Self {
            wall_columns: Span::new(0, 0),
            wall_band_depth: 0,
            tentative: None,
            unknown: None,
        }
    }

    /// Reject inverted spans.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let spans = [
            ("wall_columns", Some(self.wall_columns)),
            ("tentative", self.tentative),
            ("unknown", self.unknown),
        ];
        for (name, span) in spans {
            if let Some(span) = span
                && span.start > span.end
            {
                return Err(ConfigError::InvalidConfiguration(format!(
                    "layout span '{}' starts at {} after its end {}",
                    name, span.start, span.end
                )));
            }
        }
        Ok(())
    }

    /// Regions for a grid of the given size, in paint order.
    ///
    /// Regions are not clipped here; the generator clips them to the grid.
    pub fn regions(&self, size: usize) -> Vec<Region> {
        let mut regions = Vec::with_capacity(4);

        if self.wall_band_depth > 0 && !self.wall_columns.is_empty() {
            regions.push(Region {
                name: "top wall band",
                rows: Span::new(0, self.wall_band_depth),
                cols: self.wall_columns,
                state: CellState::ConfirmedObstacle,
            });
            // r > size - depth  <=>  r >= size + 1 - depth
            regions.push(Region {
                name: "bottom wall band",
                rows: Span::new((size + 1).saturating_sub(self.wall_band_depth), size),
                cols: self.wall_columns,
                state: CellState::ConfirmedObstacle,
            });
        }

        if let Some(span) = self.tentative {
            regions.push(Region {
                name: "tentative block",
                rows: span,
                cols: span,
                state: CellState::TentativeObstacle,
            });
        }

        if let Some(span) = self.unknown {
            regions.push(Region {
                name: "unknown block",
                rows: span,
                cols: span,
                state: CellState::Unknown,
            });
        }

        regions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_clip() {
        assert_eq!(Span::new(35, 45).clip(50), Some(35..45));
        assert_eq!(Span::new(35, 45).clip(40), Some(35..40));
        assert_eq!(Span::new(35, 45).clip(30), None);
        assert_eq!(Span::new(3, 3).clip(10), None);
    }

    #[test]
    fn test_default_regions_for_admin_map() {
        let regions = MapLayout::default().regions(50);
        assert_eq!(regions.len(), 4);

        assert_eq!(regions[0].rows, Span::new(0, 10));
        assert_eq!(regions[1].rows, Span::new(41, 50));
        assert_eq!(regions[1].cols, Span::new(15, 20));
        assert_eq!(regions[2].state, CellState::TentativeObstacle);
        assert_eq!(regions[3].state, CellState::Unknown);
    }

    #[test]
    fn test_bottom_band_for_tiny_grid_covers_everything() {
        let regions = MapLayout::default().regions(5);
        assert_eq!(regions[1].rows, Span::new(0, 5));
    }

    #[test]
    fn test_empty_layout_has_no_regions() {
        assert!(MapLayout::empty().regions(50).is_empty());
    }

    #[test]
    fn test_validate_rejects_inverted_span() {
        let layout = MapLayout {
            tentative: Some(Span::new(30, 25)),
            ..MapLayout::default()
        };
        assert!(matches!(
            layout.validate(),
            Err(ConfigError::InvalidConfiguration(_))
        ));
        assert!(MapLayout::default().validate().is_ok());
    }
}
