//! Occupancy cell classification.

use serde::{Deserialize, Serialize};

/// Semantic classification of a single grid cell.
///
/// The discriminants are the category ordinals used by the color scale,
/// so the declaration order must not change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellState {
    /// Not observed
    #[default]
    Unknown = 0,
    /// Traversable space
    Free = 1,
    /// Obstacle seen once, not yet confirmed
    TentativeObstacle = 2,
    /// Confirmed obstacle (walls, shelving)
    ConfirmedObstacle = 3,
}

impl CellState {
    /// All states in ordinal order.
    pub const ALL: [CellState; 4] = [
        CellState::Unknown,
        CellState::Free,
        CellState::TentativeObstacle,
        CellState::ConfirmedObstacle,
    ];

    /// Highest ordinal; the normalization divisor for the color scale.
    pub const MAX_ORDINAL: u8 = 3;

    /// Convert from a raw ordinal. Out-of-range values map to `Unknown`.
    #[inline]
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => CellState::Free,
            2 => CellState::TentativeObstacle,
            3 => CellState::ConfirmedObstacle,
            _ => CellState::Unknown,
        }
    }

    /// Category ordinal (0..=3).
    #[inline]
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Normalized category index in [0, 1] (`ordinal / 3`).
    #[inline]
    pub fn normalized(self) -> f32 {
        self.ordinal() as f32 / Self::MAX_ORDINAL as f32
    }

    /// Tentative or confirmed obstacle.
    #[inline]
    pub fn is_obstacle(self) -> bool {
        matches!(
            self,
            CellState::TentativeObstacle | CellState::ConfirmedObstacle
        )
    }

    /// Anything but `Unknown`.
    #[inline]
    pub fn is_known(self) -> bool {
        self != CellState::Unknown
    }

    /// Human readable label used in legends.
    pub fn label(self) -> &'static str {
        match self {
            CellState::Unknown => "Unknown",
            CellState::Free => "Free space",
            CellState::TentativeObstacle => "Tentative obstacle",
            CellState::ConfirmedObstacle => "Confirmed obstacle",
        }
    }
}
