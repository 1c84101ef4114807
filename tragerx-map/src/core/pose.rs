//! Agent position on the grid.

use serde::{Deserialize, Serialize};

/// Grid position of a trolley as (row, col).
///
/// Signed so that positions outside the grid can be represented; the
/// renderer draws such poses off-grid rather than rejecting them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pose {
    /// Row index (vertical axis)
    pub row: i32,
    /// Column index (horizontal axis)
    pub col: i32,
}

impl Pose {
    /// Create a new pose.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Geometric center of a `size × size` grid: `(size / 2, size / 2)`.
    #[inline]
    pub fn center(size: usize) -> Self {
        let half = (size / 2) as i32;
        Self::new(half, half)
    }

    /// Translate by a row/column offset. No clamping.
    #[inline]
    pub fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row.saturating_add(d_row), self.col.saturating_add(d_col))
    }

    /// Clamp both axes into `[0, size)`.
    ///
    /// For `size == 0` the result is the origin.
    pub fn clamped(self, size: usize) -> Self {
        let max = (size.saturating_sub(1)).min(i32::MAX as usize) as i32;
        Self::new(self.row.clamp(0, max), self.col.clamp(0, max))
    }

    /// Whether the pose addresses a cell of a `size × size` grid.
    #[inline]
    pub fn in_bounds(self, size: usize) -> bool {
        self.row >= 0
            && self.col >= 0
            && (self.row as usize) < size
            && (self.col as usize) < size
    }

    /// `(row, col)` as unsigned indices, if non-negative.
    #[inline]
    pub fn to_index(self) -> Option<(usize, usize)> {
        if self.row < 0 || self.col < 0 {
            None
        } else {
            Some((self.row as usize, self.col as usize))
        }
    }
}

impl std::fmt::Display for Pose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{},{}]", self.row, self.col)
    }
}
