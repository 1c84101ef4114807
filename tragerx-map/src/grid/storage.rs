//! Square occupancy grid storage.

use std::ops::{Index, Range};

use serde::{Deserialize, Serialize};

use crate::core::{CellState, Pose};

/// Immutable `size × size` occupancy grid.
///
/// Cells are stored row-major. There is no public way to change a cell once
/// the grid exists; new maps are produced wholesale by the generator or by
/// [`OccupancyGrid::from_fn`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyGrid {
    size: usize,
    cells: Vec<CellState>,
}

impl OccupancyGrid {
    /// Grid with every cell set to `state`.
    pub fn uniform(size: usize, state: CellState) -> Self {
        Self {
            size,
            cells: vec![state; size * size],
        }
    }

    /// Grid whose cells are computed from `(row, col)`.
    pub fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> CellState) -> Self {
        let mut cells = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                cells.push(f(row, col));
            }
        }
        Self { size, cells }
    }

    /// Overwrite a rectangular block. Ranges must already be clipped.
    pub(crate) fn fill(&mut self, rows: Range<usize>, cols: Range<usize>, state: CellState) {
        for row in rows {
            let start = row * self.size;
            self.cells[start + cols.start..start + cols.end].fill(state);
        }
    }

    /// Side length in cells.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (`size²`).
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// State at `(row, col)`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<CellState> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// State under a pose, or `None` if the pose is off-grid.
    pub fn state_at(&self, pose: Pose) -> Option<CellState> {
        let (row, col) = pose.to_index()?;
        self.get(row, col)
    }

    /// Row-major cell slice.
    #[inline]
    pub fn as_slice(&self) -> &[CellState] {
        &self.cells
    }

    /// Iterate rows as slices, row 0 first.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        // chunks() panics on 0
        self.cells.chunks(self.size.max(1))
    }

    /// Iterate `(row, col, state)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &state)| (i / size, i % size, state))
    }

    /// Count cells of each state.
    pub fn count_by_state(&self) -> CellCounts {
        let mut counts = CellCounts::default();
        for &state in &self.cells {
            counts.add(state);
        }
        counts
    }
}

impl Index<(usize, usize)> for OccupancyGrid {
    type Output = CellState;

    /// Panics outside the grid, like slice indexing.
    fn index(&self, (row, col): (usize, usize)) -> &CellState {
        assert!(
            row < self.size && col < self.size,
            "cell ({row}, {col}) outside {0}x{0} grid",
            self.size
        );
        &self.cells[row * self.size + col]
    }
}

/// Cell counts by state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellCounts {
    /// Unknown cells.
    pub unknown: usize,
    /// Free cells.
    pub free: usize,
    /// Tentative obstacle cells.
    pub tentative: usize,
    /// Confirmed obstacle cells.
    pub confirmed: usize,
}

impl CellCounts {
    /// Increment the counter for `state`.
    pub fn add(&mut self, state: CellState) {
        match state {
            CellState::Unknown => self.unknown += 1,
            CellState::Free => self.free += 1,
            CellState::TentativeObstacle => self.tentative += 1,
            CellState::ConfirmedObstacle => self.confirmed += 1,
        }
    }

    /// Count for a single state.
    pub fn get(&self, state: CellState) -> usize {
        match state {
            CellState::Unknown => self.unknown,
            CellState::Free => self.free,
            CellState::TentativeObstacle => self.tentative,
            CellState::ConfirmedObstacle => self.confirmed,
        }
    }

    /// Total obstacle cells.
    pub fn obstacles(&self) -> usize {
        self.tentative + self.confirmed
    }

    /// Total cells.
    pub fn total(&self) -> usize {
        self.unknown + self.free + self.obstacles()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_grid() {
        let grid = OccupancyGrid::uniform(4, CellState::Free);
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.cell_count(), 16);
        assert!(grid.iter().all(|(_, _, s)| s == CellState::Free));
        assert_eq!(grid.get(4, 0), None);
    }

    #[test]
    fn test_from_fn_row_major() {
        let grid = OccupancyGrid::from_fn(3, |row, col| {
            if row == 0 && col == 2 {
                CellState::ConfirmedObstacle
            } else {
                CellState::Free
            }
        });
        assert_eq!(grid[(0, 2)], CellState::ConfirmedObstacle);
        assert_eq!(grid.as_slice()[2], CellState::ConfirmedObstacle);
        assert_eq!(grid.rows().count(), 3);
    }

    #[test]
    fn test_fill_block() {
        let mut grid = OccupancyGrid::uniform(5, CellState::Free);
        grid.fill(1..3, 2..4, CellState::TentativeObstacle);

        let counts = grid.count_by_state();
        assert_eq!(counts.tentative, 4);
        assert_eq!(counts.free, 21);
        assert_eq!(counts.total(), 25);
        assert_eq!(grid.get(2, 3), Some(CellState::TentativeObstacle));
        assert_eq!(grid.get(3, 3), Some(CellState::Free));
    }

    #[test]
    fn test_state_at_pose() {
        let grid = OccupancyGrid::uniform(3, CellState::Unknown);
        assert_eq!(grid.state_at(Pose::new(1, 1)), Some(CellState::Unknown));
        assert_eq!(grid.state_at(Pose::new(-1, 1)), None);
        assert_eq!(grid.state_at(Pose::new(1, 3)), None);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_bounds() {
        let grid = OccupancyGrid::uniform(2, CellState::Free);
        let _ = grid[(2, 0)];
    }

    #[test]
    fn test_empty_grid_rows() {
        let grid = OccupancyGrid::uniform(0, CellState::Free);
        assert_eq!(grid.rows().count(), 0);
        assert_eq!(grid.count_by_state().total(), 0);
    }
}
