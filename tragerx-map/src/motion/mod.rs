//! Simulated trolley movement.
//!
//! The admin view can "simulate movement": a fixed number of frames, each
//! showing the map with the trolley jittered around the grid center. The
//! simulation is an iterator; it never sleeps. Whoever displays the frames
//! decides how long to wait between them (see
//! [`MovementConfig::frame_interval_ms`]).

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{Pose, RandomSource};
use crate::grid::{ConfigError, GridGenerator, OccupancyGrid};

/// Movement simulation parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Number of frames produced
    pub steps: usize,
    /// Maximum offset per axis, in cells (offsets drawn from `[-max, max]`)
    pub max_offset: i32,
    /// Suggested pause between frames for the display, in milliseconds
    pub frame_interval_ms: u64,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            steps: 5,
            max_offset: 3,
            frame_interval_ms: 1000,
        }
    }
}

impl MovementConfig {
    /// Reject negative offsets.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_offset < 0 {
            return Err(ConfigError::InvalidConfiguration(format!(
                "movement max_offset must be non-negative, got {}",
                self.max_offset
            )));
        }
        Ok(())
    }
}

/// Offset `pose` by `(d_row, d_col)` and clamp the result into `[0, size)`.
#[inline]
pub fn perturb(pose: Pose, d_row: i32, d_col: i32, size: usize) -> Pose {
    pose.offset(d_row, d_col).clamped(size)
}

/// Draw a `(d_row, d_col)` offset uniformly from `[-max_offset, max_offset]²`.
pub fn sample_offset<R: RandomSource + ?Sized>(rng: &mut R, max_offset: i32) -> (i32, i32) {
    let max = max_offset.abs();
    let d_row = rng.range_inclusive(-max, max);
    let d_col = rng.range_inclusive(-max, max);
    (d_row, d_col)
}

/// One frame of the movement simulation.
#[derive(Clone, Debug)]
pub struct MovementFrame {
    /// Zero-based frame index
    pub step: usize,
    /// Map for this frame
    pub grid: OccupancyGrid,
    /// Jittered trolley pose, always inside the grid
    pub pose: Pose,
}

/// Iterator over movement frames.
///
/// Every frame regenerates the map and jitters the *center* pose, so
/// offsets do not accumulate across frames.
pub struct SimulatedMovement<R> {
    generator: GridGenerator,
    size: usize,
    max_offset: i32,
    steps: usize,
    step: usize,
    rng: R,
}

impl<R: RandomSource> SimulatedMovement<R> {
    /// Create a simulation. Fails if `size` or `config` is invalid.
    pub fn new(
        generator: GridGenerator,
        size: usize,
        config: &MovementConfig,
        rng: R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        // Surface size errors up front instead of on the first frame
        generator.generate(size)?;

        Ok(Self {
            generator,
            size,
            max_offset: config.max_offset,
            steps: config.steps,
            step: 0,
            rng,
        })
    }

    /// Frames not yet produced.
    pub fn remaining(&self) -> usize {
        self.steps - self.step
    }
}

impl<R: RandomSource> Iterator for SimulatedMovement<R> {
    type Item = MovementFrame;

    fn next(&mut self) -> Option<MovementFrame> {
        if self.step >= self.steps {
            return None;
        }

        // Size was validated in new()
        let (grid, center) = self.generator.generate(self.size).ok()?;
        let (d_row, d_col) = sample_offset(&mut self.rng, self.max_offset);
        let pose = perturb(center, d_row, d_col, self.size);

        debug!(
            "movement frame {}/{}: offset ({}, {}) -> {}",
            self.step + 1,
            self.steps,
            d_row,
            d_col,
            pose
        );

        let frame = MovementFrame {
            step: self.step,
            grid,
            pose,
        };
        self.step += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl<R: RandomSource> ExactSizeIterator for SimulatedMovement<R> {}
