//! Injectable random source for mock data and pose perturbation.
//!
//! Everything random in the dashboard (fleet metrics, battery levels, QR
//! modules, simulated movement) draws from a [`RandomSource`], so callers
//! can swap in a seeded or scripted generator to make output reproducible.

use rand::prelude::*;
use rand::rngs::SmallRng;

/// Uniform random integers and coin flips.
pub trait RandomSource {
    /// Uniform integer in `[low, high]`. Returns `low` if the range is empty.
    fn range_inclusive(&mut self, low: i32, high: i32) -> i32;

    /// Returns true with the given probability (clamped to [0, 1]).
    fn chance(&mut self, probability: f32) -> bool;

    /// Uniform index in `[0, len)`. Returns 0 for `len == 0`.
    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let high = (len - 1).min(i32::MAX as usize) as i32;
        self.range_inclusive(0, high) as usize
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn range_inclusive(&mut self, low: i32, high: i32) -> i32 {
        (**self).range_inclusive(low, high)
    }

    fn chance(&mut self, probability: f32) -> bool {
        (**self).chance(probability)
    }
}

/// [`RandomSource`] backed by `SmallRng`.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: SmallRng,
}

impl SeededRandom {
    /// Create a new generator.
    ///
    /// If seed is 0, uses random entropy for non-deterministic behavior.
    /// Otherwise, uses the provided seed for reproducible results.
    pub fn new(seed: u64) -> Self {
        let rng = if seed == 0 {
            SmallRng::from_entropy()
        } else {
            SmallRng::seed_from_u64(seed)
        };
        Self { rng }
    }
}

impl Default for SeededRandom {
    fn default() -> Self {
        Self::new(0)
    }
}

impl RandomSource for SeededRandom {
    #[inline]
    fn range_inclusive(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        self.rng.gen_range(low..=high)
    }

    #[inline]
    fn chance(&mut self, probability: f32) -> bool {
        let p = probability.clamp(0.0, 1.0) as f64;
        self.rng.gen_bool(p)
    }
}

/// Replays a fixed script of integers, cycling when exhausted.
///
/// Each value is clamped into the requested range. `chance` consumes one
/// value and treats anything non-zero as `true`.
#[derive(Clone, Debug)]
pub struct ScriptedRandom {
    values: Vec<i32>,
    cursor: usize,
}

impl ScriptedRandom {
    /// Create a script. An empty script always yields the range minimum.
    pub fn new(values: impl Into<Vec<i32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    fn next_value(&mut self) -> Option<i32> {
        if self.values.is_empty() {
            return None;
        }
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        Some(v)
    }
}

impl RandomSource for ScriptedRandom {
    fn range_inclusive(&mut self, low: i32, high: i32) -> i32 {
        match self.next_value() {
            Some(v) if high > low => v.clamp(low, high),
            _ => low,
        }
    }

    fn chance(&mut self, _probability: f32) -> bool {
        self.next_value().is_some_and(|v| v != 0)
    }
}
