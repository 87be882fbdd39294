//! Angular-rate input sources

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::TickInput;

/// One gyroscope reading: rotation rate around the device x and y axes
pub type RateSample = TickInput;

/// Anything that produces angular-rate samples in arrival order
pub trait AngularRateSource {
    /// Next sample, or None once the source is exhausted
    fn next_sample(&mut self) -> Option<RateSample>;
}

/// Replays a fixed list of samples
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    samples: VecDeque<RateSample>,
}

impl ScriptedSource {
    pub fn new(samples: impl IntoIterator<Item = RateSample>) -> Self {
        Self {
            samples: samples.into_iter().collect(),
        }
    }

    /// The same sample repeated `count` times
    pub fn repeat(sample: RateSample, count: usize) -> Self {
        Self::new(std::iter::repeat_n(sample, count))
    }

    pub fn remaining(&self) -> usize {
        self.samples.len()
    }
}

impl AngularRateSource for ScriptedSource {
    fn next_sample(&mut self) -> Option<RateSample> {
        self.samples.pop_front()
    }
}

/// Simulated hand tremor: a seeded, bounded random walk over both axes
#[derive(Debug, Clone)]
pub struct RandomWalkSource {
    rng: Pcg32,
    current: RateSample,
    /// Largest change between consecutive samples
    step: f32,
    /// Rates are kept within [-limit, limit]
    limit: f32,
    remaining: usize,
}

impl RandomWalkSource {
    pub fn new(seed: u64, count: usize) -> Self {
        Self::with_bounds(seed, count, 0.25, 2.0)
    }

    pub fn with_bounds(seed: u64, count: usize, step: f32, limit: f32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            current: RateSample::default(),
            step: step.abs(),
            limit: limit.abs(),
            remaining: count,
        }
    }

    fn jitter(&mut self, value: f32) -> f32 {
        if self.step == 0.0 {
            return value;
        }
        let delta = self.rng.random_range(-self.step..=self.step);
        (value + delta).clamp(-self.limit, self.limit)
    }
}

impl AngularRateSource for RandomWalkSource {
    fn next_sample(&mut self) -> Option<RateSample> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let rotation_x = self.jitter(self.current.rotation_x);
        let rotation_y = self.jitter(self.current.rotation_y);
        self.current = RateSample::new(rotation_x, rotation_y);
        Some(self.current)
    }
}
