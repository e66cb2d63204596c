//! Core domain: run-wide configuration and progress.

use bevy::prelude::*;

#[derive(Resource, Debug, Default)]
pub struct RunConfig {
    /// Seed for the run's enemy-fire cadence.
    pub seed: u64,
    /// Distance covered this run; feeds the unlock gate shown on the
    /// next deploy. Persisting it is not this core's job.
    pub distance_traveled: f32,
}

impl RunConfig {
    pub fn reset(&mut self, seed: u64) {
        self.seed = seed;
        self.distance_traveled = 0.0;
    }
}
