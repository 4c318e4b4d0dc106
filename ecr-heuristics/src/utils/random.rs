#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use crate::utils::Float;
use rand::prelude::*;
use rand_distr::Normal;
use std::sync::{Arc, Mutex};

/// Provides the way to use randomized values in generic way.
///
/// All draws of a single search run are expected to go through one instance, so the run is
/// reproducible under a fixed seed. Parallel workers get their own streams via `split`.
pub trait Random: Send + Sync {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max]
    fn uniform_int(&self, min: i32, max: i32) -> i32;

    /// Produces real random value, uniformly distributed on the closed interval [min, max)
    fn uniform_real(&self, min: Float, max: Float) -> Float;

    /// Produces real random value from normal distribution with given mean and standard deviation.
    /// Non positive or non finite deviation yields the mean.
    fn normal(&self, mean: Float, std_dev: Float) -> Float;

    /// Flips a coin and returns true if it is "heads", false otherwise.
    fn is_head_not_tails(&self) -> bool {
        self.uniform_int(1, 2) == 1
    }

    /// Tests probability value in [0., 1.] range.
    fn is_hit(&self, probability: Float) -> bool;

    /// Creates an independent random stream deterministically derived from this one.
    fn split(&self) -> Arc<dyn Random>;
}

/// A default random implementation backed by a small fast generator.
pub struct DefaultRandom {
    rng: Mutex<SmallRng>,
}

impl DefaultRandom {
    /// Creates a new instance of `DefaultRandom` with repeatable behavior driven by the seed.
    pub fn new_repeatable(seed: u64) -> Self {
        Self { rng: Mutex::new(SmallRng::seed_from_u64(seed)) }
    }

    fn with_rng<R>(&self, action: impl FnOnce(&mut SmallRng) -> R) -> R {
        // NOTE a poisoned lock still holds a valid generator state
        let mut rng = self.rng.lock().unwrap_or_else(|err| err.into_inner());
        action(&mut rng)
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self { rng: Mutex::new(SmallRng::from_entropy()) }
    }
}

impl Random for DefaultRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.with_rng(|rng| rng.gen_range(min..=max))
    }

    fn uniform_real(&self, min: Float, max: Float) -> Float {
        if (min - max).abs() < Float::EPSILON {
            return min;
        }

        assert!(min < max);
        self.with_rng(|rng| rng.gen_range(min..max))
    }

    fn normal(&self, mean: Float, std_dev: Float) -> Float {
        if !std_dev.is_finite() || std_dev <= 0. {
            return mean;
        }

        Normal::new(mean, std_dev).map(|distribution| self.with_rng(|rng| distribution.sample(rng))).unwrap_or(mean)
    }

    fn is_hit(&self, probability: Float) -> bool {
        match probability {
            p if p.is_nan() || p <= 0. => false,
            p if p >= 1. => true,
            p => self.with_rng(|rng| rng.gen_bool(p)),
        }
    }

    fn split(&self) -> Arc<dyn Random> {
        let seed = self.with_rng(|rng| rng.next_u64());

        Arc::new(DefaultRandom::new_repeatable(seed))
    }
}
