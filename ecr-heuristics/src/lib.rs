//! This crate exposes a set of domain independent building blocks which are used to build an
//! evolutionary solver: random streams, parallel helpers, statistics, an assignment solver,
//! termination criteria and telemetry.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/unit/statistics_test.rs"]
mod statistics_test;

pub mod algorithms;
pub mod evolution;
pub mod prelude;
pub mod termination;
pub mod utils;

use crate::utils::{Float, Timer};

/// A statistics of the running search. It is updated once per generation by the search loop.
#[derive(Clone)]
pub struct HeuristicStatistics {
    /// An amount of completed generations.
    pub generation: usize,

    /// Elapsed time since search start.
    pub time: Timer,

    /// The best fitness observed in the last completed generation.
    pub last_fitness: Option<Float>,

    /// The best fitness observed since search start.
    pub best_fitness: Option<Float>,

    /// An amount of consecutive generations without sufficient improvement of the best fitness.
    pub stagnation: usize,

    /// An amount of generations which were considered as improvement.
    pub improvements: usize,

    /// A progress till algorithm's termination. Value is in the `[0, 1]` range.
    pub termination_estimate: Float,
}

impl Default for HeuristicStatistics {
    fn default() -> Self {
        Self {
            generation: 0,
            time: Timer::start(),
            last_fitness: None,
            best_fitness: None,
            stagnation: 0,
            improvements: 0,
            termination_estimate: 0.,
        }
    }
}

impl HeuristicStatistics {
    /// Registers the best fitness of a completed generation and returns true if it is considered as
    /// an improvement over the best known one.
    ///
    /// An improvement is a fitness which is better than the best known by more than
    /// `min_relative_improvement` (relative to the absolute value of the best known fitness).
    /// A better fitness which does not pass the threshold still replaces the best known one, but
    /// increments the stagnation counter.
    pub fn on_generation(&mut self, fitness: Float, min_relative_improvement: Float) -> bool {
        let is_improved = match self.best_fitness {
            None => true,
            Some(best) if fitness > best => {
                let divider = best.abs();
                divider == 0. || (fitness - best) / divider > min_relative_improvement
            }
            Some(_) => false,
        };

        if self.best_fitness.is_none_or(|best| fitness > best) {
            self.best_fitness = Some(fitness);
        }

        if is_improved {
            self.stagnation = 0;
            self.improvements += 1;
        } else {
            self.stagnation += 1;
        }

        self.last_fitness = Some(fitness);
        self.generation += 1;

        is_improved
    }

    /// Returns an overall improvement ratio.
    pub fn improvement_ratio(&self) -> Float {
        if self.generation == 0 { 0. } else { self.improvements as Float / self.generation as Float }
    }
}
