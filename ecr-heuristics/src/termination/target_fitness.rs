#[cfg(test)]
#[path = "../../tests/unit/termination/target_fitness_test.rs"]
mod target_fitness_test;

use super::*;

/// Stops the search when the fitness of the last completed generation reaches the target value.
pub struct TargetFitness {
    target: Float,
}

impl TargetFitness {
    /// Creates a new instance of `TargetFitness`.
    pub fn new(target: Float) -> Self {
        Self { target }
    }
}

impl Termination for TargetFitness {
    fn is_termination(&self, statistics: &HeuristicStatistics) -> bool {
        statistics.last_fitness.is_some_and(|fitness| fitness >= self.target)
    }

    fn estimate(&self, _: &HeuristicStatistics) -> Float {
        0.
    }

    fn reason(&self) -> TerminationReason {
        TerminationReason::TargetReached
    }
}
