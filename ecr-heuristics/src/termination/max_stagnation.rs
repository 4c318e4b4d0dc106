#[cfg(test)]
#[path = "../../tests/unit/termination/max_stagnation_test.rs"]
mod max_stagnation_test;

use super::*;

/// A termination criteria which is met when the best fitness has not improved sufficiently during
/// given amount of consecutive generations (patience).
pub struct MaxStagnation {
    patience: usize,
}

impl MaxStagnation {
    /// Creates a new instance of `MaxStagnation`.
    pub fn new(patience: usize) -> Self {
        Self { patience }
    }
}

impl Termination for MaxStagnation {
    fn is_termination(&self, statistics: &HeuristicStatistics) -> bool {
        statistics.stagnation >= self.patience
    }

    fn estimate(&self, statistics: &HeuristicStatistics) -> Float {
        if self.patience == 0 { 1. } else { (statistics.stagnation as Float / self.patience as Float).min(1.) }
    }

    fn reason(&self) -> TerminationReason {
        TerminationReason::Converged
    }
}
