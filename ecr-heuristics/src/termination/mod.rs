//! The termination module contains logic which defines termination criteria for the search,
//! e.g. when to stop evolution.

#[cfg(test)]
#[path = "../../tests/unit/termination/composite_test.rs"]
mod composite_test;

use crate::HeuristicStatistics;
use crate::utils::{Float, compare_floats_refs};
use std::fmt::{Display, Formatter};

/// A trait which specifies criteria when the search should stop looking for an improved solution.
pub trait Termination {
    /// Returns true if termination condition is met.
    fn is_termination(&self, statistics: &HeuristicStatistics) -> bool;

    /// Returns a relative estimation till termination. Value is in the `[0, 1]` range.
    fn estimate(&self, statistics: &HeuristicStatistics) -> Float;

    /// Returns a reason reported when this criteria is met.
    fn reason(&self) -> TerminationReason;
}

/// Specifies a terminal state of the search.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TerminationReason {
    /// The best fitness has reached the target value.
    TargetReached,
    /// The best fitness has not improved enough during configured amount of generations.
    Converged,
    /// The generation budget is exhausted.
    MaxGenerationsReached,
    /// An external quota (e.g. user cancellation) is reached.
    Interrupted,
}

impl Display for TerminationReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TerminationReason::TargetReached => "target-reached",
            TerminationReason::Converged => "converged",
            TerminationReason::MaxGenerationsReached => "max-generations-reached",
            TerminationReason::Interrupted => "interrupted",
        };

        write!(f, "{name}")
    }
}

mod max_generation;
pub use self::max_generation::MaxGeneration;

mod max_stagnation;
pub use self::max_stagnation::MaxStagnation;

mod quota_interruption;
pub use self::quota_interruption::QuotaInterruption;

mod target_fitness;
pub use self::target_fitness::TargetFitness;

/// Encapsulates multiple termination criteria. They are checked in the order of insertion and the
/// first one which is met defines the termination reason.
pub struct CompositeTermination {
    terminations: Vec<Box<dyn Termination + Send + Sync>>,
}

impl CompositeTermination {
    /// Creates a new instance of `CompositeTermination`.
    pub fn new(terminations: Vec<Box<dyn Termination + Send + Sync>>) -> Self {
        Self { terminations }
    }

    /// Returns the reason of the first met termination criteria, if any.
    pub fn check(&self, statistics: &HeuristicStatistics) -> Option<TerminationReason> {
        self.terminations.iter().find(|t| t.is_termination(statistics)).map(|t| t.reason())
    }

    /// Returns the highest estimate of all criteria.
    pub fn estimate(&self, statistics: &HeuristicStatistics) -> Float {
        self.terminations.iter().map(|t| t.estimate(statistics)).max_by(compare_floats_refs).unwrap_or(0.)
    }
}
