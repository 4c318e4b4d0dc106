use super::*;
use crate::utils::Quota;
use std::sync::Arc;

/// A termination criteria which delegates to an external quota, e.g. a cancellation token set by
/// the host application.
pub struct QuotaInterruption {
    quota: Arc<dyn Quota>,
}

impl QuotaInterruption {
    /// Creates a new instance of `QuotaInterruption`.
    pub fn new(quota: Arc<dyn Quota>) -> Self {
        Self { quota }
    }
}

impl Termination for QuotaInterruption {
    fn is_termination(&self, _: &HeuristicStatistics) -> bool {
        self.quota.is_reached()
    }

    fn estimate(&self, _: &HeuristicStatistics) -> Float {
        0.
    }

    fn reason(&self) -> TerminationReason {
        TerminationReason::Interrupted
    }
}
