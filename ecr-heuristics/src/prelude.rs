//! This module reimports a common used types.

pub use crate::HeuristicStatistics;

pub use crate::evolution::{Telemetry, TelemetryMetrics, TelemetryMode};

pub use crate::termination::{CompositeTermination, Termination, TerminationReason};

pub use crate::utils::compare_floats;
pub use crate::utils::{DefaultRandom, Random};
pub use crate::utils::{Environment, InfoLogger, Quota};
pub use crate::utils::{Float, GenericError, GenericResult};
