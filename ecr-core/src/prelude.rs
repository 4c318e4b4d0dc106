//! This module reimports commonly used types.

pub use crate::evaluation::{
    ConstraintPenalty, EmptyRatioPolicy, Evaluator, FitnessBreakdown, ImbalanceConfig, PenaltyConfig,
};
pub use crate::models::{
    Candidate, CostConstants, ParameterSet, ParameterSetBuilder, Port, PortRow, Route, RouteRow, Schedule,
    ScheduleRow, VesselRow,
};
pub use crate::rebalancing::{PortNetwork, RebalanceConfig, RebalanceOptimizer, RebalancePlan};
pub use crate::simulation::simulate;
pub use crate::solver::{SearchResult, Solver, SolverConfig, SolverPreset};

pub use ecr_heuristics::prelude::*;
