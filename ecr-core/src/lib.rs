//! Core crate contains the building blocks to solve an ***Empty Container Repositioning*** problem:
//! allocation of full and empty containers across time ordered vessel schedules.
//!
//! # Key points
//!
//! - a container flow simulator turns a candidate allocation into per-port inventory levels
//! - an evaluator scores a candidate by cost and constraint penalties, optionally blended with a
//!   port imbalance measure
//! - a genetic algorithm with elitism and adaptive mutation rate searches for the best candidate
//! - a rebalancing optimizer computes repositioning moves between excess and shortage ports using
//!   an assignment solver
//!
//! # Examples
//!
//! ```
//! use ecr_core::prelude::*;
//! use std::sync::Arc;
//!
//! let mut builder = ParameterSetBuilder::default();
//! builder.add_port(PortRow { id: "A".to_string(), initial_inventory: 1000. });
//! builder.add_port(PortRow { id: "B".to_string(), initial_inventory: 0. });
//! builder.add_vessel(VesselRow { id: "V1".to_string(), capacity: 500. });
//! builder.add_route(RouteRow { id: "R1".to_string(), vessel_id: Some("V1".to_string()), order_weight: Some(3_000_000.) });
//! builder.add_schedule(ScheduleRow {
//!     id: "S1".to_string(),
//!     route_id: "R1".to_string(),
//!     origin_id: "A".to_string(),
//!     destination_id: "B".to_string(),
//!     departure: 0.,
//!     planned_arrival: 10.,
//!     actual_arrival: None,
//! });
//! let parameters = Arc::new(builder.build()?);
//!
//! let config = SolverConfig::from_preset(SolverPreset::Quick);
//! let environment = Arc::new(Environment::new_with_seed(42));
//! let result = Solver::new(parameters.clone(), config, environment)?.solve()?;
//!
//! assert_eq!(result.history.len(), result.generations);
//! let plan = RebalanceOptimizer::new(parameters, PortNetwork::default(), RebalanceConfig::default())
//!     .rebalance(&result.best);
//! assert!(plan.summary.total_paths <= 1);
//! # Ok::<(), GenericError>(())
//! ```

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod evaluation;
pub mod models;
pub mod prelude;
pub mod rebalancing;
pub mod simulation;
pub mod solver;

pub use ecr_heuristics;
