//! Contains functionality to configure and run the solver.

pub mod config;
pub mod formats;
pub mod interruption;
