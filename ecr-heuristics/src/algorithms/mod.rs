//! This module contains generic algorithms used by the solver.

pub mod assignment;
pub mod math;
