//! This module contains a solver for the linear assignment problem: given a cost matrix, find
//! a matching of rows to columns with minimum total cost.

mod hungarian;
pub use self::hungarian::solve_assignment;

use crate::utils::Float;

/// A result of assignment problem.
#[derive(Clone, Debug, PartialEq)]
pub struct Assignment {
    /// Matched pairs as `(row, column)` indices, sorted by row index.
    pub pairs: Vec<(usize, usize)>,
    /// A total cost of matched pairs.
    pub cost: Float,
}
