//! A collection of models to represent the container allocation problem and its candidate solutions.

mod builder;
pub use self::builder::*;

mod candidate;
pub use self::candidate::*;

mod problem;
pub use self::problem::*;
