//! This module contains some statistic related functionality.

mod distance;
pub use self::distance::*;

mod statistics;
pub use self::statistics::*;
