//! Contains fitness and penalty evaluation logic.

mod costs;
pub use self::costs::*;

mod evaluator;
pub use self::evaluator::*;

mod imbalance;
pub use self::imbalance::*;

mod penalties;
pub use self::penalties::*;
