//! Contains functionality shared by evolutionary search loops.

mod telemetry;
pub use self::telemetry::*;
