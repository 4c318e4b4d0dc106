//! A command line interface library which exposes functionality to read problem and configuration,
//! and write results in json format.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
mod helpers;

pub use ecr_core as core;

pub mod extensions;
