//! Data management module
//!
//! Handles loading the research CSV, deriving the moving averages and
//! cleaning the result into an immutable [`Dataset`].

pub mod dataset;
pub mod observation;

pub use dataset::*;
pub use observation::*;
