//! Analysis over a cleaned dataset

pub mod correlation;
pub mod interval;

pub use correlation::*;
pub use interval::*;
