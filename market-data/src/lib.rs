//! Market-Data: the research dataset behind the Nasdaq 100 dashboard
//!
//! This crate owns everything the dashboard computes:
//!
//! - **Data Management**: CSV loading, positional column naming, cleaning
//! - **Technical Indicators**: SMA 50 / SMA 100 over the index price
//! - **Analysis**: correlation matrix and trailing interval filter
//!
//! # Example
//!
//! ```no_run
//! use market_data::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let dataset = Dataset::load("Nasdaq100_interpolate.csv")?;
//!     let last_week = Interval::OneWeek.filter(&dataset);
//!     println!("{} rows in the last week", last_week.len());
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod data;
pub mod error;
pub mod indicators;

pub use error::DataError;

// Re-export commonly used types
pub mod prelude {
    pub use crate::analysis::*;
    pub use crate::data::*;
    pub use crate::error::DataError;
    pub use crate::indicators::*;
    pub use crate::Result;
}

/// Result type alias
pub type Result<T> = std::result::Result<T, DataError>;
