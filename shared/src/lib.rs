pub mod charts;
pub mod config;
pub mod models;
pub mod templates;

pub use charts::Figure;
pub use config::Config;
pub use models::*;
pub use templates::{AboutPage, DataPage, ModelPage};
