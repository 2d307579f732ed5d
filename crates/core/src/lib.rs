#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod model;
pub mod palette;
pub mod time;

pub use config::AnalysisConfig;
pub use error::Error;
pub use time::AnalysisDelays;
