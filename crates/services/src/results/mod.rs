mod ranking;
mod service;
mod view;

// Public API of the results subsystem.
pub use crate::error::LookupError;
pub use ranking::{filter_by_bacterium, is_recommended, probability_pct, rank_descending};
pub use service::{IdentifiedBacterium, ResultsService};
pub use view::{ChartBar, ReportRow, ResultsReport};
