#![forbid(unsafe_code)]

pub mod analysis;
pub mod app_services;
pub mod error;
pub mod pacing;
pub mod results;
pub mod session_store;

pub use phage_core::{AnalysisConfig, AnalysisDelays};

pub use app_services::AppServices;
pub use error::{AppServicesError, LookupError};
pub use pacing::{Pacer, RecordingPacer, TokioPacer};
pub use session_store::SessionStore;

pub use analysis::{
    AnalysisEvent, AnalysisHost, AnalysisProgress, AnalysisService, Cycle, RecordingHost,
    StepSimulator, Transition,
};
pub use results::{
    ChartBar, IdentifiedBacterium, ReportRow, ResultsReport, ResultsService, filter_by_bacterium,
    is_recommended, rank_descending,
};
