mod host;
mod progress;
mod simulator;
mod workflow;

// Public API of the analysis subsystem.
pub use host::{AnalysisEvent, AnalysisHost, RecordingHost};
pub use progress::AnalysisProgress;
pub use simulator::{StepSimulator, Transition};
pub use workflow::{AnalysisService, Cycle};
