mod ids;
mod result;
mod session;
mod steps;

pub use ids::{BacteriumId, PhageId, SessionId};

pub use result::{RecordError, ResultRecord, ScoreField};
pub use session::{AnalysisPhase, Page, Session, SessionAction};
pub use steps::{DEFAULT_STEP_LABELS, StepSequence};
