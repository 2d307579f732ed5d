use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Artificial pauses used to pace the simulated analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisDelays {
    /// Pause before the first step of a run.
    pub initial: Duration,
    /// Pause after each step label is shown.
    pub step: Duration,
    /// How long completion messages stay up before moving to results.
    pub completion: Duration,
}

impl Default for AnalysisDelays {
    fn default() -> Self {
        Self {
            initial: Duration::from_millis(1_500),
            step: Duration::from_millis(1_500),
            completion: Duration::from_secs(2),
        }
    }
}

impl AnalysisDelays {
    /// No pauses at all. Useful for tests and headless runs.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            initial: Duration::ZERO,
            step: Duration::ZERO,
            completion: Duration::ZERO,
        }
    }
}
