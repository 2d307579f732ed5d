use phage_core::AnalysisDelays;
use phage_core::model::{AnalysisPhase, Page, Session, StepSequence};

use super::progress::AnalysisProgress;

/// The next thing a refresh cycle must do for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The session is not on the analysis page.
    Inactive,
    /// Show step `index`; `prepare` is set only before the first step of a run.
    Step { index: usize, prepare: bool },
    /// Every step ran; flip the completion flag.
    Finish,
    /// Terminal: announce the result and hand over to the results page.
    Complete,
}

/// Pure transition table for the simulated analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct StepSimulator {
    steps: StepSequence,
    delays: AnalysisDelays,
    auto_advance: bool,
}

impl StepSimulator {
    #[must_use]
    pub fn new(steps: StepSequence, delays: AnalysisDelays, auto_advance: bool) -> Self {
        Self {
            steps,
            delays,
            auto_advance,
        }
    }

    #[must_use]
    pub fn steps(&self) -> &StepSequence {
        &self.steps
    }

    #[must_use]
    pub fn delays(&self) -> AnalysisDelays {
        self.delays
    }

    #[must_use]
    pub fn auto_advance(&self) -> bool {
        self.auto_advance
    }

    /// Decide the transition for `session` from persisted state alone.
    #[must_use]
    pub fn plan(&self, session: &Session) -> Transition {
        if session.current_page() != Page::Analysis {
            return Transition::Inactive;
        }
        match session.phase(self.steps.len()) {
            AnalysisPhase::Idle => Transition::Step {
                index: 0,
                prepare: true,
            },
            AnalysisPhase::Stepping(index) => Transition::Step {
                index,
                prepare: false,
            },
            AnalysisPhase::Finishing => Transition::Finish,
            AnalysisPhase::Complete => Transition::Complete,
        }
    }

    #[must_use]
    pub fn progress(&self, session: &Session) -> AnalysisProgress {
        AnalysisProgress {
            step: session.current_step(),
            total: self.steps.len(),
            fraction: session.progress(),
            is_complete: session.analysis_complete(),
        }
    }
}
