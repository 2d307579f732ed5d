use std::fmt;

//
// ─── PAGE ──────────────────────────────────────────────────────────────────────
//

/// The three screens of the guided demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    Analysis,
    Results,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Analysis, Page::Results];

    /// User-facing page title.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Analysis => "Sample Analysis",
            Page::Results => "Results",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── ACTIONS ───────────────────────────────────────────────────────────────────
//

/// Every way a session may change. `Session::apply` is the only mutation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// Clear analysis counters; the current page is left alone.
    Reset,
    Navigate(Page),
    /// Publish progress for the step about to run.
    BeginStep { index: usize },
    /// Move past the step that was just shown.
    AdvanceStep { index: usize },
    MarkComplete,
}

/// Analysis state derived from the session counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisPhase {
    /// Nothing has run yet.
    Idle,
    /// Step `i` is next or in progress.
    Stepping(usize),
    /// Every step ran; the completion flag is not yet set.
    Finishing,
    Complete,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Per-visit page and analysis state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    current_page: Page,
    analysis_complete: bool,
    current_step: usize,
    progress: f64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_page: Page::Home,
            analysis_complete: false,
            current_step: 0,
            progress: 0.0,
        }
    }

    #[must_use]
    pub fn current_page(&self) -> Page {
        self.current_page
    }

    #[must_use]
    pub fn analysis_complete(&self) -> bool {
        self.analysis_complete
    }

    #[must_use]
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// The single source for where a run stands. Step 0 counts as started once
    /// it has published progress.
    #[must_use]
    pub fn phase(&self, total_steps: usize) -> AnalysisPhase {
        if self.analysis_complete {
            AnalysisPhase::Complete
        } else if self.current_step >= total_steps {
            AnalysisPhase::Finishing
        } else if self.current_step == 0 && self.progress == 0.0 {
            AnalysisPhase::Idle
        } else {
            AnalysisPhase::Stepping(self.current_step)
        }
    }

    /// Apply an action against a step sequence of `total_steps` entries.
    ///
    /// Returns `false` when the action does not fit the current state and was ignored.
    /// Step actions carry the index they were planned for, so replaying one never
    /// advances twice.
    pub fn apply(&mut self, action: SessionAction, total_steps: usize) -> bool {
        match action {
            SessionAction::Reset => {
                self.analysis_complete = false;
                self.current_step = 0;
                self.progress = 0.0;
                true
            }
            SessionAction::Navigate(page) => {
                self.current_page = page;
                true
            }
            SessionAction::BeginStep { index } => {
                if !self.accepts_step(index, total_steps) {
                    return false;
                }
                self.progress = step_fraction(index + 1, total_steps);
                true
            }
            SessionAction::AdvanceStep { index } => {
                if !self.accepts_step(index, total_steps) {
                    return false;
                }
                self.current_step += 1;
                self.progress = step_fraction(self.current_step, total_steps);
                true
            }
            SessionAction::MarkComplete => {
                if self.analysis_complete || self.current_step < total_steps {
                    return false;
                }
                self.analysis_complete = true;
                true
            }
        }
    }

    fn accepts_step(&self, index: usize, total_steps: usize) -> bool {
        !self.analysis_complete && index == self.current_step && index < total_steps
    }
}

fn step_fraction(done: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let fraction = done as f64 / total as f64;
    fraction.clamp(0.0, 1.0)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
