use phage_core::model::{Page, Session, SessionAction, SessionId, StepSequence};

/// Per-visit state holder. One store per user session; never shared.
///
/// Construction is the only initialization, so a store that already exists keeps
/// its state across refreshes.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStore {
    id: SessionId,
    session: Session,
    total_steps: usize,
}

impl SessionStore {
    #[must_use]
    pub fn new(steps: &StepSequence) -> Self {
        Self {
            id: SessionId::generate(),
            session: Session::new(),
            total_steps: steps.len(),
        }
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn get(&self) -> Session {
        self.session
    }

    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    /// Clear analysis counters; the current page is untouched.
    pub fn reset(&mut self) {
        self.apply(SessionAction::Reset);
    }

    pub fn navigate(&mut self, page: Page) {
        self.apply(SessionAction::Navigate(page));
    }

    /// The "Process Sample" action: a fresh run on the analysis page.
    pub fn start_analysis(&mut self) {
        self.reset();
        self.navigate(Page::Analysis);
    }

    /// Apply an action. Returns `false` if it did not fit the current state.
    pub fn apply(&mut self, action: SessionAction) -> bool {
        let from = self.session.current_page();
        let applied = self.session.apply(action, self.total_steps);
        match action {
            SessionAction::Navigate(to) if from != to => {
                tracing::info!(session = %self.id, %from, %to, "navigate");
            }
            SessionAction::Reset => {
                tracing::debug!(session = %self.id, "analysis state reset");
            }
            _ if !applied => {
                tracing::debug!(session = %self.id, ?action, "ignored stale session action");
            }
            _ => {}
        }
        applied
    }
}
