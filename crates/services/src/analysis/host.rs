use std::fmt;

use phage_core::model::{BacteriumId, Session, SessionAction};

use crate::session_store::SessionStore;

/// What the analysis shows the user while it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisEvent {
    Preparing,
    Step {
        index: usize,
        total: usize,
        label: String,
    },
    Completed,
    Identified {
        bacterium: BacteriumId,
        name: Option<String>,
    },
}

impl fmt::Display for AnalysisEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisEvent::Preparing => f.write_str("Preparing analysis..."),
            AnalysisEvent::Step { label, .. } => f.write_str(label),
            AnalysisEvent::Completed => f.write_str("Analysis complete!"),
            AnalysisEvent::Identified {
                bacterium,
                name: Some(name),
            } => write!(f, "Identified bacteria: {name} ({bacterium})"),
            AnalysisEvent::Identified {
                bacterium,
                name: None,
            } => write!(f, "Identified bacteria: {bacterium}"),
        }
    }
}

/// Where a refresh cycle reads session state, writes actions, and shows events.
///
/// The UI implements this over its reactive state; tests and the headless runner
/// use `RecordingHost`.
pub trait AnalysisHost {
    fn snapshot(&self) -> Session;

    /// Returns `false` if the action was stale and ignored.
    fn apply(&mut self, action: SessionAction) -> bool;

    fn emit(&mut self, event: AnalysisEvent);
}

/// A `SessionStore` plus the list of events emitted against it.
#[derive(Debug, Clone)]
pub struct RecordingHost {
    pub store: SessionStore,
    pub events: Vec<AnalysisEvent>,
}

impl RecordingHost {
    #[must_use]
    pub fn new(store: SessionStore) -> Self {
        Self {
            store,
            events: Vec::new(),
        }
    }

    /// Number of times `event` was emitted.
    #[must_use]
    pub fn count(&self, event: &AnalysisEvent) -> usize {
        self.events.iter().filter(|e| *e == event).count()
    }
}

impl AnalysisHost for RecordingHost {
    fn snapshot(&self) -> Session {
        self.store.get()
    }

    fn apply(&mut self, action: SessionAction) -> bool {
        self.store.apply(action)
    }

    fn emit(&mut self, event: AnalysisEvent) {
        self.events.push(event);
    }
}
