use std::sync::Arc;

use dioxus::prelude::Signal;
use phage_core::AnalysisConfig;
use services::{AnalysisService, ResultsService, SessionStore};

/// Reactive handle to the window's session. Provided once by `App`.
pub type SessionSignal = Signal<SessionStore>;

pub trait UiApp: Send + Sync {
    fn config(&self) -> Arc<AnalysisConfig>;

    fn analysis(&self) -> Arc<AnalysisService>;
    fn results(&self) -> Arc<ResultsService>;
}

#[derive(Clone)]
pub struct AppContext {
    config: Arc<AnalysisConfig>,
    analysis: Arc<AnalysisService>,
    results: Arc<ResultsService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            config: app.config(),
            analysis: app.analysis(),
            results: app.results(),
        }
    }

    #[must_use]
    pub fn config(&self) -> Arc<AnalysisConfig> {
        Arc::clone(&self.config)
    }

    #[must_use]
    pub fn analysis(&self) -> Arc<AnalysisService> {
        Arc::clone(&self.analysis)
    }

    #[must_use]
    pub fn results(&self) -> Arc<ResultsService> {
        Arc::clone(&self.results)
    }

    /// Fresh per-visit state on the home page.
    #[must_use]
    pub fn new_session(&self) -> SessionStore {
        SessionStore::new(&self.config.steps)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
