use std::sync::Arc;

use phage_core::AnalysisConfig;
use storage::repository::Storage;

use crate::analysis::{AnalysisService, StepSimulator};
use crate::error::AppServicesError;
use crate::pacing::Pacer;
use crate::results::ResultsService;
use crate::session_store::SessionStore;

/// Assembles app-facing services from static configuration and the dataset.
#[derive(Clone)]
pub struct AppServices {
    config: Arc<AnalysisConfig>,
    results: Arc<ResultsService>,
    analysis: Arc<AnalysisService>,
}

impl AppServices {
    /// Validate configuration and load the dataset once.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the configuration is invalid or the dataset
    /// cannot be loaded. Both are fatal at startup.
    pub async fn new(
        config: AnalysisConfig,
        storage: &Storage,
        pacer: Arc<dyn Pacer>,
    ) -> Result<Self, AppServicesError> {
        config.validate()?;

        let results = Arc::new(
            ResultsService::load(
                storage.results.as_ref(),
                config.recommended_threshold,
                config.score_field,
            )
            .await?,
        );
        if let Err(err) = results.identify(&config.selected_bacterium) {
            tracing::warn!(%err, "results page will be empty");
        }

        let simulator = StepSimulator::new(config.steps.clone(), config.delays, config.auto_advance);
        let analysis = Arc::new(AnalysisService::new(
            simulator,
            Arc::clone(&results),
            pacer,
            config.selected_bacterium.clone(),
        ));

        Ok(Self {
            config: Arc::new(config),
            results,
            analysis,
        })
    }

    #[must_use]
    pub fn config(&self) -> Arc<AnalysisConfig> {
        Arc::clone(&self.config)
    }

    #[must_use]
    pub fn results(&self) -> Arc<ResultsService> {
        Arc::clone(&self.results)
    }

    #[must_use]
    pub fn analysis(&self) -> Arc<AnalysisService> {
        Arc::clone(&self.analysis)
    }

    /// A fresh per-visit store on the home page.
    #[must_use]
    pub fn new_session(&self) -> SessionStore {
        SessionStore::new(&self.config.steps)
    }
}
