use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{BacteriumId, ScoreField, StepSequence};
use crate::time::AnalysisDelays;

/// The bacterium this deployment always "identifies".
pub const DEFAULT_BACTERIUM: &str = "NZ_CP029736";

/// Phages scoring strictly above this percentage are highlighted as recommended.
pub const DEFAULT_RECOMMENDED_THRESHOLD: f64 = 75.0;

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("step sequence must contain at least one label")]
    EmptySteps,

    #[error("step label at index {index} is blank")]
    BlankStepLabel { index: usize },

    #[error("selected bacterium id is blank")]
    BlankBacterium,

    #[error("recommended threshold must be within [0, 100], got {provided}")]
    InvalidThreshold { provided: f64 },
}

/// Static configuration for the demo. Nothing here changes at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub delays: AnalysisDelays,
    pub selected_bacterium: BacteriumId,
    pub steps: StepSequence,
    /// Percentage in `[0, 100]`.
    pub recommended_threshold: f64,
    pub score_field: ScoreField,
    /// Move to results on completion instead of waiting for "View Results".
    pub auto_advance: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            delays: AnalysisDelays::default(),
            selected_bacterium: BacteriumId::new(DEFAULT_BACTERIUM),
            steps: StepSequence::default(),
            recommended_threshold: DEFAULT_RECOMMENDED_THRESHOLD,
            score_field: ScoreField::default(),
            auto_advance: true,
        }
    }
}

impl AnalysisConfig {
    /// # Errors
    ///
    /// Returns `ConfigError` if the selected bacterium is blank or the threshold
    /// is outside `[0, 100]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.steps.is_empty() {
            return Err(ConfigError::EmptySteps);
        }
        if self.selected_bacterium.is_blank() {
            return Err(ConfigError::BlankBacterium);
        }
        if !self.recommended_threshold.is_finite()
            || !(0.0..=100.0).contains(&self.recommended_threshold)
        {
            return Err(ConfigError::InvalidThreshold {
                provided: self.recommended_threshold,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn with_selected_bacterium(mut self, id: BacteriumId) -> Self {
        self.selected_bacterium = id;
        self
    }

    #[must_use]
    pub fn with_delays(mut self, delays: AnalysisDelays) -> Self {
        self.delays = delays;
        self
    }

    #[must_use]
    pub fn with_auto_advance(mut self, auto_advance: bool) -> Self {
        self.auto_advance = auto_advance;
        self
    }

    #[must_use]
    pub fn with_score_field(mut self, score_field: ScoreField) -> Self {
        self.score_field = score_field;
        self
    }

    #[must_use]
    pub fn with_steps(mut self, steps: StepSequence) -> Self {
        self.steps = steps;
        self
    }
}
