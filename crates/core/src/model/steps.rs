use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::ConfigError;

/// Status labels shown during the simulated analysis, in display order.
pub const DEFAULT_STEP_LABELS: [&str; 5] = [
    "Initializing sequencer...",
    "Processing sample...",
    "Analyzing genetic material...",
    "Identifying bacterial strain...",
    "Calculating phage effectiveness...",
];

/// Fixed, non-empty, ordered list of step labels.
///
/// Cloning is cheap; every session shares the same labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct StepSequence {
    labels: Arc<[String]>,
}

impl StepSequence {
    /// Build a sequence from labels.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptySteps` if no labels are given, or
    /// `ConfigError::BlankStepLabel` if any label is blank.
    pub fn new<I, S>(labels: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels
            .into_iter()
            .map(|label| label.into().trim().to_owned())
            .collect();
        if labels.is_empty() {
            return Err(ConfigError::EmptySteps);
        }
        if let Some(index) = labels.iter().position(String::is_empty) {
            return Err(ConfigError::BlankStepLabel { index });
        }

        Ok(Self {
            labels: labels.into(),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

impl Default for StepSequence {
    fn default() -> Self {
        Self {
            labels: DEFAULT_STEP_LABELS
                .iter()
                .map(|label| (*label).to_owned())
                .collect(),
        }
    }
}

impl TryFrom<Vec<String>> for StepSequence {
    type Error = ConfigError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StepSequence> for Vec<String> {
    fn from(value: StepSequence) -> Self {
        value.labels.to_vec()
    }
}
