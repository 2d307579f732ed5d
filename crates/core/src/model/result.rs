use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{BacteriumId, PhageId};

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum RecordError {
    #[error("bacterium id is blank")]
    BlankBacterium,

    #[error("phage id is blank")]
    BlankPhage,

    #[error("{field} must be a finite value within [0, 1], got {value}")]
    ScoreOutOfRange { field: &'static str, value: f64 },
}

/// Which model output a ranking is based on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreField {
    #[default]
    KeyGeneOutput,
    WgsOutput,
}

impl ScoreField {
    /// Column name in the source dataset.
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            ScoreField::KeyGeneOutput => "key_gene_output",
            ScoreField::WgsOutput => "wgs_output",
        }
    }
}

/// One precomputed bacterium/phage prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    bacterium: BacteriumId,
    bacterium_name: Option<String>,
    phage: PhageId,
    phage_name: Option<String>,
    key_gene_output: f64,
    wgs_output: Option<f64>,
}

impl ResultRecord {
    /// Build a validated record.
    ///
    /// # Errors
    ///
    /// Returns `RecordError` for blank identifiers or scores outside `[0, 1]`.
    pub fn new(
        bacterium: BacteriumId,
        phage: PhageId,
        key_gene_output: f64,
    ) -> Result<Self, RecordError> {
        if bacterium.is_blank() {
            return Err(RecordError::BlankBacterium);
        }
        if phage.is_blank() {
            return Err(RecordError::BlankPhage);
        }
        check_score(ScoreField::KeyGeneOutput, key_gene_output)?;

        Ok(Self {
            bacterium,
            bacterium_name: None,
            phage,
            phage_name: None,
            key_gene_output,
            wgs_output: None,
        })
    }

    /// # Errors
    ///
    /// Returns `RecordError::ScoreOutOfRange` if the score is outside `[0, 1]`.
    pub fn with_wgs_output(mut self, value: Option<f64>) -> Result<Self, RecordError> {
        if let Some(value) = value {
            check_score(ScoreField::WgsOutput, value)?;
        }
        self.wgs_output = value;
        Ok(self)
    }

    #[must_use]
    pub fn with_names(mut self, bacterium_name: Option<String>, phage_name: Option<String>) -> Self {
        self.bacterium_name = non_blank(bacterium_name);
        self.phage_name = non_blank(phage_name);
        self
    }

    #[must_use]
    pub fn bacterium(&self) -> &BacteriumId {
        &self.bacterium
    }

    #[must_use]
    pub fn bacterium_name(&self) -> Option<&str> {
        self.bacterium_name.as_deref()
    }

    #[must_use]
    pub fn phage(&self) -> &PhageId {
        &self.phage
    }

    /// Display name for the phage, falling back to its identifier.
    #[must_use]
    pub fn phage_display_name(&self) -> &str {
        self.phage_name.as_deref().unwrap_or(self.phage.as_str())
    }

    #[must_use]
    pub fn key_gene_output(&self) -> f64 {
        self.key_gene_output
    }

    #[must_use]
    pub fn wgs_output(&self) -> Option<f64> {
        self.wgs_output
    }

    #[must_use]
    pub fn score(&self, field: ScoreField) -> Option<f64> {
        match field {
            ScoreField::KeyGeneOutput => Some(self.key_gene_output),
            ScoreField::WgsOutput => self.wgs_output,
        }
    }
}

fn check_score(field: ScoreField, value: f64) -> Result<(), RecordError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(RecordError::ScoreOutOfRange {
            field: field.column(),
            value,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}
