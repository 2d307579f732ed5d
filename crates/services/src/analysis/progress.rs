use serde::Serialize;

/// Aggregated view of analysis progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisProgress {
    pub step: usize,
    pub total: usize,
    pub fraction: f64,
    pub is_complete: bool,
}

impl AnalysisProgress {
    /// Whole percent for progress bars.
    #[must_use]
    pub fn percent(&self) -> u8 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let pct = (self.fraction.clamp(0.0, 1.0) * 100.0).round() as u8;
        pct
    }
}
