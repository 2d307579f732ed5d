use phage_core::model::{BacteriumId, PhageId, ScoreField};
use phage_core::palette;
use serde::Serialize;

/// One ranked phage, ready for a table row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub rank: usize,
    pub phage: PhageId,
    pub phage_name: String,
    /// `None` when the row lacks the ranking score.
    pub probability_pct: Option<f64>,
    pub recommended: bool,
}

/// One bar of the effectiveness chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBar {
    pub label: String,
    pub value_pct: f64,
    pub recommended: bool,
    pub color: &'static str,
}

/// Everything the results page shows for one bacterium.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsReport {
    pub bacterium: BacteriumId,
    pub bacterium_name: Option<String>,
    pub score_field: ScoreField,
    pub threshold_pct: f64,
    pub rows: Vec<ReportRow>,
}

impl ResultsReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn recommended(&self) -> impl Iterator<Item = &ReportRow> {
        self.rows.iter().filter(|row| row.recommended)
    }

    /// `"Name (ID)"`, or just the id when the dataset has no display name.
    #[must_use]
    pub fn identified_label(&self) -> String {
        match &self.bacterium_name {
            Some(name) => format!("{name} ({})", self.bacterium),
            None => self.bacterium.to_string(),
        }
    }

    /// Bars in rank order. Rows without a score are left off the chart.
    #[must_use]
    pub fn chart(&self) -> Vec<ChartBar> {
        self.rows
            .iter()
            .filter_map(|row| {
                row.probability_pct.map(|value_pct| ChartBar {
                    label: row.phage_name.clone(),
                    value_pct,
                    recommended: row.recommended,
                    color: if row.recommended {
                        palette::RECOMMENDED
                    } else {
                        palette::NOT_RECOMMENDED
                    },
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> ResultsReport {
        ResultsReport {
            bacterium: BacteriumId::new("GL538315"),
            bacterium_name: None,
            score_field: ScoreField::KeyGeneOutput,
            threshold_pct: 75.0,
            rows: vec![
                ReportRow {
                    rank: 1,
                    phage: PhageId::new("P1"),
                    phage_name: "P1".into(),
                    probability_pct: Some(80.0),
                    recommended: true,
                },
                ReportRow {
                    rank: 2,
                    phage: PhageId::new("P9"),
                    phage_name: "P9".into(),
                    probability_pct: None,
                    recommended: false,
                },
            ],
        }
    }

    #[test]
    fn chart_omits_rows_without_scores() {
        let bars = report().chart();
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].color, palette::RECOMMENDED);
        assert_eq!(report().identified_label(), "GL538315");
        assert_eq!(report().recommended().count(), 1);
    }

    #[test]
    fn report_serializes_for_headless_output() {
        let json = serde_json::to_value(report()).unwrap();
        assert_eq!(json["bacterium"], "GL538315");
        assert_eq!(json["score_field"], "key_gene_output");
        assert_eq!(json["rows"][0]["probability_pct"], 80.0);
        assert!(json["rows"][1]["probability_pct"].is_null());
    }
}
