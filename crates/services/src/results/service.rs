use std::sync::Arc;

use phage_core::model::{BacteriumId, ResultRecord, ScoreField};
use storage::repository::{ResultRepository, StorageError};

use super::ranking::{filter_by_bacterium, is_recommended, probability_pct, rank_descending};
use super::view::{ReportRow, ResultsReport};
use crate::error::LookupError;

/// Display identity of a bacterium found in the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifiedBacterium {
    pub id: BacteriumId,
    pub name: Option<String>,
}

/// Read-only queries over the loaded dataset.
#[derive(Debug, Clone)]
pub struct ResultsService {
    records: Arc<[ResultRecord]>,
    threshold_pct: f64,
    score_field: ScoreField,
}

impl ResultsService {
    #[must_use]
    pub fn new(records: Arc<[ResultRecord]>, threshold_pct: f64, score_field: ScoreField) -> Self {
        Self {
            records,
            threshold_pct,
            score_field,
        }
    }

    /// Load the dataset once through `repo`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the dataset cannot be loaded.
    pub async fn load(
        repo: &dyn ResultRepository,
        threshold_pct: f64,
        score_field: ScoreField,
    ) -> Result<Self, StorageError> {
        let records = repo.load_results().await?;
        Ok(Self::new(records, threshold_pct, score_field))
    }

    #[must_use]
    pub fn records(&self) -> &[ResultRecord] {
        &self.records
    }

    #[must_use]
    pub fn threshold_pct(&self) -> f64 {
        self.threshold_pct
    }

    #[must_use]
    pub fn score_field(&self) -> ScoreField {
        self.score_field
    }

    /// Resolve the display identity of `bacterium`.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::NotFound` if the dataset has no rows for it.
    pub fn identify(&self, bacterium: &BacteriumId) -> Result<IdentifiedBacterium, LookupError> {
        let mut rows = self
            .records
            .iter()
            .filter(|record| record.bacterium() == bacterium)
            .peekable();
        if rows.peek().is_none() {
            return Err(LookupError::NotFound {
                bacterium: bacterium.clone(),
            });
        }
        let name = rows.find_map(|record| record.bacterium_name().map(str::to_owned));

        Ok(IdentifiedBacterium {
            id: bacterium.clone(),
            name,
        })
    }

    /// Ranked report for `bacterium`. An unknown id yields a report with no rows.
    #[must_use]
    pub fn report(&self, bacterium: &BacteriumId) -> ResultsReport {
        let bacterium_name = match self.identify(bacterium) {
            Ok(found) => found.name,
            Err(err) => {
                tracing::warn!(%err, "showing empty results");
                None
            }
        };

        let ranked = rank_descending(
            filter_by_bacterium(&self.records, bacterium),
            self.score_field,
        );
        let rows = ranked
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let probability = record.score(self.score_field).map(probability_pct);
                ReportRow {
                    rank: index + 1,
                    phage: record.phage().clone(),
                    phage_name: record.phage_display_name().to_owned(),
                    probability_pct: probability,
                    recommended: probability
                        .is_some_and(|value| is_recommended(value, self.threshold_pct)),
                }
            })
            .collect();

        ResultsReport {
            bacterium: bacterium.clone(),
            bacterium_name,
            score_field: self.score_field,
            threshold_pct: self.threshold_pct,
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phage_core::palette;
    use storage::repository::InMemoryRepository;

    fn record(bacterium: &str, phage: &str, score: f64) -> ResultRecord {
        ResultRecord::new(bacterium.into(), phage.into(), score)
            .unwrap()
            .with_names(Some("Escherichia coli".into()), Some(format!("Phage {phage}")))
    }

    fn service() -> ResultsService {
        let records = vec![
            record("GL538315", "P2", 0.60),
            record("GL538315", "P1", 0.80),
            record("NZ_CP029736", "P3", 0.95),
        ];
        ResultsService::new(records.into(), 75.0, ScoreField::KeyGeneOutput)
    }

    #[test]
    fn report_ranks_and_highlights() {
        let report = service().report(&BacteriumId::new("GL538315"));

        let phages: Vec<_> = report.rows.iter().map(|row| row.phage.as_str()).collect();
        assert_eq!(phages, ["P1", "P2"]);
        assert_eq!(report.rows[0].rank, 1);
        assert_eq!(report.rows[0].probability_pct, Some(80.0));
        assert!(report.rows[0].recommended);
        assert!(!report.rows[1].recommended);
        assert_eq!(report.recommended().count(), 1);
        assert_eq!(report.identified_label(), "Escherichia coli (GL538315)");
    }

    #[test]
    fn chart_colours_follow_recommendation() {
        let chart = service().report(&BacteriumId::new("GL538315")).chart();
        assert_eq!(chart.len(), 2);
        assert_eq!(chart[0].label, "Phage P1");
        assert_eq!(chart[0].color, palette::RECOMMENDED);
        assert_eq!(chart[1].color, palette::NOT_RECOMMENDED);
    }

    #[test]
    fn unknown_bacterium_degrades_to_empty_report() {
        let service = service();
        let missing = BacteriumId::new("MISSING");

        assert_eq!(
            service.identify(&missing),
            Err(LookupError::NotFound {
                bacterium: missing.clone()
            })
        );
        let report = service.report(&missing);
        assert!(report.is_empty());
        assert_eq!(report.identified_label(), "MISSING");
        assert!(report.chart().is_empty());
    }

    #[tokio::test]
    async fn load_reads_through_repository() {
        let repo = InMemoryRepository::with_records(vec![record("B", "P", 0.5)]);
        let service = ResultsService::load(&repo, 75.0, ScoreField::KeyGeneOutput)
            .await
            .unwrap();
        assert_eq!(service.records().len(), 1);
    }
}
