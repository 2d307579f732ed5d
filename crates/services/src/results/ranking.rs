use std::cmp::Ordering;

use phage_core::model::{BacteriumId, ResultRecord, ScoreField};

/// Rows for `bacterium`, in source order. An unknown id yields an empty vector.
#[must_use]
pub fn filter_by_bacterium(records: &[ResultRecord], bacterium: &BacteriumId) -> Vec<ResultRecord> {
    records
        .iter()
        .filter(|record| record.bacterium() == bacterium)
        .cloned()
        .collect()
}

/// Sort by `field`, highest first. Rows without that score go last; ties keep source order.
#[must_use]
pub fn rank_descending(mut records: Vec<ResultRecord>, field: ScoreField) -> Vec<ResultRecord> {
    records.sort_by(|a, b| match (a.score(field), b.score(field)) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    records
}

/// Score in `[0, 1]` as a percentage rounded to three decimals.
#[must_use]
pub fn probability_pct(score: f64) -> f64 {
    (score * 100_000.0).round() / 1_000.0
}

/// Strictly above the threshold; a score equal to it is not recommended.
#[must_use]
pub fn is_recommended(probability_pct: f64, threshold_pct: f64) -> bool {
    probability_pct > threshold_pct
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(bacterium: &str, phage: &str, key: f64, wgs: Option<f64>) -> ResultRecord {
        ResultRecord::new(bacterium.into(), phage.into(), key)
            .unwrap()
            .with_wgs_output(wgs)
            .unwrap()
    }

    fn phages(records: &[ResultRecord]) -> Vec<&str> {
        records.iter().map(|r| r.phage().as_str()).collect()
    }

    #[test]
    fn filter_and_rank_orders_by_score() {
        let records = vec![
            record("GL538315", "P2", 0.60, None),
            record("OTHER", "P9", 0.99, None),
            record("GL538315", "P1", 0.80, None),
        ];

        let filtered = filter_by_bacterium(&records, &BacteriumId::new("GL538315"));
        let ranked = rank_descending(filtered, ScoreField::KeyGeneOutput);

        assert_eq!(phages(&ranked), ["P1", "P2"]);
        assert!(is_recommended(probability_pct(ranked[0].key_gene_output()), 75.0));
        assert!(!is_recommended(probability_pct(ranked[1].key_gene_output()), 75.0));
    }

    #[test]
    fn unknown_bacterium_filters_to_empty() {
        let records = vec![record("GL538315", "P1", 0.8, None)];
        assert!(filter_by_bacterium(&records, &BacteriumId::new("NOPE")).is_empty());
    }

    #[test]
    fn missing_scores_rank_last_and_ties_are_stable() {
        let records = vec![
            record("B", "P1", 0.1, None),
            record("B", "P2", 0.2, Some(0.5)),
            record("B", "P3", 0.3, Some(0.5)),
            record("B", "P4", 0.4, Some(0.9)),
        ];
        let ranked = rank_descending(records, ScoreField::WgsOutput);
        assert_eq!(phages(&ranked), ["P4", "P2", "P3", "P1"]);
    }

    #[test]
    fn threshold_is_exclusive() {
        assert!(!is_recommended(75.0, 75.0));
        assert!(is_recommended(75.001, 75.0));
    }

    #[test]
    fn probability_rounds_to_three_decimals() {
        assert_eq!(probability_pct(0.123_456_7), 12.346);
        assert_eq!(probability_pct(0.8), 80.0);
    }
}
