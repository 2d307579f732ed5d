use services::{ChartBar, ReportRow, ResultsReport};

pub const DOSAGE: &str = "Recommended dosage: 1 vial per day";

pub const GUIDANCE: [&str; 3] = [
    "Phages with effectiveness >75% are considered highly effective",
    "Multiple phages can be used in combination for better results",
    "Consult with a healthcare professional before proceeding with treatment",
];

#[derive(Clone, Debug, PartialEq)]
pub struct ResultRowVm {
    pub rank: usize,
    pub phage: String,
    pub phage_name: String,
    pub probability: String,
    pub recommended: bool,
}

impl ResultRowVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.recommended { "row recommended" } else { "row" }
    }
}

impl From<&ReportRow> for ResultRowVm {
    fn from(row: &ReportRow) -> Self {
        Self {
            rank: row.rank,
            phage: row.phage.to_string(),
            phage_name: row.phage_name.clone(),
            probability: format_pct(row.probability_pct),
            recommended: row.recommended,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarVm {
    pub label: String,
    pub value_text: String,
    pub style: String,
}

impl From<&ChartBar> for BarVm {
    fn from(bar: &ChartBar) -> Self {
        Self {
            label: bar.label.clone(),
            value_text: format_pct(Some(bar.value_pct)),
            style: format!(
                "width: {:.1}%; background-color: {};",
                bar.value_pct.clamp(0.0, 100.0),
                bar.color
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreatmentVm {
    pub title: String,
    pub dosage: &'static str,
    pub target: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultsVm {
    pub identified: String,
    pub threshold_note: String,
    pub rows: Vec<ResultRowVm>,
    pub bars: Vec<BarVm>,
    pub treatment: TreatmentVm,
}

impl ResultsVm {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<&ResultsReport> for ResultsVm {
    fn from(report: &ResultsReport) -> Self {
        let label = report.identified_label();
        Self {
            identified: format!("Identified Bacteria: {label}"),
            threshold_note: format!(
                "Phages with probability >{}% are recommended for treatment",
                format_threshold(report.threshold_pct)
            ),
            rows: report.rows.iter().map(ResultRowVm::from).collect(),
            bars: report.chart().iter().map(BarVm::from).collect(),
            treatment: TreatmentVm {
                title: format!("Phage Cocktail {} - Yellow", report.bacterium),
                dosage: DOSAGE,
                target: format!("Target: {label}"),
            },
        }
    }
}

/// `94.2%`, or an em dash placeholder for a missing score.
#[must_use]
pub fn format_pct(value: Option<f64>) -> String {
    value.map_or_else(|| "\u{2014}".to_owned(), |pct| format!("{pct:.1}%"))
}

fn format_threshold(pct: f64) -> String {
    if pct.fract() == 0.0 {
        format!("{pct:.0}")
    } else {
        pct.to_string()
    }
}
