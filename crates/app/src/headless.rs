use std::fmt::Write as _;

use phage_core::model::{Page, Session, SessionAction};
use services::{AnalysisEvent, AnalysisHost, AppServices, Cycle, ResultsReport, SessionStore};
use ui::vm::format_pct;

/// Prints analysis progress to stderr so stdout stays reserved for the report.
struct TerminalHost {
    store: SessionStore,
}

impl AnalysisHost for TerminalHost {
    fn snapshot(&self) -> Session {
        self.store.get()
    }

    fn apply(&mut self, action: SessionAction) -> bool {
        self.store.apply(action)
    }

    fn emit(&mut self, event: AnalysisEvent) {
        match &event {
            AnalysisEvent::Step { index, total, .. } => {
                eprintln!("[{}/{total}] {event}", index + 1);
            }
            _ => eprintln!("{event}"),
        }
    }
}

/// Run one analysis in the terminal, then print the ranked report.
pub async fn run(services: &AppServices, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut host = TerminalHost {
        store: services.new_session(),
    };
    host.store.start_analysis();

    let analysis = services.analysis();
    let cycle = analysis.run_until_settled(&mut host).await;
    if cycle == Cycle::AwaitingResults {
        // No button to press here.
        host.store.navigate(Page::Results);
    }
    tracing::debug!(?cycle, page = %host.store.get().current_page(), "headless run settled");

    let report = services.results().report(analysis.bacterium());
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report));
    }
    Ok(())
}

fn render_report(report: &ResultsReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Identified Bacteria: {}", report.identified_label());
    let _ = writeln!(
        out,
        "Ranked by {}; recommended above {}%",
        report.score_field.column(),
        report.threshold_pct
    );

    if report.is_empty() {
        let _ = writeln!(out, "No phage results are available for this sample.");
        return out;
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{:>4}  {:<12} {:<24} {:>11}", "#", "Phage", "Name", "Probability");
    for row in &report.rows {
        let _ = writeln!(
            out,
            "{:>4}  {:<12} {:<24} {:>11}{}",
            row.rank,
            row.phage.as_str(),
            row.phage_name,
            format_pct(row.probability_pct),
            if row.recommended { "  *" } else { "" }
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Phage Cocktail {} - Yellow", report.bacterium);
    let _ = writeln!(out, "Recommended dosage: 1 vial per day");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use phage_core::AnalysisConfig;
    use phage_core::model::{BacteriumId, ResultRecord};
    use services::{RecordingPacer, ResultsService};
    use storage::repository::Storage;

    fn records() -> Vec<ResultRecord> {
        [("P1", 0.8), ("P2", 0.6)]
            .into_iter()
            .map(|(phage, score)| {
                ResultRecord::new("GL538315".into(), phage.into(), score)
                    .unwrap()
                    .with_names(Some("Escherichia coli".into()), None)
            })
            .collect()
    }

    async fn build_services(config: AnalysisConfig) -> AppServices {
        let config = config
            .with_selected_bacterium(BacteriumId::new("GL538315"))
            .with_delays(phage_core::AnalysisDelays::instant());
        AppServices::new(config, &Storage::in_memory(records()), Arc::new(RecordingPacer::new()))
            .await
            .unwrap()
    }

    #[test]
    fn text_report_marks_recommended_rows() {
        let records = records();
        let results = ResultsService::new(records.into(), 75.0, Default::default());
        let text = render_report(&results.report(&BacteriumId::new("GL538315")));

        assert!(text.starts_with("Identified Bacteria: Escherichia coli (GL538315)\n"));
        let p1 = text.lines().find(|line| line.contains("P1")).unwrap();
        let p2 = text.lines().find(|line| line.contains("P2")).unwrap();
        assert!(p1.contains("80.0%") && p1.ends_with('*'));
        assert!(p2.contains("60.0%") && !p2.ends_with('*'));
        assert!(text.find("P1").unwrap() < text.find("P2").unwrap());
    }

    #[test]
    fn empty_report_says_so() {
        let results = ResultsService::new(records().into(), 75.0, Default::default());
        let text = render_report(&results.report(&BacteriumId::new("NC_000000")));
        assert!(text.contains("No phage results are available"));
    }

    #[tokio::test]
    async fn headless_run_completes_in_manual_mode() {
        let services = build_services(AnalysisConfig::default().with_auto_advance(false)).await;
        assert!(run(&services, true).await.is_ok());
    }
}
