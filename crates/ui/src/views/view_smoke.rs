use phage_core::AnalysisConfig;
use phage_core::model::{BacteriumId, Page};

use super::test_harness::{
    klebsiella_records, setup_router_harness, setup_view_harness, setup_view_harness_with_records,
};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_instructions() {
    let mut harness = setup_view_harness(Page::Home, AnalysisConfig::default()).await;
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Sample Collection Instructions"));
    assert!(html.contains("Place the swab in the analyzer port"));
    assert!(html.contains("Process Sample"));
    assert!(html.contains("✓ Device Ready"));
    assert_eq!(harness.session().current_page(), Page::Home);
}

#[tokio::test(flavor = "current_thread")]
async fn analysis_view_runs_to_results() {
    let mut harness = setup_view_harness(Page::Analysis, AnalysisConfig::default()).await;
    harness.rebuild();
    for _ in 0..4 {
        harness.drive_async().await;
    }

    let session = harness.session();
    assert_eq!(session.current_page(), Page::Results);
    assert!(session.analysis_complete());
    assert_eq!(session.current_step(), 5);
    assert_eq!(harness.pacer.waits().len(), 7);

    let html = harness.render();
    assert!(html.contains("Please do not remove the sample during analysis."));
    assert!(html.contains("Analysis complete!"));
    assert!(html.contains("Identified bacteria: Klebsiella pneumoniae (NZ_CP029736)"));
    assert!(html.contains("width: 100%;"));
}

#[tokio::test(flavor = "current_thread")]
async fn analysis_view_waits_for_view_results_without_auto_advance() {
    let config = AnalysisConfig::default().with_auto_advance(false);
    let mut harness = setup_view_harness(Page::Analysis, config).await;
    harness.rebuild();
    for _ in 0..4 {
        harness.drive_async().await;
    }

    let session = harness.session();
    assert_eq!(session.current_page(), Page::Analysis);
    assert!(session.analysis_complete());

    let html = harness.render();
    assert!(html.contains("View Results"));
    assert!(html.contains("Step 5 of 5"));
    assert!(html.contains("Analysis completed!"));
    assert!(!html.contains("Calculating phage effectiveness..."));
}

#[tokio::test(flavor = "current_thread")]
async fn analysis_view_is_idle_off_page() {
    let mut harness = setup_view_harness(Page::Home, AnalysisConfig::default()).await;
    harness.rebuild();
    harness.drive_async().await;

    assert_eq!(harness.session().current_step(), 0);
    assert!(harness.pacer.waits().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_ranks_and_highlights() {
    let mut harness = setup_view_harness(Page::Results, AnalysisConfig::default()).await;
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Identified Bacteria: Klebsiella pneumoniae (NZ_CP029736)"));
    assert!(html.contains("75% are recommended for treatment"));
    assert!(html.contains("Phage Cocktail NZ_CP029736 - Yellow"));
    assert!(html.contains("Recommended dosage: 1 vial per day"));

    let first = html.find("PH001").expect("PH001 row");
    let third = html.find("PH003").expect("PH003 row");
    let second = html.find("PH004").expect("PH004 row");
    assert!(first < third && third < second);
    assert!(html.contains("94.2%"));
    assert_eq!(html.matches("row recommended").count(), 2);
    assert!(html.contains("background-color: #00cc00;"));
    assert!(html.contains("background-color: #2196F3;"));
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_handles_unknown_bacterium() {
    let config =
        AnalysisConfig::default().with_selected_bacterium(BacteriumId::new("NC_000000"));
    let mut harness =
        setup_view_harness_with_records(Page::Results, config, klebsiella_records()).await;
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Identified Bacteria: NC_000000"));
    assert!(html.contains("No phage results are available for this sample."));
    assert!(!html.contains("row recommended"));
    assert!(html.contains("New Sample"));
}

const HOME_MARKER: &str = "Sample Collection Instructions";
const ANALYSIS_MARKER: &str = "Please do not remove the sample during analysis.";
const RESULTS_MARKER: &str = "Recommended Treatment";

#[tokio::test(flavor = "current_thread")]
async fn router_follows_session_through_auto_advance() {
    let mut harness = setup_router_harness(AnalysisConfig::default()).await;
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains(HOME_MARKER));
    assert!(!html.contains(ANALYSIS_MARKER));

    harness.update_session(|store| store.start_analysis());
    harness.settle().await;

    let session = harness.session();
    assert_eq!(session.current_page(), Page::Results);
    assert!(session.analysis_complete());
    let html = harness.render();
    assert!(html.contains(RESULTS_MARKER));
    assert!(html.contains("Identified Bacteria: Klebsiella pneumoniae (NZ_CP029736)"));
    assert!(!html.contains(ANALYSIS_MARKER));

    harness.update_session(|store| store.navigate(Page::Home));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains(HOME_MARKER));
    assert!(!html.contains(RESULTS_MARKER));
}

#[tokio::test(flavor = "current_thread")]
async fn router_shows_each_page_with_manual_advance() {
    let config = AnalysisConfig::default().with_auto_advance(false);
    let mut harness = setup_router_harness(config).await;
    harness.rebuild();
    harness.settle().await;
    assert!(harness.render().contains(HOME_MARKER));

    harness.update_session(|store| store.start_analysis());
    harness.settle().await;

    assert_eq!(harness.session().current_page(), Page::Analysis);
    let html = harness.render();
    assert!(html.contains(ANALYSIS_MARKER));
    assert!(html.contains("View Results"));
    assert!(!html.contains(HOME_MARKER));

    harness.update_session(|store| store.navigate(Page::Results));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains(RESULTS_MARKER));
    assert!(!html.contains(ANALYSIS_MARKER));
}
