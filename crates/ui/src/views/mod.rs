mod analysis;
mod home;
mod results;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use analysis::AnalysisView;
pub use home::HomeView;
pub use results::ResultsView;
