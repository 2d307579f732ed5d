use std::sync::Arc;

use phage_core::model::{BacteriumId, Page, SessionAction};

use super::host::{AnalysisEvent, AnalysisHost};
use super::simulator::{StepSimulator, Transition};
use crate::pacing::Pacer;
use crate::results::ResultsService;

/// Outcome of one refresh cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cycle {
    /// Not on the analysis page; nothing happened.
    Inactive,
    /// Step `index` ran to the end.
    Stepped { index: usize },
    /// The completion flag was set.
    Finished,
    /// Complete, waiting for the user to open the results.
    AwaitingResults,
    /// Complete and moved to the results page.
    Navigated,
    /// The session changed underneath this cycle; someone else owns it now.
    Stale,
}

impl Cycle {
    /// Whether the state machine should be re-entered immediately.
    #[must_use]
    pub fn wants_refresh(self) -> bool {
        matches!(self, Cycle::Stepped { .. } | Cycle::Finished)
    }
}

/// Drives the step simulator against a host, pacing each step.
#[derive(Clone)]
pub struct AnalysisService {
    simulator: StepSimulator,
    results: Arc<ResultsService>,
    pacer: Arc<dyn Pacer>,
    bacterium: BacteriumId,
}

impl AnalysisService {
    #[must_use]
    pub fn new(
        simulator: StepSimulator,
        results: Arc<ResultsService>,
        pacer: Arc<dyn Pacer>,
        bacterium: BacteriumId,
    ) -> Self {
        Self {
            simulator,
            results,
            pacer,
            bacterium,
        }
    }

    #[must_use]
    pub fn simulator(&self) -> &StepSimulator {
        &self.simulator
    }

    #[must_use]
    pub fn bacterium(&self) -> &BacteriumId {
        &self.bacterium
    }

    /// Run exactly one transition of the state machine.
    pub async fn run_cycle<H: AnalysisHost + ?Sized>(&self, host: &mut H) -> Cycle {
        let session = host.snapshot();
        match self.simulator.plan(&session) {
            Transition::Inactive => Cycle::Inactive,
            Transition::Step { index, prepare } => self.run_step(host, index, prepare).await,
            Transition::Finish => {
                if host.apply(SessionAction::MarkComplete) {
                    tracing::info!(steps = self.simulator.steps().len(), "analysis finished");
                    Cycle::Finished
                } else {
                    Cycle::Stale
                }
            }
            Transition::Complete => self.complete(host).await,
        }
    }

    /// Re-enter the state machine until it settles on a state that needs no refresh.
    pub async fn run_until_settled<H: AnalysisHost + ?Sized>(&self, host: &mut H) -> Cycle {
        loop {
            let cycle = self.run_cycle(host).await;
            if !cycle.wants_refresh() {
                return cycle;
            }
        }
    }

    async fn run_step<H: AnalysisHost + ?Sized>(
        &self,
        host: &mut H,
        index: usize,
        prepare: bool,
    ) -> Cycle {
        let delays = self.simulator.delays();
        let steps = self.simulator.steps();

        if prepare {
            tracing::info!(bacterium = %self.bacterium, steps = steps.len(), "analysis started");
            host.emit(AnalysisEvent::Preparing);
            self.pacer.wait(delays.initial).await;
        }

        let Some(label) = steps.label(index) else {
            return Cycle::Stale;
        };
        host.emit(AnalysisEvent::Step {
            index,
            total: steps.len(),
            label: label.to_owned(),
        });
        if !host.apply(SessionAction::BeginStep { index }) {
            return Cycle::Stale;
        }
        tracing::debug!(index, label, "analysis step");

        self.pacer.wait(delays.step).await;
        if host.apply(SessionAction::AdvanceStep { index }) {
            Cycle::Stepped { index }
        } else {
            Cycle::Stale
        }
    }

    async fn complete<H: AnalysisHost + ?Sized>(&self, host: &mut H) -> Cycle {
        let name = match self.results.identify(&self.bacterium) {
            Ok(found) => found.name,
            Err(err) => {
                tracing::warn!(%err, "identified bacterium missing from dataset");
                None
            }
        };
        host.emit(AnalysisEvent::Completed);
        host.emit(AnalysisEvent::Identified {
            bacterium: self.bacterium.clone(),
            name,
        });

        if !self.simulator.auto_advance() {
            return Cycle::AwaitingResults;
        }

        self.pacer.wait(self.simulator.delays().completion).await;
        let session = host.snapshot();
        if session.current_page() != Page::Analysis || !session.analysis_complete() {
            return Cycle::Stale;
        }
        host.apply(SessionAction::Navigate(Page::Results));
        Cycle::Navigated
    }
}
