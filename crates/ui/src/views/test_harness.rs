use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use phage_core::model::{Page, ResultRecord, Session};
use phage_core::{AnalysisConfig, AnalysisDelays};
use services::{
    AnalysisService, AppServices, RecordingPacer, ResultsService, SessionStore,
};
use storage::repository::Storage;

use crate::context::{SessionSignal, UiApp, build_app_context};
use crate::routes::Route;
use crate::views::{AnalysisView, HomeView, ResultsView};

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn config(&self) -> Arc<AnalysisConfig> {
        self.services.config()
    }

    fn analysis(&self) -> Arc<AnalysisService> {
        self.services.analysis()
    }

    fn results(&self) -> Arc<ResultsService> {
        self.services.results()
    }
}

type SessionHandle = Rc<RefCell<Option<SessionSignal>>>;

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    page: Page,
    initial: SessionStore,
    handle: SessionHandle,
    /// Mount the application router instead of a single fixed view.
    routed: bool,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    let session = use_context_provider(|| Signal::new(props.initial.clone()));
    use_hook(|| {
        *props.handle.borrow_mut() = Some(session);
    });
    use_context_provider(|| props.page);
    if props.routed {
        rsx! { Router::<Route> {} }
    } else {
        rsx! { Router::<TestRoute> {} }
    }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    match use_context::<Page>() {
        Page::Home => rsx! { HomeView {} },
        Page::Analysis => rsx! { AnalysisView {} },
        Page::Results => rsx! { ResultsView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub pacer: RecordingPacer,
    handle: SessionHandle,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Current session state, read through the harness runtime.
    pub fn session(&self) -> Session {
        let signal = self.handle.borrow().expect("harness rebuilt");
        self.dom.in_runtime(|| signal.peek().get())
    }

    /// Change the session from outside, as a button handler would.
    pub fn update_session(&mut self, update: impl FnOnce(&mut SessionStore)) {
        let mut signal = self.handle.borrow().expect("harness rebuilt");
        self.dom.in_runtime(|| update(&mut signal.write()));
    }

    /// Drive until pending tasks, effects and navigation have settled.
    pub async fn settle(&mut self) {
        for _ in 0..8 {
            self.drive_async().await;
        }
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn klebsiella_records() -> Vec<ResultRecord> {
    [("PH001", 0.942), ("PH002", 0.173), ("PH003", 0.864), ("PH004", 0.531)]
        .into_iter()
        .map(|(phage, score)| {
            ResultRecord::new("NZ_CP029736".into(), phage.into(), score)
                .expect("valid record")
                .with_names(Some("Klebsiella pneumoniae".into()), None)
        })
        .collect()
}

pub async fn setup_view_harness(page: Page, config: AnalysisConfig) -> ViewHarness {
    setup_view_harness_with_records(page, config, klebsiella_records()).await
}

pub async fn setup_view_harness_with_records(
    page: Page,
    config: AnalysisConfig,
    records: Vec<ResultRecord>,
) -> ViewHarness {
    build_harness(page, config, records, false).await
}

/// Mount `Router::<Route>` over a fresh session on the home page.
pub async fn setup_router_harness(config: AnalysisConfig) -> ViewHarness {
    build_harness(Page::Home, config, klebsiella_records(), true).await
}

async fn build_harness(
    page: Page,
    config: AnalysisConfig,
    records: Vec<ResultRecord>,
    routed: bool,
) -> ViewHarness {
    let pacer = RecordingPacer::default();
    let config = config.with_delays(AnalysisDelays::instant());
    let services = AppServices::new(config, &Storage::in_memory(records), Arc::new(pacer.clone()))
        .await
        .expect("services");

    let mut initial = services.new_session();
    match page {
        Page::Home => {}
        Page::Analysis => initial.start_analysis(),
        Page::Results => initial.navigate(Page::Results),
    }

    let handle = SessionHandle::default();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app: Arc::new(TestApp { services }),
            page,
            initial,
            handle: Rc::clone(&handle),
            routed,
        },
    );

    ViewHarness { dom, pacer, handle }
}
