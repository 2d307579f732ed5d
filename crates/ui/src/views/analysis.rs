use std::sync::Arc;

use dioxus::prelude::*;
use phage_core::model::{Page, Session, SessionAction};
use services::{AnalysisEvent, AnalysisHost};

use crate::context::{AppContext, SessionSignal};
use crate::vm::{AnalysisMessage, AnalysisVm, NoticeVm};

/// Binds a running analysis to the page's reactive state.
struct SignalHost {
    session: SessionSignal,
    status: Signal<Option<String>>,
    notices: Signal<Vec<NoticeVm>>,
}

impl AnalysisHost for SignalHost {
    fn snapshot(&self) -> Session {
        self.session.peek().get()
    }

    fn apply(&mut self, action: SessionAction) -> bool {
        self.session.write().apply(action)
    }

    fn emit(&mut self, event: AnalysisEvent) {
        for message in AnalysisMessage::for_event(&event) {
            match message {
                AnalysisMessage::Status(text) => self.status.set(Some(text)),
                AnalysisMessage::Notice(notice) => self.notices.write().push(notice),
            }
        }
    }
}

#[component]
pub fn AnalysisView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut session = use_context::<SessionSignal>();
    let status = use_signal(|| None::<String>);
    let notices = use_signal(Vec::<NoticeVm>::new);

    let analysis = ctx.analysis();
    let runner = Arc::clone(&analysis);
    // Leaving the page drops this task, which abandons the run mid-step.
    use_future(move || {
        let service = Arc::clone(&runner);
        async move {
            let mut host = SignalHost {
                session,
                status,
                notices,
            };
            let cycle = service.run_until_settled(&mut host).await;
            tracing::debug!(?cycle, "analysis settled");
        }
    });

    let progress = analysis.simulator().progress(&session.read().get());
    let vm = AnalysisVm::new(&progress, analysis.simulator().auto_advance());
    let bar_style = vm.bar_style();
    let status_text = status.read().clone();
    let notice_list = notices.read().clone();

    rsx! {
        div { class: "page analysis",
            h1 { class: "title", "🧬 Sample Analysis" }

            div { class: "spacer" }
            p { class: "warning", "Please do not remove the sample during analysis." }

            div { class: "progress",
                div { class: "progress-fill", style: "{bar_style}" }
            }
            p { class: "progress-meta", "{vm.step_text} ({vm.percent}%)" }

            if let Some(text) = status_text {
                p { class: "status", id: "analysis-status", "{text}" }
            }

            for notice in notice_list {
                div { class: notice.class(), "{notice.text}" }
            }

            if vm.show_view_results {
                div { class: "actions",
                    button {
                        class: "btn btn-primary",
                        id: "view-results",
                        onclick: move |_| session.write().navigate(Page::Results),
                        "View Results"
                    }
                }
            }
        }
    }
}
