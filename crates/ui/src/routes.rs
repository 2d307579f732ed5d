use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable, use_navigator, use_route};
use phage_core::model::Page;

use crate::context::SessionSignal;
use crate::views::{AnalysisView, HomeView, ResultsView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/analysis", AnalysisView)] Analysis {},
        #[route("/results", ResultsView)] Results {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    #[must_use]
    pub fn for_page(page: Page) -> Self {
        match page {
            Page::Home => Route::Home {},
            Page::Analysis => Route::Analysis {},
            Page::Results => Route::Results {},
        }
    }

    /// The page this route shows, if any.
    #[must_use]
    pub fn page(&self) -> Option<Page> {
        match self {
            Route::Home {} => Some(Page::Home),
            Route::Analysis {} => Some(Page::Analysis),
            Route::Results {} => Some(Page::Results),
            Route::NotFound { .. } => None,
        }
    }
}

/// The session owns the current page; the router follows it.
#[component]
fn Layout() -> Element {
    let session = use_context::<SessionSignal>();
    let navigator = use_navigator();
    let route = use_route::<Route>();
    let page = session.read().get().current_page();

    use_effect(use_reactive!(|(page, route)| {
        if route.page() != Some(page) {
            tracing::debug!(%page, "following session page");
            let _ = navigator.replace(Route::for_page(page));
        }
    }));

    rsx! {
        div { class: "app",
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!(?segments, "no page for route");
    rsx! {}
}
