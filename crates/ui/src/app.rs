use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::palette_css;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();

    // One session per window. The provider hook runs once, so re-renders keep the state.
    use_context_provider(|| Signal::new(ctx.new_session()));
    let palette = use_hook(palette_css);

    rsx! {
        document::Style { "{palette}" }
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Phage Therapy Analyzer" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
