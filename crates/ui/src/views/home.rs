use dioxus::prelude::*;

use crate::context::SessionSignal;

const INSTRUCTIONS: [&str; 4] = [
    "Clean the sampling area thoroughly",
    "Use the sterile swab provided in the kit",
    "Collect the sample with a rolling motion",
    "Place the swab in the analyzer port",
];

#[component]
pub fn HomeView() -> Element {
    let mut session = use_context::<SessionSignal>();

    rsx! {
        div { class: "page home",
            h1 { class: "title", "🧬 Phage Therapy Analyzer" }

            div { class: "columns",
                div { class: "column",
                    img {
                        class: "sequencer",
                        src: asset!("/assets/sequencer.svg"),
                        alt: "Sequencer",
                    }
                }
                div { class: "column instructions",
                    h2 { "Sample Collection Instructions" }
                    ol {
                        for step in INSTRUCTIONS {
                            li { "{step}" }
                        }
                    }
                }
            }

            div { class: "actions",
                button {
                    class: "btn btn-primary",
                    id: "process-sample",
                    onclick: move |_| session.write().start_analysis(),
                    "Process Sample"
                }
            }

            div { class: "device-status",
                p { class: "ready", "✓ Device Ready" }
                p { class: "hint", "Please ensure proper sample collection before processing" }
            }
        }
    }
}
