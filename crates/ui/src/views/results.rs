use dioxus::prelude::*;
use phage_core::model::Page;

use crate::context::{AppContext, SessionSignal};
use crate::vm::{GUIDANCE, ResultsVm};

#[component]
pub fn ResultsView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut session = use_context::<SessionSignal>();

    // The dataset is immutable after startup, so one report per visit is enough.
    let vm = use_hook(|| {
        let report = ctx.results().report(ctx.analysis().bacterium());
        ResultsVm::from(&report)
    });

    rsx! {
        div { class: "page results",
            h1 { class: "title", "Analysis Results" }
            div { class: "notice notice-success", id: "identified", "{vm.identified}" }

            h2 { "Detailed Analysis" }

            if vm.is_empty() {
                p { class: "empty", "No phage results are available for this sample." }
            } else {
                div { class: "columns",
                    div { class: "column",
                        h3 { "Recommended Phages" }
                        p { class: "threshold", "{vm.threshold_note}" }
                        table { class: "results-table",
                            thead {
                                tr {
                                    th { "#" }
                                    th { "Phage" }
                                    th { "Phage Name" }
                                    th { "Probability (%)" }
                                }
                            }
                            tbody {
                                for row in vm.rows.iter() {
                                    tr { key: "{row.phage}", class: row.class(),
                                        td { "{row.rank}" }
                                        td { "{row.phage}" }
                                        td { "{row.phage_name}" }
                                        td { "{row.probability}" }
                                    }
                                }
                            }
                        }
                    }
                    div { class: "column",
                        h3 { "Visualization" }
                        div { class: "chart",
                            for bar in vm.bars.iter() {
                                div { class: "chart-row",
                                    span { class: "chart-label", "{bar.label}" }
                                    div { class: "chart-track",
                                        div { class: "chart-bar", style: "{bar.style}" }
                                    }
                                    span { class: "chart-value", "{bar.value_text}" }
                                }
                            }
                        }
                    }
                }
            }

            h2 { class: "treatment-title", "Recommended Treatment" }
            div { class: "columns treatment",
                div { class: "column",
                    img {
                        class: "vial",
                        src: asset!("/assets/vial.svg"),
                        alt: "Phage cocktail vial",
                    }
                }
                div { class: "column",
                    h3 { class: "cocktail", "{vm.treatment.title}" }
                    p { "{vm.treatment.dosage}" }
                    p { "{vm.treatment.target}" }
                }
            }

            div { class: "guidance",
                h4 { "Treatment Recommendations" }
                p { "Based on the analysis, the following phages are recommended for treatment:" }
                ul {
                    for line in GUIDANCE {
                        li { "{line}" }
                    }
                }
            }

            div { class: "actions",
                button {
                    class: "btn",
                    id: "new-sample",
                    onclick: move |_| session.write().navigate(Page::Home),
                    "New Sample"
                }
            }
        }
    }
}
