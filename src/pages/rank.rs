use dioxus::prelude::*;
use megilance_core::fixtures::SAMPLE_RANK_SCORE;
use megilance_core::TooltipPosition;
use megilance_ui::{ProgressBar, RankGauge, Tooltip};

const FACTORS: [(&str, f64); 3] = [
    ("On-time delivery", 92.0),
    ("Client satisfaction", 81.0),
    ("Response time", 64.0),
];

#[component]
pub fn Rank() -> Element {
    rsx! {
        div { class: "page",
            h1 { class: "page__title", "Freelancer Rank" }
            div { class: "card rank",
                Tooltip {
                    text: "Updated daily from your last 90 days of work".to_string(),
                    position: TooltipPosition::Bottom,
                    RankGauge { score: SAMPLE_RANK_SCORE }
                }
                div { class: "rank__factors",
                    for (label, value) in FACTORS {
                        ProgressBar { key: "{label}", value, label: label.to_string() }
                    }
                }
            }
        }
    }
}
