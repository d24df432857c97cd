//! AI tool pages. The models run server-side; the client shows placeholders.

use dioxus::prelude::*;
use megilance_core::AlertSeverity;
use megilance_ui::{Alert, PlaceholderPage};

#[component]
fn AiToolPage(title: String, description: String) -> Element {
    rsx! {
        div { class: "page",
            Alert { severity: AlertSeverity::Info, title: "Beta".to_string(),
                "AI tools need a connection to the MegiLance service."
            }
            PlaceholderPage { title, description }
        }
    }
}

#[component]
pub fn FraudCheck() -> Element {
    rsx! {
        AiToolPage {
            title: "Fraud Check".to_string(),
            description: "Screen a user or payment for known fraud patterns.".to_string(),
        }
    }
}

#[component]
pub fn PriceEstimator() -> Element {
    rsx! {
        AiToolPage {
            title: "Price Estimator".to_string(),
            description: "Estimate a fair budget from the job description and skills.".to_string(),
        }
    }
}

#[component]
pub fn SentimentAnalysis() -> Element {
    rsx! {
        AiToolPage {
            title: "Sentiment Analysis".to_string(),
            description: "Score review text from negative to positive.".to_string(),
        }
    }
}
