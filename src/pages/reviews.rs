use dioxus::prelude::*;
use megilance_core::fixtures::reviews;
use megilance_ui::{Avatar, SentimentIndicator};

#[component]
pub fn Reviews() -> Element {
    rsx! {
        div { class: "page",
            h1 { class: "page__title", "Reviews" }
            ul { class: "review-list",
                for (index, review) in reviews().into_iter().enumerate() {
                    li { key: "{index}", class: "card review",
                        div { class: "review__header",
                            Avatar { name: review.author.clone() }
                            strong { "{review.author}" }
                            SentimentIndicator { score: review.sentiment }
                        }
                        p { "{review.text}" }
                    }
                }
            }
        }
    }
}
