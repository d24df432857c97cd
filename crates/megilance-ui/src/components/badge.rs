//! Status indicators: generic badge, payment status, review sentiment.

use dioxus::prelude::*;
use megilance_core::{BadgeVariant, Component, PaymentStatus, Sentiment};

use crate::context::use_class_set;

#[derive(Clone, PartialEq, Props)]
pub struct BadgeProps {
    #[props(default)]
    pub variant: BadgeVariant,
    #[props(default)]
    pub class: Option<String>,
    pub children: Element,
}

/// Small label with a closed-set color treatment.
///
/// ```rust,ignore
/// rsx! {
///     Badge { variant: BadgeVariant::Success, "Verified" }
/// }
/// ```
#[component]
pub fn Badge(props: BadgeProps) -> Element {
    let Some(classes) = use_class_set(Component::Badge) else {
        return rsx! {};
    };
    let classes = classes
        .variant(props.variant.class())
        .with_override(props.class.as_deref());

    rsx! {
        span { class: "{classes}", {props.children} }
    }
}

#[component]
pub fn PaymentBadge(status: PaymentStatus, #[props(default)] class: Option<String>) -> Element {
    let Some(classes) = use_class_set(Component::PaymentBadge) else {
        return rsx! {};
    };
    let classes = classes.variant(status.class()).with_override(class.as_deref());

    rsx! {
        span { class: "{classes}",
            span { class: "payment-badge__dot" }
            "{status.label()}"
        }
    }
}

/// Sentiment label for a score in `[-1, 1]`.
#[component]
pub fn SentimentIndicator(score: f64, #[props(default)] class: Option<String>) -> Element {
    let sentiment = Sentiment::from_score(score);
    let Some(classes) = use_class_set(Component::Sentiment) else {
        return rsx! {};
    };
    let classes = classes.variant(sentiment.class()).with_override(class.as_deref());

    rsx! {
        span {
            class: "{classes}",
            title: "Sentiment score {score:.2}",
            "{sentiment.label()}"
        }
    }
}
