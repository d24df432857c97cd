//! Loading indicator.

use dioxus::prelude::*;
use megilance_core::{Component, LoaderSize, LoaderVariant};

#[derive(Clone, PartialEq, Props)]
pub struct LoaderProps {
    #[props(default)]
    pub size: LoaderSize,
    #[props(default)]
    pub variant: LoaderVariant,
    /// Accessible label read by screen readers.
    #[props(default = "Loading".to_string())]
    pub label: String,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn Loader(props: LoaderProps) -> Element {
    let Some(classes) = crate::context::use_class_set(Component::Loader) else {
        return rsx! {};
    };
    let classes = classes
        .variant(props.size.class())
        .variant(props.variant.class())
        .with_override(props.class.as_deref());

    rsx! {
        div {
            class: "{classes}",
            role: "status",
            "aria-live": "polite",
            "aria-label": "{props.label}",
            for i in 0..props.variant.segments() {
                span { key: "{i}", class: "loader__segment" }
            }
            span { class: "visually-hidden", "{props.label}" }
        }
    }
}
