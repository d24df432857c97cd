//! Hover tooltip.

use dioxus::prelude::*;
use megilance_core::widgets::Disclosure;
use megilance_core::{Component, TooltipPosition};

use crate::context::use_class_set;

#[derive(Clone, PartialEq, Props)]
pub struct TooltipProps {
    pub text: String,
    #[props(default)]
    pub position: TooltipPosition,
    #[props(default)]
    pub class: Option<String>,
    /// The element the tooltip describes.
    pub children: Element,
}

/// Shows `text` next to its children while the pointer or focus is on them.
#[component]
pub fn Tooltip(props: TooltipProps) -> Element {
    let mut visible = use_signal(|| Disclosure::new(false));
    let Some(classes) = use_class_set(Component::Tooltip) else {
        return rsx! { {props.children} };
    };
    let bubble = classes
        .variant(props.position.class())
        .when(visible.read().is_open(), "tooltip--visible")
        .with_override(props.class.as_deref());

    rsx! {
        span {
            class: "tooltip-anchor",
            onmouseenter: move |_| visible.write().open(),
            onmouseleave: move |_| visible.write().close(),
            onfocusin: move |_| visible.write().open(),
            onfocusout: move |_| visible.write().close(),
            {props.children}
            if visible.read().is_open() {
                span { class: "{bubble}", role: "tooltip", "{props.text}" }
            }
        }
    }
}
