//! Inline alert box.

use dioxus::prelude::*;
use megilance_core::{AlertSeverity, Component};

use crate::context::use_class_set;

#[derive(Clone, PartialEq, Props)]
pub struct AlertProps {
    #[props(default)]
    pub severity: AlertSeverity,
    #[props(default)]
    pub title: Option<String>,
    /// Shows a close button when set.
    #[props(default)]
    pub on_close: Option<EventHandler<()>>,
    #[props(default)]
    pub class: Option<String>,
    pub children: Element,
}

#[component]
pub fn Alert(props: AlertProps) -> Element {
    let Some(classes) = use_class_set(Component::Alert) else {
        return rsx! {};
    };
    let classes = classes
        .variant(props.severity.class())
        .with_override(props.class.as_deref());

    rsx! {
        div { class: "{classes}", role: props.severity.role(),
            span { class: "alert__icon", "aria-hidden": "true", "{props.severity.icon()}" }
            div { class: "alert__body",
                if let Some(title) = &props.title {
                    strong { class: "alert__title", "{title}" }
                }
                div { class: "alert__content", {props.children} }
            }
            if let Some(on_close) = props.on_close {
                button {
                    class: "alert__close",
                    r#type: "button",
                    "aria-label": "Dismiss",
                    onclick: move |_| on_close.call(()),
                    "\u{00D7}"
                }
            }
        }
    }
}
