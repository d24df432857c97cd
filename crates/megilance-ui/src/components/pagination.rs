//! Previous / next pager.

use dioxus::prelude::*;
use megilance_core::widgets::Pager;
use megilance_core::Component;

use crate::context::use_class_set;

/// Caller-controlled pager; renders nothing for one page or fewer.
#[component]
pub fn Pagination(
    current: u32,
    total: u32,
    on_change: EventHandler<u32>,
    #[props(default)] class: Option<String>,
) -> Element {
    let pager = Pager::new(current, total);
    let Some(classes) = use_class_set(Component::Pagination) else {
        return rsx! {};
    };
    if !pager.is_visible() {
        return rsx! {};
    }
    let classes = classes.with_override(class.as_deref());

    rsx! {
        nav { class: "{classes}", "aria-label": "Pagination",
            button {
                class: "pagination__prev",
                r#type: "button",
                disabled: !pager.has_previous(),
                onclick: move |_| {
                    if let Some(page) = pager.previous() {
                        on_change.call(page);
                    }
                },
                "Previous"
            }
            span { class: "pagination__label", "{pager.label()}" }
            button {
                class: "pagination__next",
                r#type: "button",
                disabled: !pager.has_next(),
                onclick: move |_| {
                    if let Some(page) = pager.next() {
                        on_change.call(page);
                    }
                },
                "Next"
            }
        }
    }
}
