//! Collapsible section.

use dioxus::prelude::*;
use megilance_core::widgets::Disclosure;
use megilance_core::Component;

use crate::context::use_class_set;

#[component]
pub fn Accordion(
    title: String,
    #[props(default = false)] default_open: bool,
    children: Element,
) -> Element {
    let mut item = use_signal(move || Disclosure::new(default_open));
    let Some(classes) = use_class_set(Component::Accordion) else {
        return rsx! {};
    };
    let is_open = item.read().is_open();
    let classes = classes.when(is_open, "accordion--open");

    rsx! {
        div { class: "{classes}",
            button {
                class: "accordion__header",
                r#type: "button",
                "aria-expanded": if is_open { "true" } else { "false" },
                onclick: move |_| {
                    item.write().toggle();
                },
                span { "{title}" }
                span { class: "accordion__chevron", "aria-hidden": "true",
                    if is_open { "\u{2212}" } else { "+" }
                }
            }
            if is_open {
                div { class: "accordion__content", {children} }
            }
        }
    }
}
