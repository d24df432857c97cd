//! Page shells for sections without content yet.

use dioxus::prelude::*;
use megilance_core::portal::UNDER_CONSTRUCTION;
use megilance_core::toast::{ToastRequest, ToastVariant};
use megilance_core::Component;

use crate::context::{use_class_set, use_toaster};

/// Title plus a short "coming soon" description.
#[component]
pub fn PlaceholderPage(
    title: String,
    #[props(default = UNDER_CONSTRUCTION.to_string())] description: String,
) -> Element {
    let Some(classes) = use_class_set(Component::PlaceholderPage) else {
        return rsx! {};
    };

    rsx! {
        section { class: "{classes}",
            h1 { class: "placeholder-page__title", "{title}" }
            p { class: "placeholder-page__description", "{description}" }
        }
    }
}

/// Empty list with a call to action that raises a toast.
#[component]
pub fn EmptyState(title: String, description: String, cta_label: String) -> Element {
    let mut toaster = use_toaster();
    let Some(classes) = use_class_set(Component::PlaceholderPage) else {
        return rsx! {};
    };
    let classes = classes.variant("placeholder-page--empty");
    let toast_title = cta_label.clone();

    rsx! {
        section { class: "{classes}",
            h1 { class: "placeholder-page__title", "{title}" }
            div { class: "placeholder-page__empty-icon", "aria-hidden": "true", "\u{2205}" }
            p { class: "placeholder-page__description", "{description}" }
            button {
                class: "placeholder-page__cta",
                r#type: "button",
                onclick: move |_| {
                    toaster.notify(
                        ToastRequest::new(toast_title.clone())
                            .description("This feature is coming soon.")
                            .variant(ToastVariant::Info),
                    );
                },
                "{cta_label}"
            }
        }
    }
}
