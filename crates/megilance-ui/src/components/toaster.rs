//! On-screen stack of toasts.

use dioxus::prelude::*;
use megilance_core::Component;

use crate::context::{use_class_set, use_toaster};

/// Renders the live toasts, newest first. Place once near the root.
#[component]
pub fn ToastStack() -> Element {
    let mut toaster = use_toaster();
    let Some(base) = use_class_set(Component::Toast) else {
        return rsx! {};
    };
    let toasts = toaster.queue().read().items().to_vec();

    rsx! {
        div { class: "toast-stack", "aria-live": "polite",
            for toast in toasts {
                {
                    let classes = base.clone().variant(toast.variant.class());
                    let id = toast.id;
                    rsx! {
                        div { key: "{id}", class: "{classes}", role: "status",
                            div { class: "toast__body",
                                if let Some(title) = &toast.title {
                                    strong { class: "toast__title", "{title}" }
                                }
                                if let Some(description) = &toast.description {
                                    p { class: "toast__description", "{description}" }
                                }
                            }
                            button {
                                class: "toast__close",
                                r#type: "button",
                                "aria-label": "Dismiss notification",
                                onclick: move |_| toaster.dismiss(id),
                                "\u{00D7}"
                            }
                        }
                    }
                }
            }
        }
    }
}
