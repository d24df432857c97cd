//! Corner ribbon for preview builds.

use dioxus::prelude::*;
use megilance_core::flags::is_preview_mode;
use megilance_core::Component;

use crate::context::use_class_set;

/// Shown only in builds made with `MEGILANCE_PREVIEW_MODE=1`.
#[component]
pub fn PreviewRibbon() -> Element {
    let classes = use_class_set(Component::PreviewRibbon);
    match classes {
        Some(classes) if is_preview_mode() => rsx! {
            div { class: "{classes}", "aria-hidden": "true", "Preview" }
        },
        _ => rsx! {},
    }
}
