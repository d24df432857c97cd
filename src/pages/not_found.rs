use dioxus::prelude::*;
use megilance_core::AlertSeverity;
use megilance_ui::Alert;

use crate::app::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(%path, "no route");

    rsx! {
        div { class: "page",
            h1 { class: "page__title", "Page not found" }
            Alert { severity: AlertSeverity::Warning,
                "Nothing lives at {path}."
            }
            Link { class: "btn", to: Route::Home {}, "Back home" }
        }
    }
}
