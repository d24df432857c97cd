//! Dismissible announcement banner.

use dioxus::prelude::*;
use megilance_core::widgets::Announcement;
use megilance_core::Component;

use crate::context::{use_class_set, use_storage};

#[derive(Clone, PartialEq, Props)]
pub struct AnnouncementBannerProps {
    /// Identifies the announcement; its dismissal is remembered under this id.
    pub id: String,
    pub message: String,
    #[props(default)]
    pub cta_label: Option<String>,
    #[props(default)]
    pub on_cta: Option<EventHandler<()>>,
    #[props(default)]
    pub class: Option<String>,
}

/// Banner that stays hidden once dismissed, across restarts.
///
/// Give each announcement its own `key` so a new id mounts a fresh banner.
#[component]
pub fn AnnouncementBanner(props: AnnouncementBannerProps) -> Element {
    let storage = use_storage();
    let id = props.id.clone();
    let load_storage = storage.clone();
    let mut banner = use_signal(move || Announcement::load(id, load_storage.as_ref()));
    let classes = use_class_set(Component::Announcement);

    if !banner.read().is_visible() {
        return rsx! {};
    }
    let Some(classes) = classes else {
        return rsx! {};
    };
    let classes = classes.with_override(props.class.as_deref());

    rsx! {
        div { class: "{classes}", role: "region", "aria-label": "Announcement",
            p { class: "announcement__message", "{props.message}" }
            if let (Some(label), Some(on_cta)) = (&props.cta_label, props.on_cta) {
                button {
                    class: "announcement__cta",
                    r#type: "button",
                    onclick: move |_| on_cta.call(()),
                    "{label}"
                }
            }
            button {
                class: "announcement__dismiss",
                r#type: "button",
                "aria-label": "Dismiss announcement",
                onclick: move |_| banner.write().dismiss(storage.as_ref()),
                "\u{00D7}"
            }
        }
    }
}
