//! User avatar: image when available, initials otherwise.

use dioxus::prelude::*;
use megilance_core::primitives::UNKNOWN_INITIALS;
use megilance_core::{Component, Initials};

use crate::context::use_class_set;

/// Text shown when no image is given.
///
/// An empty name is a caller bug; it is logged and shown as `?` rather than
/// breaking the page.
pub fn avatar_text(name: &str) -> String {
    match Initials::from_name(name) {
        Ok(initials) => initials.to_string(),
        Err(e) => {
            tracing::debug!("avatar without a usable name: {}", e);
            UNKNOWN_INITIALS.to_string()
        }
    }
}

#[component]
pub fn Avatar(
    /// Display name; used for initials and as the image alt text.
    name: String,
    #[props(default)] src: Option<String>,
    #[props(default)] class: Option<String>,
) -> Element {
    let Some(classes) = use_class_set(Component::Avatar) else {
        return rsx! {};
    };
    let classes = classes
        .when(src.is_some(), "avatar--image")
        .with_override(class.as_deref());

    rsx! {
        span { class: "{classes}", title: "{name}",
            if let Some(src) = &src {
                img { class: "avatar__image", src: "{src}", alt: "{name}" }
            } else {
                span { class: "avatar__initials", "aria-hidden": "true", "{avatar_text(&name)}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_from_names() {
        assert_eq!(avatar_text("Jane Doe"), "JD");
        assert_eq!(avatar_text("Madonna"), "MA");
        assert_eq!(avatar_text("ada lovelace byron"), "AB");
    }

    #[test]
    fn empty_name_shows_question_mark() {
        assert_eq!(avatar_text(""), "?");
        assert_eq!(avatar_text("   "), "?");
    }
}
