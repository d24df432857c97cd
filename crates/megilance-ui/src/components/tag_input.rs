//! Free-text tag editor.

use dioxus::prelude::*;
use megilance_core::widgets::{TagKey, TagList, TagOutcome};
use megilance_core::Component;

use crate::context::use_class_set;

/// Map a keyboard key to what the tag list cares about.
pub fn tag_key(key: &Key) -> TagKey {
    match key {
        Key::Enter => TagKey::Enter,
        Key::Character(c) if c == "," => TagKey::Comma,
        _ => TagKey::Other,
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct TagInputProps {
    /// Tags to start with.
    #[props(default)]
    pub tags: Vec<String>,
    #[props(default = "Add a tag and press Enter".to_string())]
    pub placeholder: String,
    /// Fired with the full list after every add or remove.
    pub on_change: EventHandler<Vec<String>>,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn TagInput(props: TagInputProps) -> Element {
    let initial = props.tags.clone();
    let mut list = use_signal(move || TagList::new(initial));
    let Some(classes) = use_class_set(Component::TagInput) else {
        return rsx! {};
    };
    let classes = classes.with_override(props.class.as_deref());
    let on_change = props.on_change;

    let mut commit = move |key: TagKey| {
        let outcome = list.write().handle_key(key);
        match outcome {
            TagOutcome::Added(tag) => {
                tracing::debug!(%tag, "tag added");
                on_change.call(list.read().tags().to_vec());
            }
            TagOutcome::Duplicate => tracing::debug!("duplicate tag ignored"),
            TagOutcome::Empty | TagOutcome::Ignored => {}
        }
    };

    let tags = list.read().tags().to_vec();
    let buffer = list.read().buffer().to_string();

    rsx! {
        div { class: "{classes}",
            ul { class: "tag-input__tags",
                for tag in tags {
                    {
                        let removed = tag.clone();
                        rsx! {
                            li { key: "{tag}", class: "tag-input__tag",
                                span { "{tag}" }
                                button {
                                    class: "tag-input__remove",
                                    r#type: "button",
                                    "aria-label": "Remove {tag}",
                                    onclick: move |_| {
                                        if list.write().remove(&removed) {
                                            on_change.call(list.read().tags().to_vec());
                                        }
                                    },
                                    "\u{00D7}"
                                }
                            }
                        }
                    }
                }
            }
            input {
                class: "tag-input__field",
                r#type: "text",
                value: "{buffer}",
                placeholder: "{props.placeholder}",
                oninput: move |evt| {
                    // Pasted text may carry commas; each one commits.
                    let added = list.write().set_buffer(evt.value());
                    if !added.is_empty() {
                        tracing::debug!(count = added.len(), "tags added from input");
                        on_change.call(list.read().tags().to_vec());
                    }
                },
                onkeydown: move |evt| {
                    let key = tag_key(&evt.key());
                    if matches!(key, TagKey::Enter | TagKey::Comma) {
                        evt.prevent_default();
                        commit(key);
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_keys() {
        assert_eq!(tag_key(&Key::Enter), TagKey::Enter);
        assert_eq!(tag_key(&Key::Character(",".to_string())), TagKey::Comma);
        assert_eq!(tag_key(&Key::Character("a".to_string())), TagKey::Other);
        assert_eq!(tag_key(&Key::Escape), TagKey::Other);
    }
}
