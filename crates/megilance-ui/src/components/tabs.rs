//! Tab strip with keyboard navigation.

use dioxus::prelude::*;
use megilance_core::widgets::{TabKey, TabsState};
use megilance_core::Component;

use crate::context::use_class_set;

pub fn tab_key(key: &Key) -> Option<TabKey> {
    match key {
        Key::ArrowLeft => Some(TabKey::ArrowLeft),
        Key::ArrowRight => Some(TabKey::ArrowRight),
        Key::Home => Some(TabKey::Home),
        Key::End => Some(TabKey::End),
        _ => None,
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct TabsProps {
    pub labels: Vec<String>,
    #[props(default)]
    pub default_index: usize,
    /// Fired with the new index whenever the selection changes.
    pub on_change: EventHandler<usize>,
    #[props(default)]
    pub class: Option<String>,
    /// Panel for the currently selected tab.
    pub children: Element,
}

#[component]
pub fn Tabs(props: TabsProps) -> Element {
    let count = props.labels.len();
    let default_index = props.default_index;
    let mut tabs = use_signal(move || TabsState::new(count, default_index));
    let Some(classes) = use_class_set(Component::Tabs) else {
        return rsx! {};
    };
    let classes = classes.with_override(props.class.as_deref());
    let selected = tabs.read().selected();
    let on_change = props.on_change;

    rsx! {
        div { class: "{classes}",
            div {
                class: "tabs__list",
                role: "tablist",
                onkeydown: move |evt| {
                    let Some(key) = tab_key(&evt.key()) else {
                        return;
                    };
                    let moved = tabs.write().handle_key(key);
                    if let Some(index) = moved {
                        on_change.call(index);
                    }
                },
                for (index, label) in props.labels.iter().enumerate() {
                    button {
                        key: "{index}",
                        class: if index == selected { "tabs__tab active" } else { "tabs__tab" },
                        r#type: "button",
                        role: "tab",
                        "aria-selected": if index == selected { "true" } else { "false" },
                        tabindex: if index == selected { "0" } else { "-1" },
                        onclick: move |_| {
                            if tabs.read().selected() != index {
                                tabs.write().select(index);
                                on_change.call(index);
                            }
                        },
                        "{label}"
                    }
                }
            }
            div { class: "tabs__panel", role: "tabpanel", {props.children} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_and_edge_keys() {
        assert_eq!(tab_key(&Key::ArrowRight), Some(TabKey::ArrowRight));
        assert_eq!(tab_key(&Key::Home), Some(TabKey::Home));
        assert_eq!(tab_key(&Key::Enter), None);
    }
}
