//! Single-select dropdown.

use dioxus::prelude::*;
use megilance_core::widgets::{DropdownOption, DropdownState};
use megilance_core::Component;

use crate::context::use_class_set;

#[derive(Clone, PartialEq, Props)]
pub struct DropdownProps {
    pub options: Vec<DropdownOption>,
    /// Value of the initially selected option.
    #[props(default)]
    pub selected: Option<String>,
    #[props(default = "Select...".to_string())]
    pub placeholder: String,
    /// Fired once per selection with the chosen option.
    pub on_select: EventHandler<DropdownOption>,
    #[props(default)]
    pub class: Option<String>,
}

/// Trigger button plus option list.
///
/// While open, a transparent backdrop covers the window; clicking it closes
/// the list without selecting anything.
#[component]
pub fn Dropdown(props: DropdownProps) -> Element {
    let initial = props
        .selected
        .as_ref()
        .and_then(|value| props.options.iter().find(|o| &o.value == value).cloned());
    let mut state = use_signal(|| DropdownState::new(initial));
    let Some(classes) = use_class_set(Component::Dropdown) else {
        return rsx! {};
    };

    let is_open = state.read().is_open();
    let current = state.read().selected().cloned();
    let classes = classes
        .when(is_open, "dropdown--open")
        .with_override(props.class.as_deref());
    let trigger_label = current
        .as_ref()
        .map(|o| o.label.clone())
        .unwrap_or_else(|| props.placeholder.clone());

    rsx! {
        div { class: "{classes}",
            button {
                class: "dropdown__trigger",
                r#type: "button",
                "aria-haspopup": "listbox",
                "aria-expanded": if is_open { "true" } else { "false" },
                onclick: move |_| state.write().toggle(),
                span { "{trigger_label}" }
                span { class: "dropdown__caret", "aria-hidden": "true", "\u{25BE}" }
            }
            if is_open {
                div {
                    class: "dropdown__backdrop",
                    onclick: move |_| state.write().click_outside(),
                }
                ul { class: "dropdown__list", role: "listbox",
                    for option in props.options.iter() {
                        {
                            let chosen = option.clone();
                            let is_selected = current.as_ref() == Some(option);
                            let on_select = props.on_select;
                            rsx! {
                                li {
                                    key: "{option.value}",
                                    class: if is_selected { "dropdown__option selected" } else { "dropdown__option" },
                                    role: "option",
                                    "aria-selected": if is_selected { "true" } else { "false" },
                                    onclick: move |_| {
                                        let value = state.write().select(chosen.clone());
                                        on_select.call(value);
                                    },
                                    "{option.label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
