//! Avatar-triggered account menu.

use dioxus::prelude::*;
use megilance_core::widgets::Disclosure;
use megilance_core::Component;

use super::avatar::Avatar;
use crate::context::use_class_set;

#[derive(Clone, PartialEq, Props)]
pub struct ProfileMenuProps {
    pub name: String,
    #[props(default)]
    pub subtitle: Option<String>,
    #[props(default)]
    pub avatar_src: Option<String>,
    /// Menu entries as `(id, label)`.
    pub items: Vec<(String, String)>,
    /// Fired with the id of the chosen entry.
    pub on_select: EventHandler<String>,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn ProfileMenu(props: ProfileMenuProps) -> Element {
    let mut menu = use_signal(Disclosure::default);
    let Some(classes) = use_class_set(Component::ProfileMenu) else {
        return rsx! {};
    };
    let is_open = menu.read().is_open();
    let classes = classes
        .when(is_open, "profile-menu--open")
        .with_override(props.class.as_deref());

    rsx! {
        div { class: "{classes}",
            button {
                class: "profile-menu__trigger",
                r#type: "button",
                "aria-haspopup": "menu",
                "aria-expanded": if is_open { "true" } else { "false" },
                onclick: move |_| {
                    menu.write().toggle();
                },
                Avatar { name: props.name.clone(), src: props.avatar_src.clone() }
            }
            if is_open {
                // Backdrop to close the menu when clicking outside
                div {
                    class: "profile-menu__backdrop",
                    onclick: move |_| menu.write().close(),
                }
                div { class: "profile-menu__panel", role: "menu",
                    div { class: "profile-menu__header",
                        strong { "{props.name}" }
                        if let Some(subtitle) = &props.subtitle {
                            span { class: "profile-menu__subtitle", "{subtitle}" }
                        }
                    }
                    for (id, label) in props.items.iter() {
                        {
                            let id = id.clone();
                            let on_select = props.on_select;
                            rsx! {
                                button {
                                    key: "{id}",
                                    class: "profile-menu__item",
                                    r#type: "button",
                                    role: "menuitem",
                                    onclick: move |_| {
                                        menu.write().close();
                                        on_select.call(id.clone());
                                    },
                                    "{label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
