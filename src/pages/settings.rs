use dioxus::prelude::*;
use megilance_core::toast::{ToastRequest, ToastVariant};
use megilance_core::{BadgeVariant, PortalRole, Theme};
use megilance_ui::{use_resolved_theme, use_theme_setter, use_toaster, Badge};

use crate::context::use_client_config;

#[component]
pub fn Settings(role: PortalRole) -> Element {
    let config = use_client_config();
    let current = use_resolved_theme();
    let setter = use_theme_setter();
    let mut toaster = use_toaster();

    rsx! {
        div { class: "page",
            h1 { class: "page__title", "Settings" }
            div { class: "card",
                h2 { "Account" }
                p {
                    "{config.user_name} "
                    Badge { variant: BadgeVariant::Primary, "{role.label()}" }
                }
            }
            div { class: "card",
                h2 { "Appearance" }
                div { class: "form__row",
                    for theme in [Theme::Light, Theme::Dark] {
                        label { key: "{theme.as_str()}",
                            input {
                                r#type: "radio",
                                name: "theme",
                                checked: current == Some(theme),
                                onchange: {
                                    let mut setter = setter.clone();
                                    move |_| {
                                        setter.set(theme);
                                        toaster.notify(
                                            ToastRequest::new("Theme updated")
                                                .description(format!("Using the {} theme", theme.as_str()))
                                                .variant(ToastVariant::Success),
                                        );
                                    }
                                },
                            }
                            " {theme.as_str()}"
                        }
                    }
                }
            }
        }
    }
}
