//! Light/dark toggle.

use dioxus::prelude::*;
use megilance_core::{Component, Theme};

use crate::context::{use_class_set, use_resolved_theme, use_theme_setter};

fn switch_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "Switch to dark theme",
        Theme::Dark => "Switch to light theme",
    }
}

fn switch_icon(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "\u{263E}",
        Theme::Dark => "\u{2600}",
    }
}

/// Button that flips the active theme and persists the choice.
///
/// Renders nothing until the theme has been hydrated.
#[component]
pub fn ThemeSwitcher(#[props(default)] class: Option<String>) -> Element {
    let mut setter = use_theme_setter();
    let theme = use_resolved_theme();
    let classes = use_class_set(Component::ThemeSwitcher);

    let (Some(theme), Some(classes)) = (theme, classes) else {
        return rsx! {};
    };
    let classes = classes.with_override(class.as_deref());

    rsx! {
        button {
            class: "{classes}",
            r#type: "button",
            "aria-label": switch_label(theme),
            title: switch_label(theme),
            onclick: move |_| {
                setter.toggle();
            },
            span { class: "theme-switcher__icon", "{switch_icon(theme)}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_names_the_other_theme() {
        assert_eq!(switch_label(Theme::Light), "Switch to dark theme");
        assert_eq!(switch_label(Theme::Dark), "Switch to light theme");
        assert_ne!(switch_icon(Theme::Light), switch_icon(Theme::Dark));
    }
}
