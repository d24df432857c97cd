//! Style table: (component, theme, variant) -> class set.
//!
//! Every themed component pairs a theme-independent "common" class with
//! exactly one theme overlay. Classes are merged in a fixed order so later
//! sources win on conflicting CSS declarations:
//!
//! ```text
//! common base  ->  theme overlay  ->  variant  ->  caller override
//! ```
//!
//! Overlay classes follow the `<base>--light` / `<base>--dark` convention, so
//! the global stylesheet only needs one rule per (component, theme).

use std::borrow::Cow;
use std::fmt;

use crate::theme::{Theme, ThemeState};

/// Every component that resolves its look from the theme.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Component {
    Accordion,
    AppShell,
    Alert,
    Announcement,
    Avatar,
    Badge,
    Dropdown,
    Loader,
    Modal,
    Pagination,
    PaymentBadge,
    PlaceholderPage,
    PreviewRibbon,
    ProfileMenu,
    ProgressBar,
    RankGauge,
    Sentiment,
    Tabs,
    TagInput,
    ThemeSwitcher,
    Toast,
    Tooltip,
}

/// Base class and the two theme overlays for one component.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleEntry {
    pub common: &'static str,
    pub light: &'static str,
    pub dark: &'static str,
}

impl StyleEntry {
    pub fn overlay(&self, theme: Theme) -> &'static str {
        match theme {
            Theme::Light => self.light,
            Theme::Dark => self.dark,
        }
    }
}

macro_rules! entry {
    ($base:literal) => {
        StyleEntry {
            common: $base,
            light: concat!($base, "--light"),
            dark: concat!($base, "--dark"),
        }
    };
}

impl Component {
    /// The fixed style entry for this component.
    pub const fn style(self) -> StyleEntry {
        match self {
            Component::Accordion => entry!("accordion"),
            Component::AppShell => entry!("app-shell"),
            Component::Alert => entry!("alert"),
            Component::Announcement => entry!("announcement"),
            Component::Avatar => entry!("avatar"),
            Component::Badge => entry!("badge"),
            Component::Dropdown => entry!("dropdown"),
            Component::Loader => entry!("loader"),
            Component::Modal => entry!("modal"),
            Component::Pagination => entry!("pagination"),
            Component::PaymentBadge => entry!("payment-badge"),
            Component::PlaceholderPage => entry!("placeholder-page"),
            Component::PreviewRibbon => entry!("preview-ribbon"),
            Component::ProfileMenu => entry!("profile-menu"),
            Component::ProgressBar => entry!("progress-bar"),
            Component::RankGauge => entry!("rank-gauge"),
            Component::Sentiment => entry!("sentiment"),
            Component::Tabs => entry!("tabs"),
            Component::TagInput => entry!("tag-input"),
            Component::ThemeSwitcher => entry!("theme-switcher"),
            Component::Toast => entry!("toast"),
            Component::Tooltip => entry!("tooltip"),
        }
    }
}

/// Ordered list of classes for one rendered element.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ClassSet {
    classes: Vec<Cow<'static, str>>,
}

impl ClassSet {
    /// Common base followed by the overlay for `theme`.
    pub fn themed(component: Component, theme: Theme) -> Self {
        let entry = component.style();
        Self {
            classes: vec![Cow::Borrowed(entry.common), Cow::Borrowed(entry.overlay(theme))],
        }
    }

    /// Resolve against a possibly-unset theme. `None` means "render nothing yet".
    pub fn resolve(component: Component, state: ThemeState) -> Option<Self> {
        state.resolved().map(|theme| Self::themed(component, theme))
    }

    /// Append a variant class.
    pub fn variant(mut self, class: &'static str) -> Self {
        self.classes.push(Cow::Borrowed(class));
        self
    }

    /// Append a class only when `on` is true (e.g. `open`, `selected`).
    pub fn when(mut self, on: bool, class: &'static str) -> Self {
        if on {
            self.classes.push(Cow::Borrowed(class));
        }
        self
    }

    /// Append the caller-supplied override. Empty or missing overrides are skipped.
    pub fn with_override(mut self, extra: Option<&str>) -> Self {
        if let Some(extra) = extra.map(str::trim).filter(|s| !s.is_empty()) {
            self.classes.push(Cow::Owned(extra.to_string()));
        }
        self
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(|c| c.as_ref())
    }
}

impl fmt::Display for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, class) in self.classes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(class)?;
        }
        Ok(())
    }
}

/// Every component, for table-wide checks.
pub const ALL_COMPONENTS: &[Component] = &[
    Component::Accordion,
    Component::AppShell,
    Component::Alert,
    Component::Announcement,
    Component::Avatar,
    Component::Badge,
    Component::Dropdown,
    Component::Loader,
    Component::Modal,
    Component::Pagination,
    Component::PaymentBadge,
    Component::PlaceholderPage,
    Component::PreviewRibbon,
    Component::ProfileMenu,
    Component::ProgressBar,
    Component::RankGauge,
    Component::Sentiment,
    Component::Tabs,
    Component::TagInput,
    Component::ThemeSwitcher,
    Component::Toast,
    Component::Tooltip,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_matches_theme_and_never_both() {
        for &component in ALL_COMPONENTS {
            let entry = component.style();
            for theme in [Theme::Light, Theme::Dark] {
                let set = ClassSet::themed(component, theme);
                assert!(set.contains(entry.common));
                assert!(set.contains(entry.overlay(theme)));
                assert!(!set.contains(entry.overlay(theme.toggled())));
            }
        }
    }

    #[test]
    fn merge_order_is_common_overlay_variant_override() {
        let set = ClassSet::themed(Component::Badge, Theme::Dark)
            .variant("badge--success")
            .with_override(Some("wide"));
        assert_eq!(set.to_string(), "badge badge--dark badge--success wide");
    }

    #[test]
    fn empty_override_is_skipped() {
        let set = ClassSet::themed(Component::Loader, Theme::Light).with_override(Some("  "));
        assert_eq!(set.to_string(), "loader loader--light");
        let set = ClassSet::themed(Component::Loader, Theme::Light).with_override(None);
        assert_eq!(set.iter().count(), 2);
    }

    #[test]
    fn unset_theme_resolves_to_nothing() {
        assert!(ClassSet::resolve(Component::Modal, ThemeState::Unset).is_none());
        assert!(ClassSet::resolve(Component::Modal, ThemeState::Resolved(Theme::Light)).is_some());
    }

    #[test]
    fn when_adds_conditionally() {
        let set = ClassSet::themed(Component::Dropdown, Theme::Light)
            .when(true, "open")
            .when(false, "closed");
        assert!(set.contains("open"));
        assert!(!set.contains("closed"));
    }

    #[test]
    fn overlay_naming_convention() {
        let entry = Component::PaymentBadge.style();
        assert_eq!(entry.light, "payment-badge--light");
        assert_eq!(entry.dark, "payment-badge--dark");
    }
}
