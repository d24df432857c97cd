//! Theme preference and the session-lived theme store.
//!
//! Exactly one [`Theme`] is active once the store has been hydrated. Before
//! that the state is [`ThemeState::Unset`] and themed components render
//! nothing, so the user never sees a flash of the wrong palette.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::UiError;
use crate::storage::SharedStorage;

/// Storage key holding the persisted theme name.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Environment variable consulted for the system colour-scheme hint.
pub const SYSTEM_SCHEME_ENV: &str = "MEGILANCE_COLOR_SCHEME";

/// A named visual mode.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme.
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UiError::UnknownTheme(other.to_string())),
        }
    }
}

/// Theme as observed by components: unset until hydration completes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ThemeState {
    #[default]
    Unset,
    Resolved(Theme),
}

impl ThemeState {
    /// The resolved theme, or `None` while still unset.
    pub fn resolved(&self) -> Option<Theme> {
        match self {
            ThemeState::Unset => None,
            ThemeState::Resolved(theme) => Some(*theme),
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, ThemeState::Unset)
    }
}

/// System-level colour scheme preference.
///
/// Desktop platforms do not expose one uniformly, so the shell reads
/// [`SYSTEM_SCHEME_ENV`]; anything other than `light`/`dark` means no hint.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SystemPreference(pub Option<Theme>);

impl SystemPreference {
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(SYSTEM_SCHEME_ENV).ok().as_deref())
    }

    pub fn from_value(value: Option<&str>) -> Self {
        SystemPreference(value.and_then(|v| v.parse().ok()))
    }
}

/// Session-lived theme state, passed down as an explicit context object.
///
/// Reads take the whole [`ThemeState`] under one lock, so concurrently
/// rendered components always agree on the active theme.
#[derive(Clone)]
pub struct ThemeStore {
    state: Arc<RwLock<ThemeState>>,
    storage: SharedStorage,
}

impl ThemeStore {
    /// Create an unhydrated store backed by `storage`.
    pub fn new(storage: SharedStorage) -> Self {
        Self {
            state: Arc::new(RwLock::new(ThemeState::Unset)),
            storage,
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> ThemeState {
        *self.state.read()
    }

    /// Seed the store: stored choice first, then the system hint, then light.
    ///
    /// A stored value that does not parse is ignored (and logged).
    pub fn hydrate(&self, system: SystemPreference) -> Theme {
        let stored = self
            .storage
            .get_or_absent(THEME_STORAGE_KEY)
            .and_then(|raw| match raw.parse::<Theme>() {
                Ok(theme) => Some(theme),
                Err(e) => {
                    tracing::warn!("ignoring stored theme: {}", e);
                    None
                }
            });

        let theme = stored.or(system.0).unwrap_or_default();
        *self.state.write() = ThemeState::Resolved(theme);
        tracing::debug!(%theme, from_storage = stored.is_some(), "theme hydrated");
        theme
    }

    /// Set and persist the active theme. Always succeeds; a failed write
    /// only means the choice will not survive a restart.
    pub fn set_theme(&self, theme: Theme) {
        *self.state.write() = ThemeState::Resolved(theme);
        self.storage.set_or_skip(THEME_STORAGE_KEY, theme.as_str());
        tracing::info!(%theme, "theme changed");
    }

    /// Flip between light and dark and return the new theme.
    ///
    /// An unset store toggles from the default (light) to dark.
    pub fn toggle(&self) -> Theme {
        let next = self.state().resolved().unwrap_or_default().toggled();
        self.set_theme(next);
        next
    }

    /// Back to `Unset`. Test harnesses call this between cases.
    pub fn reset(&self) {
        *self.state.write() = ThemeState::Unset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{ClientStorage, MemoryStorage};

    fn make_store() -> (ThemeStore, MemoryStorage) {
        let mem = MemoryStorage::new();
        (ThemeStore::new(Arc::new(mem.clone())), mem)
    }

    #[test]
    fn starts_unset() {
        let (store, _) = make_store();
        assert!(store.state().is_unset());
        assert_eq!(store.state().resolved(), None);
    }

    #[test]
    fn hydrate_prefers_storage() {
        let (store, mem) = make_store();
        mem.set(THEME_STORAGE_KEY, "dark").unwrap();
        let theme = store.hydrate(SystemPreference(Some(Theme::Light)));
        assert_eq!(theme, Theme::Dark);
        assert_eq!(store.state(), ThemeState::Resolved(Theme::Dark));
    }

    #[test]
    fn hydrate_falls_back_to_system_then_light() {
        let (store, _) = make_store();
        assert_eq!(store.hydrate(SystemPreference(Some(Theme::Dark))), Theme::Dark);

        let (store, _) = make_store();
        assert_eq!(store.hydrate(SystemPreference::default()), Theme::Light);
    }

    #[test]
    fn hydrate_ignores_garbage() {
        let (store, mem) = make_store();
        mem.set(THEME_STORAGE_KEY, "purple").unwrap();
        assert_eq!(store.hydrate(SystemPreference(Some(Theme::Dark))), Theme::Dark);
    }

    #[test]
    fn set_theme_persists() {
        let (store, mem) = make_store();
        store.set_theme(Theme::Dark);
        assert_eq!(mem.get(THEME_STORAGE_KEY).unwrap().as_deref(), Some("dark"));

        // A fresh store over the same storage sees the choice
        let again = ThemeStore::new(Arc::new(mem));
        assert_eq!(again.hydrate(SystemPreference::default()), Theme::Dark);
    }

    #[test]
    fn toggle_flips() {
        let (store, _) = make_store();
        store.hydrate(SystemPreference::default());
        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(store.toggle(), Theme::Light);
    }

    #[test]
    fn reset_returns_to_unset() {
        let (store, _) = make_store();
        store.set_theme(Theme::Dark);
        store.reset();
        assert!(store.state().is_unset());
    }

    #[test]
    fn system_preference_parsing() {
        assert_eq!(SystemPreference::from_value(Some("dark")).0, Some(Theme::Dark));
        assert_eq!(SystemPreference::from_value(Some(" light ")).0, Some(Theme::Light));
        assert_eq!(SystemPreference::from_value(Some("auto")).0, None);
        assert_eq!(SystemPreference::from_value(None).0, None);
    }

    #[test]
    fn theme_from_str() {
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert!(matches!("x".parse::<Theme>(), Err(UiError::UnknownTheme(_))));
    }
}
