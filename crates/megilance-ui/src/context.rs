//! Shared client state handed to every component through Dioxus context.
//!
//! [`ClientProvider`] owns the theme store, durable storage, the key
//! listener registry and the toast queue. Components reach them through the
//! `use_*` hooks below instead of any module-level global.
//!
//! ```ignore
//! rsx! {
//!     ClientProvider { storage: storage.clone(),
//!         Router::<Route> {}
//!     }
//! }
//!
//! // In a child component
//! let classes = use_class_set(Component::Badge);
//! ```

use std::time::Duration;

use dioxus::prelude::*;
use megilance_core::storage::SharedStorage;
use megilance_core::toast::{ToastId, ToastQueue, ToastRequest};
use megilance_core::widgets::KeyListeners;
use megilance_core::{ClassSet, Component, SystemPreference, Theme, ThemeState, ThemeStore};

/// How often the provider drops toasts whose deadline has passed.
const EXPIRY_TICK: Duration = Duration::from_millis(250);

#[derive(Props, Clone)]
pub struct ClientProviderProps {
    /// Backing store for the theme choice and dismissal flags.
    pub storage: SharedStorage,
    /// Theme forced from the command line or config, skipping hydration.
    #[props(default)]
    pub forced_theme: Option<Theme>,
    pub children: Element,
}

impl PartialEq for ClientProviderProps {
    fn eq(&self, other: &Self) -> bool {
        std::sync::Arc::ptr_eq(&self.storage, &other.storage)
            && self.forced_theme == other.forced_theme
            && self.children == other.children
    }
}

/// Provides theme, storage, key listeners and toasts to its subtree.
///
/// The theme starts `Unset`; hydration runs after the first render so
/// themed components render nothing until the stored choice is known.
#[component]
pub fn ClientProvider(props: ClientProviderProps) -> Element {
    let storage = props.storage.clone();
    let store = use_hook(|| ThemeStore::new(storage));
    let mut theme = use_signal(ThemeState::default);
    let toasts = use_signal(ToastQueue::new);

    use_context_provider(|| store.clone());
    use_context_provider(|| props.storage.clone());
    let listeners = use_context_provider(KeyListeners::new);
    use_context_provider(|| theme);
    use_context_provider(|| Toaster { queue: toasts });

    // Expiry runs in the provider's scope so a toast outlives the page that
    // raised it.
    use_future(move || async move {
        let mut toasts = toasts;
        loop {
            tokio::time::sleep(EXPIRY_TICK).await;
            let now = chrono::Utc::now();
            if toasts.peek().has_due(now) {
                let removed = toasts.write().expire(now);
                tracing::trace!(removed, "toasts expired");
            }
        }
    });

    let forced = props.forced_theme;
    let hydrate_store = store.clone();
    use_effect(move || {
        let resolved = match forced {
            Some(forced) => {
                hydrate_store.set_theme(forced);
                forced
            }
            None => hydrate_store.hydrate(SystemPreference::from_env()),
        };
        theme.set(ThemeState::Resolved(resolved));
    });

    rsx! {
        div {
            class: "key-scope",
            onkeydown: move |evt| {
                if evt.key() == Key::Escape && listeners.dispatch_escape() {
                    evt.stop_propagation();
                }
            },
            {props.children}
        }
    }
}

/// Current theme state, `Unset` until hydration.
pub fn use_theme() -> Signal<ThemeState> {
    use_context::<Signal<ThemeState>>()
}

/// The resolved theme, or `None` before hydration.
pub fn use_resolved_theme() -> Option<Theme> {
    use_theme()().resolved()
}

pub fn use_theme_store() -> ThemeStore {
    use_context::<ThemeStore>()
}

pub fn use_storage() -> SharedStorage {
    use_context::<SharedStorage>()
}

pub fn use_key_listeners() -> KeyListeners {
    use_context::<KeyListeners>()
}

/// Class set for `component` under the current theme, or `None` while unset.
pub fn use_class_set(component: Component) -> Option<ClassSet> {
    ClassSet::resolve(component, use_theme()())
}

/// Handle used to set the theme from event handlers.
///
/// Writes the store (which persists) and the signal together so every
/// subscriber sees the same value.
#[derive(Clone)]
pub struct ThemeSetter {
    store: ThemeStore,
    signal: Signal<ThemeState>,
}

impl ThemeSetter {
    pub fn set(&mut self, theme: Theme) {
        self.store.set_theme(theme);
        self.signal.set(ThemeState::Resolved(theme));
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.store.toggle();
        self.signal.set(ThemeState::Resolved(next));
        next
    }
}

pub fn use_theme_setter() -> ThemeSetter {
    ThemeSetter {
        store: use_theme_store(),
        signal: use_theme(),
    }
}

/// Toast facility: queue plus auto-dismiss.
#[derive(Clone, Copy, PartialEq)]
pub struct Toaster {
    queue: Signal<ToastQueue>,
}

impl Toaster {
    /// Queue a toast. [`ClientProvider`] removes it once its duration runs
    /// out, whether or not the caller is still mounted.
    pub fn notify(&mut self, request: ToastRequest) -> ToastId {
        self.queue.write().notify(request)
    }

    pub fn dismiss(&mut self, id: ToastId) {
        self.queue.write().dismiss(id);
    }

    pub fn queue(&self) -> Signal<ToastQueue> {
        self.queue
    }
}

pub fn use_toaster() -> Toaster {
    use_context::<Toaster>()
}
