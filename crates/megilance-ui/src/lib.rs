//! MegiLance UI Components
//!
//! Dioxus components for the MegiLance desktop client. State and rules come
//! from `megilance-core`; this crate only renders them.
//!
//! ## Theming
//!
//! Wrap the app in [`ClientProvider`]. Every component reads the theme from
//! context and asks the style table for its classes:
//!
//! ```text
//! common base  ->  light/dark overlay  ->  variant  ->  caller `class`
//! ```
//!
//! Until the stored theme is loaded the components render nothing.

pub mod components;
pub mod context;

pub use components::*;
pub use context::{
    use_class_set, use_key_listeners, use_resolved_theme, use_storage, use_theme,
    use_theme_setter, use_theme_store, use_toaster, ClientProvider, ThemeSetter, Toaster,
};
