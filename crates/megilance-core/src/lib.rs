//! MegiLance client core.
//!
//! Framework-free state and rules behind the MegiLance desktop client:
//! the theme store, the per-component style table, presentational
//! primitives, widget state machines, the toast queue, and the role portal
//! route table. The Dioxus components in `megilance-ui` render these.
//!
//! ## Quick Start
//!
//! ```ignore
//! use megilance_core::{storage, ClassSet, Component, SystemPreference, ThemeStore};
//!
//! let storage = storage::open_or_memory("/tmp/megilance/client.redb");
//! let store = ThemeStore::new(storage);
//! let theme = store.hydrate(SystemPreference::from_env());
//!
//! let classes = ClassSet::themed(Component::Badge, theme).variant("badge--success");
//! assert_eq!(classes.to_string(), "badge badge--light badge--success");
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod fixtures;
pub mod flags;
pub mod logging;
pub mod portal;
pub mod primitives;
pub mod storage;
pub mod style;
pub mod theme;
pub mod toast;
pub mod widgets;

// Re-exports
pub use config::{default_data_dir, AnnouncementConfig, ClientConfig};
pub use error::{Result, UiError};
pub use portal::{PortalRole, Section, ShellKind};
pub use primitives::{
    AlertSeverity, BadgeVariant, GaugeGeometry, Initials, LoaderSize, LoaderVariant,
    PaymentStatus, Percent, Sentiment, TooltipPosition,
};
pub use storage::{ClientStorage, MemoryStorage, RedbStorage, SharedStorage};
pub use style::{ClassSet, Component, StyleEntry};
pub use theme::{SystemPreference, Theme, ThemeState, ThemeStore};
pub use toast::{Toast, ToastId, ToastQueue, ToastRequest, ToastVariant};
