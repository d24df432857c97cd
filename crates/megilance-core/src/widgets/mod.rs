//! State machines behind the composite widgets.
//!
//! Each widget owns one piece of transient state and enforces one invariant.
//! The Dioxus components in `megilance-ui` hold these inside signals and
//! forward user events to them.

mod announcement;
mod disclosure;
mod dropdown;
mod modal;
mod pagination;
mod selection;
mod tabs;
mod tag_input;

pub use announcement::{announcement_key, Announcement, ANNOUNCEMENT_KEY_PREFIX};
pub use disclosure::Disclosure;
pub use dropdown::{DropdownOption, DropdownState};
pub use modal::{KeyListeners, ListenerGuard, ModalState};
pub use pagination::Pager;
pub use selection::Selection;
pub use tabs::{TabKey, TabsState};
pub use tag_input::{TagKey, TagList, TagOutcome};
