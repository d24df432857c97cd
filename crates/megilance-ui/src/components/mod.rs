//! Themed components.
//!
//! Every component resolves its classes through the style table and renders
//! nothing until the theme has been hydrated.

mod accordion;
mod alert;
mod announcement;
mod avatar;
mod badge;
mod dropdown;
mod loader;
mod modal;
mod pagination;
mod placeholder;
mod preview_ribbon;
mod profile_menu;
mod progress;
mod tabs;
mod tag_input;
mod theme_switcher;
mod toaster;
mod tooltip;

pub use accordion::*;
pub use alert::*;
pub use announcement::*;
pub use avatar::*;
pub use badge::*;
pub use dropdown::*;
pub use loader::*;
pub use modal::*;
pub use pagination::*;
pub use placeholder::*;
pub use preview_ribbon::*;
pub use profile_menu::*;
pub use progress::*;
pub use tabs::*;
pub use tag_input::*;
pub use theme_switcher::*;
pub use toaster::*;
pub use tooltip::*;
