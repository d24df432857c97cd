//! Role portal delegation.
//!
//! `/:role/:section` and `/portal/:role/:section` both land here and render
//! the same shell for the same section.

use dioxus::prelude::*;
use megilance_core::{PortalRole, Section, ShellKind};
use megilance_ui::{EmptyState, PlaceholderPage};

use super::{Dashboard, Invoices, NotFound, Payments, PostJob, Rank, Reviews, Settings};

#[component]
pub fn RoleSection(role: PortalRole, section: Section) -> Element {
    if !role.has_section(section) {
        return rsx! {
            NotFound { segments: vec![role.slug().to_string(), section.slug().to_string()] }
        };
    }

    match section.kind() {
        ShellKind::Placeholder => rsx! {
            PlaceholderPage {
                title: section.title().to_string(),
                description: section.description().to_string(),
            }
        },
        ShellKind::EmptyState => rsx! {
            EmptyState {
                title: section.title().to_string(),
                description: section.description().to_string(),
                cta_label: section.call_to_action().unwrap_or("Get started").to_string(),
            }
        },
        ShellKind::Dedicated => dedicated_page(role, section),
    }
}

fn dedicated_page(role: PortalRole, section: Section) -> Element {
    match section {
        Section::Dashboard => rsx! { Dashboard { role } },
        Section::PostJob => rsx! { PostJob {} },
        Section::Invoices => rsx! { Invoices {} },
        Section::Payments => rsx! { Payments { role } },
        Section::Reviews => rsx! { Reviews {} },
        Section::Rank => rsx! { Rank {} },
        Section::Settings => rsx! { Settings { role } },
        other => {
            tracing::warn!(section = %other, "no dedicated page, showing placeholder");
            rsx! { PlaceholderPage { title: other.title().to_string() } }
        }
    }
}

/// `/portal/:role/:section` renders exactly what the canonical path does.
#[component]
pub fn PortalAlias(role: PortalRole, section: Section) -> Element {
    rsx! {
        RoleSection { role, section }
    }
}
