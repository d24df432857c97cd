//! Role-scoped portal sections.
//!
//! Every section has one canonical path (`/<role>/<section>`) and one alias
//! under `/portal/...` that renders the very same page. Sections without
//! content yet render a placeholder or an empty-state call to action.

use std::fmt;
use std::str::FromStr;

use crate::error::UiError;

/// Who the portal is being shown to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PortalRole {
    Client,
    Freelancer,
    Admin,
}

impl PortalRole {
    pub const ALL: [PortalRole; 3] = [PortalRole::Client, PortalRole::Freelancer, PortalRole::Admin];

    pub fn slug(&self) -> &'static str {
        match self {
            PortalRole::Client => "client",
            PortalRole::Freelancer => "freelancer",
            PortalRole::Admin => "admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PortalRole::Client => "Client",
            PortalRole::Freelancer => "Freelancer",
            PortalRole::Admin => "Admin",
        }
    }

    /// Sections shown in this role's sidebar, in order.
    pub fn sections(&self) -> &'static [Section] {
        use Section::*;
        match self {
            PortalRole::Client => &[
                Dashboard, Projects, PostJob, Hire, Freelancers, Payments, Wallet, Reviews,
                Analytics, Settings,
            ],
            PortalRole::Freelancer => &[
                Dashboard, MyJobs, Projects, Proposals, Contracts, Invoices, Timesheets, Wallet,
                Withdraw, Portfolio, Reviews, Rank, Analytics, JobAlerts, Notifications, Profile,
                Settings, Support,
            ],
            PortalRole::Admin => &[
                Dashboard, Users, Projects, Payments, AiMonitoring, AuditLogs, Calendar, Support,
                Settings,
            ],
        }
    }

    pub fn has_section(&self, section: Section) -> bool {
        self.sections().contains(&section)
    }
}

impl fmt::Display for PortalRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for PortalRole {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PortalRole::ALL
            .into_iter()
            .find(|role| role.slug() == s)
            .ok_or_else(|| UiError::Config(format!("unknown portal role: {s}")))
    }
}

/// How a section's page shell renders.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ShellKind {
    /// Title plus "under construction" text.
    Placeholder,
    /// Empty list with a call to action that raises a toast.
    EmptyState,
    /// A dedicated page component.
    Dedicated,
}

macro_rules! sections {
    ($( $variant:ident => ($slug:literal, $title:literal, $kind:ident) ),+ $(,)?) => {
        /// A page inside the role portal.
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        pub enum Section {
            $( $variant, )+
        }

        impl Section {
            pub const ALL: &'static [Section] = &[ $( Section::$variant, )+ ];

            pub fn slug(&self) -> &'static str {
                match self {
                    $( Section::$variant => $slug, )+
                }
            }

            pub fn title(&self) -> &'static str {
                match self {
                    $( Section::$variant => $title, )+
                }
            }

            pub fn kind(&self) -> ShellKind {
                match self {
                    $( Section::$variant => ShellKind::$kind, )+
                }
            }
        }
    };
}

sections! {
    Dashboard => ("dashboard", "Dashboard", Dedicated),
    MyJobs => ("my-jobs", "My Jobs", Placeholder),
    Projects => ("projects", "Projects", Placeholder),
    PostJob => ("post-job", "Post a Job", Dedicated),
    Hire => ("hire", "Hire Talent", Placeholder),
    Freelancers => ("freelancers", "Freelancers", Placeholder),
    Proposals => ("proposals", "Proposals", EmptyState),
    Contracts => ("contracts", "Contracts", EmptyState),
    Invoices => ("invoices", "Invoices", Dedicated),
    Timesheets => ("timesheets", "Timesheets", Placeholder),
    Payments => ("payments", "Payments", Dedicated),
    Wallet => ("wallet", "Wallet", Placeholder),
    Withdraw => ("withdraw", "Withdraw Funds", Placeholder),
    Portfolio => ("portfolio", "Portfolio", EmptyState),
    Reviews => ("reviews", "Reviews", Dedicated),
    Rank => ("rank", "Freelancer Rank", Dedicated),
    Analytics => ("analytics", "Analytics", Placeholder),
    JobAlerts => ("job-alerts", "Job Alerts", EmptyState),
    Notifications => ("notifications", "Notifications", EmptyState),
    Profile => ("profile", "Profile", Placeholder),
    Settings => ("settings", "Settings", Dedicated),
    Support => ("support", "Support", Placeholder),
    Users => ("users", "Users", Placeholder),
    AiMonitoring => ("ai-monitoring", "AI Monitoring", Placeholder),
    AuditLogs => ("audit-logs", "Audit Logs", Placeholder),
    Calendar => ("calendar", "Calendar", Placeholder),
}

/// Default placeholder copy.
pub const UNDER_CONSTRUCTION: &str = "This page is under construction. Content will be added soon.";

impl Section {
    /// Copy shown under the title of a placeholder or empty-state page.
    pub fn description(&self) -> &'static str {
        match self {
            Section::Proposals => "You have not sent any proposals yet.",
            Section::Contracts => "No active contracts. Accepted proposals show up here.",
            Section::Portfolio => "Showcase your best work to win more clients.",
            Section::JobAlerts => "Create an alert to hear about matching jobs first.",
            Section::Notifications => "You're all caught up.",
            _ => UNDER_CONSTRUCTION,
        }
    }

    /// Label of the empty-state call to action, for empty-state sections.
    pub fn call_to_action(&self) -> Option<&'static str> {
        match self {
            Section::Proposals => Some("Browse jobs"),
            Section::Contracts => Some("View proposals"),
            Section::Portfolio => Some("Add portfolio item"),
            Section::JobAlerts => Some("Create job alert"),
            Section::Notifications => Some("Notification settings"),
            _ => None,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Section {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .iter()
            .copied()
            .find(|section| section.slug() == s)
            .ok_or_else(|| UiError::Config(format!("unknown portal section: {s}")))
    }
}

/// `/<role>/<section>`
pub fn canonical_path(role: PortalRole, section: Section) -> String {
    format!("/{}/{}", role.slug(), section.slug())
}

/// `/portal/<role>/<section>`, rendering the same page as the canonical path.
pub fn portal_alias(role: PortalRole, section: Section) -> String {
    format!("/portal{}", canonical_path(role, section))
}

/// Map a canonical or aliased path to the page it shows.
///
/// Returns `None` for unknown roles or sections, and for sections the role
/// does not have.
pub fn resolve_path(path: &str) -> Option<(PortalRole, Section)> {
    let trimmed = path.trim_matches('/');
    let trimmed = trimmed.strip_prefix("portal/").unwrap_or(trimmed);
    let (role, section) = trimmed.split_once('/')?;
    let role: PortalRole = role.parse().ok()?;
    let section: Section = section.parse().ok()?;
    role.has_section(section).then_some((role, section))
}
