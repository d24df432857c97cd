//! Sample data for the page shells.
//!
//! The marketplace API is not part of the client; pages render these
//! fixed slices until a data layer is wired in.

use serde::{Deserialize, Serialize};

use crate::portal::PortalRole;
use crate::primitives::PaymentStatus;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Overdue,
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 3] = [InvoiceStatus::Paid, InvoiceStatus::Pending, InvoiceStatus::Overdue];

    pub fn label(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Pending => "Pending",
            InvoiceStatus::Overdue => "Overdue",
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub client: String,
    pub amount: String,
    pub status: InvoiceStatus,
    pub date: String,
}

impl Invoice {
    fn new(id: &str, client: &str, amount: &str, status: InvoiceStatus, date: &str) -> Self {
        Self {
            id: id.to_string(),
            client: client.to_string(),
            amount: amount.to_string(),
            status,
            date: date.to_string(),
        }
    }

    /// Cells in column order, for tables and CSV export.
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.client.clone(),
            self.amount.clone(),
            self.status.label().to_string(),
            self.date.clone(),
        ]
    }
}

pub const INVOICE_HEADERS: [&str; 5] = ["Invoice #", "Client", "Amount", "Status", "Date"];

pub fn invoices() -> Vec<Invoice> {
    vec![
        Invoice::new("INV-0001", "Acme Corp", "$1,200", InvoiceStatus::Paid, "2025-07-21"),
        Invoice::new("INV-0002", "Globex", "$850", InvoiceStatus::Pending, "2025-07-28"),
        Invoice::new("INV-0003", "Initech", "$2,050", InvoiceStatus::Overdue, "2025-08-01"),
    ]
}

/// Case-insensitive match of `query` against id or client, plus an optional
/// status filter. A blank query matches everything.
pub fn filter_invoices<'a>(
    all: &'a [Invoice],
    query: &str,
    status: Option<InvoiceStatus>,
) -> Vec<&'a Invoice> {
    let needle = query.trim().to_lowercase();
    all.iter()
        .filter(|inv| {
            needle.is_empty()
                || inv.id.to_lowercase().contains(&needle)
                || inv.client.to_lowercase().contains(&needle)
        })
        .filter(|inv| status.map_or(true, |s| inv.status == s))
        .collect()
}

#[derive(Clone, PartialEq, Debug)]
pub struct Transaction {
    pub id: String,
    pub description: String,
    pub amount: String,
    pub date: String,
    pub status: PaymentStatus,
}

pub fn transactions() -> Vec<Transaction> {
    let tx = |id: &str, description: &str, amount: &str, date: &str, status| Transaction {
        id: id.to_string(),
        description: description.to_string(),
        amount: amount.to_string(),
        date: date.to_string(),
        status,
    };
    vec![
        tx("TX-1001", "Milestone 1 - Landing page", "$600", "2025-07-02", PaymentStatus::Paid),
        tx("TX-1002", "Milestone 2 - Dashboard", "$900", "2025-07-16", PaymentStatus::Pending),
        tx("TX-1003", "Logo refresh", "$150", "2025-07-19", PaymentStatus::Failed),
        tx("TX-1004", "API integration", "$1,400", "2025-08-03", PaymentStatus::Paid),
    ]
}

#[derive(Clone, PartialEq, Debug)]
pub struct Metric {
    pub label: &'static str,
    pub value: String,
    /// Progress toward a goal, if the metric has one (0-100, clamped on render).
    pub progress: Option<f64>,
}

/// Key metrics on each role's dashboard.
pub fn dashboard_metrics(role: PortalRole) -> Vec<Metric> {
    let metric = |label, value: &str, progress| Metric {
        label,
        value: value.to_string(),
        progress,
    };
    match role {
        PortalRole::Client => vec![
            metric("Active projects", "4", None),
            metric("Total spend", "$12,450", None),
            metric("Budget used", "68%", Some(68.0)),
        ],
        PortalRole::Freelancer => vec![
            metric("Earnings this month", "$3,200", None),
            metric("Open proposals", "7", None),
            metric("Profile completeness", "85%", Some(85.0)),
        ],
        PortalRole::Admin => vec![
            metric("Registered users", "12,804", None),
            metric("Flagged reviews", "23", None),
            metric("Fraud checks passed", "97%", Some(97.0)),
        ],
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Review {
    pub author: String,
    pub text: String,
    /// Sentiment score in `[-1, 1]`.
    pub sentiment: f64,
}

pub fn reviews() -> Vec<Review> {
    let review = |author: &str, text: &str, sentiment| Review {
        author: author.to_string(),
        text: text.to_string(),
        sentiment,
    };
    vec![
        review("Jane Doe", "Delivered ahead of schedule, great communication.", 0.8),
        review("Globex", "Work was fine, a couple of revisions needed.", 0.05),
        review("Madonna", "Missed two deadlines without notice.", -0.6),
    ]
}

/// Freelancer rank score (0-100).
pub const SAMPLE_RANK_SCORE: f64 = 78.0;

/// Suggested skills offered by the post-job form.
pub fn skill_options() -> Vec<(&'static str, &'static str)> {
    vec![
        ("web", "Web development"),
        ("mobile", "Mobile apps"),
        ("design", "Design"),
        ("data", "Data & AI"),
        ("writing", "Writing"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_by_query_matches_id_or_client() {
        let all = invoices();
        assert_eq!(filter_invoices(&all, "acme", None).len(), 1);
        assert_eq!(filter_invoices(&all, "inv-000", None).len(), 3);
        assert_eq!(filter_invoices(&all, "   ", None).len(), 3);
        assert!(filter_invoices(&all, "umbrella", None).is_empty());
    }

    #[test]
    fn filter_by_status() {
        let all = invoices();
        let overdue = filter_invoices(&all, "", Some(InvoiceStatus::Overdue));
        assert_eq!(overdue.len(), 1);
        assert_eq!(overdue[0].client, "Initech");
        assert!(filter_invoices(&all, "acme", Some(InvoiceStatus::Pending)).is_empty());
    }

    #[test]
    fn every_role_has_metrics() {
        for role in PortalRole::ALL {
            assert!(!dashboard_metrics(role).is_empty());
        }
    }

    #[test]
    fn invoice_cells_match_headers() {
        assert_eq!(invoices()[0].cells().len(), INVOICE_HEADERS.len());
    }
}
