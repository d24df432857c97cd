//! Routed pages.

mod ai;
mod dashboard;
mod home;
mod invoices;
mod not_found;
mod payments;
mod portal;
mod post_job;
mod rank;
mod reviews;
mod settings;

pub use ai::{FraudCheck, PriceEstimator, SentimentAnalysis};
pub use dashboard::Dashboard;
pub use home::{Home, HowItWorks};
pub use invoices::Invoices;
pub use not_found::NotFound;
pub use payments::Payments;
pub use portal::{PortalAlias, RoleSection};
pub use post_job::PostJob;
pub use rank::Rank;
pub use reviews::Reviews;
pub use settings::Settings;
