//! Domain models for the admin dashboard.

pub mod analytics;
pub mod transaction;
pub mod user;

pub use analytics::{AnalyticsSummary, DailyBucket, WeeklyBucket};
pub use transaction::{Transaction, TransactionLine};
pub use user::User;
