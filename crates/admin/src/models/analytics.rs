//! Store analytics model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use kridha_core::Price;

/// Transactions aggregated over one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBucket {
    /// The day.
    pub date: NaiveDate,
    /// Transactions that day.
    pub count: u32,
    /// Revenue that day.
    pub revenue: Price,
}

/// Transactions aggregated over one week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyBucket {
    /// Week label (e.g., "Week 1").
    pub week: String,
    /// Transactions that week.
    pub count: u32,
    /// Revenue that week.
    pub revenue: Price,
}

/// Store-wide analytics summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    /// Lifetime revenue.
    pub total_revenue: Price,
    /// Lifetime profit.
    pub total_profit: Price,
    /// Profit margin in whole percent.
    pub profit_margin: u32,
    /// Transactions overall.
    pub total_transactions: u32,
    /// Transactions awaiting payment.
    pub pending_transactions: u32,
    /// Transactions paid in full.
    pub completed_transactions: u32,
    /// Transactions that failed.
    pub failed_transactions: u32,
    /// Per-day aggregation, oldest first.
    pub daily: Vec<DailyBucket>,
    /// Per-week aggregation, oldest first.
    pub weekly: Vec<WeeklyBucket>,
}
