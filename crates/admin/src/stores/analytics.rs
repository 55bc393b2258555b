//! Fixture-backed analytics provider.
//!
//! Stands in for the analytics endpoint the backend does not expose yet.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;

use kridha_core::Price;

use crate::models::{AnalyticsSummary, DailyBucket, WeeklyBucket};

use super::{AnalyticsProvider, StoreError};

/// Simulated backend response time.
const FETCH_LATENCY: Duration = Duration::from_millis(1200);

/// Fixture-backed [`AnalyticsProvider`].
#[derive(Debug, Default, Clone)]
pub struct FixtureAnalyticsProvider;

#[async_trait]
impl AnalyticsProvider for FixtureAnalyticsProvider {
    async fn fetch_analytics(&self) -> Result<AnalyticsSummary, StoreError> {
        tokio::time::sleep(FETCH_LATENCY).await;
        Ok(fixture_analytics())
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

fn daily(y: i32, m: u32, d: u32, count: u32, revenue: i64) -> DailyBucket {
    DailyBucket {
        date: date(y, m, d),
        count,
        revenue: Price::from_rupees(revenue),
    }
}

fn weekly(week: &str, count: u32, revenue: i64) -> WeeklyBucket {
    WeeklyBucket {
        week: week.to_string(),
        count,
        revenue: Price::from_rupees(revenue),
    }
}

/// The seeded analytics summary.
#[must_use]
pub fn fixture_analytics() -> AnalyticsSummary {
    AnalyticsSummary {
        total_revenue: Price::from_rupees(47486),
        total_profit: Price::from_rupees(9497),
        profit_margin: 20,
        total_transactions: 15,
        pending_transactions: 3,
        completed_transactions: 10,
        failed_transactions: 2,
        daily: vec![
            daily(2025, 1, 10, 2, 8500),
            daily(2025, 1, 11, 1, 2999),
            daily(2025, 1, 12, 3, 12500),
            daily(2025, 1, 13, 2, 6800),
            daily(2025, 1, 14, 4, 9200),
            daily(2025, 1, 15, 3, 7487),
        ],
        weekly: vec![
            weekly("Week 1", 5, 15000),
            weekly("Week 2", 8, 22500),
            weekly("Week 3", 2, 9986),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_returns_seeded_summary() {
        let provider = FixtureAnalyticsProvider;
        let summary = provider.fetch_analytics().await.expect("fixture fetch");

        assert_eq!(summary.total_revenue, Price::from_rupees(47486));
        assert_eq!(summary.daily.len(), 6);
        assert_eq!(summary.weekly.len(), 3);
        assert_eq!(
            summary.pending_transactions
                + summary.completed_transactions
                + summary.failed_transactions,
            15
        );
    }
}
