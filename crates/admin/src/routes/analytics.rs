//! Analytics route handlers.
//!
//! Aggregations render as tables; there is no chart pipeline.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::models::{DailyBucket, WeeklyBucket};
use crate::state::AppState;

/// Daily aggregation row for templates.
#[derive(Clone)]
pub struct DailyRowView {
    pub date: String,
    pub count: u32,
    pub revenue: String,
}

impl From<&DailyBucket> for DailyRowView {
    fn from(bucket: &DailyBucket) -> Self {
        Self {
            date: bucket.date.format("%d/%m/%Y").to_string(),
            count: bucket.count,
            revenue: bucket.revenue.to_string(),
        }
    }
}

/// Weekly aggregation row for templates.
#[derive(Clone)]
pub struct WeeklyRowView {
    pub week: String,
    pub count: u32,
    pub revenue: String,
}

impl From<&WeeklyBucket> for WeeklyRowView {
    fn from(bucket: &WeeklyBucket) -> Self {
        Self {
            week: bucket.week.clone(),
            count: bucket.count,
            revenue: bucket.revenue.to_string(),
        }
    }
}

/// Analytics page template.
#[derive(Template, WebTemplate)]
#[template(path = "analytics/index.html")]
pub struct AnalyticsIndexTemplate {
    pub total_revenue: String,
    pub total_profit: String,
    pub profit_margin: u32,
    pub total_transactions: u32,
    pub pending_transactions: u32,
    pub completed_transactions: u32,
    pub failed_transactions: u32,
    pub daily: Vec<DailyRowView>,
    pub weekly: Vec<WeeklyRowView>,
}

/// Display the analytics summary.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<AnalyticsIndexTemplate> {
    let summary = state.analytics().fetch_analytics().await?;

    Ok(AnalyticsIndexTemplate {
        total_revenue: summary.total_revenue.to_string(),
        total_profit: summary.total_profit.to_string(),
        profit_margin: summary.profit_margin,
        total_transactions: summary.total_transactions,
        pending_transactions: summary.pending_transactions,
        completed_transactions: summary.completed_transactions,
        failed_transactions: summary.failed_transactions,
        daily: summary.daily.iter().map(DailyRowView::from).collect(),
        weekly: summary.weekly.iter().map(WeeklyRowView::from).collect(),
    })
}
