//! Dashboard overview route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use kridha_core::{AvailabilityStatus, UserStatus};

use crate::error::Result;
use crate::filters;
use crate::state::AppState;

/// Dashboard overview template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub total_revenue: String,
    pub total_profit: String,
    pub profit_margin: u32,
    pub total_transactions: u32,
    pub pending_transactions: u32,
    pub user_count: usize,
    pub active_users: usize,
    pub product_count: usize,
    pub out_of_stock: usize,
}

/// Display the dashboard overview.
///
/// Analytics, users and the product refresh run concurrently; a failed
/// product refresh falls back to the current local table.
#[instrument(skip(state))]
pub async fn dashboard(State(state): State<AppState>) -> Result<DashboardTemplate> {
    let (analytics, users, refreshed) = tokio::join!(
        state.analytics().fetch_analytics(),
        state.users().fetch_users(),
        state.products().refresh(),
    );

    if let Err(e) = refreshed {
        tracing::warn!(error = %e, "Product refresh failed, using local table");
    }

    let analytics = analytics?;
    let users = users?;
    let products = state.products().products();

    Ok(DashboardTemplate {
        total_revenue: analytics.total_revenue.to_string(),
        total_profit: analytics.total_profit.to_string(),
        profit_margin: analytics.profit_margin,
        total_transactions: analytics.total_transactions,
        pending_transactions: analytics.pending_transactions,
        user_count: users.len(),
        active_users: users
            .iter()
            .filter(|u| u.status == UserStatus::Active)
            .count(),
        product_count: products.len(),
        out_of_stock: products
            .iter()
            .filter(|p| p.availability_status == AvailabilityStatus::OutOfStock || p.stock == 0)
            .count(),
    })
}
