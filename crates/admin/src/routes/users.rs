//! User directory route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::instrument;

use kridha_core::UserStatus;

use crate::error::Result;
use crate::filters;
use crate::models::User;
use crate::state::AppState;

/// User row display data for templates.
#[derive(Clone)]
pub struct UserRowView {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub total_orders: u32,
    pub total_spent: String,
    pub status: String,
    pub joined_at: String,
    pub last_order_at: String,
}

impl From<&User> for UserRowView {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.to_string(),
            phone: user.phone.clone(),
            total_orders: user.total_orders,
            total_spent: user.total_spent.to_string(),
            status: user.status.to_string(),
            joined_at: user.joined_at.format("%d/%m/%Y").to_string(),
            last_order_at: user
                .last_order_at
                .map_or_else(String::new, |d| d.format("%d/%m/%Y").to_string()),
        }
    }
}

/// User listing query parameters.
#[derive(Debug, Deserialize)]
pub struct UserListQuery {
    pub q: Option<String>,
    pub status: Option<String>,
}

/// User directory page template.
#[derive(Template, WebTemplate)]
#[template(path = "users/index.html")]
pub struct UsersIndexTemplate {
    pub users: Vec<UserRowView>,
    pub total: usize,
    pub q: String,
    pub status: String,
}

/// Display the user directory with search and status filtering.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<UserListQuery>,
) -> Result<UsersIndexTemplate> {
    let users = state.users().fetch_users().await?;
    let total = users.len();

    let needle = query.q.unwrap_or_default();
    let status_filter = query
        .status
        .as_deref()
        .and_then(|s| s.parse::<UserStatus>().ok());

    let rows = users
        .iter()
        .filter(|user| needle.is_empty() || user.matches(&needle))
        .filter(|user| status_filter.is_none_or(|status| user.status == status))
        .map(UserRowView::from)
        .collect();

    Ok(UsersIndexTemplate {
        users: rows,
        total,
        q: needle,
        status: query.status.unwrap_or_default(),
    })
}
