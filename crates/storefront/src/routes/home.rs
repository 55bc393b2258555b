//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::filters;
use crate::state::AppState;

use super::collections::CollectionCardView;
use super::products::ProductCardView;

/// Number of products in the new-arrivals section.
const NEW_ARRIVALS_COUNT: usize = 8;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub new_arrivals: Vec<ProductCardView>,
    pub collections: Vec<CollectionCardView>,
}

/// Display the home page: newest products plus the collection grid.
///
/// The two fetches are independent and run concurrently; either failing
/// renders its section empty.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let (new_arrivals, collections) = tokio::join!(
        state.catalog().new_arrivals(NEW_ARRIVALS_COUNT),
        state.catalog().fetch_collections(),
    );

    HomeTemplate {
        new_arrivals: new_arrivals
            .unwrap_or_default()
            .iter()
            .map(ProductCardView::from)
            .collect(),
        collections: collections
            .unwrap_or_default()
            .iter()
            .map(CollectionCardView::from)
            .collect(),
    }
}
