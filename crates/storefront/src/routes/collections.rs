//! Collection route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use tracing::instrument;

use kridha_core::{CategoryId, Collection};

use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;

pub use super::products::ProductCardView;

/// Collection display data for templates.
#[derive(Clone)]
pub struct CollectionCardView {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub image: String,
}

impl From<&Collection> for CollectionCardView {
    fn from(collection: &Collection) -> Self {
        Self {
            id: collection.id.to_string(),
            name: collection.name.clone(),
            slug: collection.slug.clone(),
            image: collection.image.clone(),
        }
    }
}

/// Collection listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "collections/index.html")]
pub struct CollectionsIndexTemplate {
    pub collections: Vec<CollectionCardView>,
}

/// Collection detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "collections/show.html")]
pub struct CollectionShowTemplate {
    pub collection: CollectionCardView,
    pub products: Vec<ProductCardView>,
}

/// Display collection listing page.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let collections = state
        .catalog()
        .fetch_collections()
        .await
        .unwrap_or_default()
        .iter()
        .map(CollectionCardView::from)
        .collect();

    CollectionsIndexTemplate { collections }
}

/// Display collection detail page: the collection's products only.
#[instrument(skip(state), fields(id = %id))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<CollectionShowTemplate> {
    let category_id = CategoryId::from(id);

    let collection = state
        .catalog()
        .collection_by_id(&category_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("collection {category_id}")))?;

    let products = state
        .catalog()
        .products_in(&category_id)
        .await
        .unwrap_or_default()
        .iter()
        .map(ProductCardView::from)
        .collect();

    Ok(CollectionShowTemplate {
        collection: CollectionCardView::from(&collection),
        products,
    })
}
