//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use tracing::instrument;

use kridha_core::Product;

use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;

/// Number of related products shown on the detail page.
const RELATED_COUNT: usize = 4;

/// Product card display data for templates.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub brand: String,
    pub description: String,
    pub price: String,
    pub thumbnail: String,
    pub availability: String,
    pub purchasable: bool,
}

/// Product detail display data for templates.
#[derive(Clone)]
pub struct ProductDetailView {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub brand: String,
    pub category: String,
    pub description: String,
    pub price: String,
    pub stock: u32,
    pub thumbnail: String,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub availability: String,
    pub purchasable: bool,
}

// =============================================================================
// Type Conversions
// =============================================================================

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            slug: product.slug.clone(),
            title: product.title.clone(),
            brand: product.brand.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            thumbnail: product.thumbnail.clone(),
            availability: product.availability_status.to_string(),
            purchasable: product.is_purchasable(),
        }
    }
}

impl From<&Product> for ProductDetailView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            slug: product.slug.clone(),
            title: product.title.clone(),
            brand: product.brand.clone(),
            category: product.category.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            stock: product.stock,
            thumbnail: product.thumbnail.clone(),
            images: product.images.clone(),
            tags: product.tags.clone(),
            availability: product.availability_status.to_string(),
            purchasable: product.is_purchasable(),
        }
    }
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub products: Vec<ProductCardView>,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: ProductDetailView,
    pub related: Vec<ProductCardView>,
}

/// Display product listing page.
///
/// A failed catalog fetch renders the empty state; the error is already
/// logged by the client.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let products = state
        .catalog()
        .fetch_products()
        .await
        .unwrap_or_default()
        .iter()
        .map(ProductCardView::from)
        .collect();

    ProductsIndexTemplate { products }
}

/// Display product detail page with related products from the same category.
#[instrument(skip(state), fields(slug = %slug))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<ProductShowTemplate> {
    let product = state
        .catalog()
        .product_by_slug(&slug)
        .await
        .ok_or_else(|| AppError::NotFound(format!("product {slug}")))?;

    let related: Vec<ProductCardView> = state
        .catalog()
        .products_in(&product.category_id)
        .await
        .unwrap_or_default()
        .iter()
        .filter(|p| p.id != product.id)
        .take(RELATED_COUNT)
        .map(ProductCardView::from)
        .collect();

    Ok(ProductShowTemplate {
        product: ProductDetailView::from(&product),
        related,
    })
}
