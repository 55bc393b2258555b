//! Product CRUD route handlers.
//!
//! Listing refreshes from the real backend; create, update and delete act
//! on the optimistic local table only.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::Redirect,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use kridha_core::{AvailabilityStatus, Price, Product, ProductId};

use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;
use crate::stores::ProductDraft;

/// Product row display data for templates.
#[derive(Clone)]
pub struct ProductRowView {
    pub id: String,
    pub title: String,
    pub brand: String,
    pub category: String,
    pub price: String,
    pub stock: u32,
    pub availability: String,
    pub updated_at: String,
}

impl From<&Product> for ProductRowView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            title: product.title.clone(),
            brand: product.brand.clone(),
            category: product.category.clone(),
            price: product.price.to_string(),
            stock: product.stock,
            availability: product.availability_status.to_string(),
            updated_at: product.updated_at.format("%d/%m/%Y %H:%M").to_string(),
        }
    }
}

/// Editable product fields as they appear in forms.
#[derive(Clone)]
pub struct ProductFormView {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub category: String,
    pub category_id: String,
    pub brand: String,
    pub price: String,
    pub stock: u32,
    pub availability: String,
    pub thumbnail: String,
    pub images: String,
    pub tags: String,
}

impl ProductFormView {
    /// An empty form for the create page.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            slug: String::new(),
            description: String::new(),
            category: String::new(),
            category_id: String::new(),
            brand: String::new(),
            price: String::new(),
            stock: 0,
            availability: AvailabilityStatus::InStock.to_string(),
            thumbnail: String::new(),
            images: String::new(),
            tags: String::new(),
        }
    }
}

impl From<&Product> for ProductFormView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            title: product.title.clone(),
            slug: product.slug.clone(),
            description: product.description.clone(),
            category: product.category.clone(),
            category_id: product.category_id.to_string(),
            brand: product.brand.clone(),
            price: product.price.amount().to_string(),
            stock: product.stock,
            availability: product.availability_status.to_string(),
            thumbnail: product.thumbnail.clone(),
            images: product.images.join(", "),
            tags: product.tags.join(", "),
        }
    }
}

/// Product listing query parameters.
#[derive(Debug, Deserialize)]
pub struct ProductListQuery {
    pub q: Option<String>,
}

/// Submitted product form data.
#[derive(Debug, Deserialize)]
pub struct ProductForm {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub category: String,
    pub category_id: String,
    pub brand: String,
    pub price: String,
    pub stock: u32,
    pub availability_status: String,
    pub thumbnail: String,
    pub images: String,
    pub tags: String,
}

impl ProductForm {
    /// Validate the submitted fields into a draft.
    fn into_draft(self) -> Result<ProductDraft> {
        let amount = self
            .price
            .parse::<Decimal>()
            .map_err(|e| AppError::BadRequest(format!("invalid price: {e}")))?;
        let availability_status = self
            .availability_status
            .parse::<AvailabilityStatus>()
            .map_err(AppError::BadRequest)?;

        Ok(ProductDraft {
            title: self.title,
            slug: self.slug,
            description: self.description,
            category: self.category,
            category_id: self.category_id,
            brand: self.brand,
            price: Price::new(amount),
            stock: self.stock,
            availability_status,
            thumbnail: self.thumbnail,
            images: split_list(&self.images),
            tags: split_list(&self.tags),
        })
    }
}

/// Split a comma-separated form field into trimmed entries.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub products: Vec<ProductRowView>,
    pub q: String,
}

/// Product detail display data for templates.
#[derive(Clone)]
pub struct ProductDetailView {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub category: String,
    pub brand: String,
    pub price: String,
    pub stock: u32,
    pub availability: String,
    pub thumbnail: String,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Product> for ProductDetailView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            title: product.title.clone(),
            slug: product.slug.clone(),
            description: product.description.clone(),
            category: product.category.clone(),
            brand: product.brand.clone(),
            price: product.price.to_string(),
            stock: product.stock,
            availability: product.availability_status.to_string(),
            thumbnail: product.thumbnail.clone(),
            images: product.images.clone(),
            tags: product.tags.clone(),
            created_at: product.created_at.format("%d/%m/%Y %H:%M").to_string(),
            updated_at: product.updated_at.format("%d/%m/%Y %H:%M").to_string(),
        }
    }
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: ProductDetailView,
}

/// Create form page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/new.html")]
pub struct ProductNewTemplate {
    pub form: ProductFormView,
}

/// Edit form page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/edit.html")]
pub struct ProductEditTemplate {
    pub form: ProductFormView,
}

/// Display the product table, refreshing from the backend when empty.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> Result<ProductsIndexTemplate> {
    if state.products().is_empty()
        && let Err(e) = state.products().refresh().await
    {
        tracing::warn!(error = %e, "Initial product refresh failed");
    }

    let needle = query.q.unwrap_or_default();
    let needle_lower = needle.to_lowercase();

    let products = state
        .products()
        .products()
        .iter()
        .filter(|p| {
            needle_lower.is_empty()
                || p.title.to_lowercase().contains(&needle_lower)
                || p.brand.to_lowercase().contains(&needle_lower)
                || p.category.to_lowercase().contains(&needle_lower)
        })
        .map(ProductRowView::from)
        .collect();

    Ok(ProductsIndexTemplate {
        products,
        q: needle,
    })
}

/// Re-fetch the product table from the backend, discarding local edits.
#[instrument(skip(state))]
pub async fn refresh(State(state): State<AppState>) -> Result<Redirect> {
    let count = state.products().refresh().await?;
    tracing::info!(count, "Product table refreshed by operator");
    Ok(Redirect::to("/products"))
}

/// Display the create form.
#[instrument]
pub async fn new() -> ProductNewTemplate {
    ProductNewTemplate {
        form: ProductFormView::empty(),
    }
}

/// Create a product in the local table.
#[instrument(skip(state, form))]
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<ProductForm>,
) -> Result<Redirect> {
    let draft = form.into_draft()?;
    let product = state.products().create(draft);
    tracing::info!(id = %product.id, title = %product.title, "Product created locally");
    Ok(Redirect::to("/products"))
}

/// Display product detail.
#[instrument(skip(state), fields(id = %id))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ProductShowTemplate> {
    let product = lookup(&state, &id)?;

    Ok(ProductShowTemplate {
        product: ProductDetailView::from(&product),
    })
}

/// Display the edit form.
#[instrument(skip(state), fields(id = %id))]
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ProductEditTemplate> {
    let product = lookup(&state, &id)?;

    Ok(ProductEditTemplate {
        form: ProductFormView::from(&product),
    })
}

/// Update a product in the local table.
#[instrument(skip(state, form), fields(id = %id))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<ProductForm>,
) -> Result<Redirect> {
    let draft = form.into_draft()?;
    let product = state.products().update(&ProductId::from(id), draft)?;
    tracing::info!(id = %product.id, "Product updated locally");
    Ok(Redirect::to("/products"))
}

/// Delete a product from the local table.
#[instrument(skip(state), fields(id = %id))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    state.products().delete(&ProductId::from(id));
    Redirect::to("/products")
}

fn lookup(state: &AppState, id: &str) -> Result<Product> {
    state
        .products()
        .get(&ProductId::from(id))
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list_trims_and_drops_empties() {
        assert_eq!(
            split_list("audio, wireless , ,bluetooth"),
            vec!["audio", "wireless", "bluetooth"]
        );
        assert!(split_list("").is_empty());
    }

    #[test]
    fn test_form_rejects_bad_price() {
        let form = ProductForm {
            title: "X".to_string(),
            slug: "x".to_string(),
            description: String::new(),
            category: "Electronics".to_string(),
            category_id: "c1".to_string(),
            brand: "Kridha".to_string(),
            price: "not-a-number".to_string(),
            stock: 1,
            availability_status: "In Stock".to_string(),
            thumbnail: String::new(),
            images: String::new(),
            tags: String::new(),
        };

        assert!(matches!(form.into_draft(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_form_parses_draft() {
        let form = ProductForm {
            title: "Gaming Mouse".to_string(),
            slug: "gaming-mouse".to_string(),
            description: "RGB".to_string(),
            category: "Electronics".to_string(),
            category_id: "c1".to_string(),
            brand: "Kridha".to_string(),
            price: "1899.50".to_string(),
            stock: 7,
            availability_status: "Preorder".to_string(),
            thumbnail: String::new(),
            images: "a.jpg, b.jpg".to_string(),
            tags: "gaming".to_string(),
        };

        let draft = form.into_draft().expect("valid form");
        assert_eq!(draft.availability_status, AvailabilityStatus::Preorder);
        assert_eq!(draft.images.len(), 2);
        assert_eq!(draft.price.to_string(), "₹1899.50");
    }
}
