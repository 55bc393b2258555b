//! Order/transaction ledger route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use serde::Deserialize;
use tracing::instrument;

use kridha_core::{TransactionId, TransactionStatus};

use crate::error::{AppError, Result};
use crate::filters;
use crate::models::{Transaction, TransactionLine};
use crate::state::AppState;

/// Purchased line display data for templates.
#[derive(Clone)]
pub struct TransactionLineView {
    pub name: String,
    pub quantity: u32,
    pub price: String,
}

impl From<&TransactionLine> for TransactionLineView {
    fn from(line: &TransactionLine) -> Self {
        Self {
            name: line.name.clone(),
            quantity: line.quantity,
            price: line.price.to_string(),
        }
    }
}

/// Transaction row display data for templates.
#[derive(Clone)]
pub struct TransactionRowView {
    pub id: String,
    pub order_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub amount: String,
    pub status: String,
    pub payment_method: String,
    pub products: Vec<TransactionLineView>,
    pub created_at: String,
    pub completed_at: String,
}

impl From<&Transaction> for TransactionRowView {
    fn from(transaction: &Transaction) -> Self {
        Self {
            id: transaction.id.to_string(),
            order_id: transaction.order_id.to_string(),
            customer_name: transaction.customer_name.clone(),
            customer_email: transaction.customer_email.to_string(),
            amount: transaction.amount.to_string(),
            status: transaction.status.to_string(),
            payment_method: transaction.payment_method.clone(),
            products: transaction.products.iter().map(TransactionLineView::from).collect(),
            created_at: transaction
                .created_at
                .format("%d/%m/%Y %H:%M")
                .to_string(),
            completed_at: transaction
                .completed_at
                .map_or_else(String::new, |t| t.format("%d/%m/%Y %H:%M").to_string()),
        }
    }
}

/// Status update form data.
#[derive(Debug, Deserialize)]
pub struct StatusForm {
    pub status: String,
}

/// Order ledger page template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/index.html")]
pub struct OrdersIndexTemplate {
    pub transactions: Vec<TransactionRowView>,
}

/// Display the transaction ledger.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<OrdersIndexTemplate> {
    let transactions = state.transactions().fetch_transactions().await?;

    Ok(OrdersIndexTemplate {
        transactions: transactions.iter().map(TransactionRowView::from).collect(),
    })
}

/// Change a transaction's payment status.
#[instrument(skip(state))]
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<StatusForm>,
) -> Result<Redirect> {
    let status = form
        .status
        .parse::<TransactionStatus>()
        .map_err(AppError::BadRequest)?;

    state
        .transactions()
        .update_status(&TransactionId::from(id), status)
        .await?;

    Ok(Redirect::to("/orders"))
}
