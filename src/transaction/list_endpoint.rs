//! Defines the endpoint for listing transactions with offset/limit paging.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::{
    AppState, Error,
    transaction::{Transaction, core::list_transactions},
};

use super::core::DEFAULT_LIMIT;

/// The query parameters for paging through transactions.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// How many records to skip from the start.
    #[serde(default)]
    pub skip: u32,
    /// The maximum number of records to return.
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

/// A route handler for listing transactions in insertion order.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn list_transactions_endpoint(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Transaction>>, Error> {
    let connection = state.db_connection.lock().unwrap();
    let transactions = list_transactions(params.skip, params.limit, &connection)?;

    Ok(Json(transactions))
}
