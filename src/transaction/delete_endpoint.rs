//! Defines the endpoint for deleting a transaction.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

use crate::{
    AppState, Error,
    transaction::{TransactionId, core::delete_transaction},
};

/// The acknowledgment message returned after a successful delete.
pub(crate) const DELETE_SUCCESS_DETAIL: &str = "Transaction deleted successfully.";

/// A route handler for physically removing a transaction.
///
/// Responds with a `{"detail": ...}` acknowledgment, or 404 if `id` does not
/// refer to a stored transaction.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn delete_transaction_endpoint(
    State(state): State<AppState>,
    Path(id): Path<TransactionId>,
) -> Result<Json<Value>, Error> {
    let connection = state.db_connection.lock().unwrap();
    delete_transaction(id, &connection)?;

    Ok(Json(json!({ "detail": DELETE_SUCCESS_DETAIL })))
}
