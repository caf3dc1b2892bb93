//! Defines the endpoint for creating a new transaction.

use axum::{Json, extract::State};

use crate::{
    AppState, Error,
    transaction::{Transaction, TransactionData, core::create_transaction},
};

/// A route handler for creating a new transaction.
///
/// The payload is validated before any storage access; the response is the
/// persisted record including its database-assigned ID.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn create_transaction_endpoint(
    State(state): State<AppState>,
    Json(data): Json<TransactionData>,
) -> Result<Json<Transaction>, Error> {
    let new_transaction = data.validate()?;

    let connection = state.db_connection.lock().unwrap();
    let transaction = create_transaction(new_transaction, &connection)?;

    Ok(Json(transaction))
}
