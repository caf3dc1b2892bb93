//! Defines the endpoint for updating an existing transaction.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState, Error,
    transaction::{NewTransaction, TransactionData, TransactionId, core::update_transaction},
};

/// A route handler for overwriting every field of an existing transaction.
///
/// The response echoes the validated payload rather than reloading the stored
/// row; the two can only differ if storage transformed the data, which SQLite
/// does not do here.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn update_transaction_endpoint(
    State(state): State<AppState>,
    Path(id): Path<TransactionId>,
    Json(data): Json<TransactionData>,
) -> Result<Json<NewTransaction>, Error> {
    let new_transaction = data.validate()?;

    let connection = state.db_connection.lock().unwrap();
    update_transaction(id, &new_transaction, &connection)?;

    Ok(Json(new_transaction))
}
