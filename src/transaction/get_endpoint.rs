//! Defines the endpoint for fetching a single transaction by its ID.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    AppState, Error,
    transaction::{Transaction, TransactionId, core::get_transaction},
};

/// A route handler for getting a transaction by its database ID.
///
/// Responds with 202 Accepted and the record, or 404 if `id` does not refer
/// to a stored transaction.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn get_transaction_endpoint(
    State(state): State<AppState>,
    Path(id): Path<TransactionId>,
) -> Result<(StatusCode, Json<Transaction>), Error> {
    let connection = state.db_connection.lock().unwrap();
    let transaction = get_transaction(id, &connection)?;

    Ok((StatusCode::ACCEPTED, Json(transaction)))
}

#[cfg(test)]
mod get_endpoint_tests {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };
    use rusqlite::Connection;

    use crate::{
        AppState, Error,
        transaction::{NewTransaction, core::create_transaction},
    };

    use super::get_transaction_endpoint;

    fn get_test_app_state() -> AppState {
        let conn = Connection::open_in_memory().unwrap();
        AppState::new(conn).expect("Could not create app state")
    }

    #[tokio::test]
    async fn get_returns_accepted_with_record() {
        let state = get_test_app_state();
        let created = {
            let connection = state.db_connection.lock().unwrap();
            create_transaction(
                NewTransaction {
                    amount: 12.3,
                    category: "food".to_owned(),
                    description: "lunch".to_owned(),
                    is_income: false,
                    date: "2024-01-01".to_owned(),
                },
                &connection,
            )
            .unwrap()
        };

        let (status, axum::Json(transaction)) =
            get_transaction_endpoint(State(state), Path(created.id))
                .await
                .expect("Get should not fail");

        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(transaction, created);
    }

    #[tokio::test]
    async fn get_fails_on_missing_id() {
        let state = get_test_app_state();

        let result = get_transaction_endpoint(State(state), Path(99)).await;

        assert_eq!(result.unwrap_err(), Error::TransactionNotFound(99));
    }
}
