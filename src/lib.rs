//! Ledgerd is a small record-keeping service for financial transactions.
//!
//! This library provides a JSON REST API backed by a SQLite database.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod app_state;
mod db;
mod endpoints;
mod routing;
mod transaction;

pub use app_state::AppState;
pub use db::initialize as initialize_db;
pub use routing::build_router;
pub use transaction::{MAX_CATEGORY_LENGTH, TransactionId};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A transaction amount of zero or less was submitted.
    ///
    /// Transactions record money changing hands, so every amount must be
    /// strictly positive. Whether the money came in or went out is captured
    /// by the `is_income` flag, not the sign of the amount.
    #[error("amount must be greater than zero, got {0}")]
    NonPositiveAmount(f64),

    /// A category longer than [MAX_CATEGORY_LENGTH] characters was submitted.
    #[error("category must be at most {MAX_CATEGORY_LENGTH} characters, got {0}")]
    CategoryTooLong(usize),

    /// The requested transaction could not be found.
    ///
    /// The client should check that the ID is correct and that the
    /// transaction has not already been deleted.
    #[error("transaction with ID {0} does not exist")]
    TransactionNotFound(TransactionId),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", value);
        Error::SqlError(value)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status_code, detail) = match &self {
            Error::NonPositiveAmount(_) | Error::CategoryTooLong(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, self.to_string())
            }
            Error::TransactionNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            // SQL errors are not intended to be shown to the client.
            Error::SqlError(error) => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "an internal server error occurred".to_owned(),
                )
            }
        };

        (status_code, Json(json!({ "detail": detail }))).into_response()
    }
}

#[cfg(test)]
mod error_response_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::Error;

    #[tokio::test]
    async fn not_found_renders_404_with_id_in_detail() {
        let response = Error::TransactionNotFound(42).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();
        let detail = body["detail"].as_str().unwrap();

        assert!(
            detail.contains("42"),
            "want detail naming the missing ID 42, got {detail:?}"
        );
    }

    #[tokio::test]
    async fn validation_errors_render_422() {
        for error in [Error::NonPositiveAmount(-1.0), Error::CategoryTooLong(51)] {
            let response = error.into_response();

            assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        }
    }
}
