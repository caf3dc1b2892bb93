//! The API endpoint URIs.

/// The route to create and list transactions.
pub const TRANSACTIONS: &str = "/transactions/";
/// The route to fetch a single transaction by its ID.
pub const TRANSACTION: &str = "/transactions/{id}";
/// The route to update or delete a transaction by its ID.
pub const TRANSACTION_BY_ID: &str = "/{id}";

// These tests are here so that we know the routes will be accepted by the router.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::TRANSACTIONS);
        assert_endpoint_is_valid_uri(endpoints::TRANSACTION);
        assert_endpoint_is_valid_uri(endpoints::TRANSACTION_BY_ID);
    }
}
