//! Defines the core data models and database queries for transactions.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::Error;

// ============================================================================
// MODELS
// ============================================================================

/// Alias for the integer type used for mapping to database IDs.
pub type TransactionId = i64;

/// The maximum number of characters allowed in a transaction category.
pub const MAX_CATEGORY_LENGTH: usize = 50;

/// The category substituted when the client omits one.
pub(crate) const DEFAULT_CATEGORY: &str = "Uncategorised";

/// The description substituted when the client omits one.
pub(crate) const DEFAULT_DESCRIPTION: &str = "No description";

/// The default number of records returned by the list operation.
pub(crate) const DEFAULT_LIMIT: u32 = 100;

/// The largest number of records a single list request may return.
pub(crate) const MAX_LIMIT: u32 = 1000;

/// An expense or income, i.e. an event where money was either spent or earned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// The amount of money that changed hands, always greater than zero.
    pub amount: f64,
    /// The category the transaction belongs to, e.g. "food", "rent".
    pub category: String,
    /// A text description of what the transaction was for.
    pub description: String,
    /// Whether the money came in (income) or went out (expense).
    pub is_income: bool,
    /// When the transaction happened, as submitted by the client.
    pub date: String,
}

/// The client-submitted fields of a transaction, before validation.
///
/// Deserialization enforces that `amount`, `is_income` and `date` are present
/// and correctly typed, and substitutes placeholder values for an omitted
/// `category` or `description`. Call [TransactionData::validate] to obtain a
/// [NewTransaction] that is safe to persist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionData {
    /// The amount of money that changed hands.
    pub amount: f64,
    /// The category the transaction belongs to.
    #[serde(default = "default_category")]
    pub category: String,
    /// A text description of what the transaction was for.
    #[serde(default = "default_description")]
    pub description: String,
    /// Whether the money came in (income) or went out (expense).
    pub is_income: bool,
    /// When the transaction happened. The format is not validated beyond
    /// being a string.
    pub date: String,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_owned()
}

fn default_description() -> String {
    DEFAULT_DESCRIPTION.to_owned()
}

impl TransactionData {
    /// Check the field constraints and produce a [NewTransaction] that is
    /// safe to persist.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NonPositiveAmount] if `amount` is zero or less,
    /// - or [Error::CategoryTooLong] if `category` is longer than
    ///   [MAX_CATEGORY_LENGTH] characters.
    pub fn validate(self) -> Result<NewTransaction, Error> {
        if self.amount <= 0.0 {
            return Err(Error::NonPositiveAmount(self.amount));
        }

        let category_length = self.category.chars().count();
        if category_length > MAX_CATEGORY_LENGTH {
            return Err(Error::CategoryTooLong(category_length));
        }

        Ok(NewTransaction {
            amount: self.amount,
            category: self.category,
            description: self.description,
            is_income: self.is_income,
            date: self.date,
        })
    }
}

/// A validated transaction that has not been persisted yet, so it has no ID.
///
/// Can only be obtained through [TransactionData::validate].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTransaction {
    /// The amount of money that changed hands, greater than zero.
    pub amount: f64,
    /// The category the transaction belongs to, at most
    /// [MAX_CATEGORY_LENGTH] characters.
    pub category: String,
    /// A text description of what the transaction was for.
    pub description: String,
    /// Whether the money came in (income) or went out (expense).
    pub is_income: bool,
    /// When the transaction happened.
    pub date: String,
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create a new transaction in the database.
///
/// The database assigns the ID, the returned [Transaction] includes it.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn create_transaction(
    new_transaction: NewTransaction,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "INSERT INTO \"transaction\" (amount, category, description, is_income, date)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING id, amount, category, description, is_income, date",
        )?
        .query_one(
            (
                new_transaction.amount,
                new_transaction.category,
                new_transaction.description,
                new_transaction.is_income,
                new_transaction.date,
            ),
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// Retrieve up to `limit` transactions from the database, skipping the first
/// `skip`, in insertion order.
///
/// `limit` is clamped to [MAX_LIMIT].
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn list_transactions(
    skip: u32,
    limit: u32,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    let limit = limit.min(MAX_LIMIT);

    connection
        .prepare(
            "SELECT id, amount, category, description, is_income, date FROM \"transaction\"
             ORDER BY id LIMIT ?1 OFFSET ?2",
        )?
        .query_map((limit, skip), map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
        .collect()
}

/// Retrieve a transaction from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::TransactionNotFound] if `id` does not refer to a valid
///   transaction,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn get_transaction(id: TransactionId, connection: &Connection) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "SELECT id, amount, category, description, is_income, date FROM \"transaction\"
             WHERE id = :id",
        )?
        .query_one(&[(":id", &id)], map_transaction_row)
        .map_err(|error| match error {
            rusqlite::Error::QueryReturnedNoRows => Error::TransactionNotFound(id),
            error => error.into(),
        })?;

    Ok(transaction)
}

/// Overwrite every field of the transaction with `id` in one statement.
///
/// The row's existence is checked before the update, so a missing `id` never
/// mutates the database.
///
/// # Errors
/// This function will return a:
/// - [Error::TransactionNotFound] if `id` does not refer to a valid
///   transaction,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn update_transaction(
    id: TransactionId,
    new_transaction: &NewTransaction,
    connection: &Connection,
) -> Result<(), Error> {
    get_transaction(id, connection)?;

    connection.execute(
        "UPDATE \"transaction\"
         SET amount = ?1, category = ?2, description = ?3, is_income = ?4, date = ?5
         WHERE id = ?6",
        (
            new_transaction.amount,
            &new_transaction.category,
            &new_transaction.description,
            new_transaction.is_income,
            &new_transaction.date,
            id,
        ),
    )?;

    Ok(())
}

/// Physically remove the transaction with `id` from the database.
///
/// The row's existence is checked before the delete, so a missing `id` never
/// mutates the database.
///
/// # Errors
/// This function will return a:
/// - [Error::TransactionNotFound] if `id` does not refer to a valid
///   transaction,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn delete_transaction(id: TransactionId, connection: &Connection) -> Result<(), Error> {
    get_transaction(id, connection)?;

    connection.execute("DELETE FROM \"transaction\" WHERE id = :id", &[(":id", &id)])?;

    Ok(())
}

/// Create the transaction table in the database if it does not exist.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                amount REAL NOT NULL,
                category TEXT NOT NULL,
                description TEXT NOT NULL,
                is_income INTEGER NOT NULL,
                date TEXT NOT NULL
                )",
        (),
    )?;

    // Ensure the sequence starts at 1
    connection.execute(
        "INSERT OR IGNORE INTO sqlite_sequence (name, seq) VALUES ('transaction', 0)",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let amount = row.get(1)?;
    let category = row.get(2)?;
    let description = row.get(3)?;
    let is_income = row.get(4)?;
    let date = row.get(5)?;

    Ok(Transaction {
        id,
        amount,
        category,
        description,
        is_income,
        date,
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod validation_tests {
    use crate::Error;

    use super::{DEFAULT_CATEGORY, DEFAULT_DESCRIPTION, TransactionData};

    fn expense(amount: f64) -> TransactionData {
        TransactionData {
            amount,
            category: "food".to_owned(),
            description: "lunch".to_owned(),
            is_income: false,
            date: "2024-01-01".to_owned(),
        }
    }

    #[test]
    fn validate_accepts_positive_amount() {
        let new_transaction = expense(50.0).validate().expect("Validation should pass");

        assert_eq!(new_transaction.amount, 50.0);
        assert_eq!(new_transaction.category, "food");
        assert_eq!(new_transaction.description, "lunch");
        assert!(!new_transaction.is_income);
        assert_eq!(new_transaction.date, "2024-01-01");
    }

    #[test]
    fn validate_rejects_zero_amount() {
        let result = expense(0.0).validate();

        assert_eq!(result, Err(Error::NonPositiveAmount(0.0)));
    }

    #[test]
    fn validate_rejects_negative_amount() {
        let result = expense(-12.3).validate();

        assert_eq!(result, Err(Error::NonPositiveAmount(-12.3)));
    }

    #[test]
    fn validate_rejects_category_longer_than_fifty_characters() {
        let mut data = expense(50.0);
        data.category = "x".repeat(51);

        let result = data.validate();

        assert_eq!(result, Err(Error::CategoryTooLong(51)));
    }

    #[test]
    fn validate_accepts_category_of_exactly_fifty_characters() {
        let mut data = expense(50.0);
        data.category = "x".repeat(50);

        assert!(data.validate().is_ok());
    }

    #[test]
    fn deserialization_applies_placeholder_defaults() {
        let data: TransactionData = serde_json::from_value(serde_json::json!({
            "amount": 9.99,
            "is_income": true,
            "date": "2024-02-02",
        }))
        .expect("Payload without category and description should deserialize");

        assert_eq!(data.category, DEFAULT_CATEGORY);
        assert_eq!(data.description, DEFAULT_DESCRIPTION);
    }

    #[test]
    fn deserialization_requires_is_income_and_date() {
        let missing_is_income = serde_json::from_value::<TransactionData>(serde_json::json!({
            "amount": 9.99,
            "date": "2024-02-02",
        }));
        assert!(missing_is_income.is_err());

        let missing_date = serde_json::from_value::<TransactionData>(serde_json::json!({
            "amount": 9.99,
            "is_income": true,
        }));
        assert!(missing_date.is_err());
    }
}
