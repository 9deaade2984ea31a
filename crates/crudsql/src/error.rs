//! Error types for crudsql

use std::fmt;
use thiserror::Error;

/// Result type alias for crudsql operations
pub type OrmResult<T> = Result<T, OrmError>;

/// The kind of statement a repository call executed.
///
/// Used to describe row-count failures in the same words as the SQL that
/// produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    Select,
    SelectAll,
    Insert,
    Update,
    Delete,
}

impl StatementKind {
    /// Leading SQL keywords of the statement.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Select | Self::SelectAll => "SELECT",
            Self::Insert => "INSERT INTO",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Error types for statement generation and repository operations
#[derive(Debug, Error)]
pub enum OrmError {
    /// The dialect code or name is not one of the supported SQL engines.
    ///
    /// `value` keeps the rejected input for debugging; the message is fixed.
    #[error("unknown dialect")]
    UnsupportedDialect { value: String },

    /// Invalid repository configuration or builder input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Row not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// A mutation touched a different number of rows than the repository allows
    #[error("{affected} rows affected by {statement} statement")]
    UnexpectedRowCount {
        statement: StatementKind,
        affected: u64,
    },

    /// Query execution error
    #[error("Query error: {0}")]
    Query(#[from] tokio_postgres::Error),

    /// Unique constraint violation
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// Foreign key constraint violation
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// Check constraint violation
    #[error("Check constraint violation: {0}")]
    CheckViolation(String),

    /// Row decode/mapping error
    #[error("Decode error on column '{column}': {message}")]
    Decode { column: String, message: String },

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl OrmError {
    /// Create an unsupported dialect error for a rejected code or name
    pub fn unsupported_dialect(value: impl Into<String>) -> Self {
        Self::UnsupportedDialect {
            value: value.into(),
        }
    }

    /// Create a decode error for a specific column
    pub fn decode(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            column: column.into(),
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a row-count error for a statement
    pub fn unexpected_row_count(statement: StatementKind, affected: u64) -> Self {
        Self::UnexpectedRowCount {
            statement,
            affected,
        }
    }

    /// Check if this is an unsupported dialect error
    pub fn is_unsupported_dialect(&self) -> bool {
        matches!(self, Self::UnsupportedDialect { .. })
    }

    /// Check if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Check if this is a row-count error
    pub fn is_unexpected_row_count(&self) -> bool {
        matches!(self, Self::UnexpectedRowCount { .. })
    }

    /// Parse a tokio_postgres error into a more specific OrmError
    pub fn from_db_error(err: tokio_postgres::Error) -> Self {
        if let Some(db_err) = err.as_db_error() {
            let constraint = db_err.constraint().unwrap_or("unknown");
            let message = db_err.message();

            match db_err.code().code() {
                "23505" => return Self::UniqueViolation(format!("{}: {}", constraint, message)),
                "23503" => {
                    return Self::ForeignKeyViolation(format!("{}: {}", constraint, message));
                }
                "23514" => return Self::CheckViolation(format!("{}: {}", constraint, message)),
                _ => {}
            }
        }
        Self::Query(err)
    }
}
