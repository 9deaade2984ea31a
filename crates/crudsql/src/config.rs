//! Repository configuration.

use crate::dialect::Dialect;
use crate::entity::Entity;
use crate::error::{OrmError, OrmResult};

/// Id column used when none is configured.
pub const DEFAULT_ID_FIELD: &str = "id";

/// Configuration for a `SqlRepository`.
///
/// Can be built in code or deserialized (e.g. from a TOML/JSON settings file):
///
/// ```rust
/// use crudsql::{Dialect, RepositoryConfig};
///
/// let config = RepositoryConfig::new("users")
///     .id_field("UserId")
///     .dialect(Dialect::PostgreSql);
/// assert_eq!(config.validate().unwrap().id_field, "UserId");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RepositoryConfig {
    /// Table name (required, must not be empty).
    pub table: String,
    /// Id column; empty means [`DEFAULT_ID_FIELD`].
    #[serde(default)]
    pub id_field: String,
    /// Placeholder dialect.
    #[serde(default)]
    pub dialect: Dialect,
}

impl RepositoryConfig {
    /// Create a configuration for `table` with default id column and dialect.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            id_field: String::new(),
            dialect: Dialect::default(),
        }
    }

    /// Take table and id column from an entity's `#[orm(table, id)]` attributes.
    pub fn for_entity<T: Entity>() -> Self {
        Self {
            table: T::TABLE.unwrap_or_default().to_string(),
            id_field: T::ID.unwrap_or_default().to_string(),
            dialect: Dialect::default(),
        }
    }

    /// Set the table name.
    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Set the id column.
    pub fn id_field(mut self, id_field: impl Into<String>) -> Self {
        self.id_field = id_field.into();
        self
    }

    /// Set the placeholder dialect.
    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Check the configuration and fill in defaults.
    ///
    /// An empty table name is an error; an empty id column becomes `"id"`.
    pub fn validate(mut self) -> OrmResult<Self> {
        if self.table.is_empty() {
            return Err(OrmError::validation("table name cannot be empty"));
        }
        if self.id_field.is_empty() {
            self.id_field = DEFAULT_ID_FIELD.to_string();
        }
        Ok(self)
    }
}
