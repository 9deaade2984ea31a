//! Entity metadata: the column names and bind values of a mapped struct.
//!
//! Implementations are normally generated by `#[derive(Entity)]`, which requires
//! an explicit `#[orm(column = "...")]` on every field. A field without one, or
//! a derive on anything but a struct with named fields, is a compile error.

use tokio_postgres::types::ToSql;

/// A struct mapped onto the rows of one table.
///
/// # Example
///
/// ```ignore
/// use crudsql::Entity;
///
/// #[derive(Entity)]
/// #[orm(table = "users", id = "UserId")]
/// struct User {
///     #[orm(column = "UserId")]
///     id: i64,
///     #[orm(column = "Name")]
///     name: String,
/// }
///
/// assert_eq!(User::COLUMNS, &["UserId", "Name"]);
/// ```
pub trait Entity: Send + Sync {
    /// Every mapped column, in field declaration order, id included.
    const COLUMNS: &'static [&'static str];

    /// Default table name (`#[orm(table = "...")]`), if declared.
    const TABLE: Option<&'static str> = None;

    /// Default id column (`#[orm(id = "...")]`), if declared.
    const ID: Option<&'static str> = None;

    /// Field values as bind parameters, in the same order as [`Entity::COLUMNS`].
    fn values(&self) -> Vec<&(dyn ToSql + Sync)>;

    /// All column names, id included. Used for SELECT column lists.
    fn field_names() -> Vec<&'static str> {
        Self::COLUMNS.to_vec()
    }

    /// Column names and values with the `id_field` column filtered out.
    ///
    /// Both vectors share indices. Used for INSERT and UPDATE.
    fn properties(&self, id_field: &str) -> (Vec<&'static str>, Vec<&(dyn ToSql + Sync)>) {
        Self::COLUMNS
            .iter()
            .copied()
            .zip(self.values())
            .filter(|(column, _)| *column != id_field)
            .unzip()
    }
}
