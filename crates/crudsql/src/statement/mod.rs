//! CRUD statement templates.
//!
//! Builds the five single-table statements a repository needs:
//!
//! - `SELECT <fields> FROM <table> WHERE <id> = <p>`
//! - `SELECT <fields> FROM <table>`
//! - `INSERT INTO <table> (<fields>) VALUES (<p1>, ...)`
//! - `UPDATE <table> SET (<f1> = <p1>, ...) WHERE <id> = <p>`
//! - `DELETE FROM <table> WHERE <id> = <p>`
//!
//! Only placeholder tokens depend on the dialect, so every builder delegates
//! those to a [`ParamGen`]. Table, id and field names are written into the SQL
//! text as-is; they must come from trusted metadata, never from user input.

use crate::dialect::{Dialect, ParamGen, ParamKind};
use crate::error::{OrmError, OrmResult};

/// Generator for the CRUD statement templates.
pub trait SqlGenerator {
    /// `SELECT <fields> FROM <table> WHERE <id_field> = <p>`
    fn select_by_id(&self, table: &str, id_field: &str, fields: &[&str]) -> OrmResult<String>;

    /// `SELECT <fields> FROM <table>`
    fn select_all(&self, table: &str, fields: &[&str]) -> String;

    /// `INSERT INTO <table> (<fields>) VALUES (<placeholders>)`
    fn insert(&self, table: &str, fields: &[&str]) -> OrmResult<String>;

    /// `UPDATE <table> SET (<field> = <p>, ...) WHERE <id_field> = <p>`
    fn update(&self, table: &str, id_field: &str, fields: &[&str]) -> OrmResult<String>;

    /// `DELETE FROM <table> WHERE <id_field> = <p>`
    fn delete(&self, table: &str, id_field: &str) -> OrmResult<String>;
}

/// Dialect-agnostic statement builder.
///
/// ```rust
/// use crudsql::{Dialect, SqlGenerator, StatementBuilder};
///
/// let builder = StatementBuilder::new(Dialect::PostgreSql);
/// let sql = builder.insert("users", &["Name", "Surname"]).unwrap();
/// assert_eq!(sql, "INSERT INTO users (Name, Surname) VALUES ($1, $2)");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StatementBuilder<G = Dialect> {
    params: G,
}

impl<G: ParamGen> StatementBuilder<G> {
    pub fn new(params: G) -> Self {
        Self { params }
    }

    /// The placeholder source.
    pub fn params(&self) -> &G {
        &self.params
    }

    fn where_placeholder(&self) -> OrmResult<String> {
        self.params
            .placeholders(ParamKind::Column, 1)?
            .into_iter()
            .next()
            .ok_or_else(|| OrmError::Other("placeholder generator returned nothing".to_string()))
    }

    fn value_placeholders(&self, count: usize) -> OrmResult<Vec<String>> {
        let placeholders = self.params.placeholders(ParamKind::Value, count)?;
        if placeholders.len() != count {
            return Err(OrmError::Other(format!(
                "placeholder generator returned {} placeholders, expected {}",
                placeholders.len(),
                count
            )));
        }
        Ok(placeholders)
    }
}

impl<G: ParamGen> SqlGenerator for StatementBuilder<G> {
    fn select_by_id(&self, table: &str, id_field: &str, fields: &[&str]) -> OrmResult<String> {
        let placeholder = self.where_placeholder()?;
        Ok(format!(
            "SELECT {} FROM {} WHERE {} = {}",
            fields.join(", "),
            table,
            id_field,
            placeholder
        ))
    }

    fn select_all(&self, table: &str, fields: &[&str]) -> String {
        format!("SELECT {} FROM {}", fields.join(", "), table)
    }

    fn insert(&self, table: &str, fields: &[&str]) -> OrmResult<String> {
        let placeholders = self.value_placeholders(fields.len())?;
        Ok(format!(
            "INSERT INTO {} ({}) VALUES ({})",
            table,
            fields.join(", "),
            placeholders.join(", ")
        ))
    }

    fn update(&self, table: &str, id_field: &str, fields: &[&str]) -> OrmResult<String> {
        // WHERE placeholder first: a failing generator never gets the value request.
        let where_placeholder = self.where_placeholder()?;
        let placeholders = self.value_placeholders(fields.len())?;

        let assignments: Vec<String> = fields
            .iter()
            .zip(&placeholders)
            .map(|(field, p)| format!("{} = {}", field, p))
            .collect();

        Ok(format!(
            "UPDATE {} SET ({}) WHERE {} = {}",
            table,
            assignments.join(", "),
            id_field,
            where_placeholder
        ))
    }

    fn delete(&self, table: &str, id_field: &str) -> OrmResult<String> {
        let placeholder = self.where_placeholder()?;
        Ok(format!(
            "DELETE FROM {} WHERE {} = {}",
            table, id_field, placeholder
        ))
    }
}

impl<T: SqlGenerator + ?Sized> SqlGenerator for &T {
    fn select_by_id(&self, table: &str, id_field: &str, fields: &[&str]) -> OrmResult<String> {
        (**self).select_by_id(table, id_field, fields)
    }

    fn select_all(&self, table: &str, fields: &[&str]) -> String {
        (**self).select_all(table, fields)
    }

    fn insert(&self, table: &str, fields: &[&str]) -> OrmResult<String> {
        (**self).insert(table, fields)
    }

    fn update(&self, table: &str, id_field: &str, fields: &[&str]) -> OrmResult<String> {
        (**self).update(table, id_field, fields)
    }

    fn delete(&self, table: &str, id_field: &str) -> OrmResult<String> {
        (**self).delete(table, id_field)
    }
}

/// `SELECT <fields> FROM <table> WHERE <id_field> = <p>` for `dialect`.
pub fn build_select_by_id(
    dialect: Dialect,
    table: &str,
    id_field: &str,
    fields: &[&str],
) -> OrmResult<String> {
    StatementBuilder::new(dialect).select_by_id(table, id_field, fields)
}

/// `SELECT <fields> FROM <table>`; needs no placeholders.
pub fn build_select_all(table: &str, fields: &[&str]) -> String {
    StatementBuilder::new(Dialect::default()).select_all(table, fields)
}

/// `INSERT INTO <table> (<fields>) VALUES (...)` for `dialect`.
pub fn build_insert(dialect: Dialect, table: &str, fields: &[&str]) -> OrmResult<String> {
    StatementBuilder::new(dialect).insert(table, fields)
}

/// `UPDATE <table> SET (...) WHERE <id_field> = <p>` for `dialect`.
pub fn build_update(
    dialect: Dialect,
    table: &str,
    id_field: &str,
    fields: &[&str],
) -> OrmResult<String> {
    StatementBuilder::new(dialect).update(table, id_field, fields)
}

/// `DELETE FROM <table> WHERE <id_field> = <p>` for `dialect`.
pub fn build_delete(dialect: Dialect, table: &str, id_field: &str) -> OrmResult<String> {
    StatementBuilder::new(dialect).delete(table, id_field)
}
