//! Per-table statement cache.
//!
//! SELECT, SELECT ALL and DELETE never change for a table, so they are rendered
//! once when the cache is built. INSERT and UPDATE take the field list of the
//! call and are rendered every time, which keeps partial field sets working.

use crate::dialect::Dialect;
use crate::error::OrmResult;
use crate::statement::{SqlGenerator, StatementBuilder};

/// Statement source for a single table.
pub trait SqlTemplates {
    /// SELECT by id.
    fn select(&self) -> &str;

    /// SELECT of every row.
    fn select_all(&self) -> &str;

    /// INSERT for the given (non-id) fields.
    fn insert(&self, fields: &[&str]) -> OrmResult<String>;

    /// UPDATE by id for the given (non-id) fields.
    fn update(&self, fields: &[&str]) -> OrmResult<String>;

    /// DELETE by id.
    fn delete(&self) -> &str;
}

/// Pre-rendered statements for one table.
///
/// A `StatementCache` only exists fully built: if the generator fails while
/// rendering SELECT or DELETE, [`StatementCache::new`] returns the error and no
/// cache is produced.
#[derive(Debug, Clone)]
pub struct StatementCache<G = StatementBuilder<Dialect>> {
    generator: G,
    table: String,
    id_field: String,
    select_sql: String,
    select_all_sql: String,
    delete_sql: String,
}

impl StatementCache<StatementBuilder<Dialect>> {
    /// Build a cache backed by the production builder for `dialect`.
    pub fn for_dialect(
        dialect: Dialect,
        table: &str,
        id_field: &str,
        all_fields: &[&str],
    ) -> OrmResult<Self> {
        Self::new(StatementBuilder::new(dialect), table, id_field, all_fields)
    }
}

impl<G: SqlGenerator> StatementCache<G> {
    /// Render and cache the fixed statements.
    ///
    /// `all_fields` is the full column list used by both SELECTs, id included.
    pub fn new(generator: G, table: &str, id_field: &str, all_fields: &[&str]) -> OrmResult<Self> {
        let select_sql = generator.select_by_id(table, id_field, all_fields)?;
        let select_all_sql = generator.select_all(table, all_fields);
        let delete_sql = generator.delete(table, id_field)?;

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "crudsql.templates",
            table,
            id_field,
            select = %select_sql,
            select_all = %select_all_sql,
            delete = %delete_sql,
            "statement cache ready"
        );

        Ok(Self {
            generator,
            table: table.to_string(),
            id_field: id_field.to_string(),
            select_sql,
            select_all_sql,
            delete_sql,
        })
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn id_field(&self) -> &str {
        &self.id_field
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }
}

impl<G: SqlGenerator> SqlTemplates for StatementCache<G> {
    fn select(&self) -> &str {
        &self.select_sql
    }

    fn select_all(&self) -> &str {
        &self.select_all_sql
    }

    fn insert(&self, fields: &[&str]) -> OrmResult<String> {
        self.generator.insert(&self.table, fields)
    }

    fn update(&self, fields: &[&str]) -> OrmResult<String> {
        self.generator.update(&self.table, &self.id_field, fields)
    }

    fn delete(&self) -> &str {
        &self.delete_sql
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OrmError;
    use crate::mock::SqlGeneratorMock;
    use crate::statement::{build_delete, build_select_all, build_select_by_id};
    use std::sync::{Arc, Mutex};

    const USER_FIELDS: &[&str] = &["UserId", "Name", "Surname"];

    #[test]
    fn fixed_statements_match_direct_builders() {
        for dialect in Dialect::ALL {
            let cache = StatementCache::for_dialect(dialect, "users", "UserId", USER_FIELDS).unwrap();
            assert_eq!(
                cache.select(),
                build_select_by_id(dialect, "users", "UserId", USER_FIELDS).unwrap()
            );
            assert_eq!(cache.select_all(), build_select_all("users", USER_FIELDS));
            assert_eq!(
                cache.delete(),
                build_delete(dialect, "users", "UserId").unwrap()
            );
        }
    }

    #[test]
    fn mysql_cache_contents() {
        let cache = StatementCache::for_dialect(Dialect::MySql, "users", "UserId", USER_FIELDS).unwrap();
        assert_eq!(
            cache.select(),
            "SELECT UserId, Name, Surname FROM users WHERE UserId = ?"
        );
        assert_eq!(cache.select_all(), "SELECT UserId, Name, Surname FROM users");
        assert_eq!(cache.delete(), "DELETE FROM users WHERE UserId = ?");
        assert_eq!(cache.table(), "users");
        assert_eq!(cache.id_field(), "UserId");
    }

    #[test]
    fn insert_and_update_follow_the_call_fields() {
        let cache = StatementCache::for_dialect(Dialect::MySql, "users", "UserId", USER_FIELDS).unwrap();
        assert_eq!(
            cache.insert(&["Name", "Surname"]).unwrap(),
            "INSERT INTO users (Name, Surname) VALUES (?, ?)"
        );
        assert_eq!(
            cache.insert(&["Name"]).unwrap(),
            "INSERT INTO users (Name) VALUES (?)"
        );
        assert_eq!(
            cache.update(&["Surname"]).unwrap(),
            "UPDATE users SET (Surname = ?) WHERE UserId = ?"
        );
    }

    #[test]
    fn oracle_cache_uses_named_placeholders() {
        let cache = StatementCache::for_dialect(Dialect::Oracle, "users", "UserId", USER_FIELDS).unwrap();
        assert_eq!(cache.delete(), "DELETE FROM users WHERE UserId = :col");
        assert_eq!(
            cache.update(&["Name", "Surname"]).unwrap(),
            "UPDATE users SET (Name = :val1, Surname = :val2) WHERE UserId = :col"
        );
    }

    #[test]
    fn new_renders_with_the_given_generator() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_select = Arc::clone(&seen);
        let generator = SqlGeneratorMock {
            select_by_id: Box::new(move |table, id, fields| {
                seen_select
                    .lock()
                    .unwrap()
                    .push(format!("{table}|{id}|{}", fields.join(",")));
                Ok("AnySelect".to_string())
            }),
            select_all: Box::new(|_, _| "AnySelectAll".to_string()),
            delete: Box::new(|_, _| Ok("AnyDelete".to_string())),
            ..SqlGeneratorMock::default()
        };

        let cache =
            StatementCache::new(generator, "any_table", "id_col", &["id_col", "col_1", "col_2"])
                .unwrap();

        assert_eq!(cache.select(), "AnySelect");
        assert_eq!(cache.select_all(), "AnySelectAll");
        assert_eq!(cache.delete(), "AnyDelete");
        assert_eq!(*seen.lock().unwrap(), vec!["any_table|id_col|id_col,col_1,col_2"]);
    }

    #[test]
    fn select_failure_prevents_construction() {
        let generator = SqlGeneratorMock {
            select_by_id: Box::new(|_, _, _| Err(OrmError::unsupported_dialect("-1"))),
            ..SqlGeneratorMock::default()
        };

        let err = StatementCache::new(generator, "users", "id", &["id"]).unwrap_err();
        assert!(err.is_unsupported_dialect());
        assert_eq!(err.to_string(), "unknown dialect");
    }

    #[test]
    fn delete_failure_prevents_construction() {
        let generator = SqlGeneratorMock {
            delete: Box::new(|_, _| Err(OrmError::Other("AnyError".to_string()))),
            ..SqlGeneratorMock::default()
        };

        let err = StatementCache::new(generator, "users", "id", &["id"]).unwrap_err();
        assert_eq!(err.to_string(), "AnyError");
    }

    #[test]
    fn insert_and_update_delegate_every_call() {
        let calls = Arc::new(Mutex::new(0usize));
        let insert_calls = Arc::clone(&calls);
        let generator = SqlGeneratorMock {
            insert: Box::new(move |table, fields| {
                *insert_calls.lock().unwrap() += 1;
                Ok(format!("INSERT {table} {}", fields.len()))
            }),
            update: Box::new(|table, id, fields| Ok(format!("UPDATE {table} {id} {}", fields.len()))),
            ..SqlGeneratorMock::default()
        };
        let cache = StatementCache::new(generator, "users", "id", &["id", "a", "b"]).unwrap();

        assert_eq!(cache.insert(&["a", "b"]).unwrap(), "INSERT users 2");
        assert_eq!(cache.insert(&["a"]).unwrap(), "INSERT users 1");
        assert_eq!(*calls.lock().unwrap(), 2);
        assert_eq!(cache.update(&["b"]).unwrap(), "UPDATE users id 1");
    }

    #[test]
    fn insert_errors_propagate() {
        let generator = SqlGeneratorMock {
            insert: Box::new(|_, _| Err(OrmError::unsupported_dialect("-1"))),
            update: Box::new(|_, _, _| Err(OrmError::unsupported_dialect("-1"))),
            ..SqlGeneratorMock::default()
        };
        let cache = StatementCache::new(generator, "users", "id", &["id"]).unwrap();

        assert!(cache.insert(&["a"]).unwrap_err().is_unsupported_dialect());
        assert!(cache.update(&["a"]).unwrap_err().is_unsupported_dialect());
    }
}
