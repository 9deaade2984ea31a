//! # crudsql
//!
//! Single-table CRUD statements for six SQL dialects, plus a small repository
//! layer that runs them through any [`GenericClient`].
//!
//! ## Features
//!
//! - **One statement shape, many dialects**: MySQL, PostgreSQL, Oracle, SQLite,
//!   ODBC and MariaDB differ only in placeholder syntax
//! - **Cached templates**: SELECT and DELETE are rendered once per table
//! - **Type-safe mapping**: struct ↔ columns via `#[derive(Entity, FromRow)]`
//! - **Parameters only**: values are always bound, never spliced into SQL
//! - **Seams for tests**: placeholder source, generator, templates and client
//!   are all traits
//!
//! ## Statement builders
//!
//! ```rust
//! use crudsql::{Dialect, build_insert, build_update};
//!
//! let sql = build_insert(Dialect::Oracle, "users", &["Name", "Surname"]).unwrap();
//! assert_eq!(sql, "INSERT INTO users (Name, Surname) VALUES (:val1, :val2)");
//!
//! let sql = build_update(Dialect::MySql, "users", "UserId", &["Name"]).unwrap();
//! assert_eq!(sql, "UPDATE users SET (Name = ?) WHERE UserId = ?");
//! ```
//!
//! ## Repository
//!
//! ```ignore
//! use crudsql::{Dialect, Entity, FromRow, Repository, RepositoryConfig, SqlRepository};
//!
//! #[derive(Entity, FromRow)]
//! #[orm(table = "users", id = "UserId")]
//! struct User {
//!     #[orm(column = "UserId")]
//!     id: i64,
//!     #[orm(column = "Name")]
//!     name: String,
//! }
//!
//! let config = RepositoryConfig::for_entity::<User>().dialect(Dialect::PostgreSql);
//! let users = SqlRepository::<User, _>::new(client, config)?;
//! for user in users.read_all().await? {
//!     println!("{}", user.name);
//! }
//! ```

pub mod client;
pub mod config;
pub mod dialect;
pub mod entity;
pub mod error;
pub mod repository;
pub mod row;
pub mod statement;
pub mod templates;

mod monitor;

#[cfg(test)]
mod mock;

pub use client::GenericClient;
pub use config::{DEFAULT_ID_FIELD, RepositoryConfig};
pub use dialect::{Dialect, ParamGen, ParamKind};
pub use entity::Entity;
pub use error::{OrmError, OrmResult, StatementKind};
pub use repository::{Repository, SqlRepository};
pub use row::{FromRow, RowExt};
pub use statement::{
    SqlGenerator, StatementBuilder, build_delete, build_insert, build_select_all,
    build_select_by_id, build_update,
};
pub use templates::{SqlTemplates, StatementCache};

// Re-export derive macros. Traits and derives live in different namespaces,
// so `use crudsql::Entity` brings in both.
#[cfg(feature = "derive")]
pub use crudsql_derive::{Entity, FromRow};

// Re-export tokio_postgres for convenience
pub use tokio_postgres;
