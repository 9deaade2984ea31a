//! Single-table CRUD repository.
//!
//! A [`SqlRepository`] pairs a [`GenericClient`] with the statement cache of one
//! table. Statements are built from entity metadata; values are always bound
//! as parameters.
//!
//! ```ignore
//! use crudsql::{Dialect, Entity, FromRow, Repository, RepositoryConfig, SqlRepository};
//!
//! #[derive(Entity, FromRow)]
//! struct User {
//!     #[orm(column = "UserId")]
//!     id: i64,
//!     #[orm(column = "Name")]
//!     name: String,
//! }
//!
//! let config = RepositoryConfig::new("users")
//!     .id_field("UserId")
//!     .dialect(Dialect::PostgreSql);
//! let users = SqlRepository::<User, _>::new(client, config)?;
//!
//! users.create(&User { id: 0, name: "alice".into() }).await?;
//! let alice = users.read(&1_i64).await?;
//! ```

use crate::client::GenericClient;
use crate::config::RepositoryConfig;
use crate::entity::Entity;
use crate::error::{OrmError, OrmResult, StatementKind};
use crate::monitor;
use crate::row::FromRow;
use crate::templates::{SqlTemplates, StatementCache};
use std::marker::PhantomData;
use tokio_postgres::types::ToSql;

/// CRUD operations over the rows of one table.
pub trait Repository<T>: Send + Sync {
    /// Insert `model` as a new row. Exactly one row must be affected.
    fn create(&self, model: &T) -> impl std::future::Future<Output = OrmResult<()>> + Send;

    /// Fetch the row whose id matches `id`.
    ///
    /// Returns [`OrmError::NotFound`] when no row matches.
    fn read<I>(&self, id: &I) -> impl std::future::Future<Output = OrmResult<T>> + Send
    where
        I: ToSql + Sync;

    /// Fetch every row of the table.
    fn read_all(&self) -> impl std::future::Future<Output = OrmResult<Vec<T>>> + Send;

    /// Overwrite the row whose id matches `id` with the non-id fields of `model`.
    /// Exactly one row must be affected.
    ///
    /// The id is bound after the values. PostgreSQL statements number the WHERE
    /// placeholder `$1`, so a PostgreSQL UPDATE run through `tokio_postgres`
    /// does not bind the id where the statement expects it.
    fn update<I>(&self, id: &I, model: &T) -> impl std::future::Future<Output = OrmResult<()>> + Send
    where
        I: ToSql + Sync;

    /// Remove the row whose id matches `id`. Deleting nothing is not an error;
    /// deleting more than one row is.
    fn delete<I>(&self, id: &I) -> impl std::future::Future<Output = OrmResult<()>> + Send
    where
        I: ToSql + Sync;
}

/// Repository backed by generated SQL statements.
pub struct SqlRepository<T, C, S = StatementCache> {
    client: C,
    table: String,
    id_field: String,
    templates: S,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity, C: GenericClient> SqlRepository<T, C> {
    /// Create a repository for `T` using the statement cache for the configured dialect.
    ///
    /// Fails when the configuration is invalid or the statements cannot be generated.
    pub fn new(client: C, config: RepositoryConfig) -> OrmResult<Self> {
        let config = config.validate()?;
        let templates = StatementCache::for_dialect(
            config.dialect,
            &config.table,
            &config.id_field,
            T::COLUMNS,
        )?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "crudsql",
            table = %config.table,
            id_field = %config.id_field,
            dialect = %config.dialect,
            "repository ready"
        );

        Ok(Self::from_parts(client, config, templates))
    }
}

impl<T, C, S> SqlRepository<T, C, S> {
    /// Create a repository with a custom statement source.
    ///
    /// The dialect of `config` is ignored; `templates` decides the SQL.
    pub fn with_templates(client: C, config: RepositoryConfig, templates: S) -> OrmResult<Self> {
        let config = config.validate()?;
        Ok(Self::from_parts(client, config, templates))
    }

    fn from_parts(client: C, config: RepositoryConfig, templates: S) -> Self {
        Self {
            client,
            table: config.table,
            id_field: config.id_field,
            templates,
            _entity: PhantomData,
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn templates(&self) -> &S {
        &self.templates
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn id_field(&self) -> &str {
        &self.id_field
    }

    /// Consume the repository and return the client.
    pub fn into_client(self) -> C {
        self.client
    }
}

fn expect_one(statement: StatementKind, affected: u64) -> OrmResult<()> {
    if affected != 1 {
        return Err(OrmError::unexpected_row_count(statement, affected));
    }
    Ok(())
}

impl<T, C, S> Repository<T> for SqlRepository<T, C, S>
where
    T: Entity + FromRow,
    C: GenericClient,
    S: SqlTemplates + Send + Sync,
{
    async fn create(&self, model: &T) -> OrmResult<()> {
        let (fields, values) = model.properties(&self.id_field);
        let sql = self.templates.insert(&fields)?;

        monitor::sql_event(StatementKind::Insert, &self.table, &sql, values.len());
        let affected = self.client.execute(&sql, &values).await?;
        expect_one(StatementKind::Insert, affected)
    }

    async fn read<I>(&self, id: &I) -> OrmResult<T>
    where
        I: ToSql + Sync,
    {
        let sql = self.templates.select();

        monitor::sql_event(StatementKind::Select, &self.table, sql, 1);
        let row = self.client.query_opt(sql, &[id]).await?.ok_or_else(|| {
            OrmError::not_found(format!(
                "no row in {} with matching {}",
                self.table, self.id_field
            ))
        })?;
        T::from_row(&row)
    }

    async fn read_all(&self) -> OrmResult<Vec<T>> {
        let sql = self.templates.select_all();

        monitor::sql_event(StatementKind::SelectAll, &self.table, sql, 0);
        let rows = self.client.query(sql, &[]).await?;
        rows.iter().map(T::from_row).collect()
    }

    async fn update<I>(&self, id: &I, model: &T) -> OrmResult<()>
    where
        I: ToSql + Sync,
    {
        let (fields, mut params) = model.properties(&self.id_field);
        let sql = self.templates.update(&fields)?;
        params.push(id);

        monitor::sql_event(StatementKind::Update, &self.table, &sql, params.len());
        let affected = self.client.execute(&sql, &params).await?;
        expect_one(StatementKind::Update, affected)
    }

    async fn delete<I>(&self, id: &I) -> OrmResult<()>
    where
        I: ToSql + Sync,
    {
        let sql = self.templates.delete();

        monitor::sql_event(StatementKind::Delete, &self.table, sql, 1);
        let affected = self.client.execute(sql, &[id]).await?;
        if affected > 1 {
            return Err(OrmError::unexpected_row_count(StatementKind::Delete, affected));
        }
        Ok(())
    }
}
