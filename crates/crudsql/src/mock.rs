//! Closure-backed test doubles for the generator, template and client seams.

use crate::client::GenericClient;
use crate::dialect::{ParamGen, ParamKind};
use crate::error::{OrmError, OrmResult};
use crate::statement::SqlGenerator;
use crate::templates::SqlTemplates;
use std::collections::VecDeque;
use std::sync::Mutex;
use tokio_postgres::Row;
use tokio_postgres::types::ToSql;

type Callback<A, R> = Box<dyn Fn(A) -> R + Send + Sync>;

pub(crate) struct ParamGenMock {
    pub placeholders: Callback<(ParamKind, usize), OrmResult<Vec<String>>>,
}

impl ParamGenMock {
    pub(crate) fn new(
        f: impl Fn(ParamKind, usize) -> OrmResult<Vec<String>> + Send + Sync + 'static,
    ) -> Self {
        Self {
            placeholders: Box::new(move |(kind, count)| f(kind, count)),
        }
    }
}

impl ParamGen for ParamGenMock {
    fn placeholders(&self, kind: ParamKind, count: usize) -> OrmResult<Vec<String>> {
        (self.placeholders)((kind, count))
    }
}

type SelectByIdFn = dyn Fn(&str, &str, &[&str]) -> OrmResult<String> + Send + Sync;
type SelectAllFn = dyn Fn(&str, &[&str]) -> String + Send + Sync;
type InsertFn = dyn Fn(&str, &[&str]) -> OrmResult<String> + Send + Sync;
type UpdateFn = dyn Fn(&str, &str, &[&str]) -> OrmResult<String> + Send + Sync;
type DeleteFn = dyn Fn(&str, &str) -> OrmResult<String> + Send + Sync;

pub(crate) struct SqlGeneratorMock {
    pub select_by_id: Box<SelectByIdFn>,
    pub select_all: Box<SelectAllFn>,
    pub insert: Box<InsertFn>,
    pub update: Box<UpdateFn>,
    pub delete: Box<DeleteFn>,
}

impl std::fmt::Debug for SqlGeneratorMock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqlGeneratorMock").finish_non_exhaustive()
    }
}

impl Default for SqlGeneratorMock {
    fn default() -> Self {
        Self {
            select_by_id: Box::new(|_, _, _| Ok(String::new())),
            select_all: Box::new(|_, _| String::new()),
            insert: Box::new(|_, _| Ok(String::new())),
            update: Box::new(|_, _, _| Ok(String::new())),
            delete: Box::new(|_, _| Ok(String::new())),
        }
    }
}

impl SqlGenerator for SqlGeneratorMock {
    fn select_by_id(&self, table: &str, id_field: &str, fields: &[&str]) -> OrmResult<String> {
        (self.select_by_id)(table, id_field, fields)
    }

    fn select_all(&self, table: &str, fields: &[&str]) -> String {
        (self.select_all)(table, fields)
    }

    fn insert(&self, table: &str, fields: &[&str]) -> OrmResult<String> {
        (self.insert)(table, fields)
    }

    fn update(&self, table: &str, id_field: &str, fields: &[&str]) -> OrmResult<String> {
        (self.update)(table, id_field, fields)
    }

    fn delete(&self, table: &str, id_field: &str) -> OrmResult<String> {
        (self.delete)(table, id_field)
    }
}

type FieldsFn = dyn Fn(&[&str]) -> OrmResult<String> + Send + Sync;

pub(crate) struct SqlTemplatesMock {
    pub select: String,
    pub select_all: String,
    pub delete: String,
    pub insert: Box<FieldsFn>,
    pub update: Box<FieldsFn>,
}

impl Default for SqlTemplatesMock {
    fn default() -> Self {
        Self {
            select: String::new(),
            select_all: String::new(),
            delete: String::new(),
            insert: Box::new(|_| Ok(String::new())),
            update: Box::new(|_| Ok(String::new())),
        }
    }
}

impl SqlTemplates for SqlTemplatesMock {
    fn select(&self) -> &str {
        &self.select
    }

    fn select_all(&self) -> &str {
        &self.select_all
    }

    fn insert(&self, fields: &[&str]) -> OrmResult<String> {
        (self.insert)(fields)
    }

    fn update(&self, fields: &[&str]) -> OrmResult<String> {
        (self.update)(fields)
    }

    fn delete(&self) -> &str {
        &self.delete
    }
}

/// A statement the [`MockClient`] received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Call {
    pub sql: String,
    pub params: Vec<String>,
}

/// Scripted reply for the next client call.
pub(crate) enum Reply {
    Affected(u64),
    Fail(OrmError),
}

/// Records every statement and answers from a queue of [`Reply`] values.
///
/// Queries always return no rows; `tokio_postgres::Row` cannot be built
/// without a server.
///
/// Parameters are recorded through their `Debug` form so tests can assert bind
/// order without a database.
#[derive(Default)]
pub(crate) struct MockClient {
    calls: Mutex<Vec<Call>>,
    replies: Mutex<VecDeque<Reply>>,
}

impl MockClient {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(self, reply: Reply) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> Option<Reply> {
        self.calls.lock().unwrap().push(Call {
            sql: sql.to_string(),
            params: params.iter().map(|p| format!("{:?}", p)).collect(),
        });
        self.replies.lock().unwrap().pop_front()
    }
}

impl GenericClient for MockClient {
    async fn query(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> OrmResult<Vec<Row>> {
        match self.record(sql, params) {
            Some(Reply::Fail(e)) => Err(e),
            Some(Reply::Affected(_)) => Err(OrmError::Other("expected a query, got execute reply".to_string())),
            None => Ok(Vec::new()),
        }
    }

    async fn query_opt(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> OrmResult<Option<Row>> {
        let rows = GenericClient::query(self, sql, params).await?;
        Ok(rows.into_iter().next())
    }

    async fn execute(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> OrmResult<u64> {
        match self.record(sql, params) {
            Some(Reply::Affected(n)) => Ok(n),
            Some(Reply::Fail(e)) => Err(e),
            None => Ok(1),
        }
    }
}
