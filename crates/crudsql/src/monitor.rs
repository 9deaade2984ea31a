//! SQL event logging via `tracing`.
//!
//! Enable via the crate feature `tracing` (on by default). Events are emitted at
//! DEBUG on target `crudsql.sql` right before a statement is sent to the client.

use crate::error::StatementKind;

/// Longest SQL text (in bytes) written to a log event.
#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
pub const MAX_LOGGED_SQL: usize = 200;

/// Truncate `sql` to at most `max` bytes without splitting a UTF-8 character.
#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
pub(crate) fn truncate_sql_bytes(sql: &str, max: usize) -> &str {
    if sql.len() <= max {
        return sql;
    }
    let mut end = max;
    while !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

#[cfg(feature = "tracing")]
pub(crate) fn sql_event(statement: StatementKind, table: &str, sql: &str, param_count: usize) {
    let shown = truncate_sql_bytes(sql, MAX_LOGGED_SQL);
    let truncated = shown.len() < sql.len();
    tracing::debug!(
        target: "crudsql.sql",
        statement = %statement,
        table,
        param_count,
        truncated,
        sql = %shown,
        "executing statement"
    );
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn sql_event(_statement: StatementKind, _table: &str, _sql: &str, _param_count: usize) {}
