//! SQL dialects and their parameter placeholder syntax.
//!
//! Statement shape is the same for every supported engine; only the
//! placeholder tokens differ:
//!
//! | Dialect                        | 1 placeholder | N placeholders         |
//! |--------------------------------|---------------|------------------------|
//! | MySQL, SQLite, ODBC, MariaDB   | `?`           | `?`, `?`, ...          |
//! | PostgreSQL                     | `$1`          | `$1`, `$2`, ... `$N`   |
//! | Oracle (column)                | `:col`        | `:col1`, ... `:colN`   |
//! | Oracle (value)                 | `:val`        | `:val1`, ... `:valN`   |
//!
//! Oracle binds by name, so column-context and value-context placeholders
//! get different prefixes (see [`ParamKind`]).

use crate::error::{OrmError, OrmResult};
use std::fmt;
use std::str::FromStr;

/// The SQL engine whose placeholder syntax is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Deserialize)]
#[serde(try_from = "String")]
pub enum Dialect {
    #[default]
    MySql,
    PostgreSql,
    Oracle,
    Sqlite,
    Odbc,
    MariaDb,
}

/// Placeholder category.
///
/// Only Oracle distinguishes the two (`:colN` vs `:valN`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    Column,
    Value,
}

impl ParamKind {
    fn oracle_prefix(self) -> &'static str {
        match self {
            Self::Column => "col",
            Self::Value => "val",
        }
    }
}

impl Dialect {
    /// All supported dialects, in ordinal order.
    pub const ALL: [Dialect; 6] = [
        Self::MySql,
        Self::PostgreSql,
        Self::Oracle,
        Self::Sqlite,
        Self::Odbc,
        Self::MariaDb,
    ];

    /// Canonical lower-case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::MySql => "mysql",
            Self::PostgreSql => "postgresql",
            Self::Oracle => "oracle",
            Self::Sqlite => "sqlite",
            Self::Odbc => "odbc",
            Self::MariaDb => "mariadb",
        }
    }

    /// Ordinal code (`MySql = 0` ... `MariaDb = 5`).
    pub fn code(self) -> i32 {
        match self {
            Self::MySql => 0,
            Self::PostgreSql => 1,
            Self::Oracle => 2,
            Self::Sqlite => 3,
            Self::Odbc => 4,
            Self::MariaDb => 5,
        }
    }

    /// Resolve an ordinal code; anything outside `0..=5` is unsupported.
    pub fn from_code(code: i32) -> OrmResult<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.code() == code)
            .ok_or_else(|| OrmError::unsupported_dialect(code.to_string()))
    }

    /// Generate `count` placeholders of the given kind.
    ///
    /// `count == 0` yields an empty list. Oracle drops the numeric suffix
    /// only when exactly one placeholder is requested.
    pub fn placeholders(self, kind: ParamKind, count: usize) -> Vec<String> {
        match self {
            Self::MySql | Self::Sqlite | Self::Odbc | Self::MariaDb => vec!["?".to_string(); count],
            Self::PostgreSql => (1..=count).map(|i| format!("${}", i)).collect(),
            Self::Oracle => {
                let prefix = kind.oracle_prefix();
                if count == 1 {
                    return vec![format!(":{}", prefix)];
                }
                (1..=count).map(|i| format!(":{}{}", prefix, i)).collect()
            }
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = OrmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mysql" => Ok(Self::MySql),
            "postgresql" | "postgres" | "pg" => Ok(Self::PostgreSql),
            "oracle" => Ok(Self::Oracle),
            "sqlite" | "sqlite3" => Ok(Self::Sqlite),
            "odbc" => Ok(Self::Odbc),
            "mariadb" => Ok(Self::MariaDb),
            _ => Err(OrmError::unsupported_dialect(s)),
        }
    }
}

impl TryFrom<i32> for Dialect {
    type Error = OrmError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl TryFrom<String> for Dialect {
    type Error = OrmError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl serde::Serialize for Dialect {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Source of dialect-specific placeholder tokens.
///
/// [`Dialect`] is the production implementation. The trait exists so statement
/// builders can be driven by any generator, including test doubles.
pub trait ParamGen {
    /// Return `count` placeholders of the given kind, in bind order.
    fn placeholders(&self, kind: ParamKind, count: usize) -> OrmResult<Vec<String>>;
}

impl ParamGen for Dialect {
    fn placeholders(&self, kind: ParamKind, count: usize) -> OrmResult<Vec<String>> {
        Ok(Dialect::placeholders(*self, kind, count))
    }
}

impl<G: ParamGen + ?Sized> ParamGen for &G {
    fn placeholders(&self, kind: ParamKind, count: usize) -> OrmResult<Vec<String>> {
        (**self).placeholders(kind, count)
    }
}
