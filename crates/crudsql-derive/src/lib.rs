//! Derive macros for crudsql
//!
//! Provides `#[derive(Entity)]` and `#[derive(FromRow)]`.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod attr;
mod entity;
mod from_row;

/// Derive `Entity` metadata for a struct.
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
/// ```
///
/// # Generated
///
/// - `COLUMNS` - column names in field order
/// - `TABLE` / `ID` - defaults from the struct attribute, or `None`
/// - `fn values(&self)` - field references as bind parameters
///
/// # Attributes
///
/// - `#[orm(column = "name")]` - Column for the field (required on every field)
/// - `#[orm(table = "name", id = "column")]` - Default table and id column (optional)
#[proc_macro_derive(Entity, attributes(orm))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    entity::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// Derive `FromRow` trait for a struct.
///
/// # Example
///
/// ```ignore
/// use crudsql::FromRow;
///
/// #[derive(FromRow)]
/// struct User {
///     #[orm(column = "UserId")]
///     id: i64,
///     name: String,
/// }
/// ```
///
/// # Attributes
///
/// - `#[orm(column = "name")]` - Map field to a different column name
#[proc_macro_derive(FromRow, attributes(orm))]
pub fn derive_from_row(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    from_row::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
