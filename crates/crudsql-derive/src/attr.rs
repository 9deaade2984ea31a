//! `#[orm(...)]` attribute parsing shared by the derives.

use syn::{Attribute, Field, LitStr, Result};

/// Struct-level `#[orm(table = "...", id = "...")]`.
#[derive(Default)]
pub struct StructAttrs {
    pub table: Option<String>,
    pub id: Option<String>,
}

impl StructAttrs {
    pub fn parse(attrs: &[Attribute]) -> Result<Self> {
        let mut out = Self::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident("orm")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("table") {
                    out.table = Some(meta.value()?.parse::<LitStr>()?.value());
                    Ok(())
                } else if meta.path.is_ident("id") {
                    out.id = Some(meta.value()?.parse::<LitStr>()?.value());
                    Ok(())
                } else {
                    Err(meta.error("expected `table = \"...\"` or `id = \"...\"`"))
                }
            })?;
        }
        Ok(out)
    }
}

/// Column name from a field-level `#[orm(column = "...")]`, if present.
pub fn column_name(field: &Field) -> Result<Option<String>> {
    let mut column = None;
    for attr in field.attrs.iter().filter(|a| a.path().is_ident("orm")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("column") {
                column = Some(meta.value()?.parse::<LitStr>()?.value());
                Ok(())
            } else {
                Err(meta.error("expected `column = \"...\"`"))
            }
        })?;
    }
    Ok(column)
}
