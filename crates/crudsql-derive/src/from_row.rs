//! FromRow derive macro implementation

use crate::attr::column_name;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Result};

pub fn expand(input: DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input,
                    "FromRow can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "FromRow can only be derived for structs",
            ));
        }
    };

    let field_extracts = fields
        .iter()
        .filter_map(|field| field.ident.as_ref().map(|ident| (field, ident)))
        .map(|(field, ident)| {
            // Unannotated fields read the column named after the field.
            let column = column_name(field)?.unwrap_or_else(|| ident.to_string());
            Ok(quote! {
                #ident: row.try_get_column(#column)?
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(quote! {
        impl #impl_generics crudsql::FromRow for #name #ty_generics #where_clause {
            fn from_row(row: &crudsql::tokio_postgres::Row) -> crudsql::OrmResult<Self> {
                use crudsql::RowExt;
                Ok(Self {
                    #(#field_extracts),*
                })
            }
        }
    })
}
