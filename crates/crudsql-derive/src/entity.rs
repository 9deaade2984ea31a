//! Entity derive macro implementation

use crate::attr::{StructAttrs, column_name};
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
                    "Entity can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "Entity can only be derived for structs",
            ));
        }
    };

    let mut columns = Vec::with_capacity(fields.len());
    let mut idents = Vec::with_capacity(fields.len());
    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let Some(column) = column_name(field)? else {
            return Err(syn::Error::new_spanned(
                field,
                format!("{name}.{ident} lacks an #[orm(column = \"...\")] attribute"),
            ));
        };
        columns.push(column);
        idents.push(ident);
    }

    let attrs = StructAttrs::parse(&input.attrs)?;
    let table = option_str(attrs.table.as_deref());
    let id = option_str(attrs.id.as_deref());

    Ok(quote! {
        impl #impl_generics crudsql::Entity for #name #ty_generics #where_clause {
            const COLUMNS: &'static [&'static str] = &[#(#columns),*];
            const TABLE: ::std::option::Option<&'static str> = #table;
            const ID: ::std::option::Option<&'static str> = #id;

            fn values(&self) -> ::std::vec::Vec<&(dyn crudsql::tokio_postgres::types::ToSql + Sync)> {
                ::std::vec![
                    #(&self.#idents as &(dyn crudsql::tokio_postgres::types::ToSql + Sync)),*
                ]
            }
        }
    })
}

fn option_str(value: Option<&str>) -> TokenStream {
    match value {
        Some(v) => quote! { ::std::option::Option::Some(#v) },
        None => quote! { ::std::option::Option::None },
    }
}
