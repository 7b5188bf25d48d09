use crate::schema;

use proc_macro2::TokenStream;
use quote::quote;

/// Expands `#[derive(Model)]`.
///
/// The struct's `#[column]` fields are introspected exactly as the generator
/// reads them from a source file, and listed as `(field, column, type)`.
pub fn derive_model(input: TokenStream) -> syn::Result<TokenStream> {
    let item: syn::ItemStruct = syn::parse2(input)?;
    let columns = schema::introspect_struct(&item)?;

    let ident = &item.ident;
    let (impl_generics, ty_generics, where_clause) = item.generics.split_for_impl();

    let entries = columns.iter().map(|column| {
        let field = &column.field;
        let name = &column.column;
        let ty = &column.ty;
        quote!((#field, #name, #ty))
    });

    Ok(quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            pub const COLUMNS: &'static [(&'static str, &'static str, &'static str)] = &[
                #( #entries ),*
            ];
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lists_annotated_fields() {
        let output = derive_model(quote! {
            struct User {
                #[column("id")]
                id: i64,
                #[column("email_address", type = "STRING(255)")]
                email: String,
                scratch: Vec<u8>,
            }
        })
        .unwrap();

        let expected = quote! {
            impl User {
                pub const COLUMNS: &'static [(&'static str, &'static str, &'static str)] = &[
                    ("id", "id", "INT64"),
                    ("email", "email_address", "STRING(255)")
                ];
            }
        };

        assert_eq!(output.to_string(), expected.to_string());
    }

    #[test]
    fn rejects_enums() {
        assert!(derive_model(quote!(enum Kind { A, B })).is_err());
    }
}
