use crate::schema::Model;

use indexmap::IndexMap;
use proc_macro2::TokenStream;
use quote::quote;

/// Marker types binding each model to its table name.
pub(super) fn expand(models: &IndexMap<String, Model>, plate: &TokenStream) -> TokenStream {
    let markers = models.values().map(|model| {
        let ty = &model.name.ty;
        let table = &model.table;

        quote! {
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            pub struct #ty;

            impl Table for #ty {
                const NAME: &'static str = #table;
            }
        }
    });

    quote! {
        use #plate::Table;

        #( #markers )*
    }
}
