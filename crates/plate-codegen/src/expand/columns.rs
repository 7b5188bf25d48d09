use super::Expand;
use crate::schema::{Column, Name, ValueType};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// One `Column` constant per column, named after the field:
    ///
    /// ```ignore
    /// pub const USER_ID: Column<Post, i64> = Column::new("user_id");
    /// ```
    ///
    /// Columns whose type tag maps to no value type get no constant.
    pub(super) fn expand_columns(&self) -> TokenStream {
        let ty = &self.model.name.ty;

        let columns = self.model.columns.iter().filter_map(|column| {
            let Some(value_ty) = ValueType::from_tag(&column.ty) else {
                tracing::warn!(
                    table = %self.model.table,
                    column = %column.column,
                    ty = %column.ty,
                    "unsupported column type; skipping accessor"
                );
                return None;
            };

            let ident = match Name::new(&column.field) {
                Ok(name) => name.constant,
                Err(err) => {
                    tracing::warn!(table = %self.model.table, %err, "skipping column accessor");
                    return None;
                }
            };

            let value_ty = value_ty.tokens();
            let name = &column.column;

            Some(quote! {
                pub const #ident: Column<#ty, #value_ty> = Column::new(#name);
            })
        });

        quote!( #( #columns )* )
    }

    pub(super) fn typed_columns(&self) -> impl Iterator<Item = (&Column, ValueType)> + '_ {
        self.model.columns.iter().filter_map(|column| {
            ValueType::from_tag(&column.ty).map(|ty| (column, ty))
        })
    }
}
