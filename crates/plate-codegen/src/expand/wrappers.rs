use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Table-typed forms of the generic options, so callers can write
    /// `post::limit(5)` without naming the marker type.
    pub(super) fn expand_wrappers(&self) -> TokenStream {
        let plate = &self.plate;
        let ty = &self.model.name.ty;

        quote! {
            pub fn order_by(ordering: Ordering<#ty>) -> Opt<#ty> {
                #plate::order_by(ordering)
            }

            pub fn limit(count: u64) -> Opt<#ty> {
                #plate::limit(count)
            }

            pub fn and(exprs: Vec<Expr<#ty>>) -> Expr<#ty> {
                #plate::and(exprs)
            }

            pub fn or(exprs: Vec<Expr<#ty>>) -> Expr<#ty> {
                #plate::or(exprs)
            }

            pub fn not(expr: Expr<#ty>) -> Expr<#ty> {
                #plate::not(expr)
            }

            pub fn with_inner_join() -> Opt<#ty> {
                #plate::with_inner_join()
            }

            pub fn union_all(opts: Vec<Opt<#ty>>) -> Opt<#ty> {
                #plate::union_all(opts)
            }

            pub fn union_distinct(opts: Vec<Opt<#ty>>) -> Opt<#ty> {
                #plate::union_distinct(opts)
            }
        }
    }
}
