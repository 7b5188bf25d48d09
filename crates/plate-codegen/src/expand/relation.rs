use super::Expand;
use crate::relation::{Accessor, KeyPair, RelationKind};

use proc_macro2::{Ident, Span, TokenStream};
use quote::{quote, ToTokens};

impl Expand<'_> {
    /// For each relationship `rel`:
    ///
    /// * `rel(opts)` joins the related table;
    /// * `load_rel(opts)` adds it as a subquery column;
    /// * `has_rel(opts)` tests for a related row with `EXISTS`.
    ///
    /// Junction tables have none.
    pub(super) fn expand_relations(&self) -> TokenStream {
        if self.model.is_junction {
            return quote!();
        }

        let relations = self.accessors.iter().map(|accessor| self.expand_relation(accessor));
        quote!( #( #relations )* )
    }

    fn expand_relation(&self, accessor: &Accessor) -> TokenStream {
        let plate = &self.plate;
        let ty = &self.model.name.ty;
        let target_ty = &self.target(accessor).name.ty;

        let name = &accessor.name.snake;
        let join_ident = &accessor.name.ident;
        let load_ident = Ident::new(&format!("load_{name}"), Span::call_site());
        let has_ident = Ident::new(&format!("has_{name}"), Span::call_site());

        let keys = KeyPairTokens(&accessor.keys);

        let (join, link, shape) = match &accessor.kind {
            RelationKind::BelongsTo => (
                quote!(#plate::direct_join::<#ty, #target_ty>(#name, #keys, JoinKind::Inner, opts)),
                quote!(Link::Direct(#keys)),
                quote!(Shape::Scalar),
            ),
            RelationKind::HasMany => (
                quote!(#plate::direct_join::<#ty, #target_ty>(#name, #keys, JoinKind::LeftOuter, opts)),
                quote!(Link::Direct(#keys)),
                quote!(Shape::Array),
            ),
            RelationKind::ManyToMany {
                junction,
                junction_keys,
            } => {
                let target_keys = KeyPairTokens(junction_keys);
                let junction = quote! {
                    Junction {
                        table: #junction,
                        keys: #keys,
                        target_keys: #target_keys,
                    }
                };

                (
                    quote!(#plate::junction_join::<#ty, #target_ty>(#name, #junction, JoinKind::LeftOuter, opts)),
                    quote!(Link::Through(#junction)),
                    quote!(Shape::Array),
                )
            }
        };

        quote! {
            pub fn #join_ident(opts: Vec<Opt<#target_ty>>) -> Opt<#ty> {
                #join
            }

            pub fn #load_ident(opts: Vec<Opt<#target_ty>>) -> Opt<#ty> {
                #plate::subquery::<#ty, #target_ty>(#name, #link, #shape, opts)
            }

            pub fn #has_ident(opts: Vec<Opt<#target_ty>>) -> Expr<#ty> {
                #plate::exists::<#ty, #target_ty>(#name, #link, opts)
            }
        }
    }
}

struct KeyPairTokens<'a>(&'a KeyPair);

impl ToTokens for KeyPairTokens<'_> {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let KeyPair { from, to } = self.0;
        quote!(KeyPair::new(#from, #to)).to_tokens(tokens);
    }
}
