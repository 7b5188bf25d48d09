mod columns;
mod relation;
mod tables;
mod wrappers;

use crate::relation::Accessor;
use crate::schema::Model;
use crate::Generated;

use indexmap::IndexMap;
use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;
use std::collections::BTreeMap;
use std::path::PathBuf;

const HEADER: &str = "// @generated by plate-codegen. Do not edit.\n\n";

/// Every support type a generated module may import. Model names must not
/// shadow them.
pub(crate) const SUPPORT_TYPES: &[&str] = &[
    "Column", "DateTime", "Expr", "JoinKind", "Junction", "KeyPair", "Link", "NaiveDate", "Opt",
    "Ordering", "Shape", "Table", "Utc", "Value",
];

struct Expand<'a> {
    /// The table being expanded
    model: &'a Model,

    /// Its relationship accessors
    accessors: &'a [Accessor],

    /// Every model, to name relation targets
    models: &'a IndexMap<String, Model>,

    /// Path prefix for runtime functions
    plate: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let imports = self.expand_imports();
        let select = self.expand_select();
        let columns = self.expand_columns();
        let wrappers = self.expand_wrappers();
        let relations = self.expand_relations();

        quote! {
            #imports
            #select
            #columns
            #wrappers
            #relations
        }
    }

    /// Support types are imported; support functions are always called by
    /// path since the module defines functions with the same names.
    fn expand_imports(&self) -> TokenStream {
        let plate = &self.plate;

        let mut markers = vec![self.model.name.ty.clone()];
        markers.extend(self.accessors.iter().map(|accessor| self.target(accessor).name.ty.clone()));
        markers.sort();
        markers.dedup();

        let mut support = vec!["Expr", "Opt", "Ordering", "Value"];

        for column in self.typed_columns() {
            support.push("Column");
            column.1.imports(&mut support);
        }

        for accessor in self.accessors {
            support.extend(["JoinKind", "KeyPair", "Link", "Shape"]);

            if accessor.is_many_to_many() {
                support.push("Junction");
            }
        }

        support.sort_unstable();
        support.dedup();

        let support = support.iter().map(|name| Ident::new(name, Span::call_site()));

        // A single marker is imported without braces, as rustfmt writes it.
        let markers = match &markers[..] {
            [marker] => quote!(#marker),
            markers => quote!({ #( #markers ),* }),
        };

        quote! {
            use super::tables::#markers;
            use #plate::{ #( #support ),* };
        }
    }

    fn expand_select(&self) -> TokenStream {
        let plate = &self.plate;
        let ty = &self.model.name.ty;

        quote! {
            pub fn select(opts: Vec<Opt<#ty>>) -> (String, Vec<Value>) {
                #plate::select::<#ty>(opts)
            }
        }
    }

    fn target(&self, accessor: &Accessor) -> &Model {
        &self.models[&accessor.target]
    }
}

pub(crate) fn generate(
    models: &IndexMap<String, Model>,
    accessors: &IndexMap<String, Vec<Accessor>>,
) -> Generated {
    let plate = quote!(plate::codegen_support);
    let mut files = BTreeMap::new();

    files.insert(PathBuf::from("mod.rs"), render(module_root(models)));
    files.insert(PathBuf::from("tables.rs"), render(tables::expand(models, &plate)));

    for (key, model) in models {
        let expand = Expand {
            model,
            accessors: accessors.get(key).map(Vec::as_slice).unwrap_or_default(),
            models,
            plate: plate.clone(),
        };

        let path = PathBuf::from(format!("{}.rs", model.name.snake));
        files.insert(path, render(expand.expand()));

        tracing::info!(
            table = %model.table,
            columns = model.columns.len(),
            relations = expand.accessors.len(),
            "generated query module"
        );
    }

    Generated { files }
}

fn module_root(models: &IndexMap<String, Model>) -> TokenStream {
    let modules = models.values().map(|model| &model.name.ident);
    let markers = models.values().map(|model| &model.name.ty);

    quote! {
        pub mod tables;
        pub use tables::{ #( #markers ),* };

        #( pub mod #modules; )*
    }
}

fn render(tokens: TokenStream) -> String {
    format!("{HEADER}{tokens}\n")
}
