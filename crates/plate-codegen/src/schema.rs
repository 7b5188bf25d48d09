//! Column metadata for generator input.
//!
//! Columns come either from inline descriptors or from a Rust struct whose
//! fields carry `#[column("name")]` attributes.

mod column;
pub use column::Column;
use column::ColumnAttr;

mod model;
pub(crate) use model::Model;

mod name;
pub(crate) use name::Name;

mod ty;
pub use ty::infer_type;
pub(crate) use ty::ValueType;

use crate::config::ColumnConfig;
use crate::{Error, Result};

use std::path::Path;
use syn::ext::IdentExt;

/// Extracts the columns of a struct, in field order.
///
/// Fields without a `#[column]` attribute are skipped. The type tag is taken
/// from `#[column("name", type = "...")]` when given and inferred from the
/// field's Rust type otherwise.
pub fn introspect_struct(item: &syn::ItemStruct) -> syn::Result<Vec<Column>> {
    let syn::Fields::Named(fields) = &item.fields else {
        return Err(syn::Error::new_spanned(
            &item.fields,
            "model fields must be named",
        ));
    };

    let mut errs: Option<syn::Error> = None;
    let mut columns = vec![];

    for field in &fields.named {
        let Some(ident) = &field.ident else {
            continue;
        };

        let mut attr = None;

        for a in &field.attrs {
            if !a.path().is_ident("column") {
                continue;
            }

            if attr.is_some() {
                push_error(&mut errs, syn::Error::new_spanned(a, "duplicate #[column] attribute"));
                continue;
            }

            match ColumnAttr::from_ast(a) {
                Ok(parsed) => attr = Some(parsed),
                Err(err) => push_error(&mut errs, err),
            }
        }

        let Some(ColumnAttr { name: Some(name), ty }) = attr else {
            continue;
        };

        let ty = match ty {
            Some(lit) => lit.value(),
            None => infer_type(&field.ty),
        };

        columns.push(Column {
            field: ident.unraw().to_string(),
            column: name.value(),
            ty,
        });
    }

    match errs {
        Some(err) => Err(err),
        None => Ok(columns),
    }
}

/// Every bad attribute of a struct is reported, not just the first.
fn push_error(errs: &mut Option<syn::Error>, err: syn::Error) {
    match errs {
        Some(existing) => existing.combine(err),
        None => *errs = Some(err),
    }
}

/// Parses `src` and extracts the columns of `struct <model>`.
///
/// Returns `Ok(None)` when the source holds no struct with that name.
pub fn introspect_source(src: &str, model: &str) -> syn::Result<Option<Vec<Column>>> {
    let file = syn::parse_file(src)?;

    let item = file.items.iter().find_map(|item| match item {
        syn::Item::Struct(item) if item.ident == model => Some(item),
        _ => None,
    });

    item.map(introspect_struct).transpose()
}

/// Reads the Rust file at `path` and extracts the columns of `struct <model>`.
pub fn introspect_file(path: &Path, model: &str) -> Result<Vec<Column>> {
    let src = std::fs::read_to_string(path)?;

    introspect_source(&src, model)?.ok_or_else(|| Error::ModelNotFound {
        model: model.to_owned(),
        path: path.to_path_buf(),
    })
}

/// Resolves inline column descriptors. Descriptors without a column name are
/// skipped; a missing type tag is inferred from the `rust` type when given.
pub fn from_descriptors(columns: &[ColumnConfig]) -> Result<Vec<Column>> {
    let mut ret = vec![];

    for descriptor in columns {
        let Some(column) = &descriptor.column else {
            continue;
        };

        let ty = match (&descriptor.ty, &descriptor.rust) {
            (Some(ty), _) => ty.clone(),
            (None, Some(rust)) => infer_type(&syn::parse_str(rust)?),
            (None, None) => String::new(),
        };

        ret.push(Column {
            field: descriptor.field.clone(),
            column: column.clone(),
            ty,
        });
    }

    Ok(ret)
}
