use crate::{Error, Result};

use heck::{ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};
use proc_macro2::{Ident, Span};

/// A user-provided name and the identifiers derived from it.
#[derive(Debug, Clone)]
pub(crate) struct Name {
    /// `snake_case` form; also the SQL alias of a relationship
    pub(crate) snake: String,

    /// Function / module identifier
    pub(crate) ident: Ident,

    /// Type identifier, `UpperCamelCase`
    pub(crate) ty: Ident,

    /// Constant identifier, `SHOUTY_SNAKE_CASE`
    pub(crate) constant: Ident,
}

impl Name {
    pub(crate) fn new(src: &str) -> Result<Self> {
        let snake = src.to_snake_case();

        if !is_identifier(&snake) {
            return Err(Error::InvalidName(src.to_owned()));
        }

        Ok(Self {
            ident: ident(&snake),
            ty: ident(&src.to_upper_camel_case()),
            constant: ident(&src.to_shouty_snake_case()),
            snake,
        })
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();

    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }

    // Path keywords cannot be raw identifiers.
    !matches!(s, "_" | "self" | "super" | "crate")
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

/// Keywords become raw identifiers (`r#type`).
fn ident(s: &str) -> Ident {
    if syn::parse_str::<Ident>(s).is_ok() {
        Ident::new(s, Span::call_site())
    } else {
        Ident::new_raw(s, Span::call_site())
    }
}
