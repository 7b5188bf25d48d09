/// A column of a model: the Rust field it comes from, the SQL column name and
/// its type tag (`STRING`, `INT64`, `ARRAY<STRING>`, ...).
///
/// The type tag is empty when it was neither given nor inferable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub field: String,
    pub column: String,
    pub ty: String,
}

impl Column {
    pub fn new(field: &str, column: &str, ty: &str) -> Self {
        Self {
            field: field.to_owned(),
            column: column.to_owned(),
            ty: ty.to_owned(),
        }
    }
}

/// Parsed `#[column(...)]` attribute.
#[derive(Debug)]
pub(super) struct ColumnAttr {
    pub(super) name: Option<syn::LitStr>,
    pub(super) ty: Option<syn::LitStr>,
}

impl ColumnAttr {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<ColumnAttr> {
        attr.parse_args()
    }
}

impl syn::parse::Parse for ColumnAttr {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let mut result = Self {
            name: None,
            ty: None,
        };

        // #[column("name")]
        // #[column("name", type = "STRING(MAX)")]
        // #[column(type = "INT64", "name")]
        loop {
            let lookahead = input.lookahead1();

            if lookahead.peek(syn::LitStr) {
                if result.name.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate column name"));
                }
                result.name = Some(input.parse()?);
            } else if lookahead.peek(syn::Token![type]) {
                if result.ty.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate column type"));
                }
                let _type_token: syn::Token![type] = input.parse()?;
                let _eq_token: syn::Token![=] = input.parse()?;
                result.ty = Some(input.parse()?);
            } else {
                return Err(lookahead.error());
            }

            if input.is_empty() {
                break;
            }
            let _comma_token: syn::Token![,] = input.parse()?;
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(attr: syn::Attribute) -> syn::Result<ColumnAttr> {
        ColumnAttr::from_ast(&attr)
    }

    #[test]
    fn name_and_type_in_either_order() {
        let attr = parse(syn::parse_quote!(#[column("email", type = "STRING(MAX)")])).unwrap();
        assert_eq!(attr.name.unwrap().value(), "email");
        assert_eq!(attr.ty.unwrap().value(), "STRING(MAX)");

        let attr = parse(syn::parse_quote!(#[column(type = "INT64", "id")])).unwrap();
        assert_eq!(attr.name.unwrap().value(), "id");
        assert_eq!(attr.ty.unwrap().value(), "INT64");
    }

    #[test]
    fn type_only() {
        let attr = parse(syn::parse_quote!(#[column(type = "BOOL")])).unwrap();
        assert!(attr.name.is_none());
    }

    #[test]
    fn duplicates_are_rejected() {
        let err = parse(syn::parse_quote!(#[column("a", "b")])).unwrap_err();
        assert_eq!(err.to_string(), "duplicate column name");

        assert!(parse(syn::parse_quote!(#[column(type = "BOOL", type = "INT64")])).is_err());
    }

    #[test]
    fn unknown_argument() {
        assert!(parse(syn::parse_quote!(#[column(name = "a")])).is_err());
    }
}
