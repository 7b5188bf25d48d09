use proc_macro2::TokenStream;
use quote::quote;

/// Infers the type tag of a Rust type.
///
/// Returns an empty string when the type has no mapping. `Option<T>` maps
/// to the tag of `T`; nullability is not part of the tag.
pub fn infer_type(ty: &syn::Type) -> String {
    match ty {
        syn::Type::Reference(reference) => infer_type(&reference.elem),
        syn::Type::Group(group) => infer_type(&group.elem),
        syn::Type::Paren(paren) => infer_type(&paren.elem),
        syn::Type::Path(path) if path.qself.is_none() => infer_path(&path.path),
        _ => String::new(),
    }
}

fn infer_path(path: &syn::Path) -> String {
    let Some(last) = path.segments.last() else {
        return String::new();
    };

    let ident = last.ident.to_string();

    match ident.as_str() {
        "String" | "str" => "STRING".into(),
        "i8" | "i16" | "i32" | "i64" | "isize" | "u8" | "u16" | "u32" | "u64" | "usize" => {
            "INT64".into()
        }
        "f32" | "f64" => "FLOAT64".into(),
        "bool" => "BOOL".into(),
        "DateTime" | "SystemTime" => "TIMESTAMP".into(),
        "NaiveDate" => "DATE".into(),
        "Option" => match generic_arg(last) {
            Some(inner) => infer_type(inner),
            None => String::new(),
        },
        "Vec" => match generic_arg(last) {
            Some(inner) if is_u8(inner) => "BYTES".into(),
            Some(inner) => match infer_type(inner) {
                elem if elem.is_empty() => elem,
                elem => format!("ARRAY<{elem}>"),
            },
            None => String::new(),
        },
        _ => String::new(),
    }
}

fn generic_arg(segment: &syn::PathSegment) -> Option<&syn::Type> {
    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };

    args.args.iter().find_map(|arg| match arg {
        syn::GenericArgument::Type(ty) => Some(ty),
        _ => None,
    })
}

fn is_u8(ty: &syn::Type) -> bool {
    matches!(ty, syn::Type::Path(path) if path.path.is_ident("u8"))
}

/// The element tag of `ARRAY<..>`, matching the keyword in any case.
fn strip_array(tag: &str) -> Option<&str> {
    let prefix = tag.get(..6)?;

    if !prefix.eq_ignore_ascii_case("ARRAY<") {
        return None;
    }

    tag[6..].strip_suffix('>')
}

/// The Rust value type a column with a given tag is compared against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ValueType {
    String,
    Int64,
    Float64,
    Bool,
    Bytes,
    Timestamp,
    Date,
    Array(Box<ValueType>),
}

impl ValueType {
    /// Maps a type tag, ignoring case. Length suffixes such as `STRING(MAX)`
    /// are ignored. Returns `None` for empty or unsupported tags, including
    /// arrays of arrays, which GoogleSQL does not allow.
    pub(crate) fn from_tag(tag: &str) -> Option<ValueType> {
        let tag = tag.trim();

        match strip_array(tag) {
            Some(elem) => {
                ValueType::from_scalar_tag(elem).map(|elem| ValueType::Array(Box::new(elem)))
            }
            None => ValueType::from_scalar_tag(tag),
        }
    }

    /// Never returns `Array`: a nested `ARRAY<..>` matches no base tag.
    fn from_scalar_tag(tag: &str) -> Option<ValueType> {
        let tag = tag.trim();

        let base = match tag.find('(') {
            Some(i) => tag[..i].trim_end(),
            None => tag,
        };

        Some(match base.to_ascii_uppercase().as_str() {
            "STRING" => ValueType::String,
            "INT64" => ValueType::Int64,
            "FLOAT64" => ValueType::Float64,
            "BOOL" => ValueType::Bool,
            "BYTES" => ValueType::Bytes,
            "TIMESTAMP" => ValueType::Timestamp,
            "DATE" => ValueType::Date,
            _ => return None,
        })
    }

    /// Support types named by [`ValueType::tokens`].
    pub(crate) fn imports(&self, dst: &mut Vec<&'static str>) {
        match self {
            ValueType::Timestamp => dst.extend(["DateTime", "Utc"]),
            ValueType::Date => dst.push("NaiveDate"),
            ValueType::Array(elem) => elem.imports(dst),
            _ => {}
        }
    }

    pub(crate) fn tokens(&self) -> TokenStream {
        match self {
            ValueType::String => quote!(String),
            ValueType::Int64 => quote!(i64),
            ValueType::Float64 => quote!(f64),
            ValueType::Bool => quote!(bool),
            ValueType::Bytes => quote!(Vec<u8>),
            ValueType::Timestamp => quote!(DateTime<Utc>),
            ValueType::Date => quote!(NaiveDate),
            ValueType::Array(elem) => {
                let elem = elem.tokens();
                quote!(Vec<#elem>)
            }
        }
    }
}
