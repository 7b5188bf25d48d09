extern crate proc_macro;

use proc_macro::TokenStream;

/// Accepts `#[column("name")]` and `#[column("name", type = "TAG")]` on the
/// fields of a model struct and exposes them as `Model::COLUMNS`.
#[proc_macro_derive(Model, attributes(column))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    match plate_codegen::derive_model(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
