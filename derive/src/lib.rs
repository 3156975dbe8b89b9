use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod from_parts;

#[proc_macro_derive(FromParts, attributes(part))]
pub fn derive_from_parts(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match from_parts::expand_from_parts(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error().into(),
    }
}
