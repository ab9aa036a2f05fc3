//! Derive macros for `clp`.
//! See the `clp::derive` module documentation for full details.
extern crate proc_macro;

mod generate;
mod load;
mod model;

use crate::model::DeriveParseResult;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;

/// Derive `From` conversions out of `clp` parse outputs.
///
/// A struct with named fields converts from the flat tuple produced by a compound parser, binding
/// the tuple positions to the fields in declaration order (a single field converts from the bare value).
/// An enum whose variants each hold one unnamed field converts from the `OneOfN` union produced by
/// a command group, binding the alternatives to the variants in declaration order.
#[proc_macro_derive(ParseResult)]
pub fn parse_result(input: TokenStream) -> TokenStream {
    let derive_input = syn::parse_macro_input!(input as syn::DeriveInput);

    match DeriveParseResult::try_from(derive_input) {
        Ok(parse_result) => TokenStream2::from(parse_result).into(),
        Err(error) => error.to_compile_error().into(),
    }
}
