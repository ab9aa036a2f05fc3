use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};

use crate::model::{DeriveGenerics, DeriveParseResult, DeriveShape, ORDINALS};

impl From<DeriveParseResult> for TokenStream2 {
    fn from(value: DeriveParseResult) -> Self {
        let DeriveParseResult {
            type_name,
            generics:
                DeriveGenerics {
                    impl_generics,
                    type_generics,
                    where_clause,
                },
            shape,
        } = value;
        let impl_generics = impl_generics.tokens;
        let type_generics = type_generics.tokens;
        let where_clause = where_clause.tokens;

        match shape {
            DeriveShape::Fields(fields) => {
                let names: Vec<&syn::Ident> = fields.iter().map(|f| &f.field_name).collect();
                let types: Vec<&TokenStream2> = fields.iter().map(|f| &f.field_type.tokens).collect();
                // A single field converts from the bare value, matching a leaf parser's output.
                let (source, binding) = match (names.as_slice(), types.as_slice()) {
                    ([], []) => (quote! { () }, quote! { _ }),
                    ([name], [field_type]) => (quote! { #field_type }, quote! { #name }),
                    _ => (quote! { ( #(#types),* ) }, quote! { ( #(#names),* ) }),
                };

                quote! {
                    impl #impl_generics ::core::convert::From<#source> for #type_name #type_generics #where_clause {
                        fn from(#binding: #source) -> Self {
                            Self { #(#names),* }
                        }
                    }
                }
            }
            DeriveShape::Alternatives(alternatives) => {
                let union = format_ident!("OneOf{}", alternatives.len());
                let ordinals = ORDINALS[..alternatives.len()]
                    .iter()
                    .map(|ordinal| format_ident!("{ordinal}"));
                let names = alternatives.iter().map(|a| &a.variant_name);
                let types: Vec<&TokenStream2> =
                    alternatives.iter().map(|a| &a.variant_type.tokens).collect();

                quote! {
                    impl #impl_generics ::core::convert::From<::clp::#union<#(#types),*>> for #type_name #type_generics #where_clause {
                        fn from(value: ::clp::#union<#(#types),*>) -> Self {
                            match value {
                                #( ::clp::#union::#ordinals(inner) => Self::#names(inner), )*
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(source: &str) -> String {
        let input: syn::DeriveInput = syn::parse_str(source).unwrap();
        let result = DeriveParseResult::try_from(input).unwrap();
        TokenStream2::from(result).to_string()
    }

    #[test]
    fn generate_fields() {
        // Execute
        let token_stream = generate("struct Window { width: u32, title: String }");

        // Verify
        assert_eq!(
            token_stream,
            quote! {
                impl ::core::convert::From<(u32, String)> for Window {
                    fn from((width, title): (u32, String)) -> Self {
                        Self { width, title }
                    }
                }
            }
            .to_string()
        );
    }

    #[test]
    fn generate_single_field() {
        // Execute
        let token_stream = generate("struct Width { pixels: u32 }");

        // Verify
        assert_eq!(
            token_stream,
            quote! {
                impl ::core::convert::From<u32> for Width {
                    fn from(pixels: u32) -> Self {
                        Self { pixels }
                    }
                }
            }
            .to_string()
        );
    }

    #[test]
    fn generate_no_fields() {
        // Execute
        let token_stream = generate("struct Help;");

        // Verify
        assert_eq!(
            token_stream,
            quote! {
                impl ::core::convert::From<()> for Help {
                    fn from(_: ()) -> Self {
                        Self {}
                    }
                }
            }
            .to_string()
        );
    }

    #[test]
    fn generate_generic_fields() {
        // Execute
        let token_stream = generate("struct Pair<T> where T: Clone { left: T, right: T }");

        // Verify
        assert_eq!(
            token_stream,
            quote! {
                impl<T> ::core::convert::From<(T, T)> for Pair<T> where T: Clone {
                    fn from((left, right): (T, T)) -> Self {
                        Self { left, right }
                    }
                }
            }
            .to_string()
        );
    }

    #[test]
    fn generate_alternatives() {
        // Execute
        let token_stream = generate("enum Action { Help(()), Open(String), Count(u8) }");

        // Verify
        assert_eq!(
            token_stream,
            quote! {
                impl ::core::convert::From<::clp::OneOf3<(), String, u8>> for Action {
                    fn from(value: ::clp::OneOf3<(), String, u8>) -> Self {
                        match value {
                            ::clp::OneOf3::First(inner) => Self::Help(inner),
                            ::clp::OneOf3::Second(inner) => Self::Open(inner),
                            ::clp::OneOf3::Third(inner) => Self::Count(inner),
                        }
                    }
                }
            }
            .to_string()
        );
    }
}
