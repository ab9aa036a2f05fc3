use quote::ToTokens;
use syn::spanned::Spanned;

use crate::model::{
    DeriveAlternative, DeriveField, DeriveGenerics, DeriveParseResult, DeriveShape, DeriveValue,
    ORDINALS,
};

impl TryFrom<syn::DeriveInput> for DeriveParseResult {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let shape = match &value.data {
            syn::Data::Struct(ds) => match &ds.fields {
                syn::Fields::Named(fields) => DeriveShape::Fields(
                    fields
                        .named
                        .iter()
                        .map(DeriveField::try_from)
                        .collect::<Result<Vec<_>, _>>()?,
                ),
                syn::Fields::Unit => DeriveShape::Fields(Vec::default()),
                syn::Fields::Unnamed(fields) => {
                    return Err(syn::Error::new(
                        fields.span(),
                        "Invalid - ParseResult requires a struct with named fields.",
                    ));
                }
            },
            syn::Data::Enum(de) => {
                if de.variants.is_empty() {
                    return Err(syn::Error::new(
                        value.ident.span(),
                        "Invalid - ParseResult requires an enum with at least one variant.",
                    ));
                }

                if de.variants.len() > ORDINALS.len() {
                    return Err(syn::Error::new(
                        value.ident.span(),
                        format!(
                            "Invalid - ParseResult supports at most {} variants, found {}.",
                            ORDINALS.len(),
                            de.variants.len(),
                        ),
                    ));
                }

                DeriveShape::Alternatives(
                    de.variants
                        .iter()
                        .map(DeriveAlternative::try_from)
                        .collect::<Result<Vec<_>, _>>()?,
                )
            }
            syn::Data::Union(du) => {
                return Err(syn::Error::new(
                    du.union_token.span(),
                    "Invalid - ParseResult cannot be derived for a union.",
                ));
            }
        };

        let (impl_generics, type_generics, where_clause) = value.generics.split_for_impl();

        Ok(DeriveParseResult {
            type_name: value.ident.clone(),
            generics: DeriveGenerics {
                impl_generics: DeriveValue {
                    tokens: impl_generics.to_token_stream(),
                },
                type_generics: DeriveValue {
                    tokens: type_generics.to_token_stream(),
                },
                where_clause: DeriveValue {
                    tokens: where_clause.to_token_stream(),
                },
            },
            shape,
        })
    }
}

impl TryFrom<&syn::Field> for DeriveField {
    type Error = syn::Error;

    fn try_from(value: &syn::Field) -> Result<Self, Self::Error> {
        let field_name = value
            .ident
            .clone()
            .ok_or_else(|| syn::Error::new(value.span(), "Invalid - field must be named."))?;

        Ok(DeriveField {
            field_name,
            field_type: DeriveValue {
                tokens: value.ty.to_token_stream(),
            },
        })
    }
}

impl TryFrom<&syn::Variant> for DeriveAlternative {
    type Error = syn::Error;

    fn try_from(value: &syn::Variant) -> Result<Self, Self::Error> {
        match &value.fields {
            syn::Fields::Unnamed(fields) if fields.unnamed.len() == 1 => Ok(DeriveAlternative {
                variant_name: value.ident.clone(),
                variant_type: DeriveValue {
                    tokens: fields.unnamed[0].ty.to_token_stream(),
                },
            }),
            _ => Err(syn::Error::new(
                value.ident.span(),
                format!(
                    "Invalid - variant `{}` must hold exactly one unnamed field.",
                    value.ident
                ),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proc_macro2::Span;
    use quote::quote;

    #[test]
    fn load_struct() {
        // Setup
        let input: syn::DeriveInput = syn::parse_str(
            r#"
                #[derive(ParseResult)]
                struct Window {
                    width: u32,
                    title: Option<String>,
                }
            "#,
        )
        .unwrap();

        // Execute
        let result = DeriveParseResult::try_from(input).unwrap();

        // Verify
        assert_eq!(result.type_name, ident("Window"));
        assert_eq!(result.generics.impl_generics.tokens.to_string(), "");
        assert_eq!(
            result.shape,
            DeriveShape::Fields(vec![
                DeriveField {
                    field_name: ident("width"),
                    field_type: value("u32"),
                },
                DeriveField {
                    field_name: ident("title"),
                    field_type: value("Option<String>"),
                },
            ])
        );
    }

    #[test]
    fn load_struct_empty() {
        // Setup
        let braced: syn::DeriveInput = syn::parse_str("struct Help {}").unwrap();
        let unit: syn::DeriveInput = syn::parse_str("struct Help;").unwrap();

        // Execute & Verify
        assert_eq!(
            DeriveParseResult::try_from(braced).unwrap().shape,
            DeriveShape::Fields(vec![])
        );
        assert_eq!(
            DeriveParseResult::try_from(unit).unwrap().shape,
            DeriveShape::Fields(vec![])
        );
    }

    #[test]
    fn load_struct_generic() {
        // Setup
        let input: syn::DeriveInput =
            syn::parse_str("struct Pair<T: Clone> { left: T, right: T }").unwrap();

        // Execute
        let result = DeriveParseResult::try_from(input).unwrap();

        // Verify
        assert_eq!(
            result.generics.impl_generics.tokens.to_string(),
            quote! { <T: Clone> }.to_string()
        );
        assert_eq!(
            result.generics.type_generics.tokens.to_string(),
            quote! { <T> }.to_string()
        );
    }

    #[test]
    fn load_enum() {
        // Setup
        let input: syn::DeriveInput = syn::parse_str(
            r#"
                enum Action {
                    Help(()),
                    Open(String),
                }
            "#,
        )
        .unwrap();

        // Execute
        let result = DeriveParseResult::try_from(input).unwrap();

        // Verify
        assert_eq!(
            result.shape,
            DeriveShape::Alternatives(vec![
                DeriveAlternative {
                    variant_name: ident("Help"),
                    variant_type: value("()"),
                },
                DeriveAlternative {
                    variant_name: ident("Open"),
                    variant_type: value("String"),
                },
            ])
        );
    }

    #[test]
    fn load_invalid() {
        let inputs = [
            ("struct Point(u32, u32);", "named fields"),
            ("enum Never {}", "at least one variant"),
            ("enum Action { Help, Open(String) }", "variant `Help`"),
            ("enum Action { Open(String, u32) }", "variant `Open`"),
            ("enum Action { Open { path: String } }", "variant `Open`"),
            ("union Bits { a: u32, b: f32 }", "union"),
        ];

        for (source, expected) in inputs {
            // Setup
            let input: syn::DeriveInput = syn::parse_str(source).unwrap();

            // Execute
            let error = DeriveParseResult::try_from(input).unwrap_err();

            // Verify
            assert!(
                error.to_string().contains(expected),
                "'{error}' does not contain '{expected}'"
            );
        }
    }

    #[test]
    fn load_too_many_variants() {
        // Setup
        let variants: Vec<String> = (0..11).map(|i| format!("V{i}(u8)")).collect();
        let input: syn::DeriveInput =
            syn::parse_str(&format!("enum Wide {{ {} }}", variants.join(", "))).unwrap();

        // Execute
        let error = DeriveParseResult::try_from(input).unwrap_err();

        // Verify
        assert_eq!(
            error.to_string(),
            "Invalid - ParseResult supports at most 10 variants, found 11."
        );
    }

    fn ident(name: &str) -> syn::Ident {
        syn::Ident::new(name, Span::call_site())
    }

    fn value(source: &str) -> DeriveValue {
        let ty: syn::Type = syn::parse_str(source).unwrap();
        DeriveValue {
            tokens: ty.to_token_stream(),
        }
    }
}
