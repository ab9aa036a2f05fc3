use proc_macro2::TokenStream as TokenStream2;

#[derive(Debug, Clone)]
pub(crate) struct DeriveValue {
    pub tokens: TokenStream2,
}

impl PartialEq for DeriveValue {
    fn eq(&self, other: &Self) -> bool {
        self.tokens.to_string() == other.tokens.to_string()
    }
}

impl Eq for DeriveValue {}

/// The generic parameters of the annotated type, already split for an `impl` block.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveGenerics {
    pub impl_generics: DeriveValue,
    pub type_generics: DeriveValue,
    pub where_clause: DeriveValue,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveField {
    pub field_name: syn::Ident,
    pub field_type: DeriveValue,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveAlternative {
    pub variant_name: syn::Ident,
    pub variant_type: DeriveValue,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum DeriveShape {
    /// A struct built from the flat tuple of a compound parser.
    Fields(Vec<DeriveField>),
    /// An enum built from the `OneOfN` union of a command group.
    Alternatives(Vec<DeriveAlternative>),
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveParseResult {
    pub type_name: syn::Ident,
    pub generics: DeriveGenerics,
    pub shape: DeriveShape,
}

// Variant names of the `OneOfN` unions, by position.
pub(crate) const ORDINALS: [&str; 10] = [
    "First", "Second", "Third", "Fourth", "Fifth", "Sixth", "Seventh", "Eighth", "Ninth", "Tenth",
];
