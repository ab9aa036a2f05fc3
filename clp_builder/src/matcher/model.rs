use crate::constant::*;

/// The spellings an option answers to, in the order they were attached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Patterns(Vec<String>);

impl Patterns {
    pub(crate) fn push(&mut self, pattern: String) {
        assert!(
            pattern.starts_with(OPTION_PREFIX),
            "pattern '{pattern}' must begin with '{OPTION_PREFIX}'."
        );
        self.0.push(pattern);
    }

    /// Match the `token` against each pattern, returning the text after the first that matches.
    ///
    /// A bare mention (`-w`) matches with an empty remainder.
    /// Otherwise the pattern must be followed by `=`, and the remainder is whatever follows it.
    pub(crate) fn matches<'t>(&self, token: &'t str) -> Option<&'t str> {
        self.0.iter().find_map(|pattern| {
            let rest = token.strip_prefix(pattern.as_str())?;

            if rest.is_empty() {
                Some(rest)
            } else {
                rest.strip_prefix(VALUE_SEPARATOR)
            }
        })
    }
}

impl std::fmt::Display for Patterns {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

pub(crate) fn is_option_like(token: &str) -> bool {
    token.starts_with(OPTION_PREFIX)
}

/// The index of the first option-like token, or the length of `tokens` when there is none.
///
/// Everything before the boundary is positional.
pub(crate) fn positional_boundary(tokens: &[&str]) -> usize {
    tokens
        .iter()
        .position(|token| is_option_like(token))
        .unwrap_or(tokens.len())
}
