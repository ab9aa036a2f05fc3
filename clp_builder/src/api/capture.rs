use crate::api::value::type_label;
use crate::constant::*;
use crate::model::{Set, Unset};
use crate::parser::ParseError;
use crate::prelude::Value;

/// Behaviour to convert the text of a leaf into its value.
///
/// The `Unset` slot defers to [`Value`]; a `custom_parser` fills the slot with a function.
#[doc(hidden)]
pub trait Conversion<T> {
    /// Convert the text, or report why it could not be converted.
    fn convert(&self, text: &str) -> Result<T, ParseError>;
}

impl<T: Value> Conversion<T> for Unset {
    fn convert(&self, text: &str) -> Result<T, ParseError> {
        T::parse_text(text).ok_or_else(|| conversion_error::<T>(text))
    }
}

impl<T, F> Conversion<T> for Set<F>
where
    F: Fn(&str) -> Option<T>,
{
    fn convert(&self, text: &str) -> Result<T, ParseError> {
        (self.0)(text).ok_or_else(|| conversion_error::<T>(text))
    }
}

fn conversion_error<T>(text: &str) -> ParseError {
    ParseError::Conversion {
        text: text.to_string(),
        type_name: type_label::<T>(),
    }
}

/// Behaviour for a preset value: the default, or the implicit value of a leaf.
#[doc(hidden)]
pub trait Preset<T> {
    /// A fresh copy of the value, if one is attached.
    fn value(&self) -> Option<T>;

    /// The value as shown in help, if one is attached.
    fn rendered(&self) -> Option<String>;
}

impl<T> Preset<T> for Unset {
    fn value(&self) -> Option<T> {
        None
    }

    fn rendered(&self) -> Option<String> {
        None
    }
}

impl<T: Value + Clone> Preset<T> for Set<T> {
    fn value(&self) -> Option<T> {
        Some(self.0.clone())
    }

    fn rendered(&self) -> Option<String> {
        Some(self.0.render())
    }
}

/// Behaviour for the hint shown in help between `<` and `>`.
#[doc(hidden)]
pub trait Hint {
    /// The custom hint, if one is attached.
    fn hint(&self) -> Option<&str>;
}

impl Hint for Unset {
    fn hint(&self) -> Option<&str> {
        None
    }
}

impl Hint for Set<String> {
    fn hint(&self) -> Option<&str> {
        Some(&self.0)
    }
}

type Predicate<T> = Box<dyn Fn(&T) -> bool>;

/// The validation checks of a leaf, in attachment order.
pub(crate) struct Checks<T>(Vec<(Predicate<T>, String)>);

impl<T> Default for Checks<T> {
    fn default() -> Self {
        Checks(Vec::default())
    }
}

impl<T> Checks<T> {
    pub(crate) fn push(&mut self, predicate: impl Fn(&T) -> bool + 'static, message: String) {
        self.0.push((Box::new(predicate), message));
    }

    /// Apply every check to `value`, stopping at the first that fails.
    pub(crate) fn verify(
        &self,
        value: &T,
        text: &str,
        identity: impl FnOnce() -> String,
    ) -> Result<(), ParseError> {
        match self.0.iter().find(|(predicate, _)| !predicate(value)) {
            Some((_, message)) => Err(ParseError::Validation {
                identity: identity(),
                text: text.to_string(),
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

/// A single named option, as held inside an option compound.
#[doc(hidden)]
pub trait NamedOption {
    /// The value the option resolves to.
    type Value;

    /// Try to claim the `token`.
    /// Returns `None` when the token is not this option's, otherwise the resolution of the token.
    fn claim(&self, token: &str) -> Option<Result<Self::Value, ParseError>>;

    /// Resolve the option when no token claimed it.
    fn absent(&self) -> Result<Self::Value, ParseError>;

    /// Render the option for help.
    fn describe(&self, indent: usize) -> String;
}

impl<O: NamedOption + ?Sized> NamedOption for &O {
    type Value = O::Value;

    fn claim(&self, token: &str) -> Option<Result<Self::Value, ParseError>> {
        (**self).claim(token)
    }

    fn absent(&self) -> Result<Self::Value, ParseError> {
        (**self).absent()
    }

    fn describe(&self, indent: usize) -> String {
        (**self).describe(indent)
    }
}

/// A single positional argument, as held inside an argument compound.
#[doc(hidden)]
pub trait PositionalArgument {
    /// The value the argument resolves to.
    type Value;

    /// Resolve the argument from the token at its position, if there is one.
    fn resolve(&self, token: Option<&str>) -> Result<Self::Value, ParseError>;

    /// Render the argument for help.
    fn describe(&self, indent: usize) -> String;
}

impl<A: PositionalArgument + ?Sized> PositionalArgument for &A {
    type Value = A::Value;

    fn resolve(&self, token: Option<&str>) -> Result<Self::Value, ParseError> {
        (**self).resolve(token)
    }

    fn describe(&self, indent: usize) -> String {
        (**self).describe(indent)
    }
}

/// Pad `out` with spaces up to `column`, or a single space if it already reaches past it.
pub(crate) fn pad(out: &mut String, column: usize) {
    if out.len() < column {
        let width = column - out.len();
        out.push_str(&" ".repeat(width));
    } else {
        out.push(' ');
    }
}

/// The help listing of one leaf: its heading, description, then any preset values on their own lines.
pub(crate) fn describe_leaf(
    indent: usize,
    heading: &str,
    description: Option<&str>,
    presets: &[(&str, Option<String>)],
) -> String {
    let mut out = format!("{:indent$}{heading}", "");

    if let Some(description) = description {
        pad(&mut out, DESCRIPTION_COLUMN);
        out.push_str(description);
    }

    for (label, value) in presets {
        if let Some(value) = value {
            out.push('\n');
            out.push_str(&" ".repeat(DESCRIPTION_COLUMN));
            out.push_str(label);
            out.push_str(value);
        }
    }

    out.push('\n');
    out
}
