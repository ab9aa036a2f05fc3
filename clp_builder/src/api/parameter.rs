use crate::api::capture::*;
use crate::api::compound::{parse_arguments, parse_options};
use crate::api::core::Parser;
use crate::api::value::type_label;
use crate::constant::*;
use crate::matcher::Patterns;
use crate::model::{Cons, Nil, Set, Unset};
use crate::parser::ParseError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A named option, matched by any of its patterns (ex: `-w=1920`).
///
/// The trailing type parameters record which capabilities are attached: default value,
/// implicit value, custom parser, and custom hint.
/// Each is `Unset` until attached, and may be attached at most once.
///
/// Used on its own, an option is a [`Parser`] producing `T`.
/// Combine options (and arguments) with `|` to build larger parsers.
///
/// ### Example
/// ```
/// # use clp_builder as clp;
/// use clp::prelude::*;
/// use clp::opt;
///
/// let width = opt::<u32>()
///     .pattern("-w")
///     .pattern("--width")
///     .help("Width of the screen in pixels.")
///     .check(|w| *w > 0, "Width must be positive.");
///
/// assert_eq!(width.parse(["--width=1920"]).unwrap(), 1920);
/// assert!(width.parse(["-w=0"]).is_err());
/// ```
pub struct Opt<T, D = Unset, I = Unset, C = Unset, H = Unset> {
    patterns: Patterns,
    description: Option<String>,
    default: D,
    implicit: I,
    conversion: C,
    hint: H,
    checks: Checks<T>,
}

/// Create an option of type `T`, with no patterns yet.
pub fn opt<T>() -> Opt<T> {
    Opt {
        patterns: Patterns::default(),
        description: None,
        default: Unset,
        implicit: Unset,
        conversion: Unset,
        hint: Unset,
        checks: Checks::default(),
    }
}

/// Create a boolean option which is `false` when absent, and `true` when mentioned without a value.
///
/// ### Example
/// ```
/// # use clp_builder as clp;
/// use clp::prelude::*;
/// use clp::flag;
///
/// let verbose = flag().pattern("-v").pattern("--verbose");
///
/// assert_eq!(verbose.parse(["-v"]).unwrap(), true);
/// assert_eq!(verbose.parse(["--verbose=false"]).unwrap(), false);
/// assert_eq!(verbose.parse(Vec::<&str>::new()).unwrap(), false);
/// ```
pub fn flag() -> Opt<bool, Set<bool>, Set<bool>> {
    opt::<bool>().default_to(false).implicitly(true)
}

impl<T, D, I, C, H> Opt<T, D, I, C, H> {
    /// Add a pattern which this option answers to (ex: `-w` or `--width`).
    /// Patterns are tried in the order they are added.
    ///
    /// Panics if the pattern does not begin with `-`.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.patterns.push(pattern.into());
        self
    }

    /// Document the help message for this option.
    /// If repeated, only the final help message will apply.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.description.replace(description.into());
        self
    }

    /// Add a validation check, failing with `message` when `predicate` rejects the parsed value.
    /// Checks run in the order they are added; defaults and implicit values are not checked.
    pub fn check(
        mut self,
        predicate: impl Fn(&T) -> bool + 'static,
        message: impl Into<String>,
    ) -> Self {
        self.checks.push(predicate, message.into());
        self
    }
}

impl<T, I, C, H> Opt<T, Unset, I, C, H> {
    /// Use `value` when the option is not mentioned at all.
    ///
    /// A default can be attached only once.
    /// ```compile_fail
    /// # use clp_builder as clp;
    /// let count = clp::opt::<u8>().pattern("-n").default_to(1).default_to(2);
    /// ```
    pub fn default_to(self, value: T) -> Opt<T, Set<T>, I, C, H> {
        let Opt {
            patterns,
            description,
            implicit,
            conversion,
            hint,
            checks,
            ..
        } = self;
        Opt {
            patterns,
            description,
            default: Set(value),
            implicit,
            conversion,
            hint,
            checks,
        }
    }
}

impl<T, D, C, H> Opt<T, D, Unset, C, H> {
    /// Use `value` when the option is mentioned without `=value` (ex: `--verbose`).
    ///
    /// ```compile_fail
    /// # use clp_builder as clp;
    /// let verbose = clp::flag().pattern("-v").implicitly(false);
    /// ```
    pub fn implicitly(self, value: T) -> Opt<T, D, Set<T>, C, H> {
        let Opt {
            patterns,
            description,
            default,
            conversion,
            hint,
            checks,
            ..
        } = self;
        Opt {
            patterns,
            description,
            default,
            implicit: Set(value),
            conversion,
            hint,
            checks,
        }
    }
}

impl<T, D, I, H> Opt<T, D, I, Unset, H> {
    /// Convert the option's text with `parser` rather than [`Value::parse_text`](crate::prelude::Value::parse_text).
    ///
    /// ```compile_fail
    /// # use clp_builder as clp;
    /// let level = clp::opt::<u8>()
    ///     .custom_parser(|text| text.parse().ok())
    ///     .custom_parser(|text| text.len().try_into().ok());
    /// ```
    pub fn custom_parser<F>(self, parser: F) -> Opt<T, D, I, Set<F>, H>
    where
        F: Fn(&str) -> Option<T>,
    {
        let Opt {
            patterns,
            description,
            default,
            implicit,
            hint,
            checks,
            ..
        } = self;
        Opt {
            patterns,
            description,
            default,
            implicit,
            conversion: Set(parser),
            hint,
            checks,
        }
    }
}

impl<T, D, I, C> Opt<T, D, I, C, Unset> {
    /// Show `hint` in help in place of the type name (ex: `-w <PIXELS>`).
    ///
    /// ```compile_fail
    /// # use clp_builder as clp;
    /// let width = clp::opt::<u32>().pattern("-w").hint("PIXELS").hint("WIDTH");
    /// ```
    pub fn hint(self, hint: impl Into<String>) -> Opt<T, D, I, C, Set<String>> {
        let Opt {
            patterns,
            description,
            default,
            implicit,
            conversion,
            checks,
            ..
        } = self;
        Opt {
            patterns,
            description,
            default,
            implicit,
            conversion,
            hint: Set(hint.into()),
            checks,
        }
    }
}

impl<T, D, I, C, H> Opt<T, D, I, C, H>
where
    I: Preset<T>,
    C: Conversion<T>,
{
    fn resolve(&self, remainder: &str) -> Result<T, ParseError> {
        if remainder.is_empty() {
            if let Some(value) = self.implicit.value() {
                return Ok(value);
            }
        }

        let value = self.conversion.convert(remainder)?;
        self.checks
            .verify(&value, remainder, || format!("option {}", self.patterns))?;
        Ok(value)
    }
}

impl<T, D, I, C, H> NamedOption for Opt<T, D, I, C, H>
where
    D: Preset<T>,
    I: Preset<T>,
    C: Conversion<T>,
    H: Hint,
{
    type Value = T;

    fn claim(&self, token: &str) -> Option<Result<T, ParseError>> {
        let remainder = self.patterns.matches(token)?;
        #[cfg(feature = "tracing_debug")]
        debug!("Option '{}' claims '{token}'.", self.patterns);
        Some(self.resolve(remainder))
    }

    fn absent(&self) -> Result<T, ParseError> {
        self.default
            .value()
            .ok_or_else(|| ParseError::MissingOption {
                patterns: self.patterns.to_string(),
            })
    }

    fn describe(&self, indent: usize) -> String {
        let hint = self
            .hint
            .hint()
            .map(str::to_string)
            .unwrap_or_else(type_label::<T>);
        describe_leaf(
            indent,
            &format!("{} <{hint}>", self.patterns),
            self.description.as_deref(),
            &[
                (DEFAULT_LABEL, self.default.rendered()),
                (IMPLICIT_LABEL, self.implicit.rendered()),
            ],
        )
    }
}

impl<T, D, I, C, H> Parser for Opt<T, D, I, C, H>
where
    D: Preset<T>,
    I: Preset<T>,
    C: Conversion<T>,
    H: Hint,
{
    type Output = T;

    fn parse_tokens(&self, tokens: &[&str]) -> Result<T, ParseError> {
        let Cons(value, Nil) = parse_options(&Cons(self, Nil), tokens)?;
        Ok(value)
    }

    fn render(&self, indent: usize) -> String {
        self.describe(indent)
    }
}

impl<T, D, I, C, H> std::fmt::Debug for Opt<T, D, I, C, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Opt[{t}, {patterns}]",
            t = type_label::<T>(),
            patterns = self.patterns,
        )
    }
}

/// A positional argument, matched purely by its position amongst the positional tokens.
///
/// The trailing type parameters record which capabilities are attached: default value,
/// custom parser, and custom hint.
/// Each is `Unset` until attached, and may be attached at most once.
///
/// ### Example
/// ```
/// # use clp_builder as clp;
/// use clp::prelude::*;
/// use clp::arg;
///
/// let path = arg::<String>("path").help("File to open.");
///
/// assert_eq!(path.parse(["notes.txt"]).unwrap(), "notes.txt");
/// assert!(path.parse(Vec::<&str>::new()).is_err());
/// ```
pub struct Arg<T, D = Unset, C = Unset, H = Unset> {
    name: String,
    description: Option<String>,
    default: D,
    conversion: C,
    hint: H,
    checks: Checks<T>,
}

/// Create a positional argument of type `T`, named `name` in help and error messages.
pub fn arg<T>(name: impl Into<String>) -> Arg<T> {
    Arg {
        name: name.into(),
        description: None,
        default: Unset,
        conversion: Unset,
        hint: Unset,
        checks: Checks::default(),
    }
}

impl<T, D, C, H> Arg<T, D, C, H> {
    /// Document the help message for this argument.
    /// If repeated, only the final help message will apply.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.description.replace(description.into());
        self
    }

    /// Add a validation check, failing with `message` when `predicate` rejects the parsed value.
    /// Checks run in the order they are added; defaults are not checked.
    pub fn check(
        mut self,
        predicate: impl Fn(&T) -> bool + 'static,
        message: impl Into<String>,
    ) -> Self {
        self.checks.push(predicate, message.into());
        self
    }
}

impl<T, C, H> Arg<T, Unset, C, H> {
    /// Use `value` when no token is left at this argument's position.
    ///
    /// ```compile_fail
    /// # use clp_builder as clp;
    /// let path = clp::arg::<String>("path").default_to("a".to_string()).default_to("b".to_string());
    /// ```
    pub fn default_to(self, value: T) -> Arg<T, Set<T>, C, H> {
        let Arg {
            name,
            description,
            conversion,
            hint,
            checks,
            ..
        } = self;
        Arg {
            name,
            description,
            default: Set(value),
            conversion,
            hint,
            checks,
        }
    }
}

impl<T, D, H> Arg<T, D, Unset, H> {
    /// Convert the argument's text with `parser` rather than [`Value::parse_text`](crate::prelude::Value::parse_text).
    pub fn custom_parser<F>(self, parser: F) -> Arg<T, D, Set<F>, H>
    where
        F: Fn(&str) -> Option<T>,
    {
        let Arg {
            name,
            description,
            default,
            hint,
            checks,
            ..
        } = self;
        Arg {
            name,
            description,
            default,
            conversion: Set(parser),
            hint,
            checks,
        }
    }
}

impl<T, D, C> Arg<T, D, C, Unset> {
    /// Show `hint` in help in place of the type name (ex: `[path] <FILE>`).
    pub fn hint(self, hint: impl Into<String>) -> Arg<T, D, C, Set<String>> {
        let Arg {
            name,
            description,
            default,
            conversion,
            checks,
            ..
        } = self;
        Arg {
            name,
            description,
            default,
            conversion,
            hint: Set(hint.into()),
            checks,
        }
    }
}

impl<T, D, C, H> PositionalArgument for Arg<T, D, C, H>
where
    D: Preset<T>,
    C: Conversion<T>,
    H: Hint,
{
    type Value = T;

    fn resolve(&self, token: Option<&str>) -> Result<T, ParseError> {
        match token {
            Some(text) => {
                let value = self.conversion.convert(text)?;
                self.checks
                    .verify(&value, text, || format!("argument {}", self.name))?;
                Ok(value)
            }
            None => self
                .default
                .value()
                .ok_or_else(|| ParseError::MissingArgument {
                    name: self.name.clone(),
                }),
        }
    }

    fn describe(&self, indent: usize) -> String {
        let hint = self
            .hint
            .hint()
            .map(str::to_string)
            .unwrap_or_else(type_label::<T>);
        describe_leaf(
            indent,
            &format!("[{}] <{hint}>", self.name),
            self.description.as_deref(),
            &[(DEFAULT_LABEL, self.default.rendered())],
        )
    }
}

impl<T, D, C, H> Parser for Arg<T, D, C, H>
where
    D: Preset<T>,
    C: Conversion<T>,
    H: Hint,
{
    type Output = T;

    fn parse_tokens(&self, tokens: &[&str]) -> Result<T, ParseError> {
        let Cons(value, Nil) = parse_arguments(&Cons(self, Nil), tokens)?;
        Ok(value)
    }

    fn render(&self, indent: usize) -> String {
        self.describe(indent)
    }
}

impl<T, D, C, H> std::fmt::Debug for Arg<T, D, C, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Arg[{t}, {n}]", t = type_label::<T>(), n = self.name)
    }
}
