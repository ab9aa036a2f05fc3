//! Traits which, typically, may be imported without concern: `use clp::prelude::*`.

pub use crate::api::Parser;

/// Behaviour for a type to be read from, and shown as, command line text.
///
/// Implemented for the integer and floating point primitives, `bool`, `char`, `String`,
/// `PathBuf`, and `Vec<T>` of any implementor.
/// Implement it for your own types to use them in `opt`/`arg` without a `custom_parser`.
///
/// ### Example
/// ```
/// # use clp_builder as clp;
/// use clp::prelude::*;
/// use clp::opt;
///
/// #[derive(Clone, Debug, PartialEq)]
/// enum Level {
///     Low,
///     High,
/// }
///
/// impl Value for Level {
///     fn parse_text(text: &str) -> Option<Self> {
///         match text {
///             "low" => Some(Level::Low),
///             "high" => Some(Level::High),
///             _ => None,
///         }
///     }
///
///     fn render(&self) -> String {
///         match self {
///             Level::Low => "low".to_string(),
///             Level::High => "high".to_string(),
///         }
///     }
/// }
///
/// let level = opt::<Level>().pattern("--level").default_to(Level::Low);
/// assert_eq!(level.parse(["--level=high"]).unwrap(), Level::High);
/// assert_eq!(level.parse(Vec::<String>::new()).unwrap(), Level::Low);
/// ```
pub trait Value: Sized {
    /// Read a value from its command line text, or `None` if the text is not a valid value.
    fn parse_text(text: &str) -> Option<Self>;

    /// Show the value as text, the way it would be written on the command line.
    fn render(&self) -> String;
}
