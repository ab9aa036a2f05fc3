use crate::api::capture::{NamedOption, PositionalArgument};
use crate::api::core::Parser;
use crate::constant::*;
use crate::matcher::positional_boundary;
use crate::model::{Concat, Cons, Nil, Tupled};
use crate::parser::ParseError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Behaviour for a list of named options, resolved together.
#[doc(hidden)]
pub trait OptionList {
    /// The list of resolved values.
    type Output;

    /// Per option resolution, filled in as tokens are claimed.
    type State;

    /// The state before any token is claimed.
    fn start(&self) -> Self::State;

    /// Offer the `token` to each unresolved option, in declaration order.
    /// Returns whether any option claimed it; the outcome is kept in `state` until [`OptionList::finish`].
    fn claim(&self, state: &mut Self::State, token: &str) -> bool;

    /// Report the first option, in declaration order, which claimed nothing and has no default.
    fn unmatched(&self, state: &Self::State) -> Result<(), ParseError>;

    /// Resolve every option, reporting the first error in declaration order.
    fn finish(&self, state: Self::State) -> Result<Self::Output, ParseError>;

    /// Render every option for help.
    fn describe(&self, indent: usize, out: &mut String);
}

impl OptionList for Nil {
    type Output = Nil;
    type State = Nil;

    fn start(&self) -> Self::State {
        Nil
    }

    fn claim(&self, _state: &mut Self::State, _token: &str) -> bool {
        false
    }

    fn unmatched(&self, _state: &Self::State) -> Result<(), ParseError> {
        Ok(())
    }

    fn finish(&self, _state: Self::State) -> Result<Self::Output, ParseError> {
        Ok(Nil)
    }

    fn describe(&self, _indent: usize, _out: &mut String) {}
}

impl<H, T> OptionList for Cons<H, T>
where
    H: NamedOption,
    T: OptionList,
{
    type Output = Cons<H::Value, T::Output>;
    type State = Cons<Option<Result<H::Value, ParseError>>, T::State>;

    fn start(&self) -> Self::State {
        Cons(None, self.1.start())
    }

    fn claim(&self, state: &mut Self::State, token: &str) -> bool {
        // A resolved option stops participating, even when its resolution failed.
        if state.0.is_none() {
            if let Some(outcome) = self.0.claim(token) {
                state.0.replace(outcome);
                return true;
            }
        }

        self.1.claim(&mut state.1, token)
    }

    fn unmatched(&self, state: &Self::State) -> Result<(), ParseError> {
        if state.0.is_none() {
            self.0.absent()?;
        }

        self.1.unmatched(&state.1)
    }

    fn finish(&self, state: Self::State) -> Result<Self::Output, ParseError> {
        let Cons(resolved, rest) = state;
        let value = match resolved {
            Some(outcome) => outcome?,
            None => self.0.absent()?,
        };
        Ok(Cons(value, self.1.finish(rest)?))
    }

    fn describe(&self, indent: usize, out: &mut String) {
        out.push_str(&self.0.describe(indent));
        self.1.describe(indent, out);
    }
}

/// Behaviour for a list of positional arguments, resolved by position.
#[doc(hidden)]
pub trait ArgumentList {
    /// The list of resolved values.
    type Output;

    /// The number of arguments in the list.
    const LEN: usize;

    /// Resolve each argument against the token at its position, reporting the first error.
    fn resolve_all(&self, tokens: &[&str]) -> Result<Self::Output, ParseError>;

    /// Render every argument for help.
    fn describe(&self, indent: usize, out: &mut String);
}

impl ArgumentList for Nil {
    type Output = Nil;
    const LEN: usize = 0;

    fn resolve_all(&self, _tokens: &[&str]) -> Result<Self::Output, ParseError> {
        Ok(Nil)
    }

    fn describe(&self, _indent: usize, _out: &mut String) {}
}

impl<H, T> ArgumentList for Cons<H, T>
where
    H: PositionalArgument,
    T: ArgumentList,
{
    type Output = Cons<H::Value, T::Output>;
    const LEN: usize = 1 + T::LEN;

    fn resolve_all(&self, tokens: &[&str]) -> Result<Self::Output, ParseError> {
        let (token, rest) = match tokens.split_first() {
            Some((token, rest)) => (Some(*token), rest),
            None => (None, tokens),
        };
        let value = self.0.resolve(token)?;
        Ok(Cons(value, self.1.resolve_all(rest)?))
    }

    fn describe(&self, indent: usize, out: &mut String) {
        out.push_str(&self.0.describe(indent));
        self.1.describe(indent, out);
    }
}

/// Parse option tokens against `options`, in any order.
///
/// Every token is claimed before any outcome is inspected, so only an unrecognized token depends on the token order.
/// Then missing options are reported ahead of failed ones, each in declaration order.
pub(crate) fn parse_options<L: OptionList>(
    options: &L,
    tokens: &[&str],
) -> Result<L::Output, ParseError> {
    let mut state = options.start();

    for token in tokens {
        if !options.claim(&mut state, token) {
            return Err(ParseError::UnrecognizedArgument(token.to_string()));
        }
    }

    options.unmatched(&state)?;
    options.finish(state)
}

/// Parse positional tokens against `arguments`, strictly by position.
pub(crate) fn parse_arguments<L: ArgumentList>(
    arguments: &L,
    tokens: &[&str],
) -> Result<L::Output, ParseError> {
    if tokens.len() > L::LEN {
        return Err(ParseError::TooManyArguments {
            provided: tokens.len(),
            expected: L::LEN,
        });
    }

    arguments.resolve_all(tokens)
}

/// A conjunction of named options, matched in any order.
///
/// Built by combining options with `|`; produces a tuple with one value per option, in declaration order.
///
/// ### Example
/// ```
/// # use clp_builder as clp;
/// use clp::prelude::*;
/// use clp::opt;
///
/// let parser = opt::<u32>().pattern("-w")
///     | opt::<u32>().pattern("-h")
///     | opt::<String>().pattern("--title").default_to("untitled".to_string());
///
/// let (width, height, title) = parser.parse(["-h=1080", "-w=1920"]).unwrap();
/// assert_eq!((width, height, title.as_str()), (1920, 1080, "untitled"));
/// ```
pub struct CompoundOption<L>(pub(crate) L);

impl<L> Parser for CompoundOption<L>
where
    L: OptionList,
    L::Output: Tupled,
{
    type Output = <L::Output as Tupled>::Tuple;

    fn parse_tokens(&self, tokens: &[&str]) -> Result<Self::Output, ParseError> {
        Ok(parse_options(&self.0, tokens)?.tupled())
    }

    fn render(&self, indent: usize) -> String {
        let mut out = String::default();
        self.0.describe(indent, &mut out);
        out
    }
}

/// An ordered conjunction of positional arguments.
///
/// Built by combining arguments with `|`; produces a tuple with one value per argument, in declaration order.
pub struct CompoundArgument<L>(pub(crate) L);

impl<L> Parser for CompoundArgument<L>
where
    L: ArgumentList,
    L::Output: Tupled,
{
    type Output = <L::Output as Tupled>::Tuple;

    fn parse_tokens(&self, tokens: &[&str]) -> Result<Self::Output, ParseError> {
        Ok(parse_arguments(&self.0, tokens)?.tupled())
    }

    fn render(&self, indent: usize) -> String {
        let mut out = String::default();
        self.0.describe(indent, &mut out);
        out
    }
}

/// Positional arguments followed by named options.
///
/// The tokens before the first `-` prefixed token are positional, the rest are options.
/// Produces one flat tuple: the argument values, then the option values.
///
/// ### Example
/// ```
/// # use clp_builder as clp;
/// use clp::prelude::*;
/// use clp::{arg, flag};
///
/// let parser = arg::<String>("source")
///     | arg::<String>("target")
///     | flag().pattern("-f").pattern("--force");
///
/// let (source, target, force) = parser.parse(["a.txt", "b.txt", "--force"]).unwrap();
/// assert_eq!((source.as_str(), target.as_str(), force), ("a.txt", "b.txt", true));
/// ```
pub struct CompoundParser<LA, LO> {
    pub(crate) arguments: LA,
    pub(crate) options: LO,
}

impl<LA, LO> Parser for CompoundParser<LA, LO>
where
    LA: ArgumentList,
    LO: OptionList,
    LA::Output: Concat<LO::Output>,
    <LA::Output as Concat<LO::Output>>::Output: Tupled,
{
    type Output = <<LA::Output as Concat<LO::Output>>::Output as Tupled>::Tuple;

    fn parse_tokens(&self, tokens: &[&str]) -> Result<Self::Output, ParseError> {
        let (positional, options) = tokens.split_at(positional_boundary(tokens));
        #[cfg(feature = "tracing_debug")]
        debug!("Split tokens into positional {positional:?} and options {options:?}.");
        let arguments = parse_arguments(&self.arguments, positional)?;
        let options = parse_options(&self.options, options)?;
        Ok(arguments.concat(options).tupled())
    }

    fn render(&self, indent: usize) -> String {
        let mut out = format!("{:indent$}Arguments:\n", "");
        self.arguments.describe(indent + INDENT_STEP, &mut out);
        out.push('\n');
        out.push_str(&format!("{:indent$}Options:\n", ""));
        self.options.describe(indent + INDENT_STEP, &mut out);
        out
    }
}
