use crate::api::capture::pad;
use crate::api::core::Parser;
use crate::choice::{Choice, Tagged, Void, Widen};
use crate::constant::*;
use crate::model::{Cons, Nil};
use crate::parser::ParseError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A literal command word bound to the parser for the tokens which follow it.
///
/// A command is not a parser on its own; combine commands with `|` into a [`CommandSelector`].
///
/// ### Example
/// ```
/// # use clp_builder as clp;
/// use clp::prelude::*;
/// use clp::{nothing, opt, Command, OneOf2};
///
/// let parser = Command::new("resize", "Resize the window.", opt::<u32>().pattern("-w"))
///     | Command::new("close", "Close the window.", nothing());
///
/// assert_eq!(parser.parse(["resize", "-w=800"]).unwrap(), OneOf2::First(800));
/// assert_eq!(parser.parse(["close"]).unwrap(), OneOf2::Second(()));
/// ```
pub struct Command<P> {
    name: String,
    description: String,
    parser: P,
}

impl<P: Parser> Command<P> {
    /// Create a command answering to `name`.
    pub fn new(name: impl Into<String>, description: impl Into<String>, parser: P) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parser,
        }
    }
}

impl<P> Command<P> {
    fn describe(&self, indent: usize) -> String {
        let mut out = format!("{:indent$}{}", "", self.name);
        pad(&mut out, COMMAND_COLUMN);
        out.push_str(&self.description);
        out.push('\n');
        out
    }
}

/// Behaviour for a list of commands, tried in declaration order.
#[doc(hidden)]
pub trait CommandList {
    /// The nested union of the command outputs.
    type Output;

    /// Whether any command in the list is named `token`.
    fn matches(&self, token: &str) -> bool;

    /// Delegate `rest` to the first command named `token`, or `None` if there is no such command.
    fn select(&self, token: &str, rest: &[&str]) -> Option<Result<Self::Output, ParseError>>;

    /// Render every command for help.
    fn describe(&self, indent: usize, out: &mut String);
}

impl CommandList for Nil {
    type Output = Void;

    fn matches(&self, _token: &str) -> bool {
        false
    }

    fn select(&self, _token: &str, _rest: &[&str]) -> Option<Result<Self::Output, ParseError>> {
        None
    }

    fn describe(&self, _indent: usize, _out: &mut String) {}
}

impl<P, T> CommandList for Cons<Command<P>, T>
where
    P: Parser,
    T: CommandList,
{
    type Output = Choice<P::Output, T::Output>;

    fn matches(&self, token: &str) -> bool {
        self.0.name == token || self.1.matches(token)
    }

    fn select(&self, token: &str, rest: &[&str]) -> Option<Result<Self::Output, ParseError>> {
        if self.0.name == token {
            #[cfg(feature = "tracing_debug")]
            debug!("Selected command '{token}' for {rest:?}.");
            Some(self.0.parser.parse_tokens(rest).map(Choice::Here))
        } else {
            self.1
                .select(token, rest)
                .map(|result| result.map(Choice::There))
        }
    }

    fn describe(&self, indent: usize, out: &mut String) {
        out.push_str(&self.0.describe(indent));
        self.1.describe(indent, out);
    }
}

fn select<L: CommandList>(commands: &L, tokens: &[&str]) -> Result<L::Output, ParseError> {
    let (token, rest) = tokens.split_first().ok_or(ParseError::ExpectedCommand)?;
    commands
        .select(token, rest)
        .unwrap_or_else(|| Err(ParseError::UnrecognizedCommand(token.to_string())))
}

/// A disjunction of commands, selected by the first token.
///
/// Produces a `OneOfN` with one alternative per command, in declaration order.
pub struct CommandSelector<L>(pub(crate) L);

impl<L> Parser for CommandSelector<L>
where
    L: CommandList,
    L::Output: Tagged,
{
    type Output = <L::Output as Tagged>::Union;

    fn parse_tokens(&self, tokens: &[&str]) -> Result<Self::Output, ParseError> {
        Ok(select(&self.0, tokens)?.tagged())
    }

    fn render(&self, indent: usize) -> String {
        let mut out = String::default();
        self.0.describe(indent, &mut out);
        out
    }
}

/// The result of a [`CommandWithSharedOptions`]: the shared options, and the selected command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithShared<S, C> {
    /// The values of the options given before the command word.
    pub shared: S,
    /// The selected command.
    pub command: C,
}

/// Options which precede the command word, common to every command.
/// Combine with commands via `|` to build a [`CommandWithSharedOptions`].
///
/// ### Example
/// ```
/// # use clp_builder as clp;
/// use clp::prelude::*;
/// use clp::{flag, nothing, Command, OneOf1, SharedOptions, WithShared};
///
/// let parser = SharedOptions::new(flag().pattern("--dry-run"))
///     | Command::new("sync", "Synchronise the tree.", nothing());
///
/// assert_eq!(
///     parser.parse(["--dry-run", "sync"]).unwrap(),
///     WithShared { shared: true, command: OneOf1::First(()) },
/// );
/// ```
pub struct SharedOptions<P>(pub(crate) P);

impl<P: Parser> SharedOptions<P> {
    /// Share the options of `parser` across the commands it is combined with.
    pub fn new(parser: P) -> Self {
        Self(parser)
    }
}

/// Shared options, then a command selected by the first command word.
///
/// Shared options must precede the command word: a token after it belongs to the command.
pub struct CommandWithSharedOptions<P, L> {
    pub(crate) shared: P,
    pub(crate) commands: L,
}

impl<P, L> Parser for CommandWithSharedOptions<P, L>
where
    P: Parser,
    L: CommandList,
    L::Output: Tagged,
{
    type Output = WithShared<P::Output, <L::Output as Tagged>::Union>;

    fn parse_tokens(&self, tokens: &[&str]) -> Result<Self::Output, ParseError> {
        let position = tokens
            .iter()
            .position(|token| self.commands.matches(token))
            .ok_or(ParseError::ExpectedCommand)?;
        let (shared, command) = tokens.split_at(position);
        #[cfg(feature = "tracing_debug")]
        debug!("Split tokens into shared {shared:?} and command {command:?}.");
        let shared = self.shared.parse_tokens(shared)?;
        let command = select(&self.commands, command)?.tagged();
        Ok(WithShared { shared, command })
    }

    fn render(&self, indent: usize) -> String {
        let mut out = format!("{:indent$}Shared options:\n", "");
        out.push_str(&self.shared.render(indent + INDENT_STEP));
        out.push('\n');
        out.push_str(&format!("{:indent$}Commands:\n", ""));
        self.commands.describe(indent + INDENT_STEP, &mut out);
        out
    }
}

/// Commands, with a fallback parser for when the first token is not a command word.
///
/// Produces a `OneOfN` with one alternative per command, then a final alternative for the fallback.
/// Alternatives are never merged, even when two of them carry the same type: each keeps its own position.
///
/// ### Example
/// ```
/// # use clp_builder as clp;
/// use clp::prelude::*;
/// use clp::{nothing, opt, Command, OneOf2};
///
/// let parser = Command::new("help", "Print help.", nothing())
///     | opt::<u32>().pattern("-w").default_to(1920);
///
/// assert_eq!(parser.parse(["help"]).unwrap(), OneOf2::First(()));
/// assert_eq!(parser.parse(["-w=800"]).unwrap(), OneOf2::Second(800));
/// ```
pub struct CommandWithImplicitCommand<L, I> {
    pub(crate) commands: L,
    pub(crate) implicit: I,
}

impl<L, I> Parser for CommandWithImplicitCommand<L, I>
where
    L: CommandList,
    I: Parser,
    L::Output: Widen<I::Output>,
    <L::Output as Widen<I::Output>>::Output: Tagged,
{
    type Output = <<L::Output as Widen<I::Output>>::Output as Tagged>::Union;

    fn parse_tokens(&self, tokens: &[&str]) -> Result<Self::Output, ParseError> {
        let widened = match tokens.first() {
            Some(token) if self.commands.matches(token) => select(&self.commands, tokens)?.widen(),
            _ => {
                #[cfg(feature = "tracing_debug")]
                debug!("No command word; using the implicit command for {tokens:?}.");
                <L::Output as Widen<I::Output>>::last(self.implicit.parse_tokens(tokens)?)
            }
        };
        Ok(widened.tagged())
    }

    fn render(&self, indent: usize) -> String {
        let mut out = format!("{:indent$}Commands:\n", "");
        self.commands.describe(indent + INDENT_STEP, &mut out);
        out.push('\n');
        out.push_str(&format!("{:indent$}Options:\n", ""));
        out.push_str(&self.implicit.render(indent + INDENT_STEP));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{flag, nothing, opt};
    use crate::choice::{OneOf2, OneOf3};
    use crate::test::assert_contains;
    use rstest::rstest;

    fn open_window() -> Command<impl Parser<Output = (u32, u32)>> {
        Command::new(
            "open-window",
            "Open a new window.",
            opt::<u32>().pattern("-w") | opt::<u32>().pattern("-h"),
        )
    }

    fn fetch_url() -> Command<impl Parser<Output = (String, u32, u32)>> {
        Command::new(
            "fetch-url",
            "Fetch a url.",
            opt::<String>().pattern("--url")
                | opt::<u32>().pattern("--max-attempts")
                | opt::<u32>().pattern("--timeout").default_to(10),
        )
    }

    #[rstest]
    #[case(vec!["open-window", "-w=1920", "-h=1080"], Ok(OneOf2::First((1920, 1080))))]
    #[case(vec!["fetch-url", "--url=www.google.com", "--max-attempts=15"], Ok(OneOf2::Second(("www.google.com".to_string(), 15, 10))))]
    #[case(vec!["commit", "-m=foo"], Err(ParseError::UnrecognizedCommand("commit".to_string())))]
    #[case(vec![], Err(ParseError::ExpectedCommand))]
    #[case(vec!["open-window", "-w=1920"], Err(ParseError::MissingOption { patterns: "-h".to_string() }))]
    #[case(vec!["-w=1920", "open-window"], Err(ParseError::UnrecognizedCommand("-w=1920".to_string())))]
    fn command_selector(
        #[case] tokens: Vec<&str>,
        #[case] expected: Result<OneOf2<(u32, u32), (String, u32, u32)>, ParseError>,
    ) {
        // Setup
        let parser = open_window() | fetch_url();

        // Execute
        let result = parser.parse_tokens(&tokens);

        // Verify
        assert_eq!(result, expected);
    }

    #[test]
    fn command_selector_first_match_wins() {
        // Setup
        let parser = Command::new("run", "", opt::<u8>().pattern("-a").default_to(1))
            | Command::new("run", "", opt::<u8>().pattern("-b").default_to(2));

        // Execute
        let result = parser.parse_tokens(&["run"]);

        // Verify
        assert_eq!(result, Ok(OneOf2::First(1)));
    }

    #[test]
    fn command_selector_flattened() {
        // Setup
        let a = || Command::new("a", "", nothing());
        let b = || Command::new("b", "", nothing());
        let c = || Command::new("c", "", nothing());
        let left = (a() | b()) | c();
        let right = a() | (b() | c());
        let both = (a() | b()) | (c() | Command::new("d", "", nothing()));

        // Execute & Verify
        assert_eq!(left.parse_tokens(&["c"]), Ok(OneOf3::Third(())));
        assert_eq!(right.parse_tokens(&["c"]), Ok(OneOf3::Third(())));
        assert_eq!(both.parse_tokens(&["d"]).map(|r| r.index()), Ok(3));
    }

    #[rstest]
    #[case(vec!["open-window", "-w=800", "-h=600"], Ok(((".".to_string(), false), OneOf2::First((800, 600)))))]
    #[case(vec!["--root-path=/srv", "--dry-run", "open-window", "-w=800", "-h=600"], Ok((("/srv".to_string(), true), OneOf2::First((800, 600)))))]
    #[case(vec!["--dry-run", "fetch-url", "--url=x", "--max-attempts=1"], Ok(((".".to_string(), true), OneOf2::Second(("x".to_string(), 1, 10)))))]
    #[case(vec!["open-window", "--root-path=X", "-w=800", "-h=600"], Err(ParseError::UnrecognizedArgument("--root-path=X".to_string())))]
    #[case(vec!["--dry-run"], Err(ParseError::ExpectedCommand))]
    #[case(vec![], Err(ParseError::ExpectedCommand))]
    #[case(vec!["--verbose", "open-window", "-w=800", "-h=600"], Err(ParseError::UnrecognizedArgument("--verbose".to_string())))]
    fn command_with_shared_options(
        #[case] tokens: Vec<&str>,
        #[case] expected: Result<((String, bool), OneOf2<(u32, u32), (String, u32, u32)>), ParseError>,
    ) {
        // Setup
        let shared = opt::<String>()
            .pattern("--root-path")
            .default_to(".".to_string())
            | flag().pattern("--dry-run");
        let parser = SharedOptions::new(shared) | open_window() | fetch_url();

        // Execute
        let result = parser.parse_tokens(&tokens);

        // Verify
        assert_eq!(
            result,
            expected.map(|(shared, command)| WithShared { shared, command })
        );
    }

    #[rstest]
    #[case(vec!["help"], Ok(OneOf3::First(())))]
    #[case(vec!["version", "--short"], Ok(OneOf3::Second(true)))]
    #[case(vec![], Ok(OneOf3::Third((1920, false))))]
    #[case(vec!["-w=800", "-v"], Ok(OneOf3::Third((800, true))))]
    #[case(vec!["help", "-w=800"], Err(ParseError::UnrecognizedArgument("-w=800".to_string())))]
    #[case(vec!["-x"], Err(ParseError::UnrecognizedArgument("-x".to_string())))]
    #[case(vec!["commit"], Err(ParseError::UnrecognizedArgument("commit".to_string())))]
    fn command_with_implicit_command(
        #[case] tokens: Vec<&str>,
        #[case] expected: Result<OneOf3<(), bool, (u32, bool)>, ParseError>,
    ) {
        // Setup
        let parser = Command::new("help", "Print help.", nothing())
            | opt::<u32>().pattern("-w").default_to(1920)
            | Command::new("version", "Print the version.", flag().pattern("--short"))
            | flag().pattern("-v");

        // Execute
        let result = parser.parse_tokens(&tokens);

        // Verify
        assert_eq!(result, expected);
    }

    #[test]
    fn render_commands() {
        // Setup
        let parser = open_window() | fetch_url();

        // Execute
        let rendered = parser.render(2);

        // Verify
        assert_eq!(
            rendered,
            format!(
                "  open-window{}Open a new window.\n  fetch-url{}Fetch a url.\n",
                " ".repeat(25 - 13),
                " ".repeat(25 - 11),
            )
        );
    }

    #[test]
    fn render_shared_options() {
        // Setup
        let parser =
            SharedOptions::new(flag().pattern("--dry-run").help("Dry run.")) | open_window();

        // Execute
        let rendered = parser.render(0);

        // Verify
        assert!(rendered.starts_with("Shared options:\n  --dry-run <bool>"));
        assert_contains!(rendered, "\n\nCommands:\n  open-window");
        assert_eq!(rendered, parser.render(0));
    }

    #[test]
    fn render_implicit_command() {
        // Setup
        let parser = Command::new("help", "Print help.", nothing()) | flag().pattern("-v");

        // Execute
        let rendered = parser.render(0);

        // Verify
        assert_eq!(
            rendered,
            format!(
                "Commands:\n  help{}Print help.\n\nOptions:\n  -v <bool>\n{c}By default: false\n{c}Implicitly: true\n",
                " ".repeat(25 - 6),
                c = " ".repeat(40),
            )
        );
    }
}
