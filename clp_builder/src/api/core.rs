use std::marker::PhantomData;

use crate::parser::{ConsoleInterface, GeneralParser, ParseError, Printer, UserInterface};

/// Behaviour of every composed command line shape: parse tokens into a typed output, and render help.
///
/// Parsing never mutates the parser, so one parser may be reused for any number of command lines.
pub trait Parser {
    /// The value produced by a successful parse.
    type Output;

    /// Parse the `tokens` (the command line without the program name).
    fn parse_tokens(&self, tokens: &[&str]) -> Result<Self::Output, ParseError>;

    /// Render the help listing, with every line indented by at least `indent` spaces.
    fn render(&self, indent: usize) -> String;

    /// Parse any sequence of string-like tokens.
    ///
    /// ### Example
    /// ```
    /// # use clp_builder as clp;
    /// use clp::prelude::*;
    /// use clp::opt;
    ///
    /// let width = opt::<u32>().pattern("-w");
    /// let owned: Vec<String> = vec!["-w=1920".to_string()];
    ///
    /// assert_eq!(width.parse(&owned).unwrap(), 1920);
    /// assert_eq!(width.parse(["-w=800"]).unwrap(), 800);
    /// ```
    fn parse<I, S>(&self, tokens: I) -> Result<Self::Output, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let owned: Vec<S> = tokens.into_iter().collect();
        let tokens: Vec<&str> = owned.iter().map(AsRef::as_ref).collect();
        self.parse_tokens(&tokens)
    }

    /// Post-process the output of this parser with `f`.
    ///
    /// ### Example
    /// ```
    /// # use clp_builder as clp;
    /// use clp::prelude::*;
    /// use clp::opt;
    ///
    /// let area = (opt::<u32>().pattern("-w") | opt::<u32>().pattern("-h"))
    ///     .map(|(w, h)| w * h);
    ///
    /// assert_eq!(area.parse(["-w=4", "-h=5"]).unwrap(), 20);
    /// ```
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> U,
    {
        Map { parser: self, f }
    }

    /// Convert the output of this parser with [`Into`], typically into a `#[derive(ParseResult)]` struct.
    fn map_into<U>(self) -> MapInto<Self, U>
    where
        Self: Sized,
        Self::Output: Into<U>,
    {
        MapInto {
            parser: self,
            _phantom: PhantomData,
        }
    }
}

/// A parser whose output is post-processed by a function.
/// Built via [`Parser::map`].
pub struct Map<P, F> {
    parser: P,
    f: F,
}

impl<P, F, U> Parser for Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse_tokens(&self, tokens: &[&str]) -> Result<U, ParseError> {
        self.parser.parse_tokens(tokens).map(&self.f)
    }

    fn render(&self, indent: usize) -> String {
        self.parser.render(indent)
    }
}

/// A parser whose output is converted with [`Into`].
/// Built via [`Parser::map_into`].
pub struct MapInto<P, U> {
    parser: P,
    _phantom: PhantomData<fn() -> U>,
}

impl<P, U> Parser for MapInto<P, U>
where
    P: Parser,
    P::Output: Into<U>,
{
    type Output = U;

    fn parse_tokens(&self, tokens: &[&str]) -> Result<U, ParseError> {
        self.parser.parse_tokens(tokens).map(Into::into)
    }

    fn render(&self, indent: usize) -> String {
        self.parser.render(indent)
    }
}

/// The parser accepting no tokens at all.
/// Built via [`nothing`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Empty;

/// Create the parser which accepts only an empty command line, producing `()`.
/// Useful for commands without arguments or options, such as `help`.
pub fn nothing() -> Empty {
    Empty
}

impl Parser for Empty {
    type Output = ();

    fn parse_tokens(&self, tokens: &[&str]) -> Result<(), ParseError> {
        match tokens.first() {
            Some(token) => Err(ParseError::UnrecognizedArgument(token.to_string())),
            None => Ok(()),
        }
    }

    fn render(&self, _indent: usize) -> String {
        String::default()
    }
}

/// The console front end: binds a composed parser to a program name and the terminal.
///
/// ### Example
/// ```
/// # use clp_builder as clp;
/// use clp::{opt, CommandLineParser};
///
/// let parser = CommandLineParser::new("program")
///     .about("Open a window.")
///     .build(opt::<u32>().pattern("-w").default_to(1920));
///
/// assert_eq!(parser.parse_tokens(&["-w=800"]), Ok(800));
/// assert_eq!(parser.parse_tokens(&["-w=wide"]), Err(1));
/// ```
pub struct CommandLineParser {
    program: String,
    about: Option<String>,
}

impl CommandLineParser {
    /// Create a command line parser for `program`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            about: None,
        }
    }

    /// Document the about message for this command line parser.
    /// If repeated, only the final about message will apply.
    ///
    /// An about message documents the program in full sentence/paragraph format.
    /// We recommend allowing `clp` to format this field (ex: it is not recommended to use line breaks `'\n'`).
    pub fn about(mut self, description: impl Into<String>) -> Self {
        self.about.replace(description.into());
        self
    }

    fn build_with_interface<P: Parser>(
        self,
        parser: P,
        user_interface: Box<dyn UserInterface>,
    ) -> GeneralParser<P> {
        let printer = Printer::terminal(self.program, self.about);
        GeneralParser::new(parser, printer, user_interface)
    }

    /// Build the command line parser around `parser`.
    pub fn build<P: Parser>(self, parser: P) -> GeneralParser<P> {
        self.build_with_interface(parser, Box::new(ConsoleInterface::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{arg, flag, opt};
    use crate::parser::util::{channel_interface, InMemoryInterface};
    use crate::test::assert_contains;
    use rstest::rstest;

    #[derive(Debug, PartialEq)]
    struct Window {
        width: u32,
        height: u32,
    }

    impl From<(u32, u32)> for Window {
        fn from((width, height): (u32, u32)) -> Self {
            Window { width, height }
        }
    }

    #[test]
    fn parse_owned() {
        // Setup
        let parser = opt::<u32>().pattern("-w");
        let tokens = vec!["-w=1".to_string()];

        // Execute & Verify
        assert_eq!(parser.parse(tokens.iter()), Ok(1));
        assert_eq!(parser.parse(tokens), Ok(1));
        assert_eq!(parser.parse(["-w=2"]), Ok(2));
    }

    #[test]
    fn map() {
        // Setup
        let parser = (opt::<u32>().pattern("-w") | opt::<u32>().pattern("-h"))
            .map(|(width, height)| width * height);

        // Execute & Verify
        assert_eq!(parser.parse_tokens(&["-w=3", "-h=4"]), Ok(12));
        assert_matches!(
            parser.parse_tokens(&["-w=3"]),
            Err(ParseError::MissingOption { .. })
        );
    }

    #[test]
    fn map_into() {
        // Setup
        let parser = (opt::<u32>().pattern("-w") | opt::<u32>().pattern("-h"))
            .map_into::<Window>();

        // Execute
        let result = parser.parse_tokens(&["-h=600", "-w=800"]);

        // Verify
        assert_eq!(
            result,
            Ok(Window {
                width: 800,
                height: 600
            })
        );
    }

    #[test]
    fn map_render() {
        // Setup
        let inner = || opt::<u32>().pattern("-w").help("Width.");

        // Execute & Verify
        assert_eq!(inner().map(|w| w + 1).render(2), inner().render(2));
    }

    #[rstest]
    #[case(vec![], Ok(()))]
    #[case(vec!["x"], Err(ParseError::UnrecognizedArgument("x".to_string())))]
    #[case(vec!["--help", "x"], Err(ParseError::UnrecognizedArgument("--help".to_string())))]
    fn nothing_parser(#[case] tokens: Vec<&str>, #[case] expected: Result<(), ParseError>) {
        assert_eq!(nothing().parse_tokens(&tokens), expected);
        assert_eq!(nothing().render(4), "");
    }

    #[test]
    fn build() {
        // Setup
        let clp = CommandLineParser::new("program")
            .about("--this will get discarded--")
            .about("abc def");
        let interface = InMemoryInterface::default();

        // Execute
        let parser = clp.build_with_interface(
            arg::<String>("path") | flag().pattern("-v"),
            Box::new(interface),
        );

        // Verify
        assert_eq!(
            parser.details(),
            ("program".to_string(), Some("abc def".to_string()))
        );
        assert_eq!(
            parser.parse_tokens(&["notes.txt", "-v"]),
            Ok(("notes.txt".to_string(), true))
        );
    }

    #[test]
    fn build_error() {
        // Setup
        let clp = CommandLineParser::new("program");
        let (sender, receiver) = channel_interface();
        let parser = clp.build_with_interface(opt::<u32>().pattern("-w"), Box::new(sender));

        // Execute
        let error_code = parser.parse_tokens(&["-w=wide"]).unwrap_err();
        drop(parser);

        // Verify
        assert_eq!(error_code, 1);
        let (message, error) = receiver.consume();
        assert_eq!(message, None);
        assert_eq!(
            error,
            Some("Parse error: Could not convert argument \"wide\" to type u32".to_string())
        );
    }

    #[test]
    fn build_help() {
        // Setup
        let clp = CommandLineParser::new("program").about("Resize a window.");
        let (sender, receiver) = channel_interface();
        let parser = clp.build_with_interface(
            opt::<u32>().pattern("-w").help("Width in pixels."),
            Box::new(sender),
        );

        // Execute
        parser.print_help();
        drop(parser);

        // Verify
        let message = receiver.consume_message();
        assert_contains!(message, "usage: program\n");
        assert_contains!(message, "Resize a window.");
        assert_contains!(message, "-w <u32>");
        assert_contains!(message, "Width in pixels.");
    }
}
