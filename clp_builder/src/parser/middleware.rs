use std::env;

use crate::api::Parser;
use crate::constant::ERROR_PREFIX;
use crate::parser::{Printer, UserInterface};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The console front end around a composed parser.
/// Built via [`CommandLineParser::build`](crate::CommandLineParser::build).
pub struct GeneralParser<P> {
    parser: P,
    printer: Printer,
    user_interface: Box<dyn UserInterface>,
}

impl<P: Parser> GeneralParser<P> {
    pub(crate) fn new(parser: P, printer: Printer, user_interface: Box<dyn UserInterface>) -> Self {
        Self {
            parser,
            printer,
            user_interface,
        }
    }

    #[cfg(test)]
    pub(crate) fn details(&self) -> (String, Option<String>) {
        self.printer.details()
    }

    /// Parse the tokens (the command line without the program name).
    /// On failure, the error is reported to the user and the non-zero exit code is returned.
    pub fn parse_tokens(&self, tokens: &[&str]) -> Result<P::Output, i32> {
        self.parser.parse_tokens(tokens).map_err(|error| {
            #[cfg(feature = "tracing_debug")]
            debug!("Parse of {tokens:?} failed: {error:?}.");
            self.user_interface
                .print_error(format!("{ERROR_PREFIX}{error}"));
            1
        })
    }

    /// Parse the program's command line, exiting the process on failure.
    pub fn parse(&self) -> P::Output {
        let command_input: Vec<String> = env::args().skip(1).collect();
        let tokens: Vec<&str> = command_input.iter().map(AsRef::as_ref).collect();

        match self.parse_tokens(&tokens) {
            Ok(output) => output,
            Err(exit_code) => std::process::exit(exit_code),
        }
    }

    /// The full help message.
    ///
    /// ### Example
    /// ```
    /// # use clp_builder as clp;
    /// use clp::{opt, CommandLineParser};
    ///
    /// let parser = CommandLineParser::new("program")
    ///     .build(opt::<u32>().pattern("-w").help("Width."));
    ///
    /// assert!(parser.help().starts_with("usage: program"));
    /// ```
    pub fn help(&self) -> String {
        self.printer.help(&self.parser.render(0))
    }

    /// Show the full help message to the user.
    pub fn print_help(&self) {
        self.user_interface.print(self.help());
    }
}
