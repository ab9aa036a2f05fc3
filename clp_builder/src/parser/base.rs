use thiserror::Error;

/// The reason a command line was rejected.
///
/// Every variant is terminal: parsing stops at the first one encountered, and its `Display`
/// form is the message shown to the user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A token did not match any declared option pattern.
    #[error("Unrecognized argument \"{0}\"")]
    UnrecognizedArgument(String),

    /// The command word did not match any declared command name.
    #[error("Unrecognized command \"{0}\"")]
    UnrecognizedCommand(String),

    /// An option was never mentioned, and has no default.
    #[error("No matching argument for option {patterns}")]
    MissingOption {
        /// The option's patterns, comma separated.
        patterns: String,
    },

    /// A positional argument had no token at its position, and has no default.
    #[error("Missing argument {name}")]
    MissingArgument {
        /// The argument's declared name.
        name: String,
    },

    /// The matched text could not be converted to the declared type.
    #[error("Could not convert argument \"{text}\" to type {type_name}")]
    Conversion {
        /// The text given on the command line.
        text: String,
        /// The label of the declared type.
        type_name: String,
    },

    /// The converted value was rejected by one of its checks.
    #[error("Validation check failed for {identity} with argument \"{text}\": {message}")]
    Validation {
        /// Either `option <patterns>` or `argument <name>`.
        identity: String,
        /// The text given on the command line.
        text: String,
        /// The message attached to the failing check.
        message: String,
    },

    /// More positional tokens were supplied than positional arguments are declared.
    #[error("Too many arguments. Provided {provided} arguments. Program expects {expected}")]
    TooManyArguments {
        /// The number of positional tokens supplied.
        provided: usize,
        /// The number of positional arguments declared.
        expected: usize,
    },

    /// A command bearing parser never saw a command word.
    #[error("Expected command.")]
    ExpectedCommand,
}
