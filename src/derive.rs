//! Derive Api for naming `clp` parse outputs.
//!
//! Instrument a struct or enum with `#[derive(ParseResult)]` to generate a `From` conversion out of a parse output.
//! Use it together with [`Parser::map_into`](crate::prelude::Parser::map_into).
//!
//! ### Structs
//! A struct with named fields converts from the flat tuple of a compound parser.
//! Tuple positions bind to the fields in declaration order, so declare the fields in the same order as the output:
//! arguments first, then options.
//! A struct with one field converts from the bare value, and a struct without fields converts from `()`.
//!
//! ```
//! use clp::derive::*;
//! use clp::prelude::*;
//! use clp::{arg, opt};
//!
//! #[derive(Debug, PartialEq, ParseResult)]
//! struct Transfer {
//!     source: String,
//!     target: String,
//!     attempts: u8,
//! }
//!
//! let parser = (arg::<String>("source")
//!     | arg::<String>("target")
//!     | opt::<u8>().pattern("--attempts").default_to(1))
//!     .map_into::<Transfer>();
//!
//! assert_eq!(
//!     parser.parse(["a.txt", "b.txt"]).unwrap(),
//!     Transfer {
//!         source: "a.txt".to_string(),
//!         target: "b.txt".to_string(),
//!         attempts: 1,
//!     }
//! );
//! ```
//!
//! ### Enums
//! An enum whose variants each hold exactly one unnamed field converts from the `OneOfN` union of a command group.
//! Alternatives bind to the variants in declaration order.
//!
//! ```
//! use clp::derive::*;
//! use clp::prelude::*;
//! use clp::{nothing, opt, Command};
//!
//! #[derive(Debug, PartialEq, ParseResult)]
//! enum Action {
//!     Help(()),
//!     Run(u32),
//! }
//!
//! let parser = Command::new("help", "Show this help message.", nothing())
//!     | opt::<u32>().pattern("-n").default_to(1);
//!
//! let action: Action = parser.parse(["help"]).unwrap().into();
//! assert_eq!(action, Action::Help(()));
//! let action: Action = parser.parse(["-n=4"]).unwrap().into();
//! assert_eq!(action, Action::Run(4));
//! ```
//!
//! Any other shape (tuple structs, unions, variants with zero or several fields) is rejected at compile time.
pub use clp_derive::*;
