//! Builder module for `clp`.
//! See the `clp` crate documentation for full details.
#![deny(missing_docs)]
mod api;
mod choice;
mod constant;
mod matcher;
mod model;
mod parser;
pub mod prelude;

pub use api::*;
pub use choice::*;
pub use model::*;
pub use parser::{GeneralParser, ParseError};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
