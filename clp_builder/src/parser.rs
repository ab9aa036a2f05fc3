mod base;
mod interface;
mod middleware;
mod printer;

pub use base::ParseError;
pub(crate) use interface::*;
pub use middleware::GeneralParser;
pub(crate) use printer::Printer;
