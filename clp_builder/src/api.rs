mod capture;
mod combine;
mod command;
mod compound;
mod core;
mod parameter;
mod value;

pub use self::core::*;
pub use capture::*;
pub use combine::*;
pub use command::*;
pub use compound::*;
pub use parameter::*;
