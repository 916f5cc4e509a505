#[macro_use]
mod macros;

pub mod driver;
pub use driver::{DataMap, Gateway};

mod error;
pub use error::{Error, IntoError};

pub mod stmt;
pub use stmt::{Record, Value};

/// A Result type alias that uses Cartograph's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
