mod error;
pub use error::{Error, IntoError};

pub mod deps;
pub use deps::{Dependencies, NamedObject};

/// A Result type alias that uses schemata's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
