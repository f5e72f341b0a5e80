//! Error types for dotted rendering.
//!
//! Shapes handled by [`IpShape`](crate::IpShape) are checked when the program
//! is compiled and cannot fail. Errors only come from the two places that
//! work at run time:
//!
//! - **Unsupported shapes**: a `Serialize` value handed to
//!   [`to_string`](crate::to_string) that is not an integer, integer sequence,
//!   string or tuple of scalars
//! - **I/O errors**: writing the rendered line to a writer failed
//!
//! ## Examples
//!
//! ```rust
//! use ip_printer::{to_string, Error};
//! use std::collections::BTreeMap;
//!
//! let map: BTreeMap<&str, u8> = BTreeMap::new();
//! let result = to_string(&map);
//! assert!(matches!(result, Err(Error::UnsupportedType(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while rendering at run time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// IO error during writing
    #[error("IO error: {0}")]
    Io(String),

    /// The value does not have one of the four accepted shapes
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error raised by a `Serialize` implementation
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an unsupported type error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ip_printer::Error;
    ///
    /// let err = Error::unsupported_type("map");
    /// assert_eq!(err.to_string(), "Unsupported type: map");
    /// ```
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
