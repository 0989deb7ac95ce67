//! Error types for path operations

use std::fmt;
use thiserror::Error;

/// The domain an error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorDomain {
    /// Invalid argument passed by the caller
    Argument,
    /// Narrow/wide string conversion failure
    Conversion,
    /// Underlying OS call failed
    Io,
    /// Input data is malformed
    Input,
    /// Allocation failure
    Memory,
    /// Internal invariant violated
    Runtime,
}

impl fmt::Display for ErrorDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Argument => "argument",
            Self::Conversion => "conversion",
            Self::Io => "io",
            Self::Input => "input",
            Self::Memory => "memory",
            Self::Runtime => "runtime",
        };
        f.write_str(name)
    }
}

/// The error type for path operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// Argument has an invalid value (empty input, bad index, ...)
    #[error("Invalid argument {name}: {message}")]
    InvalidArgument { name: &'static str, message: String },

    /// Argument length exceeds the maximum supported size
    #[error("Invalid argument {name}: value {value} exceeds maximum")]
    ValueExceedsMaximum { name: &'static str, value: usize },

    /// Unsupported code page identifier
    #[error("Unsupported codepage: {codepage}")]
    UnsupportedCodepage { codepage: i32 },

    /// Narrow/wide conversion failure
    #[error("Conversion failed: {message}")]
    Conversion { message: String },

    /// Malformed volume or path syntax
    #[error("Invalid path {path}: {message}")]
    InvalidPath { path: String, message: String },

    /// I/O error during path operations
    #[error("I/O error: {message}")]
    IoError { message: String },

    /// Allocation failure
    #[error("Unable to allocate {what}")]
    Memory { what: &'static str },

    /// Internal invariant violated
    #[error("Runtime error: {message}")]
    Runtime { message: String },

    /// An error wrapped with the operation that observed it
    #[error("{message}: {source}")]
    Context {
        message: String,
        #[source]
        source: Box<PathError>,
    },
}

impl PathError {
    /// Returns the domain of the innermost error
    pub fn domain(&self) -> ErrorDomain {
        match self {
            Self::InvalidArgument { .. }
            | Self::ValueExceedsMaximum { .. }
            | Self::UnsupportedCodepage { .. } => ErrorDomain::Argument,
            Self::Conversion { .. } => ErrorDomain::Conversion,
            Self::InvalidPath { .. } => ErrorDomain::Input,
            Self::IoError { .. } => ErrorDomain::Io,
            Self::Memory { .. } => ErrorDomain::Memory,
            Self::Runtime { .. } => ErrorDomain::Runtime,
            Self::Context { source, .. } => source.domain(),
        }
    }

    /// Wraps the error under an outer message, extending the message chain
    pub fn context(self, message: impl Into<String>) -> Self {
        PathError::Context {
            message: message.into(),
            source: Box::new(self),
        }
    }

    pub(crate) fn invalid_argument(name: &'static str, message: impl Into<String>) -> Self {
        PathError::InvalidArgument {
            name,
            message: message.into(),
        }
    }

    pub(crate) fn runtime(message: impl Into<String>) -> Self {
        PathError::Runtime {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for PathError {
    fn from(err: std::io::Error) -> Self {
        PathError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<std::collections::TryReserveError> for PathError {
    fn from(_: std::collections::TryReserveError) -> Self {
        PathError::Memory { what: "buffer" }
    }
}

/// Result type for path operations
pub type Result<T> = std::result::Result<T, PathError>;

/// Largest unit count accepted for any input, the signed-size maximum
pub const MAXIMUM_SIZE: usize = isize::MAX as usize;

/// Rejects empty inputs and lengths above [`MAXIMUM_SIZE`]
pub(crate) fn check_length(name: &'static str, length: usize) -> Result<()> {
    if length == 0 {
        return Err(PathError::invalid_argument(name, "length is zero"));
    }
    if length > MAXIMUM_SIZE {
        return Err(PathError::ValueExceedsMaximum {
            name,
            value: length,
        });
    }
    Ok(())
}

/// Allocates an empty vector with exactly `capacity` units reserved
pub(crate) fn allocate<T>(capacity: usize, what: &'static str) -> Result<Vec<T>> {
    let mut units = Vec::new();
    units
        .try_reserve_exact(capacity)
        .map_err(|_| PathError::Memory { what })?;
    Ok(units)
}
