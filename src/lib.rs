//! # crosspath
//!
//! Cross-platform path primitives: full-path resolution, joining, working
//! directory access, Windows volume parsing and filename sanitization.
//!
//! Every operation works on explicit-length slices of path units and is
//! generic over the unit width: `u8` for narrow paths and, with the `wide`
//! feature (on by default), `u16` for wide paths. Producing operations
//! return a [`PathBuffer`] whose [`size`](PathBuffer::size) counts the
//! terminator.
//!
//! ## Features
//!
//! - **Full paths**: `.` and `..` collapsing against the working directory,
//!   drive, UNC and extended-length handling for Windows-style paths
//! - **Sanitization**: reversible escaping of control characters, `!`,
//!   separators and the escape character itself
//! - **Path style as data**: POSIX and Windows conventions are both
//!   available on every host through [`PathStyle`]
//! - **No global state**: the conversion code page lives in a
//!   [`PathContext`] owned by the caller
//!
//! ## Examples
//!
//! ### Resolving and joining
//!
//! ```rust
//! use crosspath::{get_full_path, join, PathContext, PathStyle};
//!
//! let context = PathContext::default().with_style(PathStyle::Posix);
//!
//! let full = get_full_path(b"/usr/./local/../bin", &context).unwrap();
//! assert_eq!(full.as_units(), b"/usr/bin");
//!
//! let joined = join(b"/first/second/", b"/third", PathStyle::Posix).unwrap();
//! assert_eq!(joined.as_units(), b"/first/second/third");
//! ```
//!
//! ### Windows volumes on any host
//!
//! ```rust
//! use crosspath::{get_volume_name, PathStyle, PathType};
//!
//! let volume = get_volume_name(b"C:\\Windows\\System32", PathStyle::Windows).unwrap();
//! assert_eq!(volume.volume, b"C:");
//! assert_eq!(volume.path_type, PathType::AbsoluteWithVolume);
//! ```
//!
//! ### Sanitizing names
//!
//! ```rust
//! use crosspath::{sanitize_filename, PathStyle};
//!
//! let name = sanitize_filename(b"t\x00sT!.t\\t", PathStyle::Posix).unwrap();
//! assert_eq!(name.as_units(), b"t\\x00sT\\x21.t\\\\t");
//! assert_eq!(name.size(), 17);
//! ```

mod buffer;
mod character;
mod codepage;
mod cwd;
mod error;
mod full_path;
mod join;
mod sanitize;
mod split;
mod style;
mod volume;

// Generators module for property testing (available in tests)
#[cfg(test)]
pub mod generators;

// Re-export main public API
pub use buffer::PathBuffer;
pub use character::PathChar;
pub use codepage::{Codepage, PathContext};
pub use cwd::{
    change_directory, change_directory_with, current_working_directory,
    current_working_directory_by_volume, make_directory, OsWorkingDirectory, WorkingDirectory,
};
pub use error::{ErrorDomain, PathError, Result, MAXIMUM_SIZE};
pub use full_path::{get_full_path, get_full_path_with};
pub use join::join;
pub use sanitize::{
    escape_character, sanitize_filename, sanitize_path, sanitized_character_size, SanitizeMode,
};
pub use split::SplitString;
pub use style::PathStyle;
pub use volume::{get_volume_name, PathType, VolumeName};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn get_version() -> &'static str {
    VERSION
}
