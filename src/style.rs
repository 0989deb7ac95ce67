//! Path conventions, selected once and passed around as data

use crate::character::PathChar;

/// The path convention an operation follows.
///
/// Resolution, joining, volume parsing and sanitization all branch on this
/// value instead of on compile-time platform checks, so both conventions
/// can be exercised on any host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathStyle {
    /// `/` separated paths rooted at a single `/`
    Posix,
    /// `\` separated paths with drive letters, UNC shares and device prefixes
    Windows,
}

impl PathStyle {
    /// The convention of the host platform
    pub const fn native() -> Self {
        if cfg!(windows) {
            PathStyle::Windows
        } else {
            PathStyle::Posix
        }
    }

    /// The separator written by this style
    pub const fn separator_byte(self) -> u8 {
        match self {
            PathStyle::Posix => b'/',
            PathStyle::Windows => b'\\',
        }
    }

    /// The escape character used by the sanitizer
    pub const fn escape_byte(self) -> u8 {
        match self {
            PathStyle::Posix => b'\\',
            PathStyle::Windows => b'^',
        }
    }

    pub fn separator<C: PathChar>(self) -> C {
        C::from_ascii(self.separator_byte())
    }

    pub fn escape<C: PathChar>(self) -> C {
        C::from_ascii(self.escape_byte())
    }

    /// True for any unit this style accepts as a separator on input.
    ///
    /// Windows accepts `/` as an alternate separator.
    pub fn is_separator<C: PathChar>(self, unit: C) -> bool {
        match self {
            PathStyle::Posix => unit.is(b'/'),
            PathStyle::Windows => unit.is(b'\\') || unit.is(b'/'),
        }
    }

    /// Whether paths in this style can carry a volume (drive, share, device)
    pub const fn has_volumes(self) -> bool {
        matches!(self, PathStyle::Windows)
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self::native()
    }
}

impl std::str::FromStr for PathStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "posix" | "unix" => Ok(PathStyle::Posix),
            "windows" | "win" => Ok(PathStyle::Windows),
            _ => Err(format!("unknown path style: {s}")),
        }
    }
}
