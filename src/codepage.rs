//! Narrow/wide conversion and the conversion context
//!
//! There is no process-wide code page: callers build a [`PathContext`] once
//! and pass it by reference. A context shared between threads is read-only,
//! so changing the code page requires exclusive access to the context.

use crate::error::{allocate, PathError, Result};
use crate::style::PathStyle;

/// Narrow character encodings supported for narrow/wide conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Codepage {
    /// 7-bit US-ASCII (20127)
    Ascii,
    /// ISO 8859-1 / Latin-1 (28591)
    Iso8859_1,
    /// UTF-8 (65001)
    Utf8,
}

impl Codepage {
    /// The Windows code page identifier
    pub const fn id(self) -> i32 {
        match self {
            Codepage::Ascii => 20127,
            Codepage::Iso8859_1 => 28591,
            Codepage::Utf8 => 65001,
        }
    }

    /// Number of wide units needed for `narrow`
    pub fn size_to_wide(self, narrow: &[u8]) -> Result<usize> {
        match self {
            Codepage::Ascii => {
                if let Some(position) = narrow.iter().position(|b| *b > 0x7f) {
                    return Err(unrepresentable(self, position));
                }
                Ok(narrow.len())
            }
            Codepage::Iso8859_1 => Ok(narrow.len()),
            Codepage::Utf8 => Ok(decode_utf8(narrow)?.encode_utf16().count()),
        }
    }

    /// Converts narrow units into wide units
    pub fn copy_to_wide(self, narrow: &[u8]) -> Result<Vec<u16>> {
        let size = self.size_to_wide(narrow)?;
        let mut wide = allocate(size, "wide string")?;
        match self {
            Codepage::Ascii | Codepage::Iso8859_1 => wide.extend(narrow.iter().map(|b| u16::from(*b))),
            Codepage::Utf8 => wide.extend(decode_utf8(narrow)?.encode_utf16()),
        }
        Ok(wide)
    }

    /// Number of narrow units needed for `wide`
    pub fn size_to_narrow(self, wide: &[u16]) -> Result<usize> {
        match self {
            Codepage::Ascii | Codepage::Iso8859_1 => {
                let limit = if self == Codepage::Ascii { 0x7f } else { 0xff };
                if let Some(position) = wide.iter().position(|u| *u > limit) {
                    return Err(unrepresentable(self, position));
                }
                Ok(wide.len())
            }
            Codepage::Utf8 => {
                let mut size = 0usize;
                for decoded in char::decode_utf16(wide.iter().copied()) {
                    let c = decoded.map_err(|e| PathError::Conversion {
                        message: format!("unpaired surrogate 0x{:04x}", e.unpaired_surrogate()),
                    })?;
                    size += c.len_utf8();
                }
                Ok(size)
            }
        }
    }

    /// Converts wide units into narrow units
    pub fn copy_to_narrow(self, wide: &[u16]) -> Result<Vec<u8>> {
        let size = self.size_to_narrow(wide)?;
        let mut narrow = allocate(size, "narrow string")?;
        match self {
            Codepage::Ascii | Codepage::Iso8859_1 => narrow.extend(wide.iter().map(|u| *u as u8)),
            Codepage::Utf8 => {
                let mut encoded = [0u8; 4];
                for c in char::decode_utf16(wide.iter().copied()).flatten() {
                    narrow.extend_from_slice(c.encode_utf8(&mut encoded).as_bytes());
                }
            }
        }
        if narrow.len() != size {
            return Err(PathError::runtime("narrow string size mismatch"));
        }
        Ok(narrow)
    }
}

impl TryFrom<i32> for Codepage {
    type Error = PathError;

    fn try_from(id: i32) -> Result<Self> {
        match id {
            20127 => Ok(Codepage::Ascii),
            28591 => Ok(Codepage::Iso8859_1),
            65001 => Ok(Codepage::Utf8),
            _ => Err(PathError::UnsupportedCodepage { codepage: id }),
        }
    }
}

impl Default for Codepage {
    fn default() -> Self {
        Codepage::Utf8
    }
}

fn decode_utf8(narrow: &[u8]) -> Result<&str> {
    std::str::from_utf8(narrow).map_err(|e| PathError::Conversion {
        message: format!("invalid UTF-8 at offset {}", e.valid_up_to()),
    })
}

fn unrepresentable(codepage: Codepage, position: usize) -> PathError {
    PathError::Conversion {
        message: format!(
            "unit at offset {} is not representable in codepage {}",
            position,
            codepage.id()
        ),
    }
}

/// Settings consulted by path operations: the conversion code page and the
/// path convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PathContext {
    codepage: Codepage,
    style: PathStyle,
}

impl PathContext {
    /// A context with the native style and the given code page
    pub fn new(codepage: Codepage) -> Self {
        Self {
            codepage,
            style: PathStyle::native(),
        }
    }

    /// Replaces the path style
    pub fn with_style(mut self, style: PathStyle) -> Self {
        self.style = style;
        self
    }

    pub fn codepage(&self) -> Codepage {
        self.codepage
    }

    pub fn style(&self) -> PathStyle {
        self.style
    }

    /// Returns the code page identifier
    pub fn get_codepage(&self) -> i32 {
        self.codepage.id()
    }

    /// Selects the code page by identifier.
    ///
    /// Fails on negative or unsupported identifiers and leaves the current
    /// code page unchanged.
    pub fn set_codepage(&mut self, codepage: i32) -> Result<()> {
        if codepage < 0 {
            return Err(PathError::invalid_argument(
                "codepage",
                "value less than zero",
            ));
        }
        self.codepage = Codepage::try_from(codepage)?;
        Ok(())
    }
}
