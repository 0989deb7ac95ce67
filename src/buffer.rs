//! Owned, terminated path buffers returned by every producing operation

use crate::character::PathChar;
use crate::error::{PathError, Result};
use std::fmt;

/// An owned sequence of path units followed by one terminator unit.
///
/// [`size`](PathBuffer::size) counts the terminator, matching the sizes
/// reported by the resolver, join and the sanitizers.
/// [`as_units`](PathBuffer::as_units) excludes it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PathBuffer<C: PathChar> {
    units: Vec<C>,
}

impl<C: PathChar> PathBuffer<C> {
    /// Takes ownership of a terminated vector.
    ///
    /// Fails when the last unit is not the terminator.
    pub(crate) fn from_terminated(units: Vec<C>) -> Result<Self> {
        if units.last() != Some(&C::NUL) {
            return Err(PathError::runtime("path buffer is missing its terminator"));
        }
        Ok(Self { units })
    }

    /// Copies `units` into a new buffer sized exactly to fit them and the
    /// terminator.
    pub(crate) fn copy_from(units: &[C]) -> Result<Self> {
        let mut buffer = crate::error::allocate(units.len() + 1, "path buffer")?;
        buffer.extend_from_slice(units);
        buffer.push(C::NUL);
        Ok(Self { units: buffer })
    }

    /// Units including the terminator
    pub fn size(&self) -> usize {
        self.units.len()
    }

    /// Units excluding the terminator
    pub fn len(&self) -> usize {
        self.units.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The path units without the terminator
    pub fn as_units(&self) -> &[C] {
        &self.units[..self.len()]
    }

    /// The path units including the terminator
    pub fn as_units_with_nul(&self) -> &[C] {
        &self.units
    }

    /// Consumes the buffer, returning the units without the terminator
    pub fn into_units(mut self) -> Vec<C> {
        self.units.pop();
        self.units
    }
}

impl PathBuffer<u8> {
    /// The path as UTF-8, if it is valid UTF-8
    pub fn to_str(&self) -> Result<&str> {
        std::str::from_utf8(self.as_units()).map_err(|e| PathError::Conversion {
            message: format!("invalid UTF-8 at offset {}", e.valid_up_to()),
        })
    }

    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(self.as_units()).into_owned()
    }
}

#[cfg(feature = "wide")]
impl PathBuffer<u16> {
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(self.as_units())
    }
}

impl<C: PathChar> fmt::Debug for PathBuffer<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self
            .as_units()
            .iter()
            .map(|u| char::from_u32(u.value()).unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect();
        f.debug_struct("PathBuffer")
            .field("path", &text)
            .field("size", &self.size())
            .finish()
    }
}

impl fmt::Display for PathBuffer<u8> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}
