//! Character units shared by the narrow and wide forms of every operation

use crate::codepage::Codepage;
use crate::error::Result;
use std::fmt::Debug;

/// A single path character unit.
///
/// Implemented for `u8` (narrow) and, with the `wide` feature, `u16` (wide).
/// Every operation in this crate is generic over this trait so both forms
/// share one implementation and one contract.
pub trait PathChar: Copy + Eq + Ord + Debug + Default + 'static {
    /// The terminator unit
    const NUL: Self;

    /// Widens an ASCII byte to this unit type
    fn from_ascii(byte: u8) -> Self;

    /// The numeric value of the unit
    fn value(self) -> u32;

    /// Converts narrow units in `codepage` into units of this width
    fn from_narrow(codepage: Codepage, narrow: &[u8]) -> Result<Vec<Self>>;

    /// Converts units of this width into narrow units in `codepage`
    fn to_narrow(codepage: Codepage, units: &[Self]) -> Result<Vec<u8>>;

    /// True for `A`-`Z` and `a`-`z`
    fn is_ascii_letter(self) -> bool {
        self.value() < 0x80 && u8::is_ascii_alphabetic(&(self.value() as u8))
    }

    /// Uppercases ASCII letters, leaving every other unit unchanged
    fn ascii_uppercase(self) -> Self {
        if self.value() < 0x80 {
            Self::from_ascii(u8::to_ascii_uppercase(&(self.value() as u8)))
        } else {
            self
        }
    }

    /// True when the unit equals the ASCII byte
    fn is(self, byte: u8) -> bool {
        self.value() == u32::from(byte)
    }
}

impl PathChar for u8 {
    const NUL: Self = 0;

    fn from_ascii(byte: u8) -> Self {
        byte
    }

    fn value(self) -> u32 {
        u32::from(self)
    }

    fn from_narrow(_codepage: Codepage, narrow: &[u8]) -> Result<Vec<Self>> {
        Ok(narrow.to_vec())
    }

    fn to_narrow(_codepage: Codepage, units: &[Self]) -> Result<Vec<u8>> {
        Ok(units.to_vec())
    }
}

#[cfg(feature = "wide")]
impl PathChar for u16 {
    const NUL: Self = 0;

    fn from_ascii(byte: u8) -> Self {
        u16::from(byte)
    }

    fn value(self) -> u32 {
        u32::from(self)
    }

    fn from_narrow(codepage: Codepage, narrow: &[u8]) -> Result<Vec<Self>> {
        codepage.copy_to_wide(narrow)
    }

    fn to_narrow(codepage: Codepage, units: &[Self]) -> Result<Vec<u8>> {
        codepage.copy_to_narrow(units)
    }
}

/// Widens an ASCII string into units of type `C`
pub(crate) fn ascii_units<C: PathChar>(text: &str) -> Vec<C> {
    text.bytes().map(C::from_ascii).collect()
}
