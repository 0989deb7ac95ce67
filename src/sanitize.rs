//! Filename and path sanitization
//!
//! Every unit that cannot safely appear in a name is replaced by a
//! fixed-width escape: the escape character doubled, or `<escape>xHH`.
//! Sanitizing runs in two passes. The first sums
//! [`sanitized_character_size`] over the input, the buffer is allocated once
//! at that size, and the second pass fills it with [`escape_character`].
//! Both passes read the same escape table, so sizing and filling agree.

use crate::buffer::PathBuffer;
use crate::character::PathChar;
use crate::error::{allocate, check_length, PathError, Result, MAXIMUM_SIZE};
use crate::style::PathStyle;

/// Which units are exempt from escaping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SanitizeMode {
    /// A single name: separators are escaped
    Filename,
    /// A full path: separators are kept
    Path,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EscapedForm {
    Literal,
    Doubled,
    Hex,
}

impl EscapedForm {
    const fn units(self) -> usize {
        match self {
            EscapedForm::Literal => 1,
            EscapedForm::Doubled => 2,
            EscapedForm::Hex => 4,
        }
    }
}

fn escaped_form<C: PathChar>(unit: C, style: PathStyle, mode: SanitizeMode) -> EscapedForm {
    let value = unit.value();

    if unit == style.escape::<C>() {
        EscapedForm::Doubled
    } else if value <= 0x1f || value == 0x7f || unit.is(b'!') {
        EscapedForm::Hex
    } else if mode == SanitizeMode::Filename && style.is_separator(unit) {
        EscapedForm::Hex
    } else {
        EscapedForm::Literal
    }
}

/// Number of output units `unit` needs once sanitized
pub fn sanitized_character_size<C: PathChar>(
    unit: C,
    style: PathStyle,
    mode: SanitizeMode,
) -> usize {
    escaped_form(unit, style, mode).units()
}

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Writes the sanitized form of `unit` at `*index` and advances the index.
///
/// `units` is the size previously returned by [`sanitized_character_size`].
/// Nothing is written and `*index` is left unchanged on failure.
pub fn escape_character<C: PathChar>(
    unit: C,
    units: usize,
    style: PathStyle,
    destination: &mut [C],
    index: &mut usize,
) -> Result<()> {
    if destination.len() > MAXIMUM_SIZE {
        return Err(PathError::ValueExceedsMaximum {
            name: "destination size",
            value: destination.len(),
        });
    }
    let end = index
        .checked_add(units)
        .filter(|end| *end <= destination.len())
        .ok_or_else(|| {
            PathError::invalid_argument("destination", "index value out of bounds")
        })?;
    let slot = &mut destination[*index..end];

    match units {
        1 => slot[0] = unit,
        2 => {
            slot[0] = style.escape();
            slot[1] = unit;
        }
        4 => {
            let value = unit.value();
            if value > 0xff {
                return Err(PathError::invalid_argument(
                    "character",
                    format!("value 0x{value:x} has no hexadecimal escape"),
                ));
            }
            slot[0] = style.escape();
            slot[1] = C::from_ascii(b'x');
            slot[2] = C::from_ascii(HEX_DIGITS[(value >> 4) as usize]);
            slot[3] = C::from_ascii(HEX_DIGITS[(value & 0x0f) as usize]);
        }
        _ => {
            return Err(PathError::invalid_argument(
                "units",
                format!("unsupported escaped size {units}"),
            ))
        }
    }
    *index = end;
    Ok(())
}

fn sanitize<C: PathChar>(input: &[C], style: PathStyle, mode: SanitizeMode) -> Result<PathBuffer<C>> {
    check_length("input", input.len())?;

    let mut total = 0usize;
    for unit in input {
        total = total
            .checked_add(sanitized_character_size(*unit, style, mode))
            .filter(|total| *total < MAXIMUM_SIZE)
            .ok_or(PathError::ValueExceedsMaximum {
                name: "sanitized size",
                value: total,
            })?;
    }

    let mut output = allocate(total + 1, "sanitized string")?;
    output.resize(total + 1, C::NUL);

    let mut index = 0usize;
    for unit in input {
        let units = sanitized_character_size(*unit, style, mode);
        escape_character(*unit, units, style, &mut output[..total], &mut index)?;
    }
    if index != total {
        return Err(PathError::runtime(format!(
            "sanitized size mismatch: computed {total} filled {index}"
        )));
    }
    log::trace!("sanitized {} units into {}", input.len(), total);

    PathBuffer::from_terminated(output)
}

/// Sanitizes a single name. Separators are escaped along with everything else.
///
/// # Examples
/// ```
/// use crosspath::{sanitize_filename, PathStyle};
///
/// let name = sanitize_filename(b"a/b!", PathStyle::Posix).unwrap();
/// assert_eq!(name.as_units(), b"a\\x2fb\\x21");
/// assert_eq!(name.size(), 11);
/// ```
pub fn sanitize_filename<C: PathChar>(input: &[C], style: PathStyle) -> Result<PathBuffer<C>> {
    sanitize(input, style, SanitizeMode::Filename)
}

/// Sanitizes a path, keeping its separators so the directory structure survives.
///
/// # Examples
/// ```
/// use crosspath::{sanitize_path, PathStyle};
///
/// let path = sanitize_path(b"dir/na!me", PathStyle::Posix).unwrap();
/// assert_eq!(path.as_units(), b"dir/na\\x21me");
/// ```
pub fn sanitize_path<C: PathChar>(input: &[C], style: PathStyle) -> Result<PathBuffer<C>> {
    sanitize(input, style, SanitizeMode::Path)
}
