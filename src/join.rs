//! Joining path fragments

use crate::buffer::PathBuffer;
use crate::character::PathChar;
use crate::error::{allocate, check_length, Result};
use crate::style::PathStyle;

pub(crate) fn trim_end_separators<C: PathChar>(path: &[C], style: PathStyle) -> &[C] {
    let end = path
        .iter()
        .rposition(|unit| !style.is_separator(*unit))
        .map_or(0, |index| index + 1);
    &path[..end]
}

pub(crate) fn trim_start_separators<C: PathChar>(path: &[C], style: PathStyle) -> &[C] {
    let start = path
        .iter()
        .position(|unit| !style.is_separator(*unit))
        .unwrap_or(path.len());
    &path[start..]
}

/// Joins two fragments with exactly one separator between them.
///
/// Trailing separators of `first` and leading separators of `second` are
/// dropped before the style's separator is inserted. This is a pure string
/// operation and never touches the filesystem.
///
/// # Examples
/// ```
/// use crosspath::{join, PathStyle};
///
/// let joined = join(b"/first/second/", b"/third/fourth", PathStyle::Posix).unwrap();
/// assert_eq!(joined.as_units(), b"/first/second/third/fourth");
/// assert_eq!(joined.size(), 27);
/// ```
pub fn join<C: PathChar>(first: &[C], second: &[C], style: PathStyle) -> Result<PathBuffer<C>> {
    check_length("first", first.len())?;
    check_length("second", second.len())?;

    let head = trim_end_separators(first, style);
    let tail = trim_start_separators(second, style);

    let size = head.len() + 1 + tail.len() + 1;
    let mut joined = allocate(size, "joined path")?;
    joined.extend_from_slice(head);
    joined.push(style.separator());
    joined.extend_from_slice(tail);
    joined.push(C::NUL);

    PathBuffer::from_terminated(joined)
}
