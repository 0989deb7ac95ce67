//! Full-path resolution
//!
//! A path is resolved in four steps: classify it with [`get_volume_name`],
//! pick a root and base directory (from the path itself or from the working
//! directory), split base plus remainder into segments, and collapse `.` and
//! `..` before reassembling. Windows roots are emitted in extended-length
//! form (`\\?\C:\`, `\\?\UNC\server\share\`); extended and device paths are
//! returned as given because `.` and `..` carry no meaning there.

use crate::buffer::PathBuffer;
use crate::character::{ascii_units, PathChar};
use crate::codepage::PathContext;
use crate::cwd::{query_current, query_volume, OsWorkingDirectory, WorkingDirectory};
use crate::error::{allocate, check_length, PathError, Result};
use crate::join::{trim_end_separators, trim_start_separators};
use crate::split::SplitString;
use crate::style::PathStyle;
use crate::volume::{get_volume_name, PathType, VolumeName};

const EXTENDED_PREFIX: &str = "\\\\?\\";
const EXTENDED_UNC_PREFIX: &str = "\\\\?\\UNC\\";

/// Resolves `path` to an absolute, normalized path against the process
/// working directory.
///
/// The returned size includes the terminator. The working directory is read
/// once; a later change does not affect the returned path.
///
/// # Examples
/// ```
/// use crosspath::{get_full_path, PathContext, PathStyle};
///
/// let context = PathContext::default().with_style(PathStyle::Posix);
/// let full = get_full_path(b"/../home/username/../user/test.txt", &context).unwrap();
/// assert_eq!(full.as_units(), b"/home/user/test.txt");
/// assert_eq!(full.size(), 20);
/// ```
pub fn get_full_path<C: PathChar>(path: &[C], context: &PathContext) -> Result<PathBuffer<C>> {
    get_full_path_with(path, context, &OsWorkingDirectory)
}

/// Resolves `path` against the working directories reported by `source`
pub fn get_full_path_with<C: PathChar>(
    path: &[C],
    context: &PathContext,
    source: &dyn WorkingDirectory,
) -> Result<PathBuffer<C>> {
    check_length("path", path.len())?;

    let style = context.style();
    let volume = get_volume_name(path, style)?;
    let remainder = &path[volume.directory_name_index..];

    let (root, base) = match volume.path_type {
        PathType::Extended | PathType::Device => {
            log::trace!("keeping {:?} path verbatim", volume.path_type);
            return PathBuffer::copy_from(path);
        }
        PathType::AbsoluteWithVolume | PathType::Unc => (volume_root(&volume, style)?, Vec::new()),
        PathType::DriveRelative => {
            let directory = query_volume(source, volume.volume, context)
                .map_err(|e| e.context("Unable to retrieve current working directory of volume"))?;
            split_directory(directory, style)?
        }
        PathType::AbsoluteNoVolume => {
            if style.has_volumes() {
                let directory = query_current(source, context)?;
                let (root, _) = split_directory(directory, style)?;
                (root, Vec::new())
            } else {
                (vec![style.separator()], Vec::new())
            }
        }
        PathType::Relative => split_directory(query_current(source, context)?, style)?,
    };

    let combined = concatenate(&base, remainder, style)?;
    let segments = collapse_segments(&combined, style)?;
    let full_path = assemble(&root, &segments, style)?;

    log::trace!(
        "resolved {:?} path of {} units into {} units",
        volume.path_type,
        path.len(),
        full_path.len()
    );
    Ok(full_path)
}

/// The root written for a path that carries its own volume
fn volume_root<C: PathChar>(volume: &VolumeName<'_, C>, style: PathStyle) -> Result<Vec<C>> {
    if !style.has_volumes() {
        return Ok(vec![style.separator()]);
    }
    let separator: C = style.separator();

    let mut root: Vec<C>;
    if volume.is_drive() {
        root = ascii_units(EXTENDED_PREFIX);
        root.push(volume.volume[0].ascii_uppercase());
        root.push(C::from_ascii(b':'));
    } else if volume.is_share() {
        root = ascii_units(EXTENDED_UNC_PREFIX);
        root.extend(volume.volume.iter().map(|unit| {
            if style.is_separator(*unit) {
                separator
            } else {
                *unit
            }
        }));
    } else {
        return Err(PathError::runtime(format!(
            "no root for {:?} volume",
            volume.path_type
        )));
    }
    root.push(separator);
    Ok(root)
}

/// Splits an absolute working directory into its root and directory remainder
fn split_directory<C: PathChar>(directory: Vec<C>, style: PathStyle) -> Result<(Vec<C>, Vec<C>)> {
    let volume = get_volume_name(&directory, style)?;

    let rooted = match volume.path_type {
        PathType::AbsoluteNoVolume => !style.has_volumes(),
        PathType::AbsoluteWithVolume | PathType::Unc => true,
        PathType::Extended => volume.is_drive() || volume.is_share(),
        PathType::Relative | PathType::DriveRelative | PathType::Device => false,
    };
    if !rooted {
        let text: String = directory
            .iter()
            .map(|u| char::from_u32(u.value()).unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect();
        return Err(PathError::InvalidPath {
            path: text,
            message: "working directory is not an absolute path".to_string(),
        });
    }

    let root = volume_root(&volume, style)?;
    let remainder = directory[volume.directory_name_index..].to_vec();
    Ok((root, remainder))
}

/// `base` and `remainder` joined by a single separator, with alternate
/// separators replaced by the style's own
fn concatenate<C: PathChar>(base: &[C], remainder: &[C], style: PathStyle) -> Result<Vec<C>> {
    let head = trim_end_separators(base, style);
    let tail = trim_start_separators(remainder, style);
    let separator: C = style.separator();

    let mut combined = allocate(head.len() + 1 + tail.len(), "combined path")?;
    combined.extend_from_slice(head);
    if !head.is_empty() && !tail.is_empty() {
        combined.push(separator);
    }
    combined.extend_from_slice(tail);

    for unit in combined.iter_mut() {
        if style.is_separator(*unit) {
            *unit = separator;
        }
    }
    Ok(combined)
}

enum Segment {
    Skip,
    Parent,
    Name,
}

fn classify<C: PathChar>(segment: &[C]) -> Segment {
    match segment {
        [] => Segment::Skip,
        [dot] if dot.is(b'.') => Segment::Skip,
        [first, second] if first.is(b'.') && second.is(b'.') => Segment::Parent,
        _ => Segment::Name,
    }
}

/// Removes empty and `.` segments and cancels each `..` against the segment
/// before it. A `..` with nothing left to cancel is dropped.
fn collapse_segments<C: PathChar>(combined: &[C], style: PathStyle) -> Result<SplitString<C>> {
    let mut split = SplitString::new(combined, style.separator())?;
    let mut kept: Vec<usize> = Vec::new();

    for index in 0..split.number_of_segments() {
        let kind = match split.segment(index)? {
            Some(segment) => classify(segment),
            None => return Err(PathError::runtime(format!("missing segment {index}"))),
        };
        match kind {
            Segment::Skip => split.set_segment(index, None)?,
            Segment::Parent => {
                split.set_segment(index, None)?;
                if let Some(previous) = kept.pop() {
                    split.set_segment(previous, None)?;
                }
            }
            Segment::Name => kept.push(index),
        }
    }
    Ok(split)
}

fn assemble<C: PathChar>(
    root: &[C],
    segments: &SplitString<C>,
    style: PathStyle,
) -> Result<PathBuffer<C>> {
    let mut count = 0usize;
    let mut size = root.len() + 1;
    for segment in segments.remaining() {
        size += segment.len();
        count += 1;
    }
    size += count.saturating_sub(1);

    let mut full_path = allocate(size, "full path")?;
    full_path.extend_from_slice(root);
    for (index, segment) in segments.remaining().enumerate() {
        if index > 0 {
            full_path.push(style.separator());
        }
        full_path.extend_from_slice(segment);
    }
    full_path.push(C::NUL);

    if full_path.len() != size {
        return Err(PathError::runtime(format!(
            "full path size mismatch: computed {size} filled {}",
            full_path.len()
        )));
    }
    PathBuffer::from_terminated(full_path)
}
