//! Volume parsing and path-type classification
//!
//! A Windows-style path may start with a drive (`C:`), a UNC share
//! (`\\server\share`), a device namespace prefix (`\\.\`) or an extended-length
//! prefix (`\\?\`, `\\?\UNC\`). [`get_volume_name`] splits that leading
//! volume from the directory remainder and tags the path with a [`PathType`]
//! the resolver matches on. Under [`PathStyle::Posix`] the parser is inert
//! and only distinguishes absolute from relative paths.

use crate::character::PathChar;
use crate::error::{check_length, PathError, Result};
use crate::style::PathStyle;

/// The shape of a path, decided once before resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathType {
    /// `dir\file`
    Relative,
    /// `C:dir\file`, relative to the working directory of drive C
    DriveRelative,
    /// `\dir\file`, rooted on the volume of the working directory
    AbsoluteNoVolume,
    /// `C:\dir\file`
    AbsoluteWithVolume,
    /// `\\server\share\dir\file`
    Unc,
    /// `\\.\device\...`
    Device,
    /// `\\?\...`, already extended-length
    Extended,
}

impl PathType {
    pub fn is_absolute(self) -> bool {
        !matches!(self, PathType::Relative | PathType::DriveRelative)
    }
}

/// The result of splitting a path into volume and directory remainder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeName<'a, C: PathChar> {
    /// View of the volume: `C:`, `server\share`, or a device prefix. Empty
    /// when the path has no volume.
    pub volume: &'a [C],
    /// Index in the original path where the directory remainder starts
    pub directory_name_index: usize,
    pub path_type: PathType,
    share: bool,
}

impl<C: PathChar> VolumeName<'_, C> {
    /// True when the volume is a drive letter and colon
    pub fn is_drive(&self) -> bool {
        is_drive(self.volume)
    }

    /// True when the volume is a `server\share` pair, either plain UNC or
    /// behind the extended `UNC` prefix
    pub fn is_share(&self) -> bool {
        self.share
    }
}

fn is_drive<C: PathChar>(units: &[C]) -> bool {
    units.len() == 2 && units[0].is_ascii_letter() && units[1].is(b':')
}

fn find_separator<C: PathChar>(path: &[C], from: usize, style: PathStyle) -> Option<usize> {
    path[from..]
        .iter()
        .position(|unit| style.is_separator(*unit))
        .map(|offset| from + offset)
}

/// Index after a separator at `index`, if there is one
fn skip_separator<C: PathChar>(path: &[C], index: usize, style: PathStyle) -> usize {
    if index < path.len() && style.is_separator(path[index]) {
        index + 1
    } else {
        index
    }
}

/// Parses `server\share` starting at `start`.
///
/// Returns the end of the share name.
fn parse_share<C: PathChar>(path: &[C], start: usize, style: PathStyle) -> Result<usize> {
    let server_end = find_separator(path, start, style).unwrap_or(path.len());
    if server_end == start {
        return Err(invalid_volume(path, "missing UNC server name"));
    }
    if server_end == path.len() {
        return Err(invalid_volume(path, "missing UNC share name"));
    }
    let share_start = server_end + 1;
    let share_end = find_separator(path, share_start, style).unwrap_or(path.len());
    if share_end == share_start {
        return Err(invalid_volume(path, "missing UNC share name"));
    }
    Ok(share_end)
}

fn invalid_volume<C: PathChar>(path: &[C], message: &str) -> PathError {
    let text: String = path
        .iter()
        .map(|u| char::from_u32(u.value()).unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect();
    PathError::InvalidPath {
        path: text,
        message: message.to_string(),
    }
}

fn starts_with_ascii<C: PathChar>(path: &[C], start: usize, text: &[u8]) -> bool {
    path.len() >= start + text.len()
        && path[start..start + text.len()]
            .iter()
            .zip(text)
            .all(|(unit, byte)| unit.ascii_uppercase().is(*byte))
}

/// Splits `path` into its volume and directory remainder.
///
/// # Examples
/// ```
/// use crosspath::{get_volume_name, PathStyle, PathType};
///
/// let volume = get_volume_name(b"\\\\server\\share\\dir", PathStyle::Windows).unwrap();
/// assert_eq!(volume.volume, b"server\\share");
/// assert_eq!(volume.directory_name_index, 15);
/// assert_eq!(volume.path_type, PathType::Unc);
/// ```
pub fn get_volume_name<C: PathChar>(path: &[C], style: PathStyle) -> Result<VolumeName<'_, C>> {
    check_length("path", path.len())?;

    if !style.has_volumes() {
        let path_type = if style.is_separator(path[0]) {
            PathType::AbsoluteNoVolume
        } else {
            PathType::Relative
        };
        return Ok(VolumeName {
            volume: &path[..0],
            directory_name_index: skip_separator(path, 0, style),
            path_type,
            share: false,
        });
    }

    let length = path.len();
    let leading_pair = length >= 2 && style.is_separator(path[0]) && style.is_separator(path[1]);

    // \\?\ and \\.\ prefixes
    if leading_pair
        && length >= 4
        && (path[2].is(b'?') || path[2].is(b'.'))
        && style.is_separator(path[3])
    {
        let path_type = if path[2].is(b'?') {
            PathType::Extended
        } else {
            PathType::Device
        };

        if path_type == PathType::Extended
            && starts_with_ascii(path, 4, b"UNC")
            && length > 7
            && style.is_separator(path[7])
        {
            let share_end = parse_share(path, 8, style)?;
            return Ok(VolumeName {
                volume: &path[8..share_end],
                directory_name_index: skip_separator(path, share_end, style),
                path_type,
                share: true,
            });
        }
        if length >= 6 && is_drive(&path[4..6]) {
            return Ok(VolumeName {
                volume: &path[4..6],
                directory_name_index: skip_separator(path, 6, style),
                path_type,
                share: false,
            });
        }
        let volume_end = find_separator(path, 4, style).unwrap_or(length);
        return Ok(VolumeName {
            volume: &path[..volume_end],
            directory_name_index: skip_separator(path, volume_end, style),
            path_type,
            share: false,
        });
    }

    if leading_pair {
        let share_end = parse_share(path, 2, style)?;
        return Ok(VolumeName {
            volume: &path[2..share_end],
            directory_name_index: skip_separator(path, share_end, style),
            path_type: PathType::Unc,
            share: true,
        });
    }

    if length >= 2 && is_drive(&path[..2]) {
        let path_type = if length > 2 && style.is_separator(path[2]) {
            PathType::AbsoluteWithVolume
        } else {
            PathType::DriveRelative
        };
        return Ok(VolumeName {
            volume: &path[..2],
            directory_name_index: skip_separator(path, 2, style),
            path_type,
            share: false,
        });
    }

    let path_type = if style.is_separator(path[0]) {
        PathType::AbsoluteNoVolume
    } else {
        PathType::Relative
    };
    Ok(VolumeName {
        volume: &path[..0],
        directory_name_index: skip_separator(path, 0, style),
        path_type,
        share: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(path: &str) -> VolumeName<'_, u8> {
        get_volume_name(path.as_bytes(), PathStyle::Windows).unwrap()
    }

    #[test]
    fn test_drive_paths() {
        let volume = parse("C:\\Windows\\System32");
        assert_eq!(volume.volume, b"C:");
        assert_eq!(volume.directory_name_index, 3);
        assert_eq!(volume.path_type, PathType::AbsoluteWithVolume);
        assert!(volume.is_drive());

        let volume = parse("d:/data");
        assert_eq!(volume.volume, b"d:");
        assert_eq!(volume.path_type, PathType::AbsoluteWithVolume);

        let volume = parse("C:file.txt");
        assert_eq!(volume.volume, b"C:");
        assert_eq!(volume.directory_name_index, 2);
        assert_eq!(volume.path_type, PathType::DriveRelative);

        let volume = parse("C:");
        assert_eq!(volume.directory_name_index, 2);
        assert_eq!(volume.path_type, PathType::DriveRelative);
    }

    #[test]
    fn test_unc_paths() {
        let volume = parse("\\\\server\\share\\dir\\file");
        assert_eq!(volume.volume, b"server\\share");
        assert_eq!(volume.directory_name_index, 15);
        assert_eq!(volume.path_type, PathType::Unc);
        assert!(volume.is_share());

        let volume = parse("\\\\server\\share");
        assert_eq!(volume.directory_name_index, 14);

        assert!(matches!(
            get_volume_name(b"\\\\server", PathStyle::Windows),
            Err(PathError::InvalidPath { .. })
        ));
        assert!(get_volume_name(b"\\\\\\share", PathStyle::Windows).is_err());
        assert!(get_volume_name(b"\\\\server\\", PathStyle::Windows).is_err());
    }

    #[test]
    fn test_extended_paths() {
        let volume = parse("\\\\?\\C:\\dir");
        assert_eq!(volume.volume, b"C:");
        assert_eq!(volume.directory_name_index, 7);
        assert_eq!(volume.path_type, PathType::Extended);
        assert!(volume.is_drive());

        let volume = parse("\\\\?\\UNC\\server\\share\\dir");
        assert_eq!(volume.volume, b"server\\share");
        assert_eq!(volume.directory_name_index, 21);
        assert_eq!(volume.path_type, PathType::Extended);
        assert!(volume.is_share());

        let volume = parse("\\\\?\\unc\\server\\share");
        assert_eq!(volume.volume, b"server\\share");

        let volume = parse("\\\\?\\Volume{1234}\\dir");
        assert_eq!(volume.volume, b"\\\\?\\Volume{1234}");
        assert_eq!(volume.directory_name_index, 17);
        assert!(!volume.is_share());

        assert!(get_volume_name(b"\\\\?\\UNC\\server", PathStyle::Windows).is_err());
    }

    #[test]
    fn test_forward_slash_extended_volume_is_not_a_share() {
        let volume = parse("//?/Volume{1234}/dir");
        assert_eq!(volume.path_type, PathType::Extended);
        assert_eq!(volume.volume, b"//?/Volume{1234}");
        assert!(!volume.is_share());
        assert!(!volume.is_drive());

        let volume = parse("//?/UNC/server/share/dir");
        assert_eq!(volume.volume, b"server/share");
        assert!(volume.is_share());

        let volume = parse("//./pipe/name");
        assert_eq!(volume.path_type, PathType::Device);
        assert!(!volume.is_share());
    }

    #[test]
    fn test_device_paths() {
        let volume = parse("\\\\.\\PhysicalDrive0");
        assert_eq!(volume.volume, b"\\\\.\\PhysicalDrive0");
        assert_eq!(volume.directory_name_index, 18);
        assert_eq!(volume.path_type, PathType::Device);

        let volume = parse("\\\\.\\C:\\dir");
        assert_eq!(volume.volume, b"C:");
        assert_eq!(volume.path_type, PathType::Device);
    }

    #[test]
    fn test_paths_without_volume() {
        let volume = parse("\\dir\\file");
        assert!(volume.volume.is_empty());
        assert_eq!(volume.directory_name_index, 1);
        assert_eq!(volume.path_type, PathType::AbsoluteNoVolume);

        let volume = parse("dir\\file");
        assert_eq!(volume.directory_name_index, 0);
        assert_eq!(volume.path_type, PathType::Relative);
        assert!(!volume.path_type.is_absolute());

        let volume = parse("1:\\dir");
        assert_eq!(volume.path_type, PathType::Relative);
    }

    #[test]
    fn test_posix_style_is_inert() {
        let volume = get_volume_name(b"C:\\dir", PathStyle::Posix).unwrap();
        assert!(volume.volume.is_empty());
        assert_eq!(volume.path_type, PathType::Relative);

        let volume = get_volume_name(b"//server/share", PathStyle::Posix).unwrap();
        assert_eq!(volume.path_type, PathType::AbsoluteNoVolume);
        assert_eq!(volume.directory_name_index, 1);
    }

    #[test]
    fn test_rejects_empty_path() {
        assert!(matches!(
            get_volume_name::<u8>(b"", PathStyle::Windows),
            Err(PathError::InvalidArgument { .. })
        ));
    }

    #[cfg(feature = "wide")]
    #[test]
    fn test_wide_volume() {
        let path: Vec<u16> = "\\\\srv\\\u{6587}\\x".encode_utf16().collect();
        let volume = get_volume_name(&path, PathStyle::Windows).unwrap();
        assert_eq!(volume.path_type, PathType::Unc);
        assert_eq!(volume.volume, &path[2..7]);
    }
}
