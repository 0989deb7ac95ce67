//! Property test generators for path operations
//!
//! Generators produce normalized paths, paths cluttered with `.`, `..` and
//! repeated separators, Windows volume shapes and arbitrary byte names.

use proptest::prelude::*;

/// Generators for path testing scenarios
pub struct PathGenerators;

impl PathGenerators {
    /// A single segment that is never `.` or `..`
    pub fn segment() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_][a-zA-Z0-9_.-]{0,15}"
            .prop_filter("Not a dot segment", |s| s != "." && s != "..")
    }

    /// An absolute, already normalized POSIX path
    pub fn normalized_posix_path() -> impl Strategy<Value = String> {
        prop::collection::vec(Self::segment(), 0..=6)
            .prop_map(|segments| format!("/{}", segments.join("/")))
    }

    /// A relative POSIX path without dot segments
    pub fn relative_posix_path() -> impl Strategy<Value = String> {
        prop::collection::vec(Self::segment(), 1..=5).prop_map(|segments| segments.join("/"))
    }

    /// An absolute POSIX path with `.` segments and doubled separators inserted
    pub fn cluttered_posix_path() -> impl Strategy<Value = (String, String)> {
        prop::collection::vec((Self::segment(), 0..3usize), 0..=6).prop_map(|parts| {
            let mut cluttered = String::new();
            let mut normalized = String::new();
            for (segment, clutter) in parts {
                match clutter {
                    0 => cluttered.push_str("/./"),
                    1 => cluttered.push_str("//"),
                    _ => cluttered.push('/'),
                }
                cluttered.push_str(&segment);
                normalized.push('/');
                normalized.push_str(&segment);
            }
            if cluttered.is_empty() {
                cluttered.push('/');
            }
            if normalized.is_empty() {
                normalized.push('/');
            }
            (cluttered, normalized)
        })
    }

    /// A drive letter followed by a colon
    pub fn drive() -> impl Strategy<Value = String> {
        "[a-zA-Z]:"
    }

    /// A Windows path with a drive and normalized segments
    pub fn windows_drive_path() -> impl Strategy<Value = String> {
        (Self::drive(), prop::collection::vec(Self::segment(), 0..=5))
            .prop_map(|(drive, segments)| format!("{}\\{}", drive, segments.join("\\")))
    }

    /// A UNC path with server, share and segments
    pub fn unc_path() -> impl Strategy<Value = String> {
        (
            Self::segment(),
            Self::segment(),
            prop::collection::vec(Self::segment(), 0..=4),
        )
            .prop_map(|(server, share, segments)| {
                let mut path = format!("\\\\{}\\{}", server, share);
                for segment in segments {
                    path.push('\\');
                    path.push_str(&segment);
                }
                path
            })
    }

    /// Any byte string suitable as sanitizer input
    pub fn raw_name() -> impl Strategy<Value = Vec<u8>> {
        prop::collection::vec(any::<u8>(), 1..64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{get_volume_name, PathStyle, PathType};

    proptest! {
        #[test]
        fn segments_are_never_dot_segments(segment in PathGenerators::segment()) {
            prop_assert!(!segment.is_empty());
            prop_assert_ne!(segment.as_str(), ".");
            prop_assert_ne!(segment.as_str(), "..");
            prop_assert!(!segment.contains('/'));
        }

        #[test]
        fn normalized_paths_are_absolute(path in PathGenerators::normalized_posix_path()) {
            prop_assert!(path.starts_with('/'));
            prop_assert!(!path.contains("//"));
        }

        #[test]
        fn drive_paths_parse_as_drive_paths(path in PathGenerators::windows_drive_path()) {
            let volume = get_volume_name(path.as_bytes(), PathStyle::Windows).unwrap();
            prop_assert_eq!(volume.path_type, PathType::AbsoluteWithVolume);
            prop_assert_eq!(volume.directory_name_index, 3);
        }

        #[test]
        fn unc_paths_parse_as_unc_paths(path in PathGenerators::unc_path()) {
            let volume = get_volume_name(path.as_bytes(), PathStyle::Windows).unwrap();
            prop_assert_eq!(volume.path_type, PathType::Unc);
            prop_assert!(volume.is_share());
        }
    }
}
