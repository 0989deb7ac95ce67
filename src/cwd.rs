//! Working directory and directory creation wrappers
//!
//! The resolver only needs two things from the operating system: the current
//! directory (of the process, or of a drive) and the ability to change it.
//! Those are expressed by [`WorkingDirectory`] so resolution can be tested
//! against a fixed directory; [`OsWorkingDirectory`] is the real one.

use crate::buffer::PathBuffer;
use crate::character::PathChar;
use crate::codepage::PathContext;
use crate::error::{check_length, PathError, Result};
use std::path::{Path, PathBuf};

/// Source of working directories, in narrow units
pub trait WorkingDirectory {
    /// The process working directory
    fn current_directory(&self) -> Result<Vec<u8>>;

    /// The working directory of a drive volume such as `C:`
    fn current_directory_of_volume(&self, volume: &[u8]) -> Result<Vec<u8>>;

    /// Changes the process working directory
    fn change_directory(&self, path: &[u8]) -> Result<()>;
}

/// The operating system's working directory
#[derive(Debug, Default, Clone, Copy)]
pub struct OsWorkingDirectory;

impl WorkingDirectory for OsWorkingDirectory {
    fn current_directory(&self) -> Result<Vec<u8>> {
        let directory = std::env::current_dir()
            .map_err(|e| PathError::from(e).context("Unable to retrieve current working directory"))?;
        let units = path_to_units(&directory)?;
        if units.is_empty() {
            return Err(PathError::runtime("current working directory is empty"));
        }
        Ok(units)
    }

    #[cfg(windows)]
    fn current_directory_of_volume(&self, volume: &[u8]) -> Result<Vec<u8>> {
        if volume.len() != 2 || !volume[0].is_ascii_alphabetic() || volume[1] != b':' {
            return Err(PathError::invalid_argument("volume", "expected a drive letter and colon"));
        }
        // A bare "X:" resolves against the working directory the OS keeps for drive X
        let drive = units_to_path(volume)?;
        let directory = std::path::absolute(&drive).map_err(|e| {
            PathError::from(e).context(format!(
                "Unable to retrieve current working directory of volume {}",
                drive.display()
            ))
        })?;
        let units = path_to_units(&directory)?;
        if units.is_empty() {
            return Err(PathError::runtime("volume working directory is empty"));
        }
        Ok(units)
    }

    #[cfg(not(windows))]
    fn current_directory_of_volume(&self, _volume: &[u8]) -> Result<Vec<u8>> {
        Err(PathError::invalid_argument(
            "volume",
            "drive volumes are not supported on this platform",
        ))
    }

    fn change_directory(&self, path: &[u8]) -> Result<()> {
        let directory = units_to_path(path)?;
        log::debug!("changing working directory to {}", directory.display());
        std::env::set_current_dir(&directory).map_err(|e| {
            PathError::from(e).context(format!(
                "Unable to change directory to {}",
                directory.display()
            ))
        })
    }
}

#[cfg(unix)]
fn path_to_units(path: &Path) -> Result<Vec<u8>> {
    use std::os::unix::ffi::OsStrExt;
    Ok(path.as_os_str().as_bytes().to_vec())
}

#[cfg(not(unix))]
fn path_to_units(path: &Path) -> Result<Vec<u8>> {
    path.to_str()
        .map(|s| s.as_bytes().to_vec())
        .ok_or_else(|| PathError::Conversion {
            message: format!("path is not valid Unicode: {}", path.display()),
        })
}

#[cfg(unix)]
fn units_to_path(units: &[u8]) -> Result<PathBuf> {
    use std::os::unix::ffi::OsStrExt;
    Ok(PathBuf::from(std::ffi::OsStr::from_bytes(units)))
}

#[cfg(not(unix))]
fn units_to_path(units: &[u8]) -> Result<PathBuf> {
    std::str::from_utf8(units)
        .map(PathBuf::from)
        .map_err(|e| PathError::Conversion {
            message: format!("invalid UTF-8 at offset {}", e.valid_up_to()),
        })
}

/// Queries `source` for the process working directory as units of type `C`
pub(crate) fn query_current<C: PathChar>(
    source: &dyn WorkingDirectory,
    context: &PathContext,
) -> Result<Vec<C>> {
    let narrow = source.current_directory()?;
    if narrow.is_empty() {
        return Err(PathError::runtime("current working directory is empty"));
    }
    C::from_narrow(context.codepage(), &narrow)
}

/// Queries `source` for the working directory of a drive volume
pub(crate) fn query_volume<C: PathChar>(
    source: &dyn WorkingDirectory,
    volume: &[C],
    context: &PathContext,
) -> Result<Vec<C>> {
    let narrow_volume = C::to_narrow(context.codepage(), volume)?;
    let narrow = source.current_directory_of_volume(&narrow_volume)?;
    if narrow.is_empty() {
        return Err(PathError::runtime("volume working directory is empty"));
    }
    C::from_narrow(context.codepage(), &narrow)
}

/// Changes the process working directory to `path`
pub fn change_directory<C: PathChar>(path: &[C], context: &PathContext) -> Result<()> {
    change_directory_with(&OsWorkingDirectory, path, context)
}

/// Changes the working directory of `source` to `path`
pub fn change_directory_with<C: PathChar>(
    source: &dyn WorkingDirectory,
    path: &[C],
    context: &PathContext,
) -> Result<()> {
    check_length("path", path.len())?;
    let narrow = C::to_narrow(context.codepage(), path)?;
    source.change_directory(&narrow)
}

/// Returns the process working directory.
///
/// The returned size includes the terminator and is never less than two.
pub fn current_working_directory<C: PathChar>(context: &PathContext) -> Result<PathBuffer<C>> {
    let units = query_current::<C>(&OsWorkingDirectory, context)?;
    PathBuffer::copy_from(&units)
}

/// Returns the working directory of a drive volume such as `C:`.
///
/// Only supported on Windows hosts; elsewhere this fails with an argument error.
pub fn current_working_directory_by_volume<C: PathChar>(
    volume: &[C],
    context: &PathContext,
) -> Result<PathBuffer<C>> {
    check_length("volume", volume.len())?;
    let units = query_volume(&OsWorkingDirectory, volume, context)?;
    PathBuffer::copy_from(&units)
}

/// Creates a single directory. The parent must already exist.
pub fn make_directory<C: PathChar>(path: &[C], context: &PathContext) -> Result<()> {
    check_length("path", path.len())?;
    let narrow = C::to_narrow(context.codepage(), path)?;
    let directory = units_to_path(&narrow)?;
    log::debug!("creating directory {}", directory.display());
    std::fs::create_dir(&directory).map_err(|e| {
        PathError::from(e).context(format!("Unable to make directory {}", directory.display()))
    })
}
