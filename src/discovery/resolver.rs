//! Path resolution
//!
//! Turns a mixed list of file and directory paths into a flat list of
//! audio files. Inputs that are neither a matching file nor a directory are
//! skipped without error.

use std::path::{Path, PathBuf};

use log::debug;

use crate::config::DiscoveryOptions;
use crate::discovery::{absolute_path, find_audio_files};
use crate::error::Result;

/// Resolve a collection of paths into audio files.
///
/// For each input, in order:
/// - a directory contributes everything [`find_audio_files`] finds in it
/// - an existing file whose name matches a configured extension is added
///   as an absolute path
/// - anything else is skipped
///
/// Note that `&Path` itself iterates over its components; use
/// [`find_audio_files_in_path`] for a single input.
pub fn find_audio_files_in_paths<I, P>(paths: I, options: &DiscoveryOptions) -> Result<Vec<PathBuf>>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut file_paths = Vec::new();

    for path in paths {
        file_paths.extend(find_audio_files_in_path(path, options)?);
    }

    Ok(file_paths)
}

/// Resolve a single file or directory path into audio files
pub fn find_audio_files_in_path<P: AsRef<Path>>(
    path: P,
    options: &DiscoveryOptions,
) -> Result<Vec<PathBuf>> {
    let path = path.as_ref();

    if path.is_dir() {
        return find_audio_files(path, options);
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if !options.matches_extension(&name) {
        debug!("Skipping {}: unsupported extension", path.display());
        return Ok(Vec::new());
    }

    if !path.exists() {
        debug!("Skipping {}: no such file", path.display());
        return Ok(Vec::new());
    }

    Ok(vec![absolute_path(path)?])
}
