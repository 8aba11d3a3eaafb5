//! Audio File Discovery
//!
//! Locates candidate audio files under a set of roots:
//! - Path resolution (mixed file and directory inputs)
//! - Directory walking with deterministic ordering

pub mod resolver;
pub mod walker;

use std::env;
use std::io;
use std::path::{Component, Path, PathBuf};

pub use resolver::{find_audio_files_in_path, find_audio_files_in_paths};
pub use walker::find_audio_files;

/// Make a path absolute without touching the filesystem.
///
/// Relative paths are joined onto the current directory, `.` components are
/// dropped and `..` removes the preceding component. Symlinks are left
/// unresolved.
pub fn absolute_path(path: &Path) -> io::Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()?.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }

    Ok(normalized)
}
