//! Directory walking
//!
//! Walks a directory tree and collects files whose names match the
//! configured extensions. Within each directory the files are visited in
//! name order before any subdirectory, and subdirectories are visited
//! depth-first in name order, so the result is the same on every run.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::DiscoveryOptions;
use crate::discovery::absolute_path;
use crate::error::Result;

/// Return all matching audio files beneath `root`, as absolute paths.
///
/// A root that does not exist or is not a directory yields an empty list.
/// Entries that cannot be read (permission errors, symlink loops) are
/// skipped with a warning.
pub fn find_audio_files<P: AsRef<Path>>(
    root: P,
    options: &DiscoveryOptions,
) -> Result<Vec<PathBuf>> {
    let root = absolute_path(root.as_ref())?;

    if !root.is_dir() {
        debug!("Skipping walk of {}: not a directory", root.display());
        return Ok(Vec::new());
    }

    let max_depth = if options.traverse_subdirectories {
        usize::MAX
    } else {
        1
    };

    let walker = WalkDir::new(&root)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(options.follow_symlinks)
        .sort_by(files_before_directories);

    let mut file_paths = Vec::new();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Error accessing entry under {}: {}", root.display(), e);
                continue;
            }
        };

        if is_directory(&entry) {
            continue;
        }

        if options.matches_extension(&entry.file_name().to_string_lossy()) {
            file_paths.push(entry.into_path());
        }
    }

    debug!(
        "Found {} audio files under {}",
        file_paths.len(),
        root.display()
    );

    Ok(file_paths)
}

/// Sibling order: non-directories first, then directories, each by name.
///
/// walkdir sorts entries before following links, so symlinked directories
/// are resolved here to keep them with the other directories.
fn files_before_directories(a: &DirEntry, b: &DirEntry) -> Ordering {
    is_directory(a)
        .cmp(&is_directory(b))
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Whether an entry refers to a directory.
///
/// When links are not followed, a symlink to a directory is still a
/// directory here; it is neither descended into nor reported as a file.
fn is_directory(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_dir() || (file_type.is_symlink() && entry.path().is_dir())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"").unwrap();
    }

    fn names(paths: &[PathBuf], root: &Path) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_sorted_and_filtered() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("b.wav"));
        touch(&dir.path().join("a.wav"));
        touch(&dir.path().join("c.txt"));

        let root = absolute_path(dir.path()).unwrap();
        let found = find_audio_files(dir.path(), &DiscoveryOptions::default()).unwrap();

        assert_eq!(names(&found, &root), vec!["a.wav", "b.wav"]);
        assert!(found.iter().all(|p| p.is_absolute()));
    }

    #[test]
    fn test_files_before_subdirectories() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("a_dir/x.wav"));
        touch(&dir.path().join("b.wav"));
        touch(&dir.path().join("c_dir/nested/y.wav"));
        touch(&dir.path().join("c_dir/a.wav"));
        touch(&dir.path().join("z.wav"));

        let root = absolute_path(dir.path()).unwrap();
        let found = find_audio_files(dir.path(), &DiscoveryOptions::default()).unwrap();

        assert_eq!(
            names(&found, &root),
            vec!["b.wav", "z.wav", "a_dir/x.wav", "c_dir/a.wav", "c_dir/nested/y.wav"]
        );
    }

    #[test]
    fn test_no_traversal_excludes_nested() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("top.wav"));
        touch(&dir.path().join("sub/nested.wav"));

        let root = absolute_path(dir.path()).unwrap();
        let options = DiscoveryOptions::default().with_traverse_subdirectories(false);
        let found = find_audio_files(dir.path(), &options).unwrap();

        assert_eq!(names(&found, &root), vec!["top.wav"]);
    }

    #[test]
    fn test_case_insensitive_extension() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("LOUD.WAV"));
        touch(&dir.path().join("quiet.wav"));

        let root = absolute_path(dir.path()).unwrap();
        let found = find_audio_files(dir.path(), &DiscoveryOptions::default()).unwrap();

        assert_eq!(names(&found, &root), vec!["LOUD.WAV", "quiet.wav"]);
    }

    #[test]
    fn test_directory_with_audio_name_is_descended() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("takes.wav/inner.wav"));

        let root = absolute_path(dir.path()).unwrap();
        let found = find_audio_files(dir.path(), &DiscoveryOptions::default()).unwrap();

        assert_eq!(names(&found, &root), vec!["takes.wav/inner.wav"]);
    }

    #[test]
    fn test_missing_root_is_empty() {
        let dir = tempdir().unwrap();
        let found =
            find_audio_files(dir.path().join("missing"), &DiscoveryOptions::default()).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_file_root_is_empty() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.wav");
        touch(&file);

        let found = find_audio_files(&file, &DiscoveryOptions::default()).unwrap();
        assert!(found.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_following() {
        let dir = tempdir().unwrap();
        let outside = tempdir().unwrap();
        touch(&outside.path().join("linked.wav"));
        touch(&dir.path().join("local.wav"));
        std::os::unix::fs::symlink(outside.path(), dir.path().join("link")).unwrap();

        let root = absolute_path(dir.path()).unwrap();

        let followed = find_audio_files(dir.path(), &DiscoveryOptions::default()).unwrap();
        assert_eq!(names(&followed, &root), vec!["local.wav", "link/linked.wav"]);

        let options = DiscoveryOptions::default().with_follow_symlinks(false);
        let not_followed = find_audio_files(dir.path(), &options).unwrap();
        assert_eq!(names(&not_followed, &root), vec!["local.wav"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_file_listed_either_way() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("b.wav"));
        touch(&dir.path().join("sub/c.wav"));
        std::os::unix::fs::symlink(dir.path().join("b.wav"), dir.path().join("a_link.wav"))
            .unwrap();

        let root = absolute_path(dir.path()).unwrap();
        let expected = vec!["a_link.wav", "b.wav", "sub/c.wav"];

        let followed = find_audio_files(dir.path(), &DiscoveryOptions::default()).unwrap();
        assert_eq!(names(&followed, &root), expected);

        let options = DiscoveryOptions::default().with_follow_symlinks(false);
        let not_followed = find_audio_files(dir.path(), &options).unwrap();
        assert_eq!(names(&not_followed, &root), expected);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_root_walked_without_following() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("target");
        touch(&target.join("b.wav"));
        touch(&target.join("sub/c.wav"));
        std::os::unix::fs::symlink(target.join("b.wav"), target.join("a_link.wav")).unwrap();
        let root_link = dir.path().join("root_link");
        std::os::unix::fs::symlink(&target, &root_link).unwrap();

        let options = DiscoveryOptions::default().with_follow_symlinks(false);
        let found = find_audio_files(&root_link, &options).unwrap();

        let root = absolute_path(&root_link).unwrap();
        assert!(found.iter().all(|p| p.starts_with(&root)));
        assert_eq!(names(&found, &root), vec!["a_link.wav", "b.wav", "sub/c.wav"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_loop_is_skipped() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("sub/a.wav"));
        std::os::unix::fs::symlink(dir.path(), dir.path().join("sub/loop")).unwrap();

        let root = absolute_path(dir.path()).unwrap();
        let found = find_audio_files(dir.path(), &DiscoveryOptions::default()).unwrap();

        assert_eq!(names(&found, &root), vec!["sub/a.wav"]);
    }
}
