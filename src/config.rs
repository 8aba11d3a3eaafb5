//! Discovery configuration
//!
//! `DiscoveryOptions` controls which files the resolver and walker accept
//! and how far they descend. It can be built in code or loaded from a JSON
//! file; missing fields fall back to the defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Filename endings accepted when no other set is configured
pub const SUPPORTED_EXTENSIONS: &[&str] = &[".wav"];

/// Options shared by path resolution and directory walking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryOptions {
    /// Filename endings to accept, matched case-insensitively (e.g. ".wav")
    pub extensions: Vec<String>,
    /// Descend into nested directories (default: true)
    pub traverse_subdirectories: bool,
    /// Follow symbolic links while walking (default: true)
    pub follow_symlinks: bool,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        DiscoveryOptions {
            extensions: SUPPORTED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            traverse_subdirectories: true,
            follow_symlinks: true,
        }
    }
}

impl DiscoveryOptions {
    /// Create options with the default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the accepted filename endings
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Set whether nested directories are walked
    pub fn with_traverse_subdirectories(mut self, traverse: bool) -> Self {
        self.traverse_subdirectories = traverse;
        self
    }

    /// Set whether symlinked directories are followed while walking
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Load options from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let options = serde_json::from_str(&json)?;
        Ok(options)
    }

    /// Save options as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Check whether a file name ends with one of the configured extensions.
    ///
    /// Comparison is case-insensitive. An extension configured without a
    /// leading dot ("wav") is treated as ".wav".
    pub fn matches_extension(&self, file_name: &str) -> bool {
        let name = file_name.to_lowercase();
        self.extensions.iter().any(|ext| {
            let ext = ext.to_lowercase();
            if ext.is_empty() {
                false
            } else if ext.starts_with('.') {
                name.ends_with(&ext)
            } else {
                name.ends_with(&format!(".{}", ext))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let options = DiscoveryOptions::default();
        assert_eq!(options.extensions, vec![".wav".to_string()]);
        assert!(options.traverse_subdirectories);
        assert!(options.follow_symlinks);
    }

    #[test]
    fn test_matches_extension_case_insensitive() {
        let options = DiscoveryOptions::default();
        assert!(options.matches_extension("a.wav"));
        assert!(options.matches_extension("B.WAV"));
        assert!(options.matches_extension("take.Wav"));
        assert!(!options.matches_extension("c.txt"));
        assert!(!options.matches_extension("wav"));
        assert!(!options.matches_extension("a.wav.bak"));
    }

    #[test]
    fn test_extension_without_dot() {
        let options = DiscoveryOptions::new().with_extensions(["flac", ".OGG"]);
        assert!(options.matches_extension("song.flac"));
        assert!(options.matches_extension("song.ogg"));
        assert!(!options.matches_extension("songflac"));
        assert!(!options.matches_extension("song.wav"));
    }

    #[test]
    fn test_empty_extension_matches_nothing() {
        let options = DiscoveryOptions::new().with_extensions([""]);
        assert!(!options.matches_extension("a.wav"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let options: DiscoveryOptions =
            serde_json::from_str(r#"{ "traverse_subdirectories": false }"#).unwrap();
        assert!(!options.traverse_subdirectories);
        assert!(options.follow_symlinks);
        assert_eq!(options.extensions, vec![".wav".to_string()]);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("options.json");

        let options = DiscoveryOptions::new()
            .with_extensions([".wav", ".aiff"])
            .with_follow_symlinks(false);
        options.save(&path).unwrap();

        let loaded = DiscoveryOptions::load(&path).unwrap();
        assert_eq!(loaded, options);
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = DiscoveryOptions::load(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
