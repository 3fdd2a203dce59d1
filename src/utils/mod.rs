//! Utility functions and helpers for pathcomp
//!
//! This module provides the small capabilities the completion pipeline
//! leans on:
//! - Non-throwing file-system stat
//! - Path resolution and normalization

/// File system utilities
pub mod fs {
    use std::path::Path;

    use serde::Serialize;

    /// Kind of a file-system entry, as reported by the stat capability.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    #[serde(rename_all = "lowercase")]
    pub enum FileKind {
        /// Regular file.
        File,
        /// Directory.
        Directory,
        /// Anything else the platform reports (socket, fifo, device).
        Other,
        /// Metadata could not be read. Not an error: the entry may have
        /// vanished between listing and stat, or be unreadable.
        Unknown,
    }

    /// Stat result for a single path.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    pub struct StatInfo {
        /// Kind of the entry.
        pub kind: FileKind,
    }

    /// Stat a path without following symlink failure into an error.
    ///
    /// Symlinks are followed; a broken link or a permission failure maps
    /// to [`FileKind::Unknown`] rather than an error.
    ///
    /// # Arguments
    /// * `path` - Path to stat
    ///
    /// # Returns
    /// * `StatInfo` - Entry kind, `Unknown` when metadata is unavailable
    pub fn stat<P: AsRef<Path>>(path: P) -> StatInfo {
        let kind = match std::fs::metadata(path.as_ref()) {
            Ok(meta) if meta.is_dir() => FileKind::Directory,
            Ok(meta) if meta.is_file() => FileKind::File,
            Ok(_) => FileKind::Other,
            Err(_) => FileKind::Unknown,
        };
        StatInfo { kind }
    }
}

/// Path resolution utilities
pub mod path {
    use std::path::{Component, Path, PathBuf};

    /// Current working directory, falling back to `.` when the cwd is
    /// unavailable (deleted underneath the process).
    pub fn current_dir() -> PathBuf {
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    }

    /// Resolve a directory reference to an absolute, normalized path.
    ///
    /// Existing paths are canonicalized (symlinks, `.` and `..` expanded
    /// by the OS). Paths that do not exist yet are normalized lexically
    /// instead, so the caller can still validate them.
    ///
    /// # Arguments
    /// * `raw` - Directory reference, relative or absolute
    ///
    /// # Returns
    /// * `PathBuf` - Absolute normalized path
    pub fn resolve(raw: &str) -> PathBuf {
        let path = Path::new(raw);
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            current_dir().join(path)
        };

        absolute
            .canonicalize()
            .unwrap_or_else(|_| normalize(&absolute))
    }

    /// Lexically normalize a path: drop `.` components and resolve `..`
    /// against the preceding component. Does not touch the file system.
    fn normalize(path: &Path) -> PathBuf {
        let mut normalized = PathBuf::new();
        for component in path.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    if !normalized.pop() {
                        normalized.push(component.as_os_str());
                    }
                }
                other => normalized.push(other.as_os_str()),
            }
        }
        normalized
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_resolve_relative_is_absolute() {
            let resolved = resolve("some-dir-that-does-not-exist");
            assert!(resolved.is_absolute());
        }

        #[test]
        fn test_resolve_root() {
            assert_eq!(resolve("/"), PathBuf::from("/"));
        }

        #[test]
        fn test_normalize_drops_cur_dir() {
            assert_eq!(normalize(Path::new("/a/./b")), PathBuf::from("/a/b"));
        }

        #[test]
        fn test_normalize_resolves_parent_dir() {
            assert_eq!(normalize(Path::new("/a/b/../c")), PathBuf::from("/a/c"));
        }

        #[test]
        fn test_resolve_existing_dir_canonicalizes() {
            let tmp = std::env::temp_dir();
            let resolved = resolve(tmp.to_str().unwrap());
            assert!(resolved.is_dir());
        }
    }
}
