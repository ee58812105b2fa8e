use std::{
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::{Error, Result};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the project root
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);

        match self.rules().overwrite {
            Overwrite::Always => {
                write_atomic(&path, &self.render())?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                let exists = path.try_exists().map_err(|source| Error::InputUnreadable {
                    path: path.clone(),
                    source,
                })?;
                if exists {
                    Ok(WriteResult::Skipped)
                } else {
                    write_atomic(&path, &self.render())?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}

/// Replace the file at `path` with `content`.
///
/// The content is written to a temporary file in the same directory and
/// renamed over the target, so a reader sees either the old or the new file.
/// Missing parent directories are created.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let failure = |source: std::io::Error| Error::WriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(failure)?;

    let mut temp = NamedTempFile::new_in(parent).map_err(failure)?;
    temp.write_all(content.as_bytes()).map_err(failure)?;

    // Keep the mode of a file we are replacing.
    if let Ok(metadata) = std::fs::metadata(path) {
        temp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(failure)?;
    }

    temp.persist(path).map_err(|e| failure(e.error))?;
    Ok(())
}

/// Read a file that may legitimately be absent.
///
/// Returns `Ok(None)` only when the file does not exist. Any other failure
/// (permissions, a directory in the way, invalid UTF-8) is an error.
pub fn read_if_exists(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(Error::InputUnreadable {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    /// Regenerated on every run.
    pub fn always_overwrite() -> Self {
        Self {
            overwrite: Overwrite::Always,
        }
    }

    /// Created once, then owned by the user.
    pub fn if_missing() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
        }
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (registry files)
    Always,
    /// Only create if file doesn't exist (configuration stubs)
    IfMissing,
}

impl Default for FileRules {
    fn default() -> Self {
        Self::always_overwrite()
    }
}
