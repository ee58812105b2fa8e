use std::path::{Path, PathBuf};

use goscaffold_core::{FileRules, GeneratedFile};

/// The rendered registry, ready to be written under a project root.
///
/// The registry is fully regenerated from its parsed entries on every
/// registration, so it is always overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryFile {
    relative_path: PathBuf,
    content: String,
}

impl RegistryFile {
    pub fn new(relative_path: impl Into<PathBuf>, content: String) -> Self {
        Self {
            relative_path: relative_path.into(),
            content,
        }
    }

    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl GeneratedFile for RegistryFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.relative_path)
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}
