use std::collections::BTreeSet;

use goscaffold_manifest::RegistryConfig;

use crate::ResourceDescriptor;

/// Fixed parts of the registry file that never change between regenerations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrySkeleton {
    /// Go package declared on the first line
    pub package: String,
    /// Migration function, e.g. `MigrateAll`
    pub function: String,
    /// Import present even when nothing is registered
    pub baseline_import: String,
}

impl RegistrySkeleton {
    /// Prefix of the line that opens the migration function.
    pub fn function_prefix(&self) -> String {
        format!("func {}", self.function)
    }
}

impl Default for RegistrySkeleton {
    fn default() -> Self {
        Self::from(&RegistryConfig::default())
    }
}

impl From<&RegistryConfig> for RegistrySkeleton {
    fn from(config: &RegistryConfig) -> Self {
        Self {
            package: config.package.clone(),
            function: config.function.clone(),
            baseline_import: config.baseline_import.clone(),
        }
    }
}

/// Import paths and model entries of a registry file.
///
/// Both are sets: duplicates collapse and iteration is in byte-wise
/// ascending order, whatever order entries were added or read in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryDocument {
    imports: BTreeSet<String>,
    models: BTreeSet<String>,
}

impl RegistryDocument {
    /// An empty registry, holding only the baseline import.
    pub fn new(skeleton: &RegistrySkeleton) -> Self {
        Self {
            imports: BTreeSet::from([skeleton.baseline_import.clone()]),
            models: BTreeSet::new(),
        }
    }

    /// Add an import path. Returns whether it was new.
    pub fn add_import(&mut self, import: impl Into<String>) -> bool {
        self.imports.insert(import.into())
    }

    /// Add a model entry such as `&order.Order{}`. Returns whether it was new.
    pub fn add_model(&mut self, model: impl Into<String>) -> bool {
        self.models.insert(model.into())
    }

    /// Register a resource. Returns whether the document changed.
    pub fn insert(&mut self, resource: &ResourceDescriptor) -> bool {
        let new_import = self.add_import(resource.import_path());
        let new_model = self.add_model(resource.model_entry());
        new_import || new_model
    }

    /// Whether both entries of `resource` are already present.
    pub fn contains(&self, resource: &ResourceDescriptor) -> bool {
        self.imports.contains(&resource.import_path())
            && self.models.contains(&resource.model_entry())
    }

    /// Import paths in sorted order.
    pub fn imports(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().map(String::as_str)
    }

    /// Model entries in sorted order.
    pub fn models(&self) -> impl Iterator<Item = &str> {
        self.models.iter().map(String::as_str)
    }

    pub fn import_count(&self) -> usize {
        self.imports.len()
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_holds_only_baseline() {
        let doc = RegistryDocument::new(&RegistrySkeleton::default());

        assert_eq!(doc.imports().collect::<Vec<_>>(), ["gorm.io/gorm"]);
        assert_eq!(doc.model_count(), 0);
    }

    #[test]
    fn test_entries_iterate_sorted() {
        let mut doc = RegistryDocument::new(&RegistrySkeleton {
            baseline_import: "zig/zag".to_string(),
            ..RegistrySkeleton::default()
        });
        doc.add_import("acme/mod");
        doc.add_model("&b.B{}");
        doc.add_model("&a.A{}");

        assert_eq!(doc.imports().collect::<Vec<_>>(), ["acme/mod", "zig/zag"]);
        assert_eq!(doc.models().collect::<Vec<_>>(), ["&a.A{}", "&b.B{}"]);
    }

    #[test]
    fn test_sort_is_bytewise() {
        let mut doc = RegistryDocument::new(&RegistrySkeleton::default());
        doc.add_import("b/pkg");
        doc.add_import("a/pkg");
        doc.add_import("Z/pkg");
        doc.add_import("baseline/db");

        assert_eq!(
            doc.imports().collect::<Vec<_>>(),
            ["Z/pkg", "a/pkg", "b/pkg", "baseline/db", "gorm.io/gorm"]
        );
    }

    #[test]
    fn test_insert_is_idempotent() {
        let resource = ResourceDescriptor::new("order", "github.com/acme/api").unwrap();
        let mut doc = RegistryDocument::new(&RegistrySkeleton::default());

        assert!(!doc.contains(&resource));
        assert!(doc.insert(&resource));
        assert!(doc.contains(&resource));

        let before = doc.clone();
        assert!(!doc.insert(&resource));
        assert_eq!(doc, before);
    }

    #[test]
    fn test_skeleton_from_config() {
        let config = RegistryConfig {
            package: "db".to_string(),
            function: "Migrate".to_string(),
            ..RegistryConfig::default()
        };

        let skeleton = RegistrySkeleton::from(&config);

        assert_eq!(skeleton.package, "db");
        assert_eq!(skeleton.function_prefix(), "func Migrate");
        assert_eq!(skeleton.baseline_import, "gorm.io/gorm");
    }
}
