//! Running registration against a Go project on disk.

use std::path::{Path, PathBuf};

use goscaffold_core::{GeneratedFile, read_if_exists};
use goscaffold_manifest::{GoModule, ScaffoldConfig};

use crate::{
    Result,
    registry::{ParsedRegistry, RegistryFile, RegistryMerger, RegistrySkeleton, SkippedLine},
    resource::ResourceDescriptor,
};

/// A Go module root together with its scaffold configuration.
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    module: GoModule,
    config: ScaffoldConfig,
}

impl Project {
    /// Open the project at `root`, reading `go.mod` and `scaffold.toml`.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let config = ScaffoldConfig::load(root)?;
        Self::with_config(root, config)
    }

    /// Open the project at `root` with an explicit configuration.
    pub fn with_config(root: impl AsRef<Path>, config: ScaffoldConfig) -> Result<Self> {
        let root = root.as_ref();
        let module = GoModule::discover(root)?;
        Ok(Self::new(root, module, config))
    }

    pub fn new(root: impl Into<PathBuf>, module: GoModule, config: ScaffoldConfig) -> Self {
        Self {
            root: root.into(),
            module,
            config,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn module(&self) -> &GoModule {
        &self.module
    }

    pub fn config(&self) -> &ScaffoldConfig {
        &self.config
    }

    /// Absolute path of the registry file.
    pub fn registry_path(&self) -> PathBuf {
        self.root.join(self.config.registry.relative_path())
    }

    /// Describe a resource of this project.
    pub fn resource(&self, name: &str) -> Result<ResourceDescriptor> {
        let resource = ResourceDescriptor::new(name, self.module.path())?;
        Ok(resource.with_layout(self.config.layout))
    }

    fn merger(&self) -> RegistryMerger {
        RegistryMerger::new(RegistrySkeleton::from(&self.config.registry))
    }

    /// Add a resource to the registry file and rewrite it.
    ///
    /// A missing registry is created. An existing one that cannot be read
    /// aborts the registration without touching the file.
    pub fn register(&self, name: &str) -> Result<RegistrationReport> {
        let resource = self.resource(name)?;
        let path = self.registry_path();

        let previous = read_if_exists(&path)?;
        match &previous {
            Some(text) => tracing::debug!(
                path = %path.display(),
                bytes = text.len(),
                "Read existing registry"
            ),
            None => tracing::debug!(path = %path.display(), "No registry yet, creating one"),
        }

        let outcome = self.merger().merge_detailed(previous.as_deref(), &resource);
        for line in &outcome.skipped {
            tracing::warn!(
                path = %path.display(),
                line = line.number,
                text = %line.text,
                "Dropped unrecognized registry line"
            );
        }

        let relative = self.config.registry.relative_path();
        RegistryFile::new(relative, outcome.text).write(&self.root)?;

        tracing::info!(
            path = %path.display(),
            resource = resource.name(),
            imports = outcome.document.import_count(),
            models = outcome.document.model_count(),
            already_registered = outcome.already_registered,
            "Registry written"
        );

        Ok(RegistrationReport {
            path,
            resource: resource.name().to_string(),
            import_path: resource.import_path(),
            model_reference: resource.model_entry(),
            already_registered: outcome.already_registered,
            skipped_lines: outcome.skipped,
        })
    }

    /// Parse the current registry without writing anything.
    ///
    /// Returns `None` when the registry file does not exist yet.
    pub fn read_registry(&self) -> Result<Option<ParsedRegistry>> {
        let path = self.registry_path();
        let parsed = read_if_exists(&path)?.map(|text| self.merger().parse(&text));
        Ok(parsed)
    }
}

/// Register `name` in the project at `root` using `config`.
pub fn register_resource(
    root: impl AsRef<Path>,
    name: &str,
    config: &ScaffoldConfig,
) -> Result<RegistrationReport> {
    Project::with_config(root, config.clone())?.register(name)
}

/// Parse the registry of the project at `root` without writing.
///
/// Only the configuration is needed: `go.mod` is not read.
pub fn read_registry(
    root: impl AsRef<Path>,
    config: &ScaffoldConfig,
) -> Result<Option<ParsedRegistry>> {
    let path = root.as_ref().join(config.registry.relative_path());
    let merger = RegistryMerger::new(RegistrySkeleton::from(&config.registry));
    Ok(read_if_exists(&path)?.map(|text| merger.parse(&text)))
}

/// What a registration did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationReport {
    /// The registry file that was written
    pub path: PathBuf,
    /// Normalized resource name
    pub resource: String,
    /// Import path added for the resource
    pub import_path: String,
    /// Model entry added for the resource, e.g. `&order.Order{}`
    pub model_reference: String,
    /// Both entries were already present
    pub already_registered: bool,
    /// Lines of the previous registry that were dropped
    pub skipped_lines: Vec<SkippedLine>,
}

impl RegistrationReport {
    /// Whether lines of the previous registry were lost.
    pub fn has_warnings(&self) -> bool {
        !self.skipped_lines.is_empty()
    }
}
