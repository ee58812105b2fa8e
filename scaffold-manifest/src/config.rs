//! `scaffold.toml` configuration.
//!
//! Every key is optional; an absent file or section means the defaults,
//! which reproduce the classic `internal/` layout with a GORM
//! `migrations/migrations.go` registry.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use goscaffold_core::{FileRules, GO_KEYWORDS, GeneratedFile, WriteResult, read_if_exists};
use serde::Deserialize;

use crate::{Error, Layout, Result, SourceContext};

/// Root configuration for a scaffolded project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScaffoldConfig {
    /// Directory layout for resource packages
    #[serde(default)]
    pub layout: Layout,

    /// Migration registry output
    #[serde(default)]
    pub registry: RegistryConfig,
}

/// Location and skeleton of the generated migration registry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// Directory of the registry file, relative to the project root
    pub dir: String,
    /// File name of the registry
    pub file: String,
    /// Go package declared by the registry file
    pub package: String,
    /// Name of the function that runs the migrations
    pub function: String,
    /// Import that is always present, whatever is registered
    pub baseline_import: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            dir: "migrations".to_string(),
            file: "migrations.go".to_string(),
            package: "migrations".to_string(),
            function: "MigrateAll".to_string(),
            baseline_import: "gorm.io/gorm".to_string(),
        }
    }
}

impl RegistryConfig {
    /// Registry file path relative to the project root.
    pub fn relative_path(&self) -> PathBuf {
        Path::new(&self.dir).join(&self.file)
    }
}

impl ScaffoldConfig {
    /// Conventional configuration file name.
    pub const FILE_NAME: &'static str = "scaffold.toml";

    /// Load `scaffold.toml` from a project root, falling back to the
    /// defaults when the file does not exist.
    pub fn load(root: impl AsRef<Path>) -> Result<Self> {
        let path = root.as_ref().join(Self::FILE_NAME);
        let content = read_if_exists(&path).map_err(|e| Box::new(Error::from(e)))?;
        match content {
            Some(content) => {
                Self::from_str_with_filename(&content, &path.display().to_string())
            }
            None => Ok(Self::default()),
        }
    }

    /// Parse configuration content with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let config: ScaffoldConfig = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
        config.validate(&ctx)?;
        Ok(config)
    }

    fn validate(&self, ctx: &SourceContext) -> Result<()> {
        let registry = &self.registry;

        if registry.dir.is_empty() {
            return Err(invalid(
                ctx,
                "registry dir cannot be empty, use \".\" for the project root",
                &registry.dir,
            ));
        }
        if Path::new(&registry.dir).is_absolute() {
            return Err(invalid(
                ctx,
                "registry dir must be relative to the project root",
                &registry.dir,
            ));
        }
        if !registry.file.ends_with(".go") || registry.file.contains(['/', '\\']) {
            return Err(invalid(
                ctx,
                "registry file must be a plain `.go` file name",
                &registry.file,
            ));
        }
        if let Some(reason) = go_identifier_issue(&registry.package) {
            return Err(invalid(
                ctx,
                format!("registry package {}", reason),
                &registry.package,
            ));
        }
        if let Some(reason) = go_identifier_issue(&registry.function) {
            return Err(invalid(
                ctx,
                format!("registry function {}", reason),
                &registry.function,
            ));
        }
        if registry.baseline_import.is_empty()
            || registry
                .baseline_import
                .chars()
                .any(|c| c.is_whitespace() || c == '"')
        {
            return Err(invalid(
                ctx,
                "baseline import must be a bare import path",
                &registry.baseline_import,
            ));
        }

        Ok(())
    }
}

impl FromStr for ScaffoldConfig {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, Self::FILE_NAME)
    }
}

fn invalid(ctx: &SourceContext, message: impl Into<String>, value: &str) -> Box<Error> {
    ctx.validation_error(message, ctx.find_value_span(value))
}

/// Returns None if `name` is a usable Go identifier, Some(reason) otherwise
fn go_identifier_issue(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Some("cannot be empty"),
        Some(c) if !(c.is_ascii_alphabetic() || c == '_') => {
            return Some("must start with a letter or underscore");
        }
        Some(_) => {}
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("must contain only letters, digits and underscores");
    }

    if GO_KEYWORDS.contains(&name) {
        return Some("cannot be a Go reserved keyword");
    }

    None
}

/// The commented `scaffold.toml` written on request; never overwritten.
pub struct DefaultConfigFile;

impl GeneratedFile for DefaultConfigFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(ScaffoldConfig::FILE_NAME)
    }

    fn rules(&self) -> FileRules {
        FileRules::if_missing()
    }

    fn render(&self) -> String {
        r#"# goscaffold configuration

# Where resource packages live: "flat", "internal" or "src"
layout = "internal"

[registry]
# Generated file that registers every model for auto-migration
dir = "migrations"
file = "migrations.go"
package = "migrations"
function = "MigrateAll"
# Always imported, even before any resource is registered
baseline_import = "gorm.io/gorm"
"#
        .to_string()
    }
}

/// Write a default `scaffold.toml` into `root` unless one already exists.
pub fn write_default_config(root: impl AsRef<Path>) -> Result<WriteResult> {
    DefaultConfigFile
        .write(root.as_ref())
        .map_err(|e| Box::new(Error::from(e)))
}
