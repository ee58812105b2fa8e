//! The migration registry: a generated Go file that imports every
//! registered resource package and passes each model to `AutoMigrate`.
//!
//! - [`RegistryDocument`] - The import and model sets
//! - [`RegistrySkeleton`] - The fixed text around them
//! - [`RegistryMerger`] - Parse, merge and re-render
//! - [`RegistryFile`] - The rendered file, written on every registration

mod document;
mod file;
mod merge;
mod parse;
mod render;

pub use document::{RegistryDocument, RegistrySkeleton};
pub use file::RegistryFile;
pub use merge::{MergeOutcome, RegistryMerger};
pub use parse::{ParsedRegistry, SkippedLine, parse_registry};
pub use render::render_registry;
