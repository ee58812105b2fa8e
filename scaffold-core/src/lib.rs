//! Core utilities and types for the goscaffold generator.
//!
//! This crate provides the file emission primitives, the I/O error
//! taxonomy and the identifier helpers shared by the other crates.

mod error;
mod file;
mod naming;

pub use error::{Error, Result};
// File operations
pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult, read_if_exists, write_atomic};
// String utilities
pub use naming::{
    GO_KEYWORDS, module_path_issue, normalize_resource_name, to_camel_case, to_pascal_case,
    validate_module_path,
};
