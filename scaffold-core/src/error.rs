use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for file emission and naming operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// The file exists but could not be read.
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(scaffold::input_unreadable),
        help("check the file permissions; the file is not treated as missing")
    )]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The rendered content could not be written back to disk.
    #[error("failed to write '{path}'")]
    #[diagnostic(
        code(scaffold::write_failure),
        help("check that the target directory exists and is writable")
    )]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid resource name '{name}'")]
    #[diagnostic(
        code(scaffold::invalid_resource_name),
        help("{reason}. Use lowercase snake_case: letters, digits and underscores, starting with a letter.")
    )]
    InvalidResourceName { name: String, reason: &'static str },

    #[error("invalid module path '{path}'")]
    #[diagnostic(
        code(scaffold::invalid_module_path),
        help("{reason}. Use the path from the `module` line of go.mod, e.g. github.com/acme/api.")
    )]
    InvalidModulePath { path: String, reason: &'static str },
}
