use miette::Diagnostic;
use thiserror::Error;

/// Result type for registration
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// Reading, writing or naming failed.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Core(#[from] goscaffold_core::Error),

    /// `go.mod` or `scaffold.toml` could not be used.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Manifest(goscaffold_manifest::Error),
}

impl From<Box<goscaffold_manifest::Error>> for Error {
    fn from(err: Box<goscaffold_manifest::Error>) -> Self {
        match *err {
            goscaffold_manifest::Error::Core(core) => Error::Core(core),
            other => Error::Manifest(other),
        }
    }
}
