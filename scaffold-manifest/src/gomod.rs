//! Module path discovery from `go.mod`.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use goscaffold_core::module_path_issue;
use miette::SourceSpan;

use crate::{Error, Result, SourceContext};

/// The `module` directive of a Go project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoModule {
    path: String,
}

impl GoModule {
    /// Conventional manifest file name.
    pub const FILE_NAME: &'static str = "go.mod";

    /// Create a module from an already known import path.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Read `go.mod` from a project root.
    pub fn discover(root: impl AsRef<Path>) -> Result<Self> {
        Self::from_file(root.as_ref().join(Self::FILE_NAME))
    }

    /// Read and parse a `go.mod` file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: PathBuf::from(path),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse `go.mod` content with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let mut offset = 0;

        for line in content.split_inclusive('\n') {
            let line_start = offset;
            offset += line.len();

            let Some(rest) = directive_argument(line, "module") else {
                continue;
            };

            let path = unquote(strip_line_comment(rest).trim());
            let span = SourceSpan::from((line_start, line.trim_end().len()));

            if let Some(reason) = module_path_issue(path) {
                return Err(ctx.validation_error(reason, Some(span)));
            }

            return Ok(Self::new(path));
        }

        Err(ctx.missing_module_error())
    }

    /// The module import path, e.g. `github.com/acme/api`.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl FromStr for GoModule {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, Self::FILE_NAME)
    }
}

/// If `line` is the given directive, return everything after the keyword.
fn directive_argument<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let trimmed = line.trim();
    let rest = trimmed.strip_prefix(keyword)?;
    match rest.chars().next() {
        None => Some(rest),
        Some(c) if c.is_whitespace() => Some(rest),
        _ => None,
    }
}

fn strip_line_comment(s: &str) -> &str {
    match s.find("//") {
        Some(pos) => &s[..pos],
        None => s,
    }
}

fn unquote(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| s.strip_prefix('`').and_then(|s| s.strip_suffix('`')))
        .unwrap_or(s)
}
