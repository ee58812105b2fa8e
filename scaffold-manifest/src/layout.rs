//! Where resource packages live inside a Go module.

use std::{fmt, str::FromStr};

use serde::Deserialize;

/// Directory layout for generated resource packages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Packages sit directly under the module root: `<module>/<name>`
    Flat,
    /// Packages sit under `internal/`: `<module>/internal/<name>`
    #[default]
    Internal,
    /// Packages sit under `src/`: `<module>/src/<name>`
    Src,
}

impl Layout {
    /// Returns the layout identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Flat => "flat",
            Layout::Internal => "internal",
            Layout::Src => "src",
        }
    }

    /// Directory that holds resource packages, relative to the module root.
    pub fn root_dir(&self) -> Option<&'static str> {
        match self {
            Layout::Flat => None,
            Layout::Internal => Some("internal"),
            Layout::Src => Some("src"),
        }
    }

    /// Import path of a resource package within `module`.
    pub fn package_import_path(&self, module: &str, package: &str) -> String {
        let module = module.trim_end_matches('/');
        match self.root_dir() {
            Some(root) => format!("{}/{}/{}", module, root, package),
            None => format!("{}/{}", module, package),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flat" => Ok(Layout::Flat),
            "internal" => Ok(Layout::Internal),
            "src" => Ok(Layout::Src),
            _ => Err(format!(
                "unknown layout '{}', expected 'flat', 'internal' or 'src'",
                s
            )),
        }
    }
}
