//! Identifier derivation for generated Go code.

use crate::{Error, Result};

/// Go reserved keywords. A resource name becomes a Go package name, so it
/// cannot be one of these.
pub const GO_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Convert a string to PascalCase (e.g., "user_account" -> "UserAccount")
///
/// Each `_`-separated segment gets its first letter capitalized, the rest
/// of the segment is kept as-is. Empty segments contribute nothing.
pub fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a string to camelCase (e.g., "user_account" -> "userAccount")
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Lowercase a resource name and check that it can be used as a Go package
/// name and file-name prefix.
pub fn normalize_resource_name(name: &str) -> Result<String> {
    let normalized = name.trim().to_lowercase();
    match resource_name_issue(&normalized) {
        None => Ok(normalized),
        Some(reason) => Err(Error::InvalidResourceName {
            name: name.to_string(),
            reason,
        }),
    }
}

/// Check that a module path can be written into an import block and read
/// back unchanged.
pub fn validate_module_path(path: &str) -> Result<()> {
    match module_path_issue(path) {
        None => Ok(()),
        Some(reason) => Err(Error::InvalidModulePath {
            path: path.to_string(),
            reason,
        }),
    }
}

/// Returns None if valid, Some(reason) if invalid
pub fn module_path_issue(path: &str) -> Option<&'static str> {
    if path.is_empty() {
        return Some("module path cannot be empty");
    }
    if path.chars().any(char::is_whitespace) {
        return Some("module path contains whitespace");
    }
    if path.contains('"') {
        return Some("module path contains a quote");
    }
    None
}

/// Returns None if valid, Some(reason) if invalid
fn resource_name_issue(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if !c.is_ascii_alphabetic() => return Some("name must start with a letter"),
        Some(_) => {}
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("name contains invalid characters");
    }

    if GO_KEYWORDS.contains(&name) {
        return Some("name is a Go reserved keyword");
    }

    None
}
