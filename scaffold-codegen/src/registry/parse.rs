//! Reading entries back out of a previously rendered registry file.
//!
//! The reader only understands the layout [`render_registry`] produces.
//! Anything else is dropped and reported as a [`SkippedLine`] rather than
//! rejected, so a hand-edited file degrades to "some entries lost" instead
//! of blocking registration.
//!
//! [`render_registry`]: super::render_registry

use super::{RegistryDocument, RegistrySkeleton};

/// A line of the previous file that carried no recognizable entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number
    pub number: usize,
    /// The line as it appeared, without the line terminator
    pub text: String,
}

/// Result of reading a registry file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRegistry {
    /// Entries found, plus the baseline import
    pub document: RegistryDocument,
    /// Lines that were neither entries nor skeleton text
    pub skipped: Vec<SkippedLine>,
}

impl ParsedRegistry {
    /// Whether every line was understood.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Extract the import and model sets from registry text.
pub fn parse_registry(text: &str, skeleton: &RegistrySkeleton) -> ParsedRegistry {
    let function_prefix = skeleton.function_prefix();
    let mut document = RegistryDocument::new(skeleton);
    let mut skipped = Vec::new();

    let mut in_import = false;
    let mut in_function = false;

    for (index, line) in text.lines().enumerate() {
        let trimmed = line.trim();

        if trimmed == "import (" {
            in_import = true;
            continue;
        }

        if in_import {
            if trimmed == ")" {
                in_import = false;
                continue;
            }
            let entry = trimmed.trim_matches('"');
            if entry.is_empty() {
                continue;
            }
            // Aliased or commented imports cannot be re-rendered faithfully.
            if entry.contains(|c: char| c == '"' || c.is_whitespace()) {
                skipped.push(skip(index, line));
            } else {
                document.add_import(entry);
            }
            continue;
        }

        if trimmed.starts_with(&function_prefix) {
            in_function = true;
            continue;
        }

        if in_function && trimmed.starts_with('&') {
            let entry = trimmed.trim_end_matches(',');
            // A trailing comment would swallow the comma on re-render.
            if entry.contains(|c: char| c == '"' || c.is_whitespace()) {
                skipped.push(skip(index, line));
            } else {
                document.add_model(entry);
            }
            continue;
        }

        if !is_skeleton_line(trimmed, in_function) {
            skipped.push(skip(index, line));
        }
    }

    ParsedRegistry { document, skipped }
}

fn skip(index: usize, line: &str) -> SkippedLine {
    SkippedLine {
        number: index + 1,
        text: line.to_string(),
    }
}

/// Lines the renderer emits around the entries.
fn is_skeleton_line(trimmed: &str, in_function: bool) -> bool {
    if trimmed.is_empty() || trimmed.starts_with("package ") {
        return true;
    }
    in_function && (trimmed.starts_with("return ") || trimmed == ")" || trimmed == "}")
}
