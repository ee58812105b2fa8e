//! Project manifest handling for the goscaffold generator.
//!
//! Two files describe a target project:
//! - `go.mod`, whose `module` directive gives the import-path prefix for
//!   every generated package ([`GoModule`])
//! - an optional `scaffold.toml`, which tunes layout and registry output
//!   ([`ScaffoldConfig`])

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod gomod;
mod layout;

pub use config::{DefaultConfigFile, RegistryConfig, ScaffoldConfig, write_default_config};
pub use error::{Error, Result, SourceContext};
pub use gomod::GoModule;
pub use layout::Layout;
