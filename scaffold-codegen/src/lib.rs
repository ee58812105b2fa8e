//! Migration registry generation for goscaffold.
//!
//! A Go service scaffolded by goscaffold keeps one generated file that
//! imports every resource package and hands each model to GORM's
//! `AutoMigrate`. This crate keeps that file up to date as resources are
//! added.
//!
//! # Module Organization
//!
//! - [`builder`] - Indentation-aware code building (CodeBuilder)
//! - [`registry`] - Registry parsing, merging and rendering
//! - [`Project`] - Registration against a project directory

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod builder;
mod error;
mod project;
pub mod registry;
mod resource;

pub use error::{Error, Result};
pub use project::{Project, RegistrationReport, read_registry, register_resource};
pub use resource::ResourceDescriptor;
