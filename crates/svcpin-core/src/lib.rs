//! Core data types for svcpin.
//!
//! This crate defines the inputs and outputs of a resolution run: service
//! declarations, the catalog of available versions, the `svcpin.toml`
//! manifest, the `svcpin.lock` lockfile, and global configuration.
//!
//! This crate is intentionally free of version semantics; constraint text
//! and version strings are carried verbatim and interpreted by the resolver.

/// File name of the project manifest.
pub const MANIFEST_FILE: &str = "svcpin.toml";

/// File name of the lockfile written next to the manifest.
pub const LOCKFILE_FILE: &str = "svcpin.lock";

pub mod catalog;
pub mod config;
pub mod lockfile;
pub mod manifest;
pub mod service;
