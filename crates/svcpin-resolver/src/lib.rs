//! Version resolution engine: aggregates the constraints every service
//! declares on a dependency and selects the highest catalog version that
//! satisfies all of them.
//!
//! Version semantics come from a [`scheme::VersionScheme`]; the default
//! [`scheme::SemverScheme`] is backed by the `semver` crate.

pub mod conflict;
pub mod constraints;
pub mod error;
pub mod explain;
pub mod resolver;
pub mod scheme;

pub use error::ResolveError;
pub use resolver::{resolve, Resolution, ResolveOptions, Resolver};
pub use scheme::{SemverScheme, VersionScheme};
