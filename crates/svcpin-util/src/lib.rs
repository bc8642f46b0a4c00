//! Shared utilities for svcpin.
//!
//! This crate provides cross-cutting concerns used by the other svcpin
//! crates: the unified application error type, filesystem helpers, and
//! Cargo-style status lines.

pub mod errors;
pub mod fs;
pub mod status;
