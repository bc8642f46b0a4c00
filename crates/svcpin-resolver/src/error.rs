use miette::Diagnostic;
use thiserror::Error;

use crate::conflict::ConflictReport;
use crate::scheme::SchemeError;

/// Why a resolution run produced no result.
#[derive(Debug, Error, Diagnostic)]
pub enum ResolveError {
    /// No available version satisfies every constraint on `dependency`.
    #[error("Cannot resolve version for {dependency}")]
    #[diagnostic(
        code(svcpin::unresolvable),
        help("No available version satisfies every declared constraint; `svcpin why <dependency>` shows which constraints reject each version")
    )]
    Unresolvable { dependency: String },

    /// Collect-all mode found one or more unresolvable dependencies.
    #[error("{0}")]
    #[diagnostic(code(svcpin::conflicts))]
    Conflicts(ConflictReport),

    /// Constraint or version text for `dependency` could not be parsed.
    #[error("{dependency}: {source}")]
    #[diagnostic(code(svcpin::malformed))]
    Scheme {
        dependency: String,
        #[source]
        source: SchemeError,
    },
}

impl ResolveError {
    /// Names of the dependencies this error is about.
    pub fn dependencies(&self) -> Vec<&str> {
        match self {
            ResolveError::Unresolvable { dependency } => vec![dependency.as_str()],
            ResolveError::Conflicts(report) => report.dependencies().collect(),
            ResolveError::Scheme { dependency, .. } => vec![dependency.as_str()],
        }
    }

    pub fn conflicts(&self) -> Option<&ConflictReport> {
        match self {
            ResolveError::Conflicts(report) => Some(report),
            _ => None,
        }
    }
}
