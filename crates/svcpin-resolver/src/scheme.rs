//! Version parsing, ordering, and constraint matching.
//!
//! The resolver never compares version strings itself. It goes through a
//! [`VersionScheme`], which turns text into ordered versions and constraint
//! predicates. [`SemverScheme`] implements it on top of `semver`, with a few
//! conveniences on the constraint syntax:
//!
//! - a bare version (`1.2.3`) or `==1.2.3` pins exactly that version; a
//!   partial one (`1.4`) is padded with zeros and pins `1.4.0`
//! - `!=1.2.3` excludes one version, `!=1.4.*` a whole wildcard range
//! - comparators may be separated by commas or whitespace (`>=1.0.0 <2.0.0`)
//! - `||` separates alternatives, any of which may match
//!
//! Versions order by SemVer precedence, so build metadata never makes one
//! version greater than another.

use std::cmp::Ordering;
use std::fmt;

use miette::Diagnostic;
use semver::{Version, VersionReq};
use thiserror::Error;

/// Malformed constraint or version text.
#[derive(Debug, Error, Diagnostic)]
pub enum SchemeError {
    #[error("invalid version constraint '{text}': {reason}")]
    #[diagnostic(help(
        "Use an exact version (1.2.3), a wildcard (1.4.*), an exclusion (!=1.2.3), or comparators (>=1.0.0, <2.0.0)"
    ))]
    InvalidConstraint { text: String, reason: String },

    #[error("invalid version '{text}': {reason}")]
    #[diagnostic(help("Versions must be full major.minor.patch semver, e.g. 1.4.0 or 2.0.0-rc.1"))]
    InvalidVersion { text: String, reason: String },
}

/// The capability the resolver consumes: parse versions and constraints,
/// and decide whether a version satisfies a constraint.
pub trait VersionScheme {
    /// A parsed version. Ordering must be total.
    type Version: Ord + fmt::Debug;
    /// A parsed constraint predicate.
    type Constraint: fmt::Debug;

    fn parse_version(&self, text: &str) -> Result<Self::Version, SchemeError>;

    fn parse_constraint(&self, text: &str) -> Result<Self::Constraint, SchemeError>;

    fn allows(&self, constraint: &Self::Constraint, version: &Self::Version) -> bool;
}

/// Semantic versioning backed by the `semver` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SemverScheme;

impl VersionScheme for SemverScheme {
    type Version = SemverVersion;
    type Constraint = SemverConstraint;

    fn parse_version(&self, text: &str) -> Result<SemverVersion, SchemeError> {
        Version::parse(text.trim())
            .map(SemverVersion)
            .map_err(|e| SchemeError::InvalidVersion {
                text: text.to_string(),
                reason: e.to_string(),
            })
    }

    fn parse_constraint(&self, text: &str) -> Result<SemverConstraint, SchemeError> {
        SemverConstraint::parse(text)
    }

    fn allows(&self, constraint: &SemverConstraint, version: &SemverVersion) -> bool {
        constraint.allows(version.as_semver())
    }
}

/// A semver version compared by precedence: `1.0.0+a` and `1.0.0+b` are
/// equal.
#[derive(Debug, Clone)]
pub struct SemverVersion(Version);

impl SemverVersion {
    pub fn as_semver(&self) -> &Version {
        &self.0
    }
}

impl From<Version> for SemverVersion {
    fn from(version: Version) -> Self {
        Self(version)
    }
}

impl PartialEq for SemverVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SemverVersion {}

impl PartialOrd for SemverVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SemverVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp_precedence(&other.0)
    }
}

impl fmt::Display for SemverVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A parsed constraint: one or more alternatives, each a conjunction of
/// comparators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemverConstraint {
    text: String,
    alternatives: Vec<Alternative>,
}

/// One `||` branch: everything `required` matches, minus anything an
/// exclusion matches.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Alternative {
    required: VersionReq,
    excluded: Vec<VersionReq>,
}

impl Alternative {
    fn matches(&self, version: &Version) -> bool {
        self.required.matches(version) && !self.excluded.iter().any(|req| req.matches(version))
    }
}

impl SemverConstraint {
    pub fn parse(text: &str) -> Result<Self, SchemeError> {
        let invalid = |reason: String| SchemeError::InvalidConstraint {
            text: text.to_string(),
            reason,
        };

        if text.trim().is_empty() {
            return Err(invalid("constraint is empty".to_string()));
        }

        let parse_req = |req: &str| VersionReq::parse(req).map_err(|e| invalid(e.to_string()));

        let mut alternatives = Vec::new();
        for alternative in text.split("||") {
            let normalized = normalize_alternative(alternative).map_err(&invalid)?;
            let excluded = normalized
                .excluded
                .iter()
                .map(|req| parse_req(req))
                .collect::<Result<_, _>>()?;
            alternatives.push(Alternative {
                required: parse_req(&normalized.required)?,
                excluded,
            });
        }

        Ok(Self {
            text: text.to_string(),
            alternatives,
        })
    }

    /// Whether `version` satisfies any alternative of this constraint.
    pub fn allows(&self, version: &Version) -> bool {
        self.alternatives.iter().any(|alt| alt.matches(version))
    }

    /// The constraint text as originally written.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for SemverConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// One alternative rewritten into requirements `semver` accepts.
struct NormalizedAlternative {
    required: String,
    excluded: Vec<String>,
}

/// Rewrite one `||` alternative into a comma-separated requirement plus one
/// requirement per `!=` exclusion.
fn normalize_alternative(alternative: &str) -> Result<NormalizedAlternative, String> {
    let mut comparators = Vec::new();
    let mut excluded = Vec::new();
    let mut pending_op = String::new();

    for token in alternative
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        // `>= 1.0.0` splits into an operator token and a version token
        if token.chars().all(is_operator_char) {
            pending_op.push_str(token);
            continue;
        }
        let comparator = format!("{pending_op}{token}");
        pending_op.clear();
        match comparator.strip_prefix("!=") {
            Some(version) => excluded.push(exact(version)),
            None => comparators.push(normalize_comparator(&comparator)),
        }
    }

    if !pending_op.is_empty() {
        return Err(format!("operator '{pending_op}' is missing a version"));
    }
    if comparators.is_empty() && excluded.is_empty() {
        return Err("empty alternative".to_string());
    }

    let required = if comparators.is_empty() {
        "*".to_string()
    } else {
        comparators.join(", ")
    };
    Ok(NormalizedAlternative { required, excluded })
}

fn normalize_comparator(comparator: &str) -> String {
    if let Some(rest) = comparator.strip_prefix("==") {
        return exact(rest);
    }
    if let Some(rest) = comparator.strip_prefix('=') {
        return exact(rest);
    }
    if comparator.starts_with(|c: char| c.is_ascii_digit()) {
        return exact(comparator);
    }
    comparator.to_string()
}

/// `=version`, zero-padded to `major.minor.patch`. Wildcards stay as they
/// are and keep matching their whole range.
fn exact(version: &str) -> String {
    if is_wildcard(version) {
        return format!("={version}");
    }
    let end = version.find(['-', '+']).unwrap_or(version.len());
    let (release, suffix) = version.split_at(end);
    let parts: Vec<&str> = release.split('.').collect();
    let numeric = parts
        .iter()
        .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()));
    if numeric && parts.len() < 3 {
        let padding = ".0".repeat(3 - parts.len());
        return format!("={release}{padding}{suffix}");
    }
    format!("={version}")
}

fn is_operator_char(c: char) -> bool {
    matches!(c, '=' | '!' | '<' | '>' | '~' | '^')
}

fn is_wildcard(comparator: &str) -> bool {
    comparator
        .split('.')
        .any(|part| matches!(part, "*" | "x" | "X"))
}
