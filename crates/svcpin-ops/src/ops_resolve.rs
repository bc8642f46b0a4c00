//! Operation: resolve one version per dependency and print the pins.

use std::path::{Path, PathBuf};

use svcpin_core::config::{GlobalConfig, OutputFormat};
use svcpin_resolver::Resolution;
use svcpin_util::errors::SvcpinError;

use crate::{effective_mode, Project};

/// Options for `svcpin resolve`.
#[derive(Debug, Default)]
pub struct ResolveOptions {
    /// Catalog file replacing the manifest's `[available]` table.
    pub catalog: Option<PathBuf>,
    /// Output format; falls back to the global config.
    pub format: Option<OutputFormat>,
    /// Report every unresolvable dependency instead of stopping at the first.
    pub all_conflicts: bool,
}

/// Resolve the project and print the chosen version of each dependency.
pub fn resolve(project_root: &Path, opts: &ResolveOptions) -> miette::Result<()> {
    let config = GlobalConfig::load()?;
    let project = Project::load(project_root, opts.catalog.as_deref())?;
    let mode = effective_mode(opts.all_conflicts, &config);
    let format = opts.format.unwrap_or(config.output.format);

    svcpin_util::status::status(
        "Resolving",
        &format!("{} services ({mode})", project.services.len()),
    );
    let resolution = project.resolve(mode)?;

    println!("{}", render(&resolution, format)?);
    Ok(())
}

/// Render pins as `name version` lines or as a JSON object.
pub fn render(resolution: &Resolution, format: OutputFormat) -> miette::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(resolution).map_err(|e| {
            SvcpinError::Generic {
                message: format!("Failed to serialize resolution: {e}"),
            }
            .into()
        }),
        OutputFormat::Text => {
            if resolution.is_empty() {
                return Ok("No dependencies to resolve.".to_string());
            }
            let width = resolution.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
            let lines: Vec<String> = resolution
                .iter()
                .map(|(name, version)| format!("{name:<width$} {version}"))
                .collect();
            Ok(lines.join("\n"))
        }
    }
}
