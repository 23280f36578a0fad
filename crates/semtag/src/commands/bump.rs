use std::fmt::Write;
use std::str::FromStr;

use anyhow::{Context, Result};
use tracing::debug;

use semtag_version::{Component, Version};

use crate::cli::OutputFormat;
use crate::commands::{Change, ExitStatus};
use crate::printer::Printer;

/// Increment a component of a version, optionally attaching new labels.
pub(crate) fn bump(
    version: &str,
    component: Component,
    pre_release: Option<&str>,
    build_metadata: Option<&str>,
    format: OutputFormat,
    printer: Printer,
) -> Result<ExitStatus> {
    let previous = Version::from_str(version)?;

    let mut bumped = previous
        .bump(component)
        .with_context(|| format!("Failed to bump the {component} version of {previous}"))?;
    debug!("Bumped {previous} to {bumped}");

    if let Some(pre_release) = pre_release {
        bumped = bumped
            .with_pre_release(Some(pre_release))
            .with_context(|| format!("Failed to attach a pre-release to {bumped}"))?;
    }
    if let Some(build_metadata) = build_metadata {
        bumped = bumped
            .with_build_metadata(Some(build_metadata))
            .with_context(|| format!("Failed to attach build metadata to {bumped}"))?;
    }

    match format {
        OutputFormat::Text => writeln!(printer.stdout(), "{bumped}")?,
        OutputFormat::Json => {
            let change = Change {
                previous,
                version: bumped,
            };
            writeln!(
                printer.stdout(),
                "{}",
                serde_json::to_string_pretty(&change)?
            )?;
        }
    }

    Ok(ExitStatus::Success)
}
