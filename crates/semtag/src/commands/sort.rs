use std::fmt::Write;

use anyhow::Result;
use tracing::debug;

use crate::cli::OutputFormat;
use crate::commands::{ExitStatus, parse_versions};
use crate::printer::Printer;

/// Print versions in order of precedence.
///
/// The sort is stable: versions with equal precedence, such as `1.0.0+a` and `1.0.0+b`, keep the
/// order in which they were given.
pub(crate) fn sort(
    versions: &[String],
    reverse: bool,
    stable_only: bool,
    format: OutputFormat,
    printer: Printer,
) -> Result<ExitStatus> {
    let mut versions = parse_versions(versions)?;

    if stable_only {
        versions.retain(|version| {
            if !version.is_stable() {
                debug!("Skipping pre-release {version}");
            }
            version.is_stable()
        });
    }

    if reverse {
        versions.sort_by(|a, b| b.cmp(a));
    } else {
        versions.sort();
    }

    match format {
        OutputFormat::Text => {
            for version in &versions {
                writeln!(printer.stdout(), "{version}")?;
            }
        }
        OutputFormat::Json => {
            writeln!(
                printer.stdout(),
                "{}",
                serde_json::to_string_pretty(&versions)?
            )?;
        }
    }

    Ok(ExitStatus::Success)
}
