use std::fmt::Write;

use anyhow::Result;
use serde::Serialize;

use semtag_version::Version;

use crate::cli::OutputFormat;
use crate::commands::{ExitStatus, parse_versions};
use crate::printer::Printer;

/// A parsed version, broken down into its fields.
#[derive(Debug, Serialize)]
struct Entry<'a> {
    version: &'a Version,
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Option<&'a str>,
    build_metadata: Option<&'a str>,
    stable: bool,
}

impl<'a> From<&'a Version> for Entry<'a> {
    fn from(version: &'a Version) -> Self {
        Self {
            version,
            major: version.major(),
            minor: version.minor(),
            patch: version.patch(),
            pre_release: version.pre_release(),
            build_metadata: version.build_metadata(),
            stable: version.is_stable(),
        }
    }
}

/// Print each version in canonical form.
pub(crate) fn parse(
    versions: &[String],
    format: OutputFormat,
    printer: Printer,
) -> Result<ExitStatus> {
    let versions = parse_versions(versions)?;

    match format {
        OutputFormat::Text => {
            for version in &versions {
                writeln!(printer.stdout(), "{version}")?;
            }
        }
        OutputFormat::Json => {
            let entries = versions.iter().map(Entry::from).collect::<Vec<_>>();
            writeln!(
                printer.stdout(),
                "{}",
                serde_json::to_string_pretty(&entries)?
            )?;
        }
    }

    Ok(ExitStatus::Success)
}
