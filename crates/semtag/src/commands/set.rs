use std::fmt::Write;
use std::str::FromStr;

use anyhow::{Context, Result};

use semtag_version::Version;

use crate::cli::{OutputFormat, SetArgs};
use crate::commands::{Change, ExitStatus};
use crate::printer::Printer;

/// Replace fields of a version, numbers first and labels last.
pub(crate) fn set(args: &SetArgs, format: OutputFormat, printer: Printer) -> Result<ExitStatus> {
    let previous = Version::from_str(&args.base)?;
    let mut version = previous.clone();

    if let Some(major) = args.major {
        version = version
            .with_major(major)
            .context("Failed to set the major version")?;
    }
    if let Some(minor) = args.minor {
        version = version
            .with_minor(minor)
            .context("Failed to set the minor version")?;
    }
    if let Some(patch) = args.patch {
        version = version
            .with_patch(patch)
            .context("Failed to set the patch version")?;
    }
    if args.no_pre_release {
        version = version.with_pre_release(None)?;
    } else if let Some(pre_release) = args.pre_release.as_deref() {
        version = version
            .with_pre_release(Some(pre_release))
            .context("Failed to set the pre-release")?;
    }
    if args.no_build_metadata {
        version = version.with_build_metadata(None)?;
    } else if let Some(build_metadata) = args.build_metadata.as_deref() {
        version = version
            .with_build_metadata(Some(build_metadata))
            .context("Failed to set the build metadata")?;
    }

    match format {
        OutputFormat::Text => writeln!(printer.stdout(), "{version}")?,
        OutputFormat::Json => {
            let change = Change { previous, version };
            writeln!(
                printer.stdout(),
                "{}",
                serde_json::to_string_pretty(&change)?
            )?;
        }
    }

    Ok(ExitStatus::Success)
}
