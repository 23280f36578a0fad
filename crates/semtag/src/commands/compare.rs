use std::cmp::Ordering;
use std::fmt::Write;
use std::str::FromStr;

use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;

use semtag_version::Version;

use crate::cli::OutputFormat;
use crate::commands::ExitStatus;
use crate::printer::Printer;

#[derive(Debug, Serialize)]
struct Comparison {
    left: Version,
    right: Version,
    #[serde(serialize_with = "serialize_ordering")]
    ordering: Ordering,
}

fn serialize_ordering<S: serde::Serializer>(
    ordering: &Ordering,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(match ordering {
        Ordering::Less => "less",
        Ordering::Equal => "equal",
        Ordering::Greater => "greater",
    })
}

/// Compare two versions by precedence.
pub(crate) fn compare(
    left: &str,
    right: &str,
    format: OutputFormat,
    printer: Printer,
) -> Result<ExitStatus> {
    let left = Version::from_str(left)?;
    let right = Version::from_str(right)?;
    let ordering = left.cmp(&right);

    match format {
        OutputFormat::Text => {
            let operator = match ordering {
                Ordering::Less => "<",
                Ordering::Equal => "==",
                Ordering::Greater => ">",
            };
            writeln!(printer.stdout(), "{left} {} {right}", operator.bold())?;
        }
        OutputFormat::Json => {
            let comparison = Comparison {
                left,
                right,
                ordering,
            };
            writeln!(
                printer.stdout(),
                "{}",
                serde_json::to_string_pretty(&comparison)?
            )?;
        }
    }

    Ok(ExitStatus::Success)
}
