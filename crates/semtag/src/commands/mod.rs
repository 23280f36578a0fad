use std::process::ExitCode;
use std::str::FromStr;

use serde::Serialize;

use semtag_version::Version;

pub(crate) use bump::bump;
pub(crate) use compare::compare;
pub(crate) use parse::parse;
pub(crate) use set::set;
pub(crate) use sort::sort;

mod bump;
mod compare;
mod parse;
mod set;
mod sort;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum ExitStatus {
    /// The command succeeded.
    Success,

    /// The command failed with an error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => Self::from(0),
            ExitStatus::Error => Self::from(2),
        }
    }
}

/// Parse every argument, stopping at the first invalid one.
fn parse_versions(versions: &[String]) -> anyhow::Result<Vec<Version>> {
    versions
        .iter()
        .map(|version| Ok(Version::from_str(version)?))
        .collect()
}

/// The JSON report of a command that derives a new version from an existing one.
#[derive(Debug, Serialize)]
struct Change {
    previous: Version,
    version: Version,
}
