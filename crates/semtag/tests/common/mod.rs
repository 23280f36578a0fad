// The `unreachable_pub` is to silence false positives in RustRover.
#![allow(dead_code, unreachable_pub)]

use std::path::PathBuf;
use std::process::{Command, Output};

/// Returns the semtag binary that cargo built before running the tests.
pub fn get_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_semtag"))
}

/// Create a `semtag <subcommand>` command isolated from the caller's environment.
///
/// Colors are disabled so that snapshots don't depend on whether the tests run in a terminal.
pub fn semtag_command(subcommand: &str) -> Command {
    let mut command = Command::new(get_bin());
    command
        .arg(subcommand)
        .arg("--color")
        .arg("never")
        .env_remove("RUST_LOG")
        .env_remove("SEMTAG_OUTPUT_FORMAT");
    command
}

/// Execute the command and format its output status, stdout and stderr into a snapshot string.
pub fn run_and_format(command: &mut Command) -> (String, Output) {
    let program = command.get_program().to_string_lossy().to_string();
    let output = command
        .output()
        .unwrap_or_else(|err| panic!("Failed to spawn {program}: {err}"));

    let snapshot = format!(
        "success: {:?}\nexit_code: {}\n----- stdout -----\n{}\n----- stderr -----\n{}",
        output.status.success(),
        output.status.code().unwrap_or(!0),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    (snapshot, output)
}

/// Run a command and snapshot its exit status and output with an inline insta snapshot.
#[allow(unused_macros)]
macro_rules! semtag_snapshot {
    ($command:expr, @$snapshot:literal) => {{
        let (snapshot, output) = $crate::common::run_and_format(&mut $command);
        ::insta::assert_snapshot!(snapshot, @$snapshot);
        output
    }};
}

/// <https://stackoverflow.com/a/31749071/3549270>
#[allow(unused_imports)]
pub(crate) use semtag_snapshot;
