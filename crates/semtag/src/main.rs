use std::process::ExitCode;

use anstream::eprintln;
use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;

use crate::cli::{Cli, Commands};
use crate::commands::ExitStatus;
use crate::printer::Printer;

mod cli;
mod commands;
mod logging;
mod printer;

fn run() -> Result<ExitStatus> {
    let cli = Cli::parse();
    let globals = cli.global_args;

    // Configure the color choice first, both the logger and the printer depend on it.
    anstream::ColorChoice::write_global(globals.color.into());

    // Configure the `tracing` crate, which controls internal logging.
    logging::setup_logging(if globals.verbose {
        logging::Level::Verbose
    } else {
        logging::Level::Default
    })?;

    // Configure the `Printer`, which controls user-facing output in the CLI.
    let printer = if globals.quiet {
        Printer::Quiet
    } else if globals.verbose {
        Printer::Verbose
    } else {
        Printer::Default
    };

    let format = globals.output_format;
    match cli.command {
        Commands::Parse(args) => commands::parse(&args.versions, format, printer),
        Commands::Compare(args) => commands::compare(&args.left, &args.right, format, printer),
        Commands::Bump(args) => commands::bump(
            &args.base,
            args.component,
            args.pre_release.as_deref(),
            args.build_metadata.as_deref(),
            format,
            printer,
        ),
        Commands::Set(args) => commands::set(&args, format, printer),
        Commands::Sort(args) => commands::sort(
            &args.versions,
            args.reverse,
            args.stable_only,
            format,
            printer,
        ),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(status) => status.into(),
        Err(err) => {
            let mut causes = err.chain();
            if let Some(cause) = causes.next() {
                eprintln!("{}: {}", "error".red().bold(), cause);
            }
            for err in causes {
                eprintln!("  {}: {}", "Caused by".red().bold(), err);
            }
            ExitStatus::Error.into()
        }
    }
}
