use clap::{Args, Parser, Subcommand};

use semtag_version::Component;

#[derive(Parser)]
#[command(name = "semtag", author, version, about)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    #[command(flatten)]
    pub(crate) global_args: GlobalArgs,
}

#[derive(Args)]
pub(crate) struct GlobalArgs {
    /// Do not print any output.
    #[arg(global = true, long, short, conflicts_with = "verbose")]
    pub(crate) quiet: bool,

    /// Use verbose output.
    #[arg(global = true, long, short, conflicts_with = "quiet")]
    pub(crate) verbose: bool,

    /// Control colors in output.
    #[arg(global = true, long, value_enum, default_value = "auto")]
    pub(crate) color: ColorChoice,

    /// The format in which results are printed.
    #[arg(
        global = true,
        long,
        value_enum,
        default_value = "text",
        env = "SEMTAG_OUTPUT_FORMAT"
    )]
    pub(crate) output_format: OutputFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub(crate) enum ColorChoice {
    /// Enables colored output only when the output is going to a terminal or TTY with support.
    Auto,

    /// Enables colored output regardless of the detected environment.
    Always,

    /// Disables colored output.
    Never,
}

impl From<ColorChoice> for anstream::ColorChoice {
    fn from(value: ColorChoice) -> Self {
        match value {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// Display results as plain text.
    Text,
    /// Display results as JSON.
    Json,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Parse versions and print them in canonical form.
    Parse(ParseArgs),
    /// Compare two versions by precedence.
    Compare(CompareArgs),
    /// Increment the major, minor or patch version, dropping any labels.
    Bump(BumpArgs),
    /// Replace individual fields of a version.
    Set(SetArgs),
    /// Sort versions by precedence, lowest first.
    Sort(SortArgs),
}

#[derive(Args)]
pub(crate) struct ParseArgs {
    /// The versions to parse, e.g. `1.2`, `1.2.3-rc.1+build.5` or `42`.
    #[arg(required = true)]
    pub(crate) versions: Vec<String>,
}

#[derive(Args)]
pub(crate) struct CompareArgs {
    /// The left-hand side of the comparison.
    pub(crate) left: String,

    /// The right-hand side of the comparison.
    pub(crate) right: String,
}

#[derive(Args)]
pub(crate) struct BumpArgs {
    /// The version to increment.
    #[arg(value_name = "VERSION")]
    pub(crate) base: String,

    /// The component to increment; lower components are reset to zero.
    #[arg(value_enum)]
    pub(crate) component: Component,

    /// Attach a pre-release to the incremented version, e.g. `rc.1`.
    #[arg(long)]
    pub(crate) pre_release: Option<String>,

    /// Attach build metadata to the incremented version, e.g. `build.5`.
    #[arg(long)]
    pub(crate) build_metadata: Option<String>,
}

#[derive(Args)]
pub(crate) struct SetArgs {
    /// The version to start from.
    #[arg(value_name = "VERSION")]
    pub(crate) base: String,

    /// Replace the major version.
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) major: Option<i64>,

    /// Replace the minor version.
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) minor: Option<i64>,

    /// Replace the patch version.
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) patch: Option<i64>,

    /// Replace the pre-release.
    #[arg(long, conflicts_with = "no_pre_release")]
    pub(crate) pre_release: Option<String>,

    /// Remove the pre-release.
    #[arg(long)]
    pub(crate) no_pre_release: bool,

    /// Replace the build metadata.
    #[arg(long, conflicts_with = "no_build_metadata")]
    pub(crate) build_metadata: Option<String>,

    /// Remove the build metadata.
    #[arg(long)]
    pub(crate) no_build_metadata: bool,
}

#[derive(Args)]
pub(crate) struct SortArgs {
    /// The versions to sort.
    #[arg(required = true)]
    pub(crate) versions: Vec<String>,

    /// Sort from highest to lowest precedence.
    #[arg(long)]
    pub(crate) reverse: bool,

    /// Leave out pre-releases.
    #[arg(long)]
    pub(crate) stable_only: bool,
}
