use anstream::print;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Printer {
    /// A printer that prints to standard streams (e.g., stdout).
    Default,
    /// A printer that suppresses all output, errors excepted.
    Quiet,
    /// A printer that prints the same output as [`Printer::Default`]. Debug logs are enabled
    /// separately, through [`crate::logging::Level::Verbose`].
    Verbose,
}

impl Printer {
    /// Return the [`Stdout`] for this printer.
    pub(crate) fn stdout(self) -> Stdout {
        match self {
            Self::Default | Self::Verbose => Stdout::Enabled,
            Self::Quiet => Stdout::Disabled,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Stdout {
    Enabled,
    Disabled,
}

impl std::fmt::Write for Stdout {
    #[allow(clippy::print_stdout)]
    fn write_str(&mut self, s: &str) -> std::fmt::Result {
        match self {
            Self::Enabled => print!("{s}"),
            Self::Disabled => {}
        }

        Ok(())
    }
}
