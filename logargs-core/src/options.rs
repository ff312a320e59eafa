//! Built-in `--log` and `--logfile` options.
//!
//! [`LogOptions`] holds the two options every logging-aware command accepts.
//! `LoggingArgParser` registers them through `augment_args`; derive-based
//! CLIs can `#[command(flatten)]` the struct into their own and call
//! [`LogOptions::apply`] themselves.
//!
//! # Examples
//!
//! ```rust
//! use clap::Parser;
//! use logargs_core::{LogOptions, Severity};
//!
//! #[derive(Parser)]
//! struct Cli {
//!     #[command(flatten)]
//!     logging: LogOptions,
//!
//!     #[arg(short, long)]
//!     output: Option<String>,
//! }
//!
//! let cli = Cli::parse_from(["prog", "--log", "INFO", "-o", "out.txt"]);
//! assert_eq!(cli.logging.log, Severity::Info);
//! assert!(cli.logging.logfile.is_none());
//! ```

// ---- External crate imports ----
use clap::Args;

// ---- Standard library imports ----
use std::path::{Path, PathBuf};

// ---- Internal crate imports ----
use crate::config::{DEFAULT_SEVERITY, LOG_HELP, LOGFILE_HELP};
use crate::error::Result;
use crate::logger::Logger;
use crate::registry::Destination;
use crate::severity::Severity;

// Values of the built-in logging options.
// No doc comment: clap's `Args` derive would copy it into the `about` of
// every command this struct is flattened into.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct LogOptions {
    /// Minimum severity that gets logged.
    #[arg(long = "log", value_enum, default_value_t = DEFAULT_SEVERITY, help = LOG_HELP)]
    pub log: Severity,

    /// File log lines are appended to; standard error when absent.
    #[arg(long = "logfile", value_name = "LOGFILE", help = LOGFILE_HELP)]
    pub logfile: Option<PathBuf>,
}

impl LogOptions {
    pub fn logfile(&self) -> Option<&Path> {
        self.logfile.as_deref()
    }

    /// Where log output goes according to `--logfile`.
    pub fn destination(&self) -> Destination {
        Destination::from_logfile(self.logfile())
    }

    /// Configures logging from these options.
    ///
    /// Sets the threshold and destination of `logger`'s registry, then the
    /// threshold of `logger` itself, both to the `--log` severity. Runs in
    /// full on every call; calling it again overrides the previous values.
    pub fn apply(&self, logger: &Logger) -> Result<()> {
        logger.registry().configure(self.log, self.destination())?;
        logger.set_level(self.log);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    /// Tool with its own description.
    #[derive(Parser)]
    struct Tool {
        #[command(flatten)]
        logging: LogOptions,
    }

    #[test]
    fn test_flatten_keeps_outer_about() {
        let command = Tool::command();
        let about = command.get_about().map(ToString::to_string);
        assert_eq!(about.as_deref(), Some("Tool with its own description."));
        assert!(command.get_long_about().is_none());
    }

    #[test]
    fn test_augment_leaves_about_untouched() {
        let command = LogOptions::augment_args(clap::Command::new("bare"));
        assert!(command.get_about().is_none());
        assert!(command.get_long_about().is_none());
    }
}
