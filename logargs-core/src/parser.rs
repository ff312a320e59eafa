// ============================================================================
// logargs-core/src/parser.rs
// ============================================================================
//
// LOGGING-AWARE OPTION PARSER: clap Command + `--log` / `--logfile`
//
// This module wraps a `clap::Command`, registers the two built-in logging
// options on it and, on every parse, configures logging from their values
// before handing the matches back.
//
// KEY COMPONENTS:
// - LoggingArgParser: holds the command and the caller's logger handle
// - ParsedArgs: built-in values plus the caller's `ArgMatches`
//
// USAGE:
// Build the parser with a logger, add options exactly as on a clap
// `Command`, then call `parse`. Usage errors print clap's message and exit;
// only the `try_` variants return them.

// ---- External crate imports ----
use clap::{Arg, ArgMatches, Args, Command, FromArgMatches};

// ---- Standard library imports ----
use std::any::Any;
use std::ffi::OsString;
use std::path::Path;

// ---- Internal crate imports ----
use crate::config::DEFAULT_PROGRAM_NAME;
use crate::error::Result;
use crate::logger::Logger;
use crate::options::LogOptions;
use crate::severity::Severity;

/// Option parser that also accepts `--log` and `--logfile` and configures
/// logging from them.
///
/// Behaves like the wrapped `clap::Command` in every other respect: caller
/// options, positionals, subcommands and usage errors are untouched.
///
/// # Examples
///
/// ```rust,no_run
/// use clap::Arg;
/// use logargs_core::{LoggingArgParser, Logger};
///
/// let logger = Logger::new(module_path!());
///
/// let parser = LoggingArgParser::new(logger.clone())
///     .arg(Arg::new("output").short('o').long("output"));
///
/// let args = parser.parse().unwrap();
///
/// logger.info("Logging was set up from --log and/or --logfile.");
/// if let Some(output) = args.get_one::<String>("output") {
///     logger.debug(format!("Writing to {output}"));
/// }
/// ```
#[derive(Debug, Clone)]
pub struct LoggingArgParser {
    command: Command,
    logger: Logger,
}

impl LoggingArgParser {
    /// Creates a parser around a bare command.
    ///
    /// The program name shown in usage text is taken from the first token at
    /// parse time.
    pub fn new(logger: Logger) -> Self {
        Self::with_command(logger, Command::new(DEFAULT_PROGRAM_NAME))
    }

    /// Creates a parser around `command`, keeping its name, description and
    /// any options already registered on it.
    pub fn with_command(logger: Logger, command: Command) -> Self {
        let about = command.get_about().cloned();
        let long_about = command.get_long_about().cloned();

        // `augment_args` must not change the caller's description
        let command = LogOptions::augment_args(command);
        let command = match about {
            Some(about) => command.about(about),
            None => command.about(None::<&'static str>),
        };
        let command = match long_about {
            Some(long_about) => command.long_about(long_about),
            None => command.long_about(None::<&'static str>),
        };

        Self { command, logger }
    }

    /// Registers an additional option.
    pub fn arg(mut self, arg: impl Into<Arg>) -> Self {
        self.command = self.command.arg(arg);
        self
    }

    /// Registers several additional options.
    pub fn args<I, T>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Arg>,
    {
        self.command = self.command.args(args);
        self
    }

    /// Applies any other `Command` builder call, e.g. subcommands or groups.
    pub fn map_command(mut self, f: impl FnOnce(Command) -> Command) -> Self {
        self.command = f(self.command);
        self
    }

    /// The option schema.
    pub fn command(&self) -> &Command {
        &self.command
    }

    /// The handle whose threshold is set on each parse.
    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Help text, as `--help` would print it.
    pub fn render_help(&self) -> String {
        self.command.clone().render_help().to_string()
    }

    /// Parses the process arguments and configures logging.
    ///
    /// Exits the process on usage errors. Returns an error only when the log
    /// file cannot be opened or the process logger cannot be installed.
    pub fn parse(&self) -> Result<ParsedArgs> {
        self.parse_from(std::env::args_os())
    }

    /// Like [`parse`](Self::parse) with explicit tokens, the first one being
    /// the program name.
    pub fn parse_from<I, T>(&self, itr: I) -> Result<ParsedArgs>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self.command.clone().get_matches_from(itr);
        let options = LogOptions::from_arg_matches(&matches).unwrap_or_else(|err| err.exit());
        self.finish(options, matches)
    }

    /// Parses the process arguments, returning usage errors instead of exiting.
    pub fn try_parse(&self) -> Result<ParsedArgs> {
        self.try_parse_from(std::env::args_os())
    }

    /// Like [`try_parse`](Self::try_parse) with explicit tokens.
    pub fn try_parse_from<I, T>(&self, itr: I) -> Result<ParsedArgs>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self.command.clone().try_get_matches_from(itr)?;
        let options = LogOptions::from_arg_matches(&matches)?;
        self.finish(options, matches)
    }

    fn finish(&self, options: LogOptions, matches: ArgMatches) -> Result<ParsedArgs> {
        options.apply(&self.logger)?;
        Ok(ParsedArgs { options, matches })
    }
}

/// Result of one parse call.
#[derive(Debug, Clone)]
pub struct ParsedArgs {
    options: LogOptions,
    matches: ArgMatches,
}

impl ParsedArgs {
    /// Value of `--log`.
    pub fn log(&self) -> Severity {
        self.options.log
    }

    /// Value of `--logfile`.
    pub fn logfile(&self) -> Option<&Path> {
        self.options.logfile()
    }

    pub fn options(&self) -> &LogOptions {
        &self.options
    }

    /// Matches for every option, built-in and caller-added.
    pub fn matches(&self) -> &ArgMatches {
        &self.matches
    }

    /// Value of a caller-added option.
    pub fn get_one<T: Any + Clone + Send + Sync + 'static>(&self, id: &str) -> Option<&T> {
        self.matches.get_one::<T>(id)
    }

    /// Value of a caller-added flag.
    pub fn get_flag(&self, id: &str) -> bool {
        self.matches.get_flag(id)
    }

    pub fn into_parts(self) -> (LogOptions, ArgMatches) {
        (self.options, self.matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LOG_FLAG, LOGFILE_FLAG};
    use crate::registry::LogRegistry;
    use std::sync::Arc;

    fn parser() -> LoggingArgParser {
        let registry = Arc::new(LogRegistry::new());
        LoggingArgParser::new(Logger::with_registry("parser", registry))
    }

    #[test]
    fn test_builtin_options_are_registered() {
        let parser = parser();
        let log = parser
            .command()
            .get_arguments()
            .find(|arg| arg.get_id() == LOG_FLAG)
            .expect("--log is registered");
        assert_eq!(log.get_long(), Some("log"));
        let defaults = log.get_default_values();
        assert_eq!(defaults.len(), 1);
        assert_eq!(defaults[0].to_str(), Some("WARNING"));

        let names: Vec<String> = log
            .get_possible_values()
            .iter()
            .map(|value| value.get_name().to_string())
            .collect();
        assert_eq!(names, ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"]);

        let logfile = parser
            .command()
            .get_arguments()
            .find(|arg| arg.get_id() == LOGFILE_FLAG)
            .expect("--logfile is registered");
        assert!(logfile.get_default_values().is_empty());
    }

    #[test]
    fn test_caller_long_about_is_kept() {
        let registry = Arc::new(LogRegistry::new());
        let parser = LoggingArgParser::with_command(
            Logger::with_registry("kept_long", registry),
            Command::new("sample")
                .about("Short text")
                .long_about("Much longer text"),
        );
        assert_eq!(
            parser.command().get_long_about().map(ToString::to_string).as_deref(),
            Some("Much longer text")
        );
        let long_help = parser.command().clone().render_long_help().to_string();
        assert!(long_help.contains("Much longer text"));
    }

    #[test]
    fn test_help_mentions_builtin_options() {
        let help = parser().render_help();
        assert!(help.contains("--log <LOG>"));
        assert!(help.contains("--logfile <LOGFILE>"));
        assert!(help.contains("Logging level."));
    }

    #[test]
    fn test_caller_command_is_kept() {
        let registry = Arc::new(LogRegistry::new());
        let parser = LoggingArgParser::with_command(
            Logger::with_registry("kept", registry),
            Command::new("sample").about("Does sample things"),
        );
        assert_eq!(parser.command().get_name(), "sample");
        assert_eq!(
            parser.command().get_about().map(ToString::to_string).as_deref(),
            Some("Does sample things")
        );
        assert!(parser.command().get_long_about().is_none());

        let help = parser.render_help();
        assert!(help.contains("Does sample things"));
        assert!(!help.contains("Examples"));
    }
}
