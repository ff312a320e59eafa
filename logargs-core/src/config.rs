//! Configuration constants for the logging-aware option parser.
//!
//! Flag names and help texts for the two built-in options, the default
//! severity and the names used when records travel through the `log` facade.

use crate::severity::Severity;

// Built-in options

/// Id and long name of the level option (`--log`).
pub const LOG_FLAG: &str = "log";

/// Id and long name of the log file option (`--logfile`).
pub const LOGFILE_FLAG: &str = "logfile";

/// Help text for `--log`.
pub const LOG_HELP: &str = "Logging level.";

/// Help text for `--logfile`.
pub const LOGFILE_HELP: &str = "Optional file path that logs should be appended to. \
                                The file will be created if it does not exist.";

/// Severity used when `--log` is not given, and the registry's threshold
/// before it is first configured.
pub const DEFAULT_SEVERITY: Severity = Severity::Warning;

// Records

/// Key-value name carrying the severity on a `log::Record`.
///
/// `log` has no level above `Error`, so `CRITICAL` would otherwise be lost.
pub const SEVERITY_KEY: &str = "severity";

/// Program name used in usage text when none can be taken from the process
/// arguments.
pub const DEFAULT_PROGRAM_NAME: &str = "program";
