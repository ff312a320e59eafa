//! Command-line option parsing that configures logging.
//!
//! This crate wraps a `clap::Command` so that, next to whatever options a
//! program defines, it also accepts:
//!
//! - `--log {DEBUG,INFO,WARNING,ERROR,CRITICAL}` (default `WARNING`)
//! - `--logfile PATH`, appended to and created if missing (default: stderr)
//!
//! Parsing sets the process-wide threshold and destination as well as the
//! threshold of the program's own logger, then returns the parsed options.
//! Log lines are written as `LEVEL:logger-name:message`.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use clap::Arg;
//! use logargs_core::{LoggingArgParser, Logger};
//!
//! let logger = Logger::new(module_path!());
//! let parser = LoggingArgParser::new(logger.clone())
//!     .arg(Arg::new("output").short('o').long("output"));
//!
//! let args = parser.parse().unwrap();
//! logger.info("The logger was set up from --log and/or --logfile.");
//!
//! if let Some(output) = args.get_one::<String>("output") {
//!     logger.debug(format!("Output goes to {output}"));
//! }
//! ```
//!
//! Derive-based programs can flatten [`LogOptions`] into their own `Parser`
//! struct and call [`LogOptions::apply`] instead.

pub mod config;
pub mod error;
pub mod logger;
pub mod options;
pub mod parser;
pub mod registry;
pub mod severity;

// Re-exports for public API
pub use error::{LogArgsError, Result};
pub use logger::Logger;
pub use options::LogOptions;
pub use parser::{LoggingArgParser, ParsedArgs};
pub use registry::{Destination, LogRegistry};
pub use severity::{ParseSeverityError, Severity};
