// logargs-cli/src/cli.rs
//
// Defines the sample program's command-line options.

use clap::{Arg, Command, crate_description, crate_version, value_parser};
use logargs_core::{Logger, LoggingArgParser};
use std::path::PathBuf;

/// Id of the program's own `-o/--output` option.
pub const OUTPUT_ARG: &str = "output";

// --- CLI Argument Definition ---

/// Builds the parser: the program's command plus `--log` and `--logfile`.
pub fn build_parser(logger: Logger) -> LoggingArgParser {
    let command = Command::new("logargs-sample")
        .version(crate_version!()) // Reads from Cargo.toml via "cargo" feature in clap
        .about(crate_description!());

    // Instead of the usual bare `Command`, the logging-aware parser.
    LoggingArgParser::with_command(logger, command).arg(
        Arg::new(OUTPUT_ARG)
            .short('o')
            .long("output")
            .value_name("OUTPUT")
            .value_parser(value_parser!(PathBuf))
            .help("Optional file a summary of the parsed options is written to"),
    )
}
