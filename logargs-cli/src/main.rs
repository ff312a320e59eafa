// logargs-cli/src/main.rs
//
// Sample program for the logging-aware option parser.
//
// Responsibilities include:
// - Building the parser around this program's own clap command.
// - Letting the parser configure logging from `--log` and `--logfile`.
// - Writing a short report of the parsed options when `--output` is given.
// - Managing process exit codes: clap exits with 2 on usage errors, any
//   other failure is reported by `anyhow` with exit code 1.

mod cli;

use anyhow::Context;
use logargs_core::{Logger, ParsedArgs};
use std::fs;
use std::path::PathBuf;

/// Plain-text summary of the logging options that were parsed.
fn report(args: &ParsedArgs) -> String {
    let logfile = match args.logfile() {
        Some(path) => path.display().to_string(),
        None => "-".to_string(),
    };
    format!("log: {}\nlogfile: {}\n", args.log(), logfile)
}

fn run(logger: &Logger, args: &ParsedArgs) -> anyhow::Result<()> {
    logger.info("The logger was set up for us based on --log and/or --logfile command line args.");

    if let Some(output) = args.get_one::<PathBuf>(cli::OUTPUT_ARG) {
        // Goes through the same configuration via the `log` facade.
        log::debug!("Writing option report to {}", output.display());
        fs::write(output, report(args))
            .with_context(|| format!("Unable to write report to '{}'", output.display()))?;
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let logger = Logger::new(module_path!());
    let parser = cli::build_parser(logger.clone());

    let args = parser.parse().context("Unable to configure logging")?;

    run(&logger, &args)
}
