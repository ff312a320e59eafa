// logargs-core/tests/global_registry_tests.rs
//
// Configuring the process-wide registry. Kept in its own test binary: the
// global registry and the `log` facade are shared by every test in a process.

use logargs_core::{Logger, LoggingArgParser};
use std::error::Error;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_debug_logfile_holds_only_caller_lines() -> Result<(), Box<dyn Error>> {
    let log_dir = tempdir()?;
    let log_path = log_dir.path().join("global.log");
    let log_arg = log_path.to_str().expect("temp paths are valid UTF-8");

    let logger = Logger::new("only_caller_lines");
    assert!(logger.registry().is_global());

    let parser = LoggingArgParser::new(logger.clone());
    parser.try_parse_from(["prog", "--log", "DEBUG", "--logfile", log_arg])?;

    logger.debug("only line");
    logger.flush();

    assert_eq!(
        fs::read_to_string(&log_path)?,
        "DEBUG:only_caller_lines:only line\n"
    );

    Ok(())
}
