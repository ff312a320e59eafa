use thiserror::Error;

/// Errors raised while parsing options or configuring logging.
#[derive(Error, Debug)]
pub enum LogArgsError {
    /// The tokens did not match the option schema.
    ///
    /// Only returned by the `try_` parse entry points; the others print usage
    /// and exit through clap.
    #[error(transparent)]
    Usage(#[from] clap::Error),

    /// The log file could not be opened for appending.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Another logger already owns the `log` facade.
    #[error("Unable to install the process-wide logger: {0}")]
    Install(#[from] log::SetLoggerError),
}

/// Result type for logargs operations
pub type Result<T> = std::result::Result<T, LogArgsError>;
