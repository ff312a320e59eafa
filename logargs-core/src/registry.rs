// ============================================================================
// logargs-core/src/registry.rs
// ============================================================================
//
// LOG REGISTRY: Process-Wide Logging Configuration
//
// This module holds the state `--log` and `--logfile` configure: the global
// severity threshold, the output destination and the per-logger threshold
// overrides. Output goes through a `fern` dispatch that is rebuilt and
// swapped in on every configuration, so configuring twice simply replaces the
// previous setup.
//
// KEY COMPONENTS:
// - LogRegistry: the injectable configuration object
// - Destination: standard error or an append-mode log file
// - Bridge: routes the `log` facade into the process-wide registry
//
// The process-wide registry is created lazily; tests build their own and call
// `reset` between runs.

// ---- External crate imports ----
use log::{LevelFilter, Log, Metadata, Record};
use once_cell::sync::{Lazy, OnceCell};

// ---- Standard library imports ----
use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

// ---- Internal crate imports ----
use crate::config::DEFAULT_SEVERITY;
use crate::error::Result;
use crate::severity::Severity;

static GLOBAL: Lazy<Arc<LogRegistry>> = Lazy::new(|| Arc::new(LogRegistry::new()));

static BRIDGE: OnceCell<()> = OnceCell::new();

/// Bare-message stderr output used before the registry is configured.
static LAST_RESORT: Lazy<Box<dyn Log>> = Lazy::new(|| {
    fern::Dispatch::new()
        .format(|out, message, _record| out.finish(format_args!("{message}")))
        .level(LevelFilter::Warn)
        .chain(io::stderr())
        .into_log()
        .1
});

/// Where emitted log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// The process's standard error stream.
    Stderr,
    /// A file opened in append mode, created if absent.
    File(PathBuf),
}

impl Destination {
    /// Destination for an optional `--logfile` value.
    pub fn from_logfile(logfile: Option<&Path>) -> Self {
        match logfile {
            Some(path) => Destination::File(path.to_path_buf()),
            None => Destination::Stderr,
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Stderr => f.write_str("standard error"),
            Destination::File(path) => write!(f, "{}", path.display()),
        }
    }
}

struct Output {
    destination: Destination,
    sink: Box<dyn Log>,
}

struct State {
    threshold: Severity,
    overrides: HashMap<String, Severity>,
    output: Option<Output>,
}

impl State {
    fn new() -> Self {
        Self {
            threshold: DEFAULT_SEVERITY,
            overrides: HashMap::new(),
            output: None,
        }
    }

    /// Walks `a::b.c` -> `a::b` -> `a` looking for an override.
    fn effective_threshold(&self, name: &str) -> Severity {
        let mut current = name;
        loop {
            if let Some(severity) = self.overrides.get(current) {
                return *severity;
            }
            match current.rfind(['.', ':']) {
                Some(idx) => current = current[..idx].trim_end_matches(':'),
                None => return self.threshold,
            }
        }
    }
}

/// Process-wide logging configuration.
///
/// Holds the global severity threshold, the output destination and the
/// thresholds set on individual named loggers. Records are filtered against
/// the most specific threshold for their target and written in the
/// `LEVEL:name:message` line format.
pub struct LogRegistry {
    state: RwLock<State>,
}

impl LogRegistry {
    /// Creates an unconfigured registry with a `WARNING` threshold.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State::new()),
        }
    }

    /// The registry shared by the whole process.
    pub fn global() -> Arc<Self> {
        Arc::clone(&GLOBAL)
    }

    /// Whether this is the process-wide registry.
    pub fn is_global(&self) -> bool {
        std::ptr::eq(self, Arc::as_ptr(&GLOBAL))
    }

    /// Sets the global threshold and output destination.
    ///
    /// The log file, if any, is opened before anything changes, so a failed
    /// open leaves the previous configuration in place. Configuring again
    /// replaces the previous threshold and destination.
    pub fn configure(&self, threshold: Severity, destination: Destination) -> Result<()> {
        if self.is_global() {
            install_bridge()?;
        }

        let sink = build_sink(&destination)?;
        let previous = {
            let mut state = self.write();
            state.threshold = threshold;
            state.output.replace(Output { destination, sink })
        };
        if let Some(previous) = previous {
            previous.sink.flush();
        }

        Ok(())
    }

    /// Global threshold.
    pub fn threshold(&self) -> Severity {
        self.read().threshold
    }

    /// Current output destination, `None` until configured.
    pub fn destination(&self) -> Option<Destination> {
        self.read()
            .output
            .as_ref()
            .map(|output| output.destination.clone())
    }

    /// Whether `configure` has been called since creation or the last reset.
    pub fn is_configured(&self) -> bool {
        self.read().output.is_some()
    }

    /// Overrides the threshold of the logger called `name` and its descendants.
    pub fn set_logger_threshold(&self, name: &str, severity: Severity) {
        let _ = self.write().overrides.insert(name.to_string(), severity);
    }

    /// Threshold set directly on the logger called `name`.
    pub fn logger_threshold(&self, name: &str) -> Option<Severity> {
        self.read().overrides.get(name).copied()
    }

    /// Threshold that applies to records targeted at `name`.
    pub fn effective_threshold(&self, name: &str) -> Severity {
        self.read().effective_threshold(name)
    }

    /// Whether a record from logger `name` at `severity` would be emitted.
    pub fn is_enabled_for(&self, name: &str, severity: Severity) -> bool {
        severity >= self.effective_threshold(name)
    }

    /// Writes `record` if its severity passes the threshold for its target.
    pub fn emit(&self, record: &Record<'_>) {
        let severity = Severity::of_record(record);
        let state = self.read();
        if severity < state.effective_threshold(record.target()) {
            return;
        }

        match &state.output {
            Some(output) => output.sink.log(record),
            None => LAST_RESORT.log(record),
        }
    }

    /// Flushes the current output, if any.
    pub fn flush(&self) {
        if let Some(output) = &self.read().output {
            output.sink.flush();
        }
    }

    /// Drops the output and every override, returning to the unconfigured state.
    pub fn reset(&self) {
        let previous = std::mem::replace(&mut *self.write(), State::new());
        if let Some(output) = previous.output {
            output.sink.flush();
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for LogRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LogRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.read();
        f.debug_struct("LogRegistry")
            .field("threshold", &state.threshold)
            .field(
                "destination",
                &state.output.as_ref().map(|output| &output.destination),
            )
            .field("overrides", &state.overrides)
            .finish()
    }
}

/// Builds the dispatch writing `LEVEL:name:message` lines to `destination`.
fn build_sink(destination: &Destination) -> io::Result<Box<dyn Log>> {
    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}:{}:{}",
                Severity::of_record(record),
                record.target(),
                message
            ))
        })
        .level(LevelFilter::Trace);

    let dispatch = match destination {
        Destination::Stderr => dispatch.chain(io::stderr()),
        Destination::File(path) => dispatch.chain(fern::log_file(path)?),
    };

    Ok(dispatch.into_log().1)
}

/// Routes the `log` facade into the process-wide registry.
struct Bridge(Arc<LogRegistry>);

impl Log for Bridge {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.0
            .is_enabled_for(metadata.target(), Severity::ceiling(metadata.level()))
    }

    fn log(&self, record: &Record<'_>) {
        self.0.emit(record);
    }

    fn flush(&self) {
        self.0.flush();
    }
}

/// Installs the bridge the first time the process-wide registry is configured.
fn install_bridge() -> std::result::Result<(), log::SetLoggerError> {
    BRIDGE.get_or_try_init(|| {
        log::set_boxed_logger(Box::new(Bridge(LogRegistry::global())))?;
        log::set_max_level(LevelFilter::Trace);
        Ok::<(), log::SetLoggerError>(())
    })?;
    Ok(())
}
