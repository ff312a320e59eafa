//! Named logger handles.
//!
//! A [`Logger`] is what a program creates once, usually named after its
//! module, and hands to [`LoggingArgParser`](crate::LoggingArgParser). Its
//! threshold lives in the [`LogRegistry`], so every handle with the same name
//! sees the level the parser set.

// ---- External crate imports ----
use log::Record;

// ---- Standard library imports ----
use std::fmt;
use std::sync::Arc;

// ---- Internal crate imports ----
use crate::config::SEVERITY_KEY;
use crate::registry::LogRegistry;
use crate::severity::Severity;

/// A named log sink backed by a [`LogRegistry`].
///
/// # Examples
///
/// ```rust
/// use logargs_core::{LogRegistry, Logger, Severity};
/// use std::sync::Arc;
///
/// let registry = Arc::new(LogRegistry::new());
/// let logger = Logger::with_registry("sample", Arc::clone(&registry));
///
/// logger.set_level(Severity::Info);
/// assert!(logger.is_enabled_for(Severity::Info));
/// assert!(!logger.is_enabled_for(Severity::Debug));
/// ```
#[derive(Debug, Clone)]
pub struct Logger {
    name: String,
    registry: Arc<LogRegistry>,
}

impl Logger {
    /// Creates a handle on the process-wide registry.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_registry(name, LogRegistry::global())
    }

    /// Creates a handle on an explicit registry.
    pub fn with_registry(name: impl Into<String>, registry: Arc<LogRegistry>) -> Self {
        Self {
            name: name.into(),
            registry,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn registry(&self) -> &Arc<LogRegistry> {
        &self.registry
    }

    /// Sets this logger's own threshold.
    pub fn set_level(&self, severity: Severity) {
        self.registry.set_logger_threshold(&self.name, severity);
    }

    /// Threshold set directly on this logger, if any.
    pub fn level(&self) -> Option<Severity> {
        self.registry.logger_threshold(&self.name)
    }

    /// Threshold actually applied, inherited from parents or the global one.
    pub fn effective_level(&self) -> Severity {
        self.registry.effective_threshold(&self.name)
    }

    pub fn is_enabled_for(&self, severity: Severity) -> bool {
        self.registry.is_enabled_for(&self.name, severity)
    }

    /// Emits a message at `severity`, if enabled.
    pub fn log(&self, severity: Severity, args: fmt::Arguments<'_>) {
        let severity_kv = (SEVERITY_KEY, severity.name());
        self.registry.emit(
            &Record::builder()
                .args(args)
                .level(severity.to_level())
                .target(&self.name)
                .key_values(&severity_kv)
                .build(),
        );
    }

    pub fn debug(&self, message: impl fmt::Display) {
        self.log(Severity::Debug, format_args!("{message}"));
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.log(Severity::Info, format_args!("{message}"));
    }

    pub fn warning(&self, message: impl fmt::Display) {
        self.log(Severity::Warning, format_args!("{message}"));
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.log(Severity::Error, format_args!("{message}"));
    }

    pub fn critical(&self, message: impl fmt::Display) {
        self.log(Severity::Critical, format_args!("{message}"));
    }

    /// Flushes the registry's output.
    pub fn flush(&self) {
        self.registry.flush();
    }
}
