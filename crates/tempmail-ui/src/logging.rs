//! Structured logging to the browser console using tracing.
//!
//! Provides configurable logging with:
//! - Development and production presets chosen by build type
//! - An optional filter directive from the page configuration
//! - Per-level routing to `console.error`, `console.warn`, `console.log`
//!   and `console.debug`

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::{EnvFilter, fmt::MakeWriter};

/// Logging configuration options.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Maximum log level when no directive is given.
    pub level: Level,
    /// Filter directive overriding `level` (e.g. "tempmail_ui=debug").
    pub directive: Option<String>,
    /// Whether to include the target module in log lines.
    pub include_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::production()
    }
}

impl LoggingConfig {
    /// Verbose logging for development builds.
    #[must_use]
    pub const fn development() -> Self {
        Self {
            level: Level::DEBUG,
            directive: None,
            include_target: true,
        }
    }

    /// Quiet logging for release builds.
    #[must_use]
    pub const fn production() -> Self {
        Self {
            level: Level::WARN,
            directive: None,
            include_target: false,
        }
    }

    /// Detect configuration based on build type.
    #[must_use]
    pub const fn auto() -> Self {
        if cfg!(debug_assertions) {
            Self::development()
        } else {
            Self::production()
        }
    }

    /// Override the level with a filter directive.
    #[must_use]
    pub fn with_directive(mut self, directive: Option<String>) -> Self {
        self.directive = directive;
        self
    }

    /// Build the filter, falling back to `level` if the directive is invalid.
    pub fn filter(&self) -> EnvFilter {
        self.directive
            .as_deref()
            .and_then(|d| EnvFilter::try_new(d).ok())
            .unwrap_or_else(|| EnvFilter::new(self.level.as_str()))
    }
}

/// Initialize the global subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(config: &LoggingConfig) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(config.filter())
        .with_writer(ConsoleMakeWriter)
        .with_target(config.include_target)
        .without_time()
        .try_init();

    if result.is_ok() {
        tracing::debug!(?config, "Logging initialized");
    }
}

/// Console method a log line is written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    /// `console.error`
    Error,
    /// `console.warn`
    Warn,
    /// `console.log`
    Log,
    /// `console.debug`
    Debug,
}

impl ConsoleMethod {
    /// Method used for events at `level`.
    pub fn for_level(level: Level) -> Self {
        match level {
            Level::ERROR => Self::Error,
            Level::WARN => Self::Warn,
            Level::INFO => Self::Log,
            _ => Self::Debug,
        }
    }
}

/// Creates a [`ConsoleWriter`] per event.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::Log)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::for_level(*meta.level()))
    }
}

/// Buffers one formatted event and emits it on drop.
#[derive(Debug)]
pub struct ConsoleWriter {
    method: ConsoleMethod,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    const fn new(method: ConsoleMethod) -> Self {
        Self {
            method,
            buffer: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buffer);
        let line = wasm_bindgen::JsValue::from_str(line.trim_end());
        match self.method {
            ConsoleMethod::Error => web_sys::console::error_1(&line),
            ConsoleMethod::Warn => web_sys::console::warn_1(&line),
            ConsoleMethod::Log => web_sys::console::log_1(&line),
            ConsoleMethod::Debug => web_sys::console::debug_1(&line),
        }
    }
}
