//! Logging Configuration and Initialization
//!
//! Centralized tracing setup for the flatdb binaries. Supports console, file
//! (daily rotation) or both, in text or JSON, with levels and extra filter
//! directives taken from a [`LogConfig`].
//!
//! Console output goes to stderr so that record data printed on stdout stays
//! machine-readable.
//!
//! Library code never prints; it logs with structured macros:
//!
//! ```rust
//! use tracing::debug;
//!
//! let tags = 7;
//! debug!(tags, tag_size = 12, "Indexed NCBI-style record");
//! ```
//!
//! # Example
//!
//! ```no_run
//! use flatdb_common::logging::{init_logging, LogConfig, LogLevel};
//!
//! let config = LogConfig::builder().level(LogLevel::Debug).build();
//! let _guard = init_logging(&config).unwrap();
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

/// Case-insensitive lookup of `value` among `choices` (name, aliases, variant)
fn parse_choice<T: Copy>(kind: &str, value: &str, choices: &[(&[&str], T)]) -> Result<T> {
    let wanted = value.trim().to_ascii_lowercase();
    choices
        .iter()
        .find(|(names, _)| names.contains(&wanted.as_str()))
        .map(|(_, choice)| *choice)
        .ok_or_else(|| anyhow::anyhow!("Invalid log {kind}: '{value}'"))
}

/// Minimum severity that gets through the filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    const CHOICES: [(&'static [&'static str], LogLevel); 5] = [
        (&["trace"], LogLevel::Trace),
        (&["debug"], LogLevel::Debug),
        (&["info"], LogLevel::Info),
        (&["warn", "warning"], LogLevel::Warn),
        (&["error"], LogLevel::Error),
    ];

    pub fn to_tracing_level(self) -> Level {
        match self {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_choice("level", s, &Self::CHOICES)
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(Self::CHOICES[*self as usize].0[0])
    }
}

/// Where log lines are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    /// stderr only
    #[default]
    Console,
    /// Daily rolling file only
    File,
    Both,
}

impl LogOutput {
    const CHOICES: [(&'static [&'static str], LogOutput); 3] = [
        (&["console", "stderr"], LogOutput::Console),
        (&["file"], LogOutput::File),
        (&["both", "all"], LogOutput::Both),
    ];

    fn to_console(self) -> bool {
        self != LogOutput::File
    }

    fn to_file(self) -> bool {
        self != LogOutput::Console
    }
}

impl std::str::FromStr for LogOutput {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_choice("output", s, &Self::CHOICES)
    }
}

impl std::fmt::Display for LogOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(Self::CHOICES[*self as usize].0[0])
    }
}

/// Line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    const CHOICES: [(&'static [&'static str], LogFormat); 2] = [
        (&["text", "pretty"], LogFormat::Text),
        (&["json"], LogFormat::Json),
    ];
}

impl std::str::FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_choice("format", s, &Self::CHOICES)
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(Self::CHOICES[*self as usize].0[0])
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Minimum log level to display
    pub level: LogLevel,

    /// Output target (console, file, or both)
    pub output: LogOutput,

    /// Log format (text or JSON)
    pub format: LogFormat,

    /// Directory for log files (only used when output includes file)
    pub log_dir: PathBuf,

    /// Log file name prefix, e.g. "flatdb" -> "flatdb.2026-01-18"
    pub log_file_prefix: String,

    /// Additional comma-separated filter directives, e.g. "flatdb_core=trace"
    pub filter_directives: Option<String>,

    pub include_location: bool,

    pub include_thread_ids: bool,

    pub include_targets: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            output: LogOutput::Console,
            format: LogFormat::Text,
            log_dir: PathBuf::from("./logs"),
            log_file_prefix: "flatdb".to_string(),
            filter_directives: None,
            include_location: false,
            include_thread_ids: false,
            include_targets: true,
        }
    }
}

impl LogConfig {
    /// Defaults overlaid with the `LOG_*` environment variables
    ///
    /// | Variable                 | Values                              |
    /// |--------------------------|-------------------------------------|
    /// | `LOG_LEVEL`              | trace, debug, info, warn, error     |
    /// | `LOG_OUTPUT`             | console, file, both                 |
    /// | `LOG_FORMAT`             | text, json                          |
    /// | `LOG_DIR`                | directory for rolling files         |
    /// | `LOG_FILE_PREFIX`        | rolling file name prefix            |
    /// | `LOG_FILTER`             | extra `target=level` directives     |
    /// | `LOG_INCLUDE_LOCATION`   | true/false                          |
    /// | `LOG_INCLUDE_THREAD_IDS` | true/false                          |
    /// | `LOG_INCLUDE_TARGETS`    | true/false                          |
    pub fn from_env() -> Result<Self> {
        Self::default().merge_env()
    }

    /// Overlay the `LOG_*` environment variables on this configuration
    ///
    /// Unset variables keep the current values.
    pub fn merge_env(self) -> Result<Self> {
        self.merge_vars(|key| std::env::var(key).ok())
    }

    fn merge_vars(mut self, var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let flag = |key: &str, current: bool| {
            var(key).map_or(current, |value| value.trim().parse().unwrap_or(current))
        };

        if let Some(level) = var("LOG_LEVEL") {
            self.level = level.parse()?;
        }
        if let Some(output) = var("LOG_OUTPUT") {
            self.output = output.parse()?;
        }
        if let Some(format) = var("LOG_FORMAT") {
            self.format = format.parse()?;
        }
        if let Some(dir) = var("LOG_DIR") {
            self.log_dir = dir.into();
        }
        if let Some(prefix) = var("LOG_FILE_PREFIX") {
            self.log_file_prefix = prefix;
        }
        self.filter_directives = var("LOG_FILTER").or(self.filter_directives);

        self.include_location = flag("LOG_INCLUDE_LOCATION", self.include_location);
        self.include_thread_ids = flag("LOG_INCLUDE_THREAD_IDS", self.include_thread_ids);
        self.include_targets = flag("LOG_INCLUDE_TARGETS", self.include_targets);

        Ok(self)
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> LogConfigBuilder {
        LogConfigBuilder::default()
    }

    fn env_filter(&self) -> Result<EnvFilter> {
        let mut filter =
            EnvFilter::from_default_env().add_directive(self.level.to_tracing_level().into());

        if let Some(ref directives) = self.filter_directives {
            for directive in directives.split(',').map(str::trim).filter(|d| !d.is_empty()) {
                filter = filter.add_directive(
                    directive
                        .parse()
                        .with_context(|| format!("Failed to parse filter directive '{directive}'"))?,
                );
            }
        }

        Ok(filter)
    }
}

/// Fluent construction of a [`LogConfig`], starting from the defaults
#[derive(Debug, Default)]
pub struct LogConfigBuilder {
    config: LogConfig,
}

impl LogConfigBuilder {
    pub fn level(self, level: LogLevel) -> Self {
        self.with(|c| c.level = level)
    }

    pub fn output(self, output: LogOutput) -> Self {
        self.with(|c| c.output = output)
    }

    pub fn format(self, format: LogFormat) -> Self {
        self.with(|c| c.format = format)
    }

    pub fn log_dir(self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        self.with(|c| c.log_dir = dir)
    }

    pub fn log_file_prefix(self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.with(|c| c.log_file_prefix = prefix)
    }

    /// Comma-separated `target=level` directives added on top of the level
    pub fn filter_directives(self, filter: impl Into<String>) -> Self {
        let filter = filter.into();
        self.with(|c| c.filter_directives = Some(filter))
    }

    pub fn include_location(self, include: bool) -> Self {
        self.with(|c| c.include_location = include)
    }

    pub fn include_thread_ids(self, include: bool) -> Self {
        self.with(|c| c.include_thread_ids = include)
    }

    pub fn include_targets(self, include: bool) -> Self {
        self.with(|c| c.include_targets = include)
    }

    pub fn build(self) -> LogConfig {
        self.config
    }

    fn with(mut self, update: impl FnOnce(&mut LogConfig)) -> Self {
        update(&mut self.config);
        self
    }
}

/// Keeps the non-blocking file writer flushing until dropped
///
/// Hold it for the lifetime of `main`; dropping it early loses buffered file
/// output.
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard {
    _file_writer: Option<WorkerGuard>,
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

fn fmt_layer<W>(config: &LogConfig, writer: W, ansi: bool) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(config.include_targets)
        .with_thread_ids(config.include_thread_ids)
        .with_file(config.include_location)
        .with_line_number(config.include_location)
        .with_span_events(FmtSpan::CLOSE);

    match config.format {
        LogFormat::Text => layer.boxed(),
        LogFormat::Json => layer.json().boxed(),
    }
}

/// Initialize logging with the given configuration
///
/// Installs the global tracing subscriber; call it once at start-up.
pub fn init_logging(config: &LogConfig) -> Result<LoggingGuard> {
    let filter = config.env_filter()?;
    let mut layers: Vec<BoxedLayer> = Vec::new();
    let mut file_writer = None;

    if config.output.to_console() {
        layers.push(fmt_layer(config, std::io::stderr, true));
    }

    if config.output.to_file() {
        std::fs::create_dir_all(&config.log_dir).with_context(|| {
            format!("Failed to create log directory {}", config.log_dir.display())
        })?;

        let appender = tracing_appender::rolling::daily(&config.log_dir, &config.log_file_prefix);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        layers.push(fmt_layer(config, writer, false));
        file_writer = Some(guard);
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(LoggingGuard {
        _file_writer: file_writer,
    })
}
