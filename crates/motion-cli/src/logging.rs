//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! # Log Levels
//!
//! - `error`: Failed API calls, orphaned segments
//! - `warn`: Empty groups, missing API key
//! - `info`: Pipeline stage progress, segment and analysis ids
//! - `debug`: Request URLs, response sizes, input table shape
//! - `trace`: External context ids (requires explicit `--log-ids`)
//!
//! The API key is never logged.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::Subscriber;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, MakeWriter, format::FmtSpan},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

static LOG_IDS_ENABLED: AtomicBool = AtomicBool::new(false);

/// Placeholder used when identifier logging is disabled.
pub const REDACTED_VALUE: &str = "[REDACTED]";

/// Returns true if identifier logging is explicitly enabled.
pub fn log_ids_enabled() -> bool {
    LOG_IDS_ENABLED.load(Ordering::Relaxed)
}

/// Turns identifier logging on or off for the whole process.
pub fn set_log_ids(enabled: bool) {
    LOG_IDS_ENABLED.store(enabled, Ordering::Release);
}

/// Returns the input value when identifier logging is enabled, otherwise a redacted token.
pub fn redact_value(value: &str) -> &str {
    if log_ids_enabled() {
        value
    } else {
        REDACTED_VALUE
    }
}

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level filter applied to the workspace crates.
    pub level_filter: LevelFilter,
    /// Whether `RUST_LOG` may override `level_filter`.
    pub use_env_filter: bool,
    /// Whether to include target (module path) in log output.
    pub with_target: bool,
    /// Whether to include span close events in JSON output.
    pub with_spans: bool,
    /// Whether to use ANSI colors in output.
    pub with_ansi: bool,
    pub format: LogFormat,
    /// Optional log file path. When set, logs are written to the file.
    pub log_file: Option<PathBuf>,
    /// Whether external context ids may be logged.
    pub log_ids: bool,
}

/// Log output format.
///
/// Pretty and compact output omit timestamps; JSON records carry them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-field format with colors.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON format for machine parsing.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            with_target: false,
            with_spans: true,
            with_ansi: true,
            format: LogFormat::default(),
            log_file: None,
            log_ids: false,
        }
    }
}

/// Initialize the global tracing subscriber with the given configuration.
///
/// This should be called once at application startup.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        init_logging_with_writer(config, Mutex::new(file));
    } else {
        init_logging_with_writer(config, io::stderr);
    }
    Ok(())
}

/// Initialize logging with a custom writer (useful for testing).
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    set_log_ids(config.log_ids);
    tracing_subscriber::registry()
        .with(build_env_filter(config.level_filter, config.use_env_filter))
        .with(output_layer(config, writer))
        .init();
}

/// Formatting layer for the configured output format.
fn output_layer<S, W>(config: &LogConfig, writer: W) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_target(config.with_target);
    match config.format {
        LogFormat::Json => {
            let spans = if config.with_spans {
                FmtSpan::CLOSE
            } else {
                FmtSpan::NONE
            };
            layer.json().with_span_events(spans).boxed()
        }
        LogFormat::Compact => layer
            .compact()
            .with_ansi(config.with_ansi)
            .without_time()
            .boxed(),
        LogFormat::Pretty => layer.with_ansi(config.with_ansi).without_time().boxed(),
    }
}

/// Default filter directives: the given level for workspace crates, `warn` elsewhere.
fn default_directives(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    format!(
        "warn,motion_cli={level},motion_api={level},motion_ingest={level},\
         motion_model={level},request_analysis={level}"
    )
}

/// Build an `EnvFilter`, letting `RUST_LOG` win when allowed.
fn build_env_filter(level: LevelFilter, use_env_filter: bool) -> EnvFilter {
    if use_env_filter {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return filter;
        }
    }
    EnvFilter::new(default_directives(level))
}
