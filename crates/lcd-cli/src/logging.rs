//! Stderr logging for the exporter.
//!
//! `RUST_LOG` wins when set. Otherwise the chosen level applies to the workspace crates
//! and everything else stays at `warn` or quieter.

use anyhow::{Context, Result};
use clap::ValueEnum;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, EnvFilter};

/// Crates whose events follow `--log-level`.
const WORKSPACE_TARGETS: [&str; 3] = ["lcd_core", "lcd_scenes", "lcd_explainer"];

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum LogFormat {
    /// One line per event
    Compact,
    /// Multi-line, human oriented
    Pretty,
    /// Newline-delimited JSON
    Json,
}

/// Filter directives for `level`, e.g. `warn,lcd_core=debug,lcd_scenes=debug,...`.
fn directives(level: LogLevel) -> String {
    let level = LevelFilter::from(level);
    let others = level.min(LevelFilter::WARN);
    let mut out = others.to_string().to_lowercase();
    for target in WORKSPACE_TARGETS {
        out.push_str(&format!(",{}={}", target, level.to_string().to_lowercase()));
    }
    out
}

fn filter(level: LogLevel) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let directives = directives(level);
    EnvFilter::try_new(&directives)
        .with_context(|| format!("invalid log directives `{}`", directives))
}

/// Installs the global subscriber writing to stderr. Stdout stays free for piping.
pub fn init(level: LogLevel, format: LogFormat) -> Result<()> {
    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter(level)?)
        .with_writer(std::io::stderr);

    let installed = match format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to install subscriber")
}
