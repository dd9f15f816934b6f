//! # Structured Logging
//!
//! `tracing` subscriber setup. `RUST_LOG` wins over the configured default
//! level when it is set.

use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Output format for log events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Logging settings resolved from the command line.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub verbose: bool,
    pub format: LogFormat,
}

impl LoggingConfig {
    /// Level used when `RUST_LOG` is not set.
    pub fn default_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.default_level()))
    }
}

/// Install the global subscriber.
///
/// Installing twice is not an error; the first subscriber stays in place.
pub fn init_logging(config: &LoggingConfig) {
    let builder = FmtSubscriber::builder()
        .with_env_filter(config.env_filter())
        .with_writer(std::io::stderr)
        .with_target(false);

    let result = match config.format {
        LogFormat::Text => tracing::subscriber::set_global_default(builder.finish()),
        LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish()),
    };

    if result.is_err() {
        // Subscriber already set elsewhere (e.g. integration tests); ignore.
    }
}
