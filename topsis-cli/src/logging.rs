//! Structured logging for the topsis CLI.
//!
//! [`LogSettings`] is resolved from `TOPSIS_LOG_FORMAT` (human or JSON lines)
//! and `RUST_LOG` (filter directives, `info` when unset). Output goes to
//! stderr so the ranking summary on stdout stays machine-readable, and the
//! `log` facade is bridged into `tracing`.

use std::{env, fmt, io, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing::{Subscriber, debug, level_filters::LevelFilter, warn};
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::ParseError,
    fmt::{MakeWriter, format::FmtSpan},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::{SubscriberInitExt, TryInitError},
};

/// Environment variable selecting the output format.
pub const LOG_FORMAT_ENV: &str = "TOPSIS_LOG_FORMAT";

static INSTALLED: OnceLock<LogFormat> = OnceLock::new();

/// Output format of the installed subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Human,
    /// One JSON object per line, with the current span and span list.
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("human") {
            Ok(Self::Human)
        } else if trimmed.eq_ignore_ascii_case("json") {
            Ok(Self::Json)
        } else {
            Err(LoggingError::UnsupportedFormat {
                provided: trimmed.to_owned(),
            })
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => f.write_str("human"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Errors raised while configuring structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// `TOPSIS_LOG_FORMAT` held bytes that are not UTF-8.
    #[error("`TOPSIS_LOG_FORMAT` is not valid UTF-8")]
    NotUnicode,
    /// `TOPSIS_LOG_FORMAT` named neither `human` nor `json`.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// The trimmed value supplied by the user.
        provided: String,
    },
    /// `RUST_LOG` could not be parsed as filter directives.
    #[error("invalid `RUST_LOG` directives `{directives}`: {source}")]
    InvalidFilter {
        /// The rejected directives.
        directives: String,
        /// Parser diagnostic.
        #[source]
        source: ParseError,
    },
    /// Another global subscriber is already installed.
    #[error("failed to install tracing subscriber: {source}")]
    InstallFailed {
        /// Error raised by `tracing_subscriber`.
        #[source]
        source: TryInitError,
    },
}

/// Format and filter for the CLI's subscriber.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogSettings {
    format: LogFormat,
    directives: Option<String>,
}

impl LogSettings {
    /// Settings with an explicit format and optional filter directives.
    #[must_use]
    pub const fn new(format: LogFormat, directives: Option<String>) -> Self {
        Self { format, directives }
    }

    /// Reads `TOPSIS_LOG_FORMAT` and `RUST_LOG`; an empty `RUST_LOG` counts
    /// as unset.
    ///
    /// # Errors
    /// Returns [`LoggingError::NotUnicode`] or
    /// [`LoggingError::UnsupportedFormat`] for a bad format variable.
    pub fn from_env() -> Result<Self, LoggingError> {
        let format = match env::var(LOG_FORMAT_ENV) {
            Ok(raw) => raw.parse()?,
            Err(env::VarError::NotPresent) => LogFormat::default(),
            Err(env::VarError::NotUnicode(_)) => return Err(LoggingError::NotUnicode),
        };
        let directives = env::var(EnvFilter::DEFAULT_ENV)
            .ok()
            .filter(|raw| !raw.trim().is_empty());
        Ok(Self::new(format, directives))
    }

    /// The selected output format.
    #[must_use]
    pub const fn format(&self) -> LogFormat {
        self.format
    }

    /// Builds the level filter, defaulting to `info`.
    ///
    /// # Errors
    /// Returns [`LoggingError::InvalidFilter`] when the directives do not
    /// parse, rather than silently dropping them.
    pub fn filter(&self) -> Result<EnvFilter, LoggingError> {
        let directives = self.directives.as_deref().unwrap_or_default();
        EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .parse(directives)
            .map_err(|source| LoggingError::InvalidFilter {
                directives: directives.to_owned(),
                source,
            })
    }

    /// Builds the formatting layer, writing through `writer`.
    ///
    /// Spans are reported when they close so their recorded fields appear.
    #[must_use]
    pub fn layer<S, W>(&self, writer: W) -> Box<dyn Layer<S> + Send + Sync + 'static>
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let layer = tracing_subscriber::fmt::layer()
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(writer);
        match self.format {
            LogFormat::Human => layer.boxed(),
            LogFormat::Json => layer
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .boxed(),
        }
    }

    /// Installs these settings as the global subscriber on stderr.
    ///
    /// # Errors
    /// Returns [`LoggingError::InvalidFilter`] for bad directives and
    /// [`LoggingError::InstallFailed`] when a subscriber already exists.
    pub fn install(&self) -> Result<(), LoggingError> {
        let filter = self.filter()?;
        let bridged = LogTracer::init().is_ok();
        tracing_subscriber::registry()
            .with(filter)
            .with(self.layer(io::stderr))
            .try_init()
            .map_err(|source| LoggingError::InstallFailed { source })?;
        if !bridged {
            debug!("log facade already bridged; keeping the existing logger");
        }
        Ok(())
    }
}

/// Installs logging from the environment once per process and returns the
/// format in effect.
///
/// Later calls return the first call's format without touching the
/// environment. A subscriber installed by someone else is kept and reported
/// with a warning.
///
/// # Errors
/// Returns [`LoggingError`] for an unusable `TOPSIS_LOG_FORMAT` or `RUST_LOG`.
pub fn init_logging() -> Result<LogFormat, LoggingError> {
    if let Some(format) = INSTALLED.get() {
        return Ok(*format);
    }

    let settings = LogSettings::from_env()?;
    match settings.install() {
        Ok(()) => {}
        Err(LoggingError::InstallFailed { source }) => {
            warn!(error = %source, "structured logging already configured elsewhere");
        }
        Err(err) => return Err(err),
    }
    Ok(*INSTALLED.get_or_init(|| settings.format()))
}
