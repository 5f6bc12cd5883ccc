use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or writing CSV tables.
#[derive(Debug, Error)]
pub enum CsvProviderError {
    /// The input was empty, so no header row could be read.
    #[error("input has no header row")]
    MissingHeader,
    /// The CSV reader or writer rejected the data.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    /// A file could not be opened or created.
    #[error("i/o error on `{}`: {source}", path.display())]
    Io {
        /// The file being read or written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

impl CsvProviderError {
    /// Stable machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingHeader => "CSV_MISSING_HEADER",
            Self::Csv(_) => "CSV_MALFORMED",
            Self::Io { .. } => "CSV_IO",
        }
    }
}
