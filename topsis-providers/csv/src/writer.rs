//! Writes a [`ResultTable`] as CSV.
use std::{fs::File, io::Write, path::Path};

use csv::Writer;
use topsis_core::{ResultTable, ScoreFormat};
use tracing::debug;

use crate::errors::CsvProviderError;

/// Writes `result` to `writer`: the header row, then one record per
/// alternative in input order with the score rendered by `format`.
///
/// # Errors
/// Returns [`CsvProviderError::Csv`] when a record cannot be written.
///
/// # Examples
/// ```
/// use topsis_core::{ScoreFormat, compute_ranking};
/// use topsis_providers_csv::{CsvTableReader, write_result};
///
/// let table = CsvTableReader::new().read("Id,A,B\nx,1,4\ny,4,1\n".as_bytes())?;
/// let result = compute_ranking(&table, "1,1", "+,-").expect("ranking");
/// let mut out = Vec::new();
/// write_result(&mut out, &result, ScoreFormat::Fixed(2))?;
/// assert_eq!(
///     String::from_utf8(out).expect("utf-8"),
///     "Id,A,B,Topsis Score,Rank\nx,1,4,0.00,2\ny,4,1,1.00,1\n",
/// );
/// # Ok::<(), topsis_providers_csv::CsvProviderError>(())
/// ```
pub fn write_result<W: Write>(
    writer: W,
    result: &ResultTable,
    format: ScoreFormat,
) -> Result<(), CsvProviderError> {
    let mut csv = Writer::from_writer(writer);
    csv.write_record(result.headers())?;
    for record in result.records(format) {
        csv.write_record(&record)?;
    }
    csv.flush().map_err(csv::Error::from)?;
    debug!(rows = result.len(), "csv result written");
    Ok(())
}

/// Writes `result` to a file at `path`, replacing any existing file.
///
/// # Errors
/// Returns [`CsvProviderError::Io`] naming `path` when it cannot be created,
/// otherwise as [`write_result`].
pub fn write_result_path(
    path: impl AsRef<Path>,
    result: &ResultTable,
    format: ScoreFormat,
) -> Result<(), CsvProviderError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| CsvProviderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_result(file, result, format)
}
