//! Reads CSV input into a [`RawTable`].
use std::{fs::File, io::Read, path::Path};

use csv::{ReaderBuilder, StringRecord, Trim};
use topsis_core::RawTable;
use tracing::debug;

use crate::errors::CsvProviderError;

/// Reads a header row and data rows from CSV.
///
/// Records may differ in length so that ragged rows reach the core validator
/// and fail there as schema errors. Cells are kept verbatim.
#[derive(Clone, Copy, Debug)]
pub struct CsvTableReader {
    delimiter: u8,
}

impl Default for CsvTableReader {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvTableReader {
    /// Creates a comma-delimited reader.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `delimiter` instead of `,` between fields.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Reads a table from `reader`.
    ///
    /// # Errors
    /// Returns [`CsvProviderError::MissingHeader`] for empty input and
    /// [`CsvProviderError::Csv`] for malformed CSV or invalid UTF-8.
    ///
    /// # Examples
    /// ```
    /// use topsis_providers_csv::CsvTableReader;
    ///
    /// let table = CsvTableReader::new().read("Id,A,B\nx,1,2\n".as_bytes())?;
    /// assert_eq!(table.headers(), &["Id", "A", "B"]);
    /// assert_eq!(table.len(), 1);
    /// # Ok::<(), topsis_providers_csv::CsvProviderError>(())
    /// ```
    pub fn read<R: Read>(&self, reader: R) -> Result<RawTable, CsvProviderError> {
        let mut csv = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .trim(Trim::None)
            .from_reader(reader);

        let headers = to_fields(csv.headers()?);
        if headers.is_empty() {
            return Err(CsvProviderError::MissingHeader);
        }
        let rows = csv
            .records()
            .map(|record| record.map(|record| to_fields(&record)))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(columns = headers.len(), rows = rows.len(), "csv table read");
        Ok(RawTable::new(headers, rows))
    }

    /// Reads a table from the file at `path`.
    ///
    /// # Errors
    /// Returns [`CsvProviderError::Io`] naming `path` when it cannot be
    /// opened, otherwise as [`CsvTableReader::read`].
    pub fn read_path(&self, path: impl AsRef<Path>) -> Result<RawTable, CsvProviderError> {
        let location = path.as_ref();
        let file = File::open(location).map_err(|source| CsvProviderError::Io {
            path: location.to_path_buf(),
            source,
        })?;
        self.read(file)
    }
}

fn to_fields(record: &StringRecord) -> Vec<String> {
    record.iter().map(str::to_owned).collect()
}
