//! CSV provider for TOPSIS: reads decision tables and writes ranked results.

mod errors;
mod reader;
mod writer;

pub use errors::CsvProviderError;
pub use reader::CsvTableReader;
pub use writer::{write_result, write_result_path};
