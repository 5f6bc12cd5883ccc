//! Shared fixtures for unit tests.

use crate::RawTable;

/// Builds a [`RawTable`] from string literals.
pub(crate) fn raw_table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
    RawTable::new(
        headers.iter().map(|h| (*h).to_owned()).collect(),
        rows.iter()
            .map(|row| row.iter().map(|cell| (*cell).to_owned()).collect())
            .collect(),
    )
}

/// Four phones scored on price, storage, camera and looks.
pub(crate) fn mobile_table() -> RawTable {
    raw_table(
        &["Model", "Price", "Storage", "Camera", "Looks"],
        &[
            &["A", "250", "16", "12", "5"],
            &["B", "200", "16", "8", "3"],
            &["C", "300", "32", "16", "4"],
            &["D", "275", "32", "8", "4"],
        ],
    )
}
