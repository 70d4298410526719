//! Tab-separated reader with iterator interface
//!
//! Provides an iterator over the rows of a tab-delimited file whose first line
//! is a header row. Each data row is zipped positionally with the header's
//! column names into a [`CatalogRecord`].
//!
//! # Delimiters
//!
//! One or more consecutive tab characters count as a single delimiter:
//!
//! - a leading tab yields a leading empty field
//! - trailing tabs yield no trailing empty fields
//! - no quoting is interpreted
//!
//! # Tolerance
//!
//! Column counts are not validated. A row shorter than the header leaves the
//! remaining columns absent; fields beyond the header are ignored. Blank lines
//! (including tab-only lines) are skipped.
//!
//! ```no_run
//! use packing_slip::io::tsv_reader::TsvReader;
//! use std::path::Path;
//!
//! let reader = TsvReader::from_path(Path::new("data/MSM_CATALOG.tsv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(record) => println!("{:?}", record.catalog_no()),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```

use crate::types::{Catalog, CatalogRecord, SlipError};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Tab-separated reader
///
/// The header row is consumed on construction; iteration yields one
/// [`CatalogRecord`] per non-blank data line, in file order.
#[derive(Debug)]
pub struct TsvReader<R = File> {
    reader: csv::Reader<R>,
    columns: Vec<String>,
    record: StringRecord,
}

impl TsvReader<File> {
    /// Open a tab-separated file and read its header row
    ///
    /// # Errors
    ///
    /// * [`SlipError::FileNotFound`] / [`SlipError::IoError`] if the file
    ///   cannot be opened
    /// * [`SlipError::ParseError`] if the header row is missing or empty
    pub fn from_path(path: &Path) -> Result<Self, SlipError> {
        let file = File::open(path).map_err(|e| SlipError::open_failed(path, e))?;
        Self::from_reader(file)
    }
}

impl<R: Read> TsvReader<R> {
    /// Wrap any reader and read its header row
    pub fn from_reader(reader: R) -> Result<Self, SlipError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(reader);

        let mut header = StringRecord::new();
        if !reader.read_record(&mut header)? {
            return Err(SlipError::ParseError {
                line: None,
                message: "missing header row".to_string(),
            });
        }

        let columns = split_fields(&header);
        if columns.is_empty() {
            return Err(SlipError::ParseError {
                line: header.position().map(|p| p.line()),
                message: "header row has no columns".to_string(),
            });
        }

        Ok(Self {
            reader,
            columns,
            record: StringRecord::new(),
        })
    }

    /// Column names from the header row, in file order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }
}

impl<R: Read> Iterator for TsvReader<R> {
    type Item = Result<CatalogRecord, SlipError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.reader.read_record(&mut self.record) {
                Ok(false) => return None,
                Ok(true) => {
                    let fields = split_fields(&self.record);
                    if fields.is_empty() {
                        continue;
                    }

                    if fields.len() < self.columns.len() {
                        log::debug!(
                            "Line {}: {} of {} columns present",
                            self.record.position().map(|p| p.line()).unwrap_or_default(),
                            fields.len(),
                            self.columns.len()
                        );
                    }

                    let record =
                        CatalogRecord::from_fields(self.columns.iter().cloned().zip(fields));
                    return Some(Ok(record));
                }
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

/// Collapse runs of tabs into single delimiters
///
/// The csv reader sees `a\t\tb` as `["a", "", "b"]`; empty fields after the
/// first are dropped, then trailing empty fields are trimmed.
fn split_fields(record: &StringRecord) -> Vec<String> {
    let mut fields: Vec<String> = record
        .iter()
        .enumerate()
        .filter(|(i, field)| *i == 0 || !field.is_empty())
        .map(|(_, field)| field.to_string())
        .collect();

    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }

    fields
}

/// Read every record of a tab-separated file
pub fn read_table(path: &Path) -> Result<Vec<CatalogRecord>, SlipError> {
    TsvReader::from_path(path)?.collect()
}

/// Load the product catalog from a tab-separated file
pub fn load_catalog(path: &Path) -> Result<Catalog, SlipError> {
    let records = read_table(path)?;
    log::info!(
        "Loaded {} catalog records from {}",
        records.len(),
        path.display()
    );
    Ok(Catalog::new(records))
}
