use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, info};

use super::index::RecordIndex;
use super::iter::RowIterator;
use super::types::error::{RecordError, Result};
use super::types::models::IngestReport;
use super::utils;

/// Options controlling how an input file is read.
#[derive(Debug, Clone, Default)]
pub struct ReaderOptions {
    /// WHATWG label of the encoding used when the file carries no byte order
    /// mark. `None` means UTF-8.
    pub encoding: Option<String>,
}

/// The decoded contents of a record file.
///
/// The file handle is only held while [`RecordSet::open`] runs; everything
/// afterwards works on the in-memory text.
#[derive(Debug, Clone)]
pub struct RecordSet {
    text: String,
}

impl RecordSet {
    /// Reads and decodes a record file.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The encoding label in `options` is unknown
    /// - The file cannot be opened or read
    pub fn open(path: impl AsRef<Path>, options: &ReaderOptions) -> Result<Self> {
        let path = path.as_ref();
        let encoding = match options.encoding.as_deref() {
            Some(label) => utils::parse_encoding(label)?,
            None => encoding_rs::UTF_8,
        };

        info!("Opening record file: {}", path.display());
        let bytes = read_all(path).map_err(|source| RecordError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Read {} bytes, decoding as {}", bytes.len(), encoding.name());

        Ok(Self::from_text(utils::decode_text(&bytes, encoding)))
    }

    /// Wraps text that is already in memory.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns an iterator over the validation outcome of every line.
    pub fn rows(&self) -> RowIterator<'_> {
        RowIterator::new(&self.text)
    }

    /// Validates every line and inserts the valid ones into `index`.
    ///
    /// Invalid rows are skipped and only tallied; they are logged at debug
    /// level with their line number.
    pub fn ingest(&self, index: &mut RecordIndex) -> IngestReport {
        let mut report = IngestReport::default();
        for (line_number, outcome) in self.rows() {
            match outcome {
                Ok(record) => {
                    index.insert(&record);
                    report.record_valid();
                }
                Err(rejection) => {
                    debug!("Skipping line {}: {}", line_number, rejection);
                    report.record_rejection(&rejection);
                }
            }
        }
        info!(
            "Ingested {} rows: {} valid, {} invalid, {} distinct ids",
            report.total_rows(),
            report.valid_rows,
            report.invalid_rows,
            index.len()
        );
        report
    }
}

/// Opens, reads and ingests a record file into a fresh index.
pub fn load(path: impl AsRef<Path>, options: &ReaderOptions) -> Result<(RecordIndex, IngestReport)> {
    let records = RecordSet::open(path, options)?;
    let mut index = RecordIndex::new();
    let report = records.ingest(&mut index);
    Ok((index, report))
}

fn read_all(path: &Path) -> std::io::Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(bytes)
}
