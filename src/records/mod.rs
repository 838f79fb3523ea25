//! Core record reading, validation, indexing and query module

pub mod format;
pub mod index;
pub mod iter;
pub mod query;
pub mod reader;
pub mod shell;
pub mod types;
mod utils;

pub use index::RecordIndex;
pub use iter::RowIterator;
pub use reader::{load, ReaderOptions, RecordSet};
pub use shell::{Shell, ShellState};
pub use types::error::{InvalidId, RecordError, Result, RowRejection};
pub use types::models::{IngestReport, QueryLine, QueryReport, Record};
