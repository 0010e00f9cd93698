use std::path::PathBuf;

use thiserror::Error;

/// Failures while selecting, reading or decoding a report file.
///
/// The text report parser itself never fails; these only come from the
/// ingestion layer around it.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("unsupported file format '{0}', expected a .nmap, .txt or .csv report")]
    UnsupportedFormat(String),

    #[error("spreadsheet workbooks are not supported, export the sheet as CSV first")]
    SpreadsheetUnsupported,

    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(String),
}
