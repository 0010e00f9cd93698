//! # Report Ingestion
//!
//! Chooses a decoder for a report file and loads it into a [`Table`].
//!
//! Dispatch is by file extension, with an optional explicit override:
//! * `.nmap`, `.txt`: Nmap normal output, handled by [`crate::nmap`].
//! * `.csv`: a header row followed by data rows, decoded with the `csv` crate.
//! * `.xlsx`, `.xls`: recognized but rejected, there is no workbook decoder.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use scanlens_common::error::IngestError;
use scanlens_common::report::Table;
use scanlens_common::success;
use tracing::debug;

use crate::nmap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Nmap,
    Csv,
    Spreadsheet,
}

impl ReportFormat {
    /// Picks the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, IngestError> {
        let extension: String = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        from_extension(&extension).ok_or_else(|| {
            let name: String = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            IngestError::UnsupportedFormat(name)
        })
    }
}

fn from_extension(extension: &str) -> Option<ReportFormat> {
    match extension {
        "nmap" | "txt" => Some(ReportFormat::Nmap),
        "csv" => Some(ReportFormat::Csv),
        "xlsx" | "xls" => Some(ReportFormat::Spreadsheet),
        _ => None,
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    /// Accepts the extension names plus "spreadsheet".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower: String = s.trim().trim_start_matches('.').to_ascii_lowercase();
        if lower == "spreadsheet" {
            return Ok(ReportFormat::Spreadsheet);
        }
        from_extension(&lower).ok_or_else(|| format!("unknown report format: {s}"))
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &str = match self {
            ReportFormat::Nmap => "nmap",
            ReportFormat::Csv => "csv",
            ReportFormat::Spreadsheet => "spreadsheet",
        };
        f.write_str(name)
    }
}

/// Decodes already loaded report content.
///
/// Text reports never fail; CSV content is rejected on the first malformed row.
pub fn decode(content: &str, format: ReportFormat) -> Result<Table, IngestError> {
    match format {
        ReportFormat::Nmap => Ok(nmap::parse_table(content)),
        ReportFormat::Csv => decode_csv(content),
        ReportFormat::Spreadsheet => Err(IngestError::SpreadsheetUnsupported),
    }
}

/// Reads and decodes a report file.
///
/// `format` overrides the extension based detection. Bytes that are not
/// valid UTF-8 are replaced, never rejected.
pub async fn load_file(path: &Path, format: Option<ReportFormat>) -> Result<Table, IngestError> {
    let format: ReportFormat = match format {
        Some(format) => format,
        None => ReportFormat::from_path(path)?,
    };

    if format == ReportFormat::Spreadsheet {
        return Err(IngestError::SpreadsheetUnsupported);
    }

    debug!("Reading {} as {format}", path.display());
    let bytes: Vec<u8> = tokio::fs::read(path)
        .await
        .map_err(|source| IngestError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    // Invalid UTF-8 (Latin-1 banners, hostnames) becomes U+FFFD instead of failing the file.
    let content = String::from_utf8_lossy(&bytes);
    let table: Table = decode(&content, format)?;
    let unit: &str = if table.len() == 1 { "row" } else { "rows" };
    success!("Loaded {} {unit} from {}", table.len(), path.display());

    Ok(table)
}

fn decode_csv(content: &str) -> Result<Table, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(str::to_string)
        .collect();

    let mut table: Table = Table::new(headers);
    for result in reader.records() {
        let record = result.map_err(csv_error)?;
        table.rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(table)
}

fn csv_error(err: csv::Error) -> IngestError {
    IngestError::Csv(err.to_string())
}
