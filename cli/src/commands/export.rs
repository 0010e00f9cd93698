use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::ValueEnum;
use scanlens_common::{config::Config, report::Table, success};
use scanlens_core::ingest::{self, ReportFormat};

use crate::terminal::print;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
}

pub async fn export(
    file: &Path,
    format: Option<ReportFormat>,
    to: ExportFormat,
    output: Option<PathBuf>,
    cfg: &Config,
) -> anyhow::Result<()> {
    let table: Table = ingest::load_file(file, format)
        .await
        .with_context(|| format!("could not load report {}", file.display()))?;

    let rendered: String = render(&table, to)?;

    match output {
        Some(path) => {
            tokio::fs::write(&path, rendered)
                .await
                .with_context(|| format!("could not write {}", path.display()))?;
            print::header("export finished", cfg.quiet);
            success!("Wrote {} records to {}", table.len(), path.display());
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

pub fn render(table: &Table, to: ExportFormat) -> anyhow::Result<String> {
    match to {
        ExportFormat::Json => {
            let mut json: String = serde_json::to_string_pretty(&table.to_json_value())?;
            json.push('\n');
            Ok(json)
        }
        ExportFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(&table.headers)?;
            for row in &table.rows {
                writer.write_record(row)?;
            }
            let bytes: Vec<u8> = writer
                .into_inner()
                .map_err(|e| anyhow::anyhow!("failed to flush CSV output: {}", e.error()))?;
            Ok(String::from_utf8(bytes)?)
        }
    }
}
