#![cfg(test)]
use std::path::{Path, PathBuf};

use scanlens_common::error::IngestError;
use scanlens_core::ingest::{self, ReportFormat};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
}

#[tokio::test]
async fn loads_nmap_report_by_extension() {
    let table = ingest::load_file(&fixture("lan_sweep.nmap"), None)
        .await
        .expect("fixture loads");

    assert_eq!(table.len(), 8);
    assert_eq!(table.get(0, "Host"), Some("gateway.lab"));
    assert_eq!(table.get(3, "State"), Some("up (no open ports)"));
}

#[tokio::test]
async fn loads_csv_findings_with_their_own_headers() {
    let table = ingest::load_file(&fixture("findings.csv"), None)
        .await
        .expect("fixture loads");

    assert_eq!(table.headers.len(), 11);
    assert_eq!(table.headers[7], "Plugin Name");
    assert_eq!(table.len(), 3);
    assert_eq!(table.get(2, "Severity"), Some("Critical"));
    assert_eq!(table.get(1, "CVEs"), Some(""));
}

#[tokio::test]
async fn explicit_format_overrides_extension() -> anyhow::Result<()> {
    let table = ingest::load_file(&fixture("findings.csv"), Some(ReportFormat::Nmap)).await?;
    assert!(table.is_empty());
    Ok(())
}

#[tokio::test]
async fn missing_file_reports_path() {
    let path: PathBuf = fixture("does_not_exist.nmap");
    let err = ingest::load_file(&path, None).await.unwrap_err();

    match err {
        IngestError::Read { path: failed, .. } => assert_eq!(failed, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn spreadsheets_are_rejected_before_reading() {
    let err = ingest::load_file(Path::new("/nonexistent/report.xlsx"), None)
        .await
        .unwrap_err();
    assert!(matches!(err, IngestError::SpreadsheetUnsupported));
}

#[tokio::test]
async fn unknown_extension_is_rejected() {
    let err = ingest::load_file(&fixture("lan_sweep.xml"), None)
        .await
        .unwrap_err();
    assert!(matches!(err, IngestError::UnsupportedFormat(_)));
}

#[tokio::test]
async fn latin1_bytes_are_replaced_not_rejected() -> anyhow::Result<()> {
    let dir: PathBuf = std::env::temp_dir().join(format!("scanlens-ingest-{}", std::process::id()));
    tokio::fs::create_dir_all(&dir).await?;

    let nmap: PathBuf = dir.join("latin1.nmap");
    tokio::fs::write(
        &nmap,
        b"Nmap scan report for caf\xE9 (10.0.0.1)\nPORT STATE SERVICE\n22/tcp open ssh\n",
    )
    .await?;
    let table = ingest::load_file(&nmap, None).await?;
    assert_eq!(table.len(), 1);
    assert_eq!(table.get(0, "Host"), Some("caf\u{FFFD}"));
    assert_eq!(table.get(0, "IP"), Some("10.0.0.1"));
    assert_eq!(table.get(0, "Port"), Some("22"));

    let csv: PathBuf = dir.join("latin1.csv");
    tokio::fs::write(&csv, b"Host,Plugin Name\nsrv\xE9,SMB\n").await?;
    let table = ingest::load_file(&csv, None).await?;
    assert_eq!(table.get(0, "Host"), Some("srv\u{FFFD}"));

    tokio::fs::remove_dir_all(&dir).await?;
    Ok(())
}
