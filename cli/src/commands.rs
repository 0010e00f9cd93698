pub mod export;
pub mod parse;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use scanlens_core::ingest::ReportFormat;

use crate::commands::export::ExportFormat;

#[derive(Parser)]
#[command(name = "scanlens")]
#[command(about = "Turns network scan reports into vulnerability tables.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output (-q hides headers, -qq also hides per-record trees)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load a report and print its records
    #[command(alias = "p")]
    Parse {
        file: PathBuf,
        /// Override extension based detection (nmap, csv, xlsx)
        #[arg(short, long)]
        format: Option<ReportFormat>,
    },
    /// Write the normalized records as JSON or CSV
    #[command(alias = "e")]
    Export {
        file: PathBuf,
        /// Override extension based detection (nmap, csv, xlsx)
        #[arg(short, long)]
        format: Option<ReportFormat>,
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        to: ExportFormat,
        /// Destination file, stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
