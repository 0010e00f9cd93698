use std::collections::BTreeSet;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;
use scanlens_common::{config::Config, report::Table, success};
use scanlens_core::ingest::{self, ReportFormat};

use crate::mprint;
use crate::terminal::{colors, format, print};

pub async fn parse(file: &Path, format: Option<ReportFormat>, cfg: &Config) -> anyhow::Result<()> {
    let start_time: Instant = Instant::now();
    let table: Table = ingest::load_file(file, format)
        .await
        .with_context(|| format!("could not load report {}", file.display()))?;

    parsing_ends(&table, start_time.elapsed(), cfg);
    Ok(())
}

fn parsing_ends(table: &Table, total_time: Duration, cfg: &Config) {
    if table.is_empty() {
        print::header("zero records", cfg.quiet);
        print::no_results();
        return;
    }

    print::header("scan records", cfg.quiet);
    if cfg.quiet < 2 {
        print_rows(table);
    }
    print_summary(table, total_time, cfg);
}

fn print_rows(table: &Table) {
    for idx in 0..table.len() {
        print::tree_head(idx, &format::row_heading(table, idx));
        print::as_tree_one_level(format::row_to_details(table, idx));
        if idx + 1 != table.len() {
            mprint!();
        }
    }
}

fn host_count(table: &Table) -> Option<usize> {
    let col: usize = table.column("Host")?;
    let hosts: BTreeSet<&str> = table
        .rows
        .iter()
        .filter_map(|row| row.get(col).map(String::as_str))
        .collect();
    Some(hosts.len())
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 { one } else { many }
}

fn print_summary(table: &Table, total_time: Duration, cfg: &Config) {
    let rows: usize = table.len();
    let records: ColoredString = format!("{rows} {}", plural(rows, "record", "records")).bold().green();
    let hosts: String = match host_count(table) {
        Some(n) => format!(" across {} {}", n.to_string().bold().green(), plural(n, "host", "hosts")),
        None => String::new(),
    };
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: ColoredString =
        format!("Parsing Complete: {records}{hosts} in {total_time}").color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output.to_string());
        }
        _ => {
            mprint!();
            success!("{}", output)
        }
    }
}
