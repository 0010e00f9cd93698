use colored::*;
use scanlens_common::report::Table;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::terminal::colors;

type Detail = (String, ColoredString);

const MAX_VALUE_WIDTH: usize = 48;

/// Name shown at the top of a row's tree: its title, else its first cell.
pub fn row_heading(table: &Table, row: usize) -> String {
    table
        .get(row, "Title")
        .filter(|title| !title.is_empty())
        .or_else(|| table.rows.get(row)?.first().map(String::as_str))
        .unwrap_or("(empty row)")
        .to_string()
}

/// Every non-empty cell except the title, script output split per line.
pub fn row_to_details(table: &Table, row: usize) -> Vec<Detail> {
    let Some(cells) = table.rows.get(row) else {
        return Vec::new();
    };

    let mut details: Vec<Detail> = Vec::new();
    for (header, cell) in table.headers.iter().zip(cells) {
        if cell.is_empty() || header == "Title" {
            continue;
        }
        if header == "Scripts" {
            details.extend(
                cell.lines()
                    .map(|line| ("Script".to_string(), truncate(line).color(colors::SCRIPT))),
            );
            continue;
        }
        details.push((header.clone(), cell_value(header, cell)));
    }
    details
}

fn cell_value(header: &str, cell: &str) -> ColoredString {
    let text: String = truncate(cell);
    match header {
        "IP" => text.color(colors::IP_ADDR),
        "Port" => text.color(colors::PORT).bold(),
        _ => text.normal(),
    }
}

fn truncate(value: &str) -> String {
    if UnicodeWidthStr::width(value) <= MAX_VALUE_WIDTH {
        return value.to_string();
    }
    let mut out: String = String::new();
    let mut width: usize = 0;
    for c in value.chars() {
        let w: usize = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w > MAX_VALUE_WIDTH - 1 {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}
