//! Line classification for Nmap normal output.
//!
//! Patterns overlap (a table header starts with an uppercase letter, which
//! would otherwise close the table), so [`classify`] applies them in a fixed
//! order and the parser only ever sees one [`Line`] per input line.

use std::sync::LazyLock;

use regex::Regex;
use scanlens_common::report::Port;

static HOST_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Nmap scan report for\s+(.+?)(?:\s+\(([^)]+)\))?$")
        .expect("Invalid host header regex")
});

static TABLE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^PORT\s+STATE\s+SERVICE").expect("Invalid table header regex"));

static PORT_ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)/(tcp|udp)\s+(\S+)\s+(\S+)(?:\s+(.*))?$")
        .expect("Invalid port entry regex")
});

// Covers "| ", "|_" and "|-" continuation markers.
static ANNOTATION_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|[-_ ]?\s?").expect("Invalid annotation regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// "Nmap scan report for <name> [(<address>)]"
    HostHeader { hostname: &'a str, ip: Option<&'a str> },
    /// "PORT STATE SERVICE ..." column labels.
    TableHeader,
    /// Blank or capitalized non-port line while inside a port table.
    TableEnd,
    PortEntry(Port),
    /// Script output with its leading marker stripped.
    Annotation(String),
    Other,
}

/// Classifies `line` given whether the parser is inside a port table.
pub fn classify(line: &str, in_port_table: bool) -> Line<'_> {
    if let Some(header) = host_header(line) {
        return header;
    }

    if TABLE_HEADER.is_match(line) {
        return Line::TableHeader;
    }

    if in_port_table {
        if let Some(port) = port_entry(line) {
            return Line::PortEntry(port);
        }
        if closes_table(line) {
            return Line::TableEnd;
        }
    }

    if line.starts_with('|') {
        let text: String = ANNOTATION_PREFIX.replace(line, "").trim().to_string();
        return Line::Annotation(text);
    }

    Line::Other
}

fn host_header(line: &str) -> Option<Line<'_>> {
    let caps = HOST_HEADER.captures(line)?;
    let hostname: &str = caps.get(1)?.as_str().trim();
    let ip: Option<&str> = caps.get(2).map(|m| m.as_str().trim());
    Some(Line::HostHeader { hostname, ip })
}

fn port_entry(line: &str) -> Option<Port> {
    let caps = PORT_ENTRY.captures(line)?;
    Some(Port {
        port: caps[1].to_string(),
        protocol: caps[2].to_string(),
        state: caps[3].to_string(),
        service: caps[4].to_string(),
        version: caps
            .get(5)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default(),
        scripts: Vec::new(),
    })
}

fn closes_table(line: &str) -> bool {
    line.trim().is_empty() || line.starts_with(|c: char| c.is_ascii_uppercase())
}
