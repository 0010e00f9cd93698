//! Parser for Nmap normal output.
//!
//! The report is read line by line while tracking two things: the host
//! section being accumulated and whether we are inside its port table.
//! Anything that is not recognized is skipped, so every input produces a
//! (possibly empty) result and no error is ever returned.
//!
//! ```text
//! Nmap scan report for example.com (93.184.216.34)   <- host header
//! PORT     STATE SERVICE VERSION                     <- opens the port table
//! 80/tcp   open  http    nginx 1.18.0                <- port entry
//! |_http-title: Example Domain                       <- annotation for port 80
//!                                                    <- closes the port table
//! ```

use scanlens_common::report::{Host, ScanRecord, Table};
use tracing::{debug, trace};

pub mod line;

use line::Line;

/// Parses a report into normalized records, one per port or one
/// placeholder per host without ports.
pub fn parse(text: &str) -> Vec<ScanRecord> {
    let hosts: Vec<Host> = parse_hosts(text);
    let records: Vec<ScanRecord> = to_records(&hosts);
    debug!(
        hosts = hosts.len(),
        records = records.len(),
        "Parsed Nmap report"
    );
    records
}

/// Same as [`parse`], packaged with the fixed header schema.
pub fn parse_table(text: &str) -> Table {
    Table::from_records(&parse(text))
}

/// Splits the report into host sections in order of appearance.
pub fn parse_hosts(text: &str) -> Vec<Host> {
    let mut hosts: Vec<Host> = Vec::new();
    let mut current: Option<Host> = None;
    let mut in_port_table: bool = false;

    for (idx, raw) in text.lines().enumerate() {
        let line: Line<'_> = line::classify(raw, in_port_table);

        if let Line::HostHeader { hostname, ip } = line {
            if let Some(host) = current.take() {
                finish_host(&mut hosts, host);
            }
            current = Some(Host::new(hostname, ip.map(str::to_string)));
            in_port_table = false;
            continue;
        }

        let Some(host) = current.as_mut() else {
            continue;
        };

        match line {
            Line::TableHeader => in_port_table = true,
            Line::TableEnd => in_port_table = false,
            Line::PortEntry(port) => host.ports.push(port),
            Line::Annotation(text) => match host.last_port_mut() {
                Some(port) => port.scripts.push(text),
                None => trace!(line = idx + 1, "Dropping annotation before any port"),
            },
            Line::HostHeader { .. } | Line::Other => {}
        }
    }

    if let Some(host) = current {
        finish_host(&mut hosts, host);
    }

    hosts
}

/// Flattens hosts into rows, keeping host and port order.
pub fn to_records(hosts: &[Host]) -> Vec<ScanRecord> {
    let mut records: Vec<ScanRecord> =
        Vec::with_capacity(hosts.iter().map(Host::record_count).sum());

    for host in hosts {
        if host.ports.is_empty() {
            records.push(ScanRecord::placeholder(host));
            continue;
        }
        records.extend(host.ports.iter().map(|port| ScanRecord::from_port(host, port)));
    }

    records
}

fn finish_host(hosts: &mut Vec<Host>, host: Host) {
    debug!(
        hostname = %host.hostname,
        ip = %host.ip,
        ports = host.ports.len(),
        "Finished host section"
    );
    hosts.push(host);
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
