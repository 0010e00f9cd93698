use serde::Serialize;

use crate::report::host::{Host, Port};

/// Risk is assessed downstream; every parsed row starts here.
pub const BASELINE_SEVERITY: &str = "Low";

/// `State` value of the placeholder row emitted for a host without ports.
pub const NO_OPEN_PORTS_STATE: &str = "up (no open ports)";

/// A normalized row of the scan table.
///
/// Field order matches [`ScanRecord::HEADERS`]; the serde names are the
/// header labels so JSON keys line up with CSV columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanRecord {
    #[serde(rename = "Host")]
    pub host: String,
    #[serde(rename = "IP")]
    pub ip: String,
    #[serde(rename = "Port")]
    pub port: String,
    #[serde(rename = "Protocol")]
    pub protocol: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Service")]
    pub service: String,
    #[serde(rename = "Version")]
    pub version: String,
    #[serde(rename = "Scripts")]
    pub scripts: String,
    #[serde(rename = "Severity")]
    pub severity: String,
    #[serde(rename = "Title")]
    pub title: String,
}

impl ScanRecord {
    pub const HEADERS: [&'static str; 10] = [
        "Host", "IP", "Port", "Protocol", "State", "Service", "Version", "Scripts", "Severity",
        "Title",
    ];

    /// The single row standing in for a host with no discovered ports.
    pub fn placeholder(host: &Host) -> Self {
        Self {
            host: host.hostname.clone(),
            ip: host.ip.clone(),
            port: String::new(),
            protocol: String::new(),
            state: NO_OPEN_PORTS_STATE.to_string(),
            service: String::new(),
            version: String::new(),
            scripts: String::new(),
            severity: BASELINE_SEVERITY.to_string(),
            title: format!("Host {} - no open ports detected", host.hostname),
        }
    }

    pub fn from_port(host: &Host, port: &Port) -> Self {
        Self {
            host: host.hostname.clone(),
            ip: host.ip.clone(),
            port: port.port.clone(),
            protocol: port.protocol.clone(),
            state: port.state.clone(),
            service: port.service.clone(),
            version: port.version.clone(),
            scripts: port.scripts.join("\n"),
            severity: BASELINE_SEVERITY.to_string(),
            title: port.title(),
        }
    }

    /// Cell values in header order.
    pub fn values(&self) -> [&str; 10] {
        [
            self.host.as_str(),
            self.ip.as_str(),
            self.port.as_str(),
            self.protocol.as_str(),
            self.state.as_str(),
            self.service.as_str(),
            self.version.as_str(),
            self.scripts.as_str(),
            self.severity.as_str(),
            self.title.as_str(),
        ]
    }
}
