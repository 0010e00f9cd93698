use serde::Serialize;

/// A scanned endpoint as announced by a "scan report for" line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Host {
    pub hostname: String,
    /// Falls back to `hostname` when the report gives a single token.
    pub ip: String,
    pub ports: Vec<Port>,
}

/// One row of a host's port table.
///
/// Every field stays textual so the values round-trip exactly as printed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Port {
    pub port: String,
    pub protocol: String,
    pub state: String,
    pub service: String,
    pub version: String,
    pub scripts: Vec<String>,
}

impl Host {
    pub fn new(hostname: impl Into<String>, ip: Option<String>) -> Self {
        let hostname: String = hostname.into();
        let ip: String = ip.unwrap_or_else(|| hostname.clone());
        Self {
            hostname,
            ip,
            ports: Vec::new(),
        }
    }

    /// The port that annotation lines currently attach to.
    pub fn last_port_mut(&mut self) -> Option<&mut Port> {
        self.ports.last_mut()
    }

    /// Number of rows this host contributes after flattening.
    pub fn record_count(&self) -> usize {
        self.ports.len().max(1)
    }
}

impl Port {
    /// `"<service> [<version> ]on port <port>/<protocol>"`
    pub fn title(&self) -> String {
        if self.version.is_empty() {
            format!("{} on port {}/{}", self.service, self.port, self.protocol)
        } else {
            format!(
                "{} {} on port {}/{}",
                self.service, self.version, self.port, self.protocol
            )
        }
    }
}
