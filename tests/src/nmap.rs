#![cfg(test)]
use scanlens_common::report::{Host, NO_OPEN_PORTS_STATE, ScanRecord};
use scanlens_core::nmap;

const LAN_SWEEP: &str = include_str!("../fixtures/lan_sweep.nmap");

/// A full `-sV -sC` run: three hosts, one without a port table, script
/// output in both the port table and the host script section.
#[test]
fn lan_sweep_record_layout() {
    let hosts: Vec<Host> = nmap::parse_hosts(LAN_SWEEP);
    let names: Vec<&str> = hosts.iter().map(|h| h.hostname.as_str()).collect();
    assert_eq!(names, ["gateway.lab", "192.168.56.20", "files.lab"]);

    let records: Vec<ScanRecord> = nmap::parse(LAN_SWEEP);
    let expected: usize = hosts.iter().map(|h| h.ports.len().max(1)).sum();
    assert_eq!(records.len(), expected);
    assert_eq!(records.len(), 8);
}

#[test]
fn lan_sweep_port_details() {
    let records: Vec<ScanRecord> = nmap::parse(LAN_SWEEP);

    let ssh: &ScanRecord = &records[0];
    assert_eq!(ssh.ip, "192.168.56.1");
    assert_eq!(ssh.version, "OpenSSH 9.2p1 Debian 2+deb12u1 (protocol 2.0)");
    assert_eq!(
        ssh.scripts,
        "ssh-hostkey:\n\
         256 3b:1f:0c:5e:9a:7d:2e:11:c4:a0:8b:55:6f:21:90:aa (ECDSA)\n\
         256 a1:08:77:c2:3e:54:19:0d:6e:bb:f3:72:19:58:aa:01 (ED25519)"
    );

    let http: &ScanRecord = &records[2];
    assert_eq!(http.title, "http lighttpd 1.4.69 on port 80/tcp");
    assert_eq!(
        http.scripts,
        "http-title: Router Login\nhttp-server-header: lighttpd/1.4.69"
    );

    let nfs: &ScanRecord = &records[6];
    assert_eq!(nfs.service, "nfs_acl");
    assert_eq!(nfs.version, "3 (RPC #100227)");
}

#[test]
fn lan_sweep_host_without_ports() {
    let records: Vec<ScanRecord> = nmap::parse(LAN_SWEEP);
    let quiet: &ScanRecord = &records[3];

    assert_eq!(quiet.host, "192.168.56.20");
    assert_eq!(quiet.ip, "192.168.56.20");
    assert_eq!(quiet.state, NO_OPEN_PORTS_STATE);
    assert_eq!(quiet.title, "Host 192.168.56.20 - no open ports detected");
    assert!(quiet.port.is_empty() && quiet.protocol.is_empty());
}

#[test]
fn mac_address_line_closes_table() {
    let hosts: Vec<Host> = nmap::parse_hosts(LAN_SWEEP);
    assert_eq!(hosts[0].ports.len(), 3);

    let files: &Host = &hosts[2];
    let ports: Vec<&str> = files.ports.iter().map(|p| p.port.as_str()).collect();
    assert_eq!(ports, ["139", "445", "2049", "3389"]);
    assert_eq!(files.ports[3].state, "filtered");
    assert_eq!(files.ports[3].version, "");
}

#[test]
fn host_script_results_follow_last_port() {
    let hosts: Vec<Host> = nmap::parse_hosts(LAN_SWEEP);
    let rdp = &hosts[2].ports[3];

    assert_eq!(
        rdp.scripts,
        [
            "nbstat: NetBIOS name: FILES, NetBIOS user: <unknown>, NetBIOS MAC: <unknown>",
            "smb2-time:",
            "date: 2024-03-02T10:14:39",
            "start_date: N/A",
        ]
    );
}

#[test]
fn repeated_parses_are_identical() {
    let first = nmap::parse_table(LAN_SWEEP);
    let second = nmap::parse_table(LAN_SWEEP);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first.to_json_value()).ok(),
        serde_json::to_string(&second.to_json_value()).ok()
    );
}

#[test]
fn arbitrary_text_never_panics() {
    let inputs: [&str; 6] = [
        "",
        "\n\n\n",
        "PORT STATE SERVICE\n22/tcp open ssh\n",
        "Nmap scan report for\n",
        "Nmap scan report for x (\n| a\n|\n|_\n",
        "Nmap scan report for y\nPORT STATE SERVICE\n99999999999999999999/udp open ? ? ?\n\u{feff}|weird",
    ];
    for input in inputs {
        let hosts: Vec<Host> = nmap::parse_hosts(input);
        let expected: usize = hosts.iter().map(|h| h.ports.len().max(1)).sum();
        assert_eq!(nmap::parse(input).len(), expected, "{input:?}");
    }
}
