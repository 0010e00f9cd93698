use serde_json::{Map, Value};

use crate::report::record::ScanRecord;

/// Column headers plus rows aligned with them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Builds a table with the fixed scan schema, one row per record.
    pub fn from_records(records: &[ScanRecord]) -> Self {
        let headers: Vec<String> = ScanRecord::HEADERS.iter().map(|h| h.to_string()).collect();
        let rows: Vec<Vec<String>> = records
            .iter()
            .map(|record| record.values().iter().map(|v| v.to_string()).collect())
            .collect();
        Self { headers, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    /// Cell of `row` under `header`, if both exist.
    pub fn get(&self, row: usize, header: &str) -> Option<&str> {
        let col: usize = self.column(header)?;
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// Array of objects keyed by header, keys kept in header order.
    pub fn to_json_value(&self) -> Value {
        let rows: Vec<Value> = self
            .rows
            .iter()
            .map(|row| {
                let object: Map<String, Value> = self
                    .headers
                    .iter()
                    .zip(row.iter())
                    .map(|(header, cell)| (header.clone(), Value::String(cell.clone())))
                    .collect();
                Value::Object(object)
            })
            .collect();
        Value::Array(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::host::Host;

    #[test]
    fn lookup_by_header() {
        let records = vec![ScanRecord::placeholder(&Host::new("box", Some("10.0.0.9".into())))];
        let table = Table::from_records(&records);

        assert_eq!(table.len(), 1);
        assert_eq!(table.get(0, "IP"), Some("10.0.0.9"));
        assert_eq!(table.get(0, "Severity"), Some("Low"));
        assert_eq!(table.get(0, "Nope"), None);
        assert_eq!(table.get(1, "IP"), None);
    }

    #[test]
    fn json_objects_keep_header_order() {
        let mut table = Table::new(vec!["Zeta".into(), "Alpha".into()]);
        table.rows.push(vec!["1".into(), "2".into()]);

        let json = serde_json::to_string(&table.to_json_value()).expect("serializes");
        assert_eq!(json, r#"[{"Zeta":"1","Alpha":"2"}]"#);
    }
}
