//! # Report Models
//!
//! * [`host::Host`] / [`host::Port`]: one scanned endpoint and the services
//!   found on it, in the order the scanner printed them.
//! * [`record::ScanRecord`]: the flat, all-string row with the fixed header
//!   schema used by everything downstream of the parser.
//! * [`table::Table`]: headers plus aligned rows, the common result of every
//!   ingestion path (text reports and CSV files alike).

pub mod host;
pub mod record;
pub mod table;

pub use host::{Host, Port};
pub use record::{BASELINE_SEVERITY, NO_OPEN_PORTS_STATE, ScanRecord};
pub use table::Table;
