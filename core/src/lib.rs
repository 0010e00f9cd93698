//! Report ingestion for scanlens.
//!
//! * [`nmap`]: turns the normal (human readable) output of an Nmap run into
//!   normalized scan records.
//! * [`ingest`]: picks a decoder for a report file and loads it into a
//!   [`Table`](scanlens_common::report::Table).

pub mod ingest;
pub mod nmap;
