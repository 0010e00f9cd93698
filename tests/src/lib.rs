//! End-to-end checks over fixture reports.

mod ingest;
mod nmap;
