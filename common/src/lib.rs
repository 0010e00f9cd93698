//! Shared building blocks for the scanlens workspace.
//!
//! * [`report`]: the host/port models produced by the report parser and the
//!   normalized tabular shape handed to the rest of the tool.
//! * [`error`]: errors raised while loading and decoding report files.
//! * [`config`]: runtime switches built from the command line.

pub mod config;
pub mod error;
pub mod log;
pub mod report;
