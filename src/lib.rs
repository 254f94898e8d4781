//! tagtrack - Custom marker pair tracker
//!
//! Scans documents for bracketed marker pairs (`[!name]` opening,
//! `[~name]` closing), keeps a per-document occurrence cache correct under
//! incremental edits, and answers positional, pairing and balance queries
//! over it.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TagtrackError;
