//! Process-wide logging setup for stockboard hosts.
//!
//! Library crates only emit `tracing` events; a host calls [`init`] once at
//! startup (or [`init_with`] to force an output format).

pub mod tracing;

pub use crate::tracing::{LOG_FORMAT_VAR, LogFormat, init, init_with};
