//! Core library for the `sites-checker` CLI.
//!
//! The binary probes a list of HTTP(S) hosts a fixed number of times each,
//! all concurrently, and reports per-host success, failure, error counts and
//! min/max/avg response times. Modules here hold the argument and config
//! handling, the HTTP transport, the probe engine, and report rendering.
pub mod args;
pub mod config;
pub mod entry;
pub mod error;
pub mod http;
pub mod probe;
pub mod report;

mod system;
