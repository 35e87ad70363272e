//! Common utilities for the sliver parser.
//!
//! This crate provides shared infrastructure used by the parser driver:
//! - **Warning Reporter** - colored, deduplicated terminal output for
//!   lenient parse recoveries and other non-fatal diagnostics

pub mod warning;
