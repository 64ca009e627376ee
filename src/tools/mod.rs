//! The tools module provides helper functions for hufzip.
//!
//! The tools are:
//! - cli: Command line interface.
//! - freq_count: Byte frequency count and the frequency table.
//! - menu: Interactive compress/decompress loop.
//! - report: Compression summary for the log and the report file.
//!
pub mod cli;
pub mod freq_count;
pub mod menu;
pub mod report;
