use log::{debug, info};
use std::fs;

use crate::error::Result;
use crate::huffman_coding::code_table::Code;

/// What a compression run did, for the log and the report file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionSummary {
    /// Input length in bytes
    pub original_len: usize,
    /// Compressed file length in bytes, headers included
    pub compressed_len: usize,
    /// Code of every symbol, ascending by symbol
    pub codes: Vec<(u8, Code)>,
}

impl CompressionSummary {
    /// Send the summary to the log. Sizes at info level, the codes at debug level.
    pub fn log(&self) {
        info!("Original size: {} bytes", self.original_len);
        info!("Compressed size: {} bytes", self.compressed_len);
        for (symbol, code) in &self.codes {
            debug!("  {}: {}", show_symbol(*symbol), code);
        }
    }

    /// Render the report text.
    pub fn render(&self) -> String {
        let mut text = format!(
            "Compression complete.\nOriginal size: {} bytes\nCompressed size: {} bytes\nHuffman codes:\n",
            self.original_len, self.compressed_len
        );
        for (symbol, code) in &self.codes {
            text.push_str(&format!("{}: {}\n", show_symbol(*symbol), code));
        }
        text
    }

    /// Write the report to a file, replacing it if it exists.
    pub fn write_report(&self, path: &str) -> Result<()> {
        fs::write(path, self.render())?;
        info!("Progress saved in '{}'.", path);
        Ok(())
    }
}

/// Quote a symbol for humans: printable ASCII as itself, anything else escaped.
pub fn show_symbol(symbol: u8) -> String {
    format!("'{}'", std::ascii::escape_default(symbol))
}
