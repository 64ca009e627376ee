use std::fs;
use std::path::Path;

use log::{debug, info};

use super::container;
use super::payload::EncodedPayload;
use crate::bitstream::bitpacker::BitPacker;
use crate::error::{HufError, Result};
use crate::huffman_coding::code_table::CodeTable;
use crate::huffman_coding::huffman::HuffmanTree;
use crate::tools::cli::{Format, HufOpts};
use crate::tools::freq_count::FrequencyTable;
use crate::tools::report::CompressionSummary;

/// Everything produced by one compression: the frequency table the tree came
/// from, the code table, and the packed payload.
#[derive(Debug, Clone)]
pub struct Compression {
    pub freqs: FrequencyTable,
    pub codes: CodeTable,
    pub payload: EncodedPayload,
}

/// Pack the code of every input symbol, in input order, into whole bytes.
pub fn encode(data: &[u8], codes: &CodeTable) -> Result<EncodedPayload> {
    // Most inputs shrink, so the input length is a generous starting capacity
    let mut bp = BitPacker::new(data.len());
    for &symbol in data {
        let code = codes.get(symbol).ok_or(HufError::SymbolNotInTable(symbol))?;
        bp.out_code(code);
    }
    let coded_bits = bp.bit_count();
    let padding = bp.flush();
    debug!(
        "Packed {} symbols into {} bits plus {} padding bits",
        data.len(),
        coded_bits,
        padding
    );
    Ok(EncodedPayload {
        padding,
        bytes: bp.output,
    })
}

/// Count, build the tree, derive the codes and pack the data.
pub fn compress_detailed(data: &[u8]) -> Result<Compression> {
    if data.is_empty() {
        return Err(HufError::EmptyInput);
    }
    let freqs = FrequencyTable::from_bytes(data);
    let tree = HuffmanTree::build(&freqs)?;
    tree.trace_structure();
    let codes = CodeTable::from_tree(&tree);
    let payload = encode(data, &codes)?;
    Ok(Compression {
        freqs,
        codes,
        payload,
    })
}

/// Compress a byte stream into a bare payload. Decoding it needs the
/// frequencies of the same stream (see `decompress::decompress`).
pub fn compress(data: &[u8]) -> Result<EncodedPayload> {
    compress_detailed(data).map(|compression| compression.payload)
}

/// Refuse to clobber an existing file unless forced.
pub(crate) fn check_output(path: &str, force: bool) -> Result<()> {
    if !force && Path::new(path).exists() {
        return Err(HufError::OutputExists(path.to_string()));
    }
    Ok(())
}

/// Compress the input file defined in opts <HufOpts>. Nothing is written unless
/// the whole compression succeeds.
pub fn compress_file(opts: &HufOpts) -> Result<CompressionSummary> {
    let input = opts.input_path()?;
    let output = opts.output_path()?;
    check_output(&output, opts.force_overwrite)?;

    let data = fs::read(input)?;
    info!("Read {} bytes from {}", data.len(), input);

    let compression = compress_detailed(&data)?;
    let bytes = match opts.format {
        Format::Container => container::write(&compression.freqs, &compression.payload),
        Format::Raw => compression.payload.to_bytes(),
    };
    fs::write(&output, &bytes)?;
    info!("Compressed file written to {}", output);

    let summary = CompressionSummary {
        original_len: data.len(),
        compressed_len: bytes.len(),
        codes: compression.codes.sorted(),
    };
    summary.log();
    if let Some(report) = &opts.report {
        summary.write_report(report)?;
    }
    Ok(summary)
}
