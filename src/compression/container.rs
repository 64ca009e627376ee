//! Self-contained compressed file: the frequency table travels with the payload.
//!
//! ```text
//! "HUF1"              4 bytes  signature
//! k                   2 bytes  distinct symbols, big-endian, 1..=256
//! (symbol, count) * k 9 bytes each, count as big-endian u64, ascending symbols
//! padding             1 byte   0-7
//! packed bits         rest
//! ```

use log::{debug, info};

use super::compress::compress_detailed;
use super::decompress::decode;
use super::payload::EncodedPayload;
use crate::bitstream::bitpacker::BitPacker;
use crate::bitstream::bitreader::BitReader;
use crate::error::{HufError, Result};
use crate::huffman_coding::huffman::HuffmanTree;
use crate::tools::freq_count::FrequencyTable;

pub const SIGNATURE: [u8; 4] = *b"HUF1";

fn short_header(what: &str) -> HufError {
    HufError::InvalidHeader(format!("header ends before the {}", what))
}

/// Serialize the frequency table and payload.
pub fn write(freqs: &FrequencyTable, payload: &EncodedPayload) -> Vec<u8> {
    let header_len = SIGNATURE.len() + 2 + 9 * freqs.distinct();
    let mut bp = BitPacker::new(header_len + payload.encoded_len());

    SIGNATURE.iter().for_each(|&x| bp.out8(x));
    bp.out16(freqs.distinct() as u16);
    for (symbol, count) in freqs.symbols() {
        bp.out8(symbol);
        bp.out64(count);
    }
    bp.flush();
    debug!("Container header is {} bytes", bp.output.len());

    let mut out = bp.output;
    out.extend_from_slice(&payload.to_bytes());
    out
}

/// Parse and validate the header, returning the frequency table and the payload.
pub fn read(data: &[u8]) -> Result<(FrequencyTable, EncodedPayload)> {
    let mut br = BitReader::new(data);

    let signature = br.bytes(SIGNATURE.len()).ok_or_else(|| short_header("signature"))?;
    if signature != SIGNATURE {
        return Err(HufError::InvalidHeader(
            "not a hufzip compressed file".to_string(),
        ));
    }

    let distinct = br.bint(16).ok_or_else(|| short_header("symbol count"))? as usize;
    if !(1..=256).contains(&distinct) {
        return Err(HufError::InvalidHeader(format!(
            "symbol count {} out of range",
            distinct
        )));
    }

    let mut pairs = Vec::with_capacity(distinct);
    for _ in 0..distinct {
        let symbol = br.byte().ok_or_else(|| short_header("symbol table"))?;
        let count = br.bint(64).ok_or_else(|| short_header("symbol table"))?;
        if let Some(&(previous, _)) = pairs.last() {
            if symbol <= previous {
                return Err(HufError::InvalidHeader(format!(
                    "symbol {:#04x} out of order at {}",
                    symbol,
                    br.loc()
                )));
            }
        }
        pairs.push((symbol, count));
    }
    let freqs = FrequencyTable::from_counts(pairs)?;
    let payload = EncodedPayload::from_bytes(br.rest())?;
    Ok((freqs, payload))
}

/// Compress into a container.
pub fn pack(data: &[u8]) -> Result<Vec<u8>> {
    let compression = compress_detailed(data)?;
    let out = write(&compression.freqs, &compression.payload);
    info!("Packed {} bytes into {}", data.len(), out.len());
    Ok(out)
}

/// Decompress a container, no outside information needed.
pub fn unpack(data: &[u8]) -> Result<Vec<u8>> {
    let (freqs, payload) = read(data)?;
    let tree = HuffmanTree::build(&freqs)?;
    decode(&payload, &tree)
}
