use std::fs;

use log::{debug, error, info};

use super::compress::check_output;
use super::container;
use super::payload::EncodedPayload;
use crate::bitstream::bitreader::BitReader;
use crate::error::{HufError, Result};
use crate::huffman_coding::huffman::{HuffmanTree, Node};
use crate::tools::cli::{Format, HufOpts};
use crate::tools::freq_count::FrequencyTable;

/// Walk the tree one bit at a time and emit a symbol at every leaf.
///
/// The tree weight is the number of symbols the payload must hold. Running out of
/// bits mid-path or before that many symbols is a truncation; producing more, or
/// a bit that leads nowhere, means the tree does not belong to this payload.
pub fn decode(payload: &EncodedPayload, tree: &HuffmanTree) -> Result<Vec<u8>> {
    if payload.padding > 7 {
        return Err(HufError::InvalidPadding(payload.padding));
    }
    let expected = usize::try_from(tree.weight())
        .map_err(|_| HufError::TreeMismatch("tree weight exceeds addressable size".into()))?;

    let mut br = BitReader::new(&payload.bytes);
    br.limit(payload.bit_len());

    // Every symbol costs at least one bit, so the bit count bounds the allocation
    let mut out = Vec::with_capacity(expected.min(br.remaining()));
    let root = &tree.root;
    let mut node = root;
    let mut in_path = false;

    while let Some(bit) = br.bool_bit() {
        node = match node {
            Node::Internal { left, right, .. } => {
                if bit {
                    &**right
                } else {
                    &**left
                }
            }
            // Only a single-leaf root gets here: its code is the lone 0 bit
            Node::Leaf { .. } => {
                if bit {
                    return Err(HufError::TreeMismatch(format!(
                        "bit 1 under a single-symbol tree at {}",
                        br.loc()
                    )));
                }
                node
            }
        };
        in_path = true;

        if let Node::Leaf { symbol, .. } = node {
            if out.len() == expected {
                return Err(HufError::TreeMismatch(format!(
                    "payload holds more than the {} symbols the tree accounts for",
                    expected
                )));
            }
            out.push(*symbol);
            node = root;
            in_path = false;
        }
    }

    if in_path || out.len() < expected {
        error!(
            "Stream ended after {} of {} symbols{}",
            out.len(),
            expected,
            if in_path { ", inside a code" } else { "" }
        );
        return Err(HufError::TruncatedStream {
            decoded: out.len(),
            expected,
        });
    }
    if !payload.padding_is_clean() {
        return Err(HufError::InvalidPadding(payload.padding));
    }
    debug!("Decoded {} symbols from {} bits", out.len(), payload.bit_len());
    Ok(out)
}

/// Decompress a bare payload against a separately supplied frequency table,
/// which must be the table of the original stream.
pub fn decompress(payload: &EncodedPayload, reference: &FrequencyTable) -> Result<Vec<u8>> {
    let tree = HuffmanTree::build(reference)?;
    decode(payload, &tree)
}

/// Decompress the file specified in opts (HufOpts). Nothing is written unless
/// the whole decompression succeeds. Returns the number of bytes written.
pub fn decompress_file(opts: &HufOpts) -> Result<usize> {
    let input = opts.input_path()?;
    let output = opts.output_path()?;
    check_output(&output, opts.force_overwrite)?;

    let data = fs::read(input)?;
    info!("Read {} compressed bytes from {}", data.len(), input);

    let decoded = match opts.format {
        Format::Container => container::unpack(&data)?,
        Format::Raw => {
            let reference = opts
                .reference
                .as_deref()
                .ok_or(HufError::MissingArgument("--reference"))?;
            let freqs = FrequencyTable::from_bytes(&fs::read(reference)?);
            info!("Rebuilding the code from {}", reference);
            decompress(&EncodedPayload::from_bytes(&data)?, &freqs)?
        }
    };

    fs::write(&output, &decoded)?;
    info!(
        "Decompressed file written to {} ({} bytes)",
        output,
        decoded.len()
    );
    Ok(decoded.len())
}
