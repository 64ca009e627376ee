//! The compression module manages both directions of the codec.
//!
//! Compression happens in the following steps:
//! - Count the frequency of every byte value.
//! - Build the Huffman tree, merging the two lightest nodes until one remains.
//! - Derive the code table from the root-to-leaf paths.
//! - Pack the code of every input byte and record how many padding bits close the last byte.
//!
//! Decompression rebuilds the same tree from the same frequencies and walks it bit by bit.
//!
//! Two file layouts are supported. The container carries the frequency table so it decodes
//! on its own. The raw payload is only the padding byte and the packed bits, and needs the
//! original stream's frequencies to decode.
//!

pub mod compress;
pub mod container;
pub mod decompress;
pub mod payload;
