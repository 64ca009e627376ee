//! The bitstream module is the bit level I/O layer of hufzip.
//!
//! Huffman codes have arbitrary lengths, so the compressed stream is written and read one bit
//! at a time, most significant bit first within each byte.
//!
//! - bitpacker: queues variable length codes and fixed width header fields into whole bytes.
//! - bitreader: walks a byte slice bit by bit, optionally limited to the coded bits.
//!
pub mod bitpacker;
pub mod bitreader;
