//! The huffman module builds the prefix-free code used by hufzip.
//!
//! The tree is built deterministically: ties in weight are broken by creation order, leaves
//! are created in ascending byte order and merged nodes take the next sequence number. The
//! same frequency table therefore always yields the same tree and the same codes, which is
//! what lets the decoder rebuild the encoder's tree from the frequencies alone.
//!

pub mod code_table;
pub mod huffman;
