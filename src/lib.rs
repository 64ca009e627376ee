//! Static Huffman coding of byte streams.
//!
//! Version 0.1.0
//!
//! Compresses any byte stream with a prefix-free code derived from the stream's own byte
//! frequencies. Decoding is exact: decompressing a compressed stream always restores the
//! original bytes.
//!
//! Basic usage to compress a file is as follows:
//!
//! `$> hufzip -z test.txt`
//!
//! This will compress the file and create the file test.txt.huf, which carries its own
//! frequency table. `hufzip -d test.txt.huf` restores test.txt.
//!
//! As a library:
//!
//! ```
//! let packed = hufzip::pack(b"abracadabra").unwrap();
//! assert_eq!(hufzip::unpack(&packed).unwrap(), b"abracadabra");
//! ```
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use compression::compress::compress;
pub use compression::container::{pack, unpack};
pub use compression::decompress::decompress;
pub use compression::payload::EncodedPayload;
pub use error::{HufError, Result};
pub use tools::freq_count::FrequencyTable;
