//! Error types shared by the codec, the file layer and the interactive menu.

use thiserror::Error;

/// Everything that can go wrong while compressing or decompressing.
#[derive(Debug, Error)]
pub enum HufError {
    /// Nothing to encode (or an empty frequency table).
    #[error("input is empty, nothing to encode")]
    EmptyInput,

    /// The encoder met a byte that has no code. Table and input are out of sync.
    #[error("symbol {0:#04x} has no entry in the code table")]
    SymbolNotInTable(u8),

    /// The bit stream ran out before the tree said it should.
    #[error("stream truncated: decoded {decoded} of {expected} symbols")]
    TruncatedStream { decoded: usize, expected: usize },

    /// The decoding tree does not fit the payload.
    #[error("decoding tree does not match payload: {0}")]
    TreeMismatch(String),

    /// Padding length above 7, or padding bits that are not zero.
    #[error("invalid padding ({0} bits)")]
    InvalidPadding(u8),

    /// Frequencies add up to more than a u64 can hold.
    #[error("total symbol weight overflows")]
    WeightOverflow,

    /// The container header is malformed.
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// Refusing to clobber an existing file without --force.
    #[error("output file {0} already exists (use --force to overwrite)")]
    OutputExists(String),

    /// A required option was not supplied.
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    /// Menu: a compression is already pending.
    #[error("data is already compressed, decompress before compressing again")]
    AlreadyCompressed,

    /// Menu: decompress requested before any compression.
    #[error("no compressed file available, compress before decompressing")]
    NothingToDecompress,

    /// File system errors from the boundary I/O.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, HufError>;
