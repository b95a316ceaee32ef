use std::io;

use thiserror::Error;

/// Represents an error emitted by the Huffman codec while encoding or decoding data.
#[derive(Debug, Error)]
pub enum HuffmanError {
    /// The source could not be read, or the destination could not be written.
    #[error("I/O unavailable: {0}")]
    IoUnavailable(#[from] io::Error),

    /// The header is inconsistent with the available bytes, or with itself.
    ///
    /// The argument is a string that describes what went wrong.
    #[error("malformed header: {0}")]
    MalformedHeader(String),

    /// The packed bit-stream ended before every symbol announced by the header was decoded.
    #[error("truncated stream: decoded {decoded} of {expected} symbols")]
    TruncatedStream { decoded: u64, expected: u64 },

    /// The packed bit-stream followed a branch that does not exist in the tree.
    #[error("invalid code at bit offset {bit_offset}")]
    InvalidCode { bit_offset: u64 },

    /// A tree was requested for a frequency table without any symbols.
    #[error("cannot build a tree from an empty frequency table")]
    EmptyAlphabet,

    /// The tree root is a leaf, which would assign an empty code.
    #[error("tree root is a leaf; its code would be empty")]
    DegenerateTree,
}

/// Represents the result of a round-trip test.
///
/// Use accessor methods to retrieve the [`result`][RoundTripTestResult::is_successful],
/// the [`original data`][RoundTripTestResult::get_original],
/// the [`compressed data`][RoundTripTestResult::get_compressed],
/// and the [`decompressed data`][RoundTripTestResult::get_decompressed].
#[derive(Clone, Debug, Hash)]
pub struct RoundTripTestResult<'orig> {
    pub(crate) equal: bool,
    pub(crate) original: &'orig [u8],
    pub(crate) compressed: Vec<u8>,
    pub(crate) decompressed: Vec<u8>,
}

impl<'orig> RoundTripTestResult<'orig> {
    /// Whether the original and decompressed data were equal.
    pub const fn is_successful(&self) -> bool {
        self.equal
    }

    /// The original data before any action was taken.
    pub const fn get_original(&self) -> &'orig [u8] {
        self.original
    }

    /// The data after it has been encoded by the compressor.
    pub fn get_compressed(&self) -> &[u8] {
        self.compressed.as_slice()
    }

    /// The data after it has been decoded by the decompressor.
    pub fn get_decompressed(&self) -> &[u8] {
        self.decompressed.as_slice()
    }
}

/// Ratio of compressed to original length. Empty originals report `0.0`.
pub fn compression_ratio(original: &[u8], compressed: &[u8]) -> f64 {
    if original.is_empty() {
        return 0.0;
    }
    compressed.len() as f64 / original.len() as f64
}
