pub use anyhow::Result;

use crate::compressor::RoundTripTestResult;

/// A reversible transformation over byte buffers.
///
/// `drive_mutation` encodes `data` into `buf`, `revert_mutation` decodes it back.
/// Both clear `buf` before writing.
pub trait Mutator {
    fn drive_mutation(&mut self, data: &[u8], buf: &mut Vec<u8>) -> Result<()>;
    fn revert_mutation(&mut self, data: &[u8], buf: &mut Vec<u8>) -> Result<()>;

    /// Performs a round-trip test on the mutator.
    ///
    /// Use for sanity checking the encoder and decoder.
    fn test_roundtrip<'orig>(&mut self, data: &'orig [u8]) -> Result<RoundTripTestResult<'orig>> {
        let mut compressed = Vec::new();
        self.drive_mutation(data, &mut compressed)?;
        let mut decompressed = Vec::new();
        self.revert_mutation(&compressed, &mut decompressed)?;
        let equal = data == decompressed.as_slice();

        Ok(RoundTripTestResult {
            equal,
            original: data,
            compressed,
            decompressed,
        })
    }
}
