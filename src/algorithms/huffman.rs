//! Static Huffman coding.
//!
//! The compressed stream is a [`header`] carrying the frequency table, followed by the
//! packed codes. Empty input compresses to an empty stream.

use std::io::{self, Cursor, Read, Seek, Write};

use crate::compressor::HuffmanError;
use crate::mutator::{Mutator, Result};

if_tracing! {
    use tracing::{Level, debug, info, span};
}

pub mod bits;
pub mod codes;
pub mod frequency;
pub mod header;
pub mod tree;

use self::bits::BitWriter;
use self::codes::CodeTable;
use self::frequency::FrequencyTable;
use self::tree::HuffmanTree;

/// Sizes reported by [`compress`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompressionStats {
    pub original_len: u64,
    pub distinct_symbols: usize,
    pub header_len: usize,
    pub packed_len: u64,
    /// Meaningful bits in the packed section, excluding padding.
    pub packed_bits: u64,
}

impl CompressionStats {
    #[cfg(any(test, feature = "tracing"))]
    pub const fn compressed_len(&self) -> u64 {
        self.header_len as u64 + self.packed_len
    }
}

/// Compresses `input` into `output`.
///
/// `input` is read twice: once to count frequencies, then again after a rewind to encode.
pub fn compress<R: Read + Seek, W: Write>(input: &mut R, output: &mut W) -> Result<CompressionStats, HuffmanError> {
    if_tracing! {
        let span = span!(Level::INFO, "huffman_compress");
        let _enter = span.enter();
        debug!(target = "huffman", "building frequency table");
    }
    let table = FrequencyTable::from_reader(&mut *input)?;
    if table.is_empty() {
        if_tracing! {
            debug!(target = "huffman", "input empty, writing empty stream");
        }
        return Ok(CompressionStats::default());
    }

    if_tracing! {
        debug!(target = "huffman", distinct = table.len(), "building tree");
    }
    let tree = HuffmanTree::from_frequencies(&table)?;
    if_tracing! {
        debug!(target = "huffman", depth = tree.depth(), "generating codes");
    }
    let codes = CodeTable::from_tree(&tree)?;

    if_tracing! {
        debug!(target = "huffman", "writing header");
    }
    let mut head = Vec::new();
    header::encode_header(&table, &mut head);
    output.write_all(&head)?;

    if_tracing! {
        debug!(target = "huffman", expected_bits = codes.encoded_bits(&table), "writing compressed data");
    }
    input.rewind()?;
    let mut writer = BitWriter::new(&mut *output);
    let mut chunk = [0u8; 8192];
    loop {
        let n = match input.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        for &b in &chunk[..n] {
            let code = codes
                .get(b)
                .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "input changed between passes"))?;
            writer.push_code(code)?;
        }
    }
    let (_, packed_len, packed_bits) = writer.finish()?;

    let stats = CompressionStats {
        original_len: table.total(),
        distinct_symbols: table.len(),
        header_len: head.len(),
        packed_len,
        packed_bits,
    };
    if_tracing! {
        info!(target = "huffman", input_len = stats.original_len, output_len = stats.compressed_len(), "huffman encode complete");
    }
    Ok(stats)
}

/// Decompresses `data` into `output`, returning the number of bytes produced.
pub fn decompress<W: Write>(data: &[u8], output: &mut W) -> Result<u64, HuffmanError> {
    if_tracing! {
        let span = span!(Level::INFO, "huffman_decompress");
        let _enter = span.enter();
    }
    if data.is_empty() {
        if_tracing! {
            debug!(target = "huffman", "input empty, nothing to decode");
        }
        return Ok(0);
    }

    if_tracing! {
        debug!(target = "huffman", input_len = data.len(), "reading header");
    }
    let (table, header_len) = header::decode_header(data)?;

    if_tracing! {
        debug!(target = "huffman", distinct = table.len(), "rebuilding tree");
    }
    let tree = HuffmanTree::from_frequencies(&table)?;

    if_tracing! {
        debug!(target = "huffman", symbols = table.total(), "decoding data");
    }
    let decoded = bits::unpack(&data[header_len..], &tree, table.total(), output)?;
    output.flush()?;

    if_tracing! {
        info!(target = "huffman", input_len = data.len(), output_len = decoded, "huffman decode complete");
    }
    Ok(decoded)
}

/// Huffman coding exposed as a [`Mutator`] over in-memory buffers.
#[derive(Clone, Copy, Debug, Default)]
pub struct HuffmanCoding;

impl Mutator for HuffmanCoding {
    fn drive_mutation(&mut self, data: &[u8], buf: &mut Vec<u8>) -> Result<()> {
        buf.clear();
        compress(&mut Cursor::new(data), buf)?;
        Ok(())
    }

    fn revert_mutation(&mut self, data: &[u8], buf: &mut Vec<u8>) -> Result<()> {
        buf.clear();
        if let Err(e) = decompress(data, buf) {
            if_tracing! {
                tracing::error!(target = "huffman", error = %e, "huffman decode failed");
            }
            // partial output is never handed back
            buf.clear();
            return Err(e.into());
        }
        Ok(())
    }
}
