use std::io::{self, Write};

use super::codes::Code;
use super::tree::HuffmanTree;
use crate::compressor::HuffmanError;

/// Packs codes MSB-first into whole bytes.
///
/// A trailing partial byte is left-aligned and zero-filled by [`BitWriter::finish`]. The
/// writer never records how many pad bits it added; the decoder stops on the symbol count.
pub struct BitWriter<W: Write> {
    inner: W,
    acc: u8,
    filled: u8,
    bytes_written: u64,
    bits_written: u64,
}

impl<W: Write> BitWriter<W> {
    pub const fn new(inner: W) -> Self {
        Self {
            inner,
            acc: 0,
            filled: 0,
            bytes_written: 0,
            bits_written: 0,
        }
    }

    pub fn push_bit(&mut self, bit: bool) -> io::Result<()> {
        self.acc = (self.acc << 1) | u8::from(bit);
        self.filled += 1;
        self.bits_written += 1;
        if self.filled == 8 {
            self.inner.write_all(&[self.acc])?;
            self.bytes_written += 1;
            self.acc = 0;
            self.filled = 0;
        }
        Ok(())
    }

    pub fn push_code(&mut self, code: &Code) -> io::Result<()> {
        for &bit in code.bits() {
            self.push_bit(bit)?;
        }
        Ok(())
    }

    /// Flushes the partial byte, if any, and returns `(inner, bytes_written, bits_written)`.
    pub fn finish(mut self) -> io::Result<(W, u64, u64)> {
        if self.filled > 0 {
            let padded = self.acc << (8 - self.filled);
            self.inner.write_all(&[padded])?;
            self.bytes_written += 1;
        }
        self.inner.flush()?;
        Ok((self.inner, self.bytes_written, self.bits_written))
    }
}

/// Decodes exactly `total_symbols` bytes from `packed` by walking `tree`.
///
/// Bits left in the final byte after the last symbol are padding and are not inspected.
pub fn unpack<W: Write>(packed: &[u8], tree: &HuffmanTree, total_symbols: u64, out: &mut W) -> Result<u64, HuffmanError> {
    if total_symbols == 0 {
        return Ok(0);
    }

    let root = tree.root();
    let mut node = root;
    let mut decoded: u64 = 0;
    let mut consumed_bytes = 0usize;

    'bytes: for (i, &byte) in packed.iter().enumerate() {
        consumed_bytes = i + 1;
        for shift in (0..8).rev() {
            let bit = (byte >> shift) & 1 == 1;
            node = tree.step(node, bit).ok_or(HuffmanError::InvalidCode {
                bit_offset: i as u64 * 8 + (7 - shift) as u64,
            })?;

            if let Some(symbol) = tree.symbol(node) {
                out.write_all(&[symbol])?;
                decoded += 1;
                node = root;
                if decoded == total_symbols {
                    break 'bytes;
                }
            }
        }
    }

    if decoded < total_symbols {
        if_tracing! {
            tracing::warn!(target = "huffman", decoded, expected = total_symbols, "bit stream exhausted early");
        }
        return Err(HuffmanError::TruncatedStream {
            decoded,
            expected: total_symbols,
        });
    }

    if consumed_bytes < packed.len() {
        if_tracing! {
            tracing::debug!(target = "huffman", ignored = packed.len() - consumed_bytes, "trailing bytes after final symbol");
        }
    }
    Ok(decoded)
}
