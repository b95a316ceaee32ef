//! Self-describing header carrying the frequency table.
//!
//! Layout, little-endian:
//!
//! ```text
//! [entry_count: u16]
//! entry_count * { [byte: u8][frequency: u64] }
//! ```
//!
//! Entries are written in ascending byte order. A `u64` frequency covers any input that
//! fits on disk; the count needs 9 bits, so it gets a `u16`.

use std::collections::BTreeSet;

use super::frequency::FrequencyTable;
use crate::compressor::HuffmanError;

pub const COUNT_WIDTH: usize = size_of::<u16>();
pub const FREQUENCY_WIDTH: usize = size_of::<u64>();
pub const ENTRY_WIDTH: usize = 1 + FREQUENCY_WIDTH;
pub const MAX_ENTRIES: usize = 256;

/// Encoded size of the header for `table`.
pub const fn header_len(entries: usize) -> usize {
    COUNT_WIDTH + entries * ENTRY_WIDTH
}

pub fn encode_header(table: &FrequencyTable, buf: &mut Vec<u8>) {
    buf.reserve(header_len(table.len()));
    // at most 256 entries
    buf.extend_from_slice(&(table.len() as u16).to_le_bytes());
    for (&byte, &freq) in table {
        buf.push(byte);
        buf.extend_from_slice(&freq.to_le_bytes());
    }
}

/// Parses a header from the start of `data`.
///
/// Returns the table and the number of bytes consumed; the packed stream starts right after.
pub fn decode_header(data: &[u8]) -> Result<(FrequencyTable, usize), HuffmanError> {
    let Some((count_bytes, rest)) = data.split_first_chunk::<COUNT_WIDTH>() else {
        return Err(HuffmanError::MalformedHeader(format!(
            "need {} bytes for the entry count, found {}",
            COUNT_WIDTH,
            data.len()
        )));
    };
    let count = u16::from_le_bytes(*count_bytes) as usize;

    if count == 0 || count > MAX_ENTRIES {
        return Err(HuffmanError::MalformedHeader(format!(
            "entry count {} outside 1..={}",
            count, MAX_ENTRIES
        )));
    }
    let needed = count * ENTRY_WIDTH;
    if rest.len() < needed {
        return Err(HuffmanError::MalformedHeader(format!(
            "{} entries need {} bytes, only {} available",
            count,
            needed,
            rest.len()
        )));
    }

    let mut seen = BTreeSet::new();
    let mut total: u64 = 0;
    let mut pairs = Vec::with_capacity(count);
    for entry in rest[..needed].chunks_exact(ENTRY_WIDTH) {
        let byte = entry[0];
        let mut freq = [0u8; FREQUENCY_WIDTH];
        freq.copy_from_slice(&entry[1..]);
        let freq = u64::from_le_bytes(freq);

        if !seen.insert(byte) {
            return Err(HuffmanError::MalformedHeader(format!("byte {:#04x} listed twice", byte)));
        }
        if freq == 0 {
            return Err(HuffmanError::MalformedHeader(format!("byte {:#04x} has zero frequency", byte)));
        }
        total = total
            .checked_add(freq)
            .ok_or_else(|| HuffmanError::MalformedHeader("total symbol count overflows u64".to_string()))?;
        pairs.push((byte, freq));
    }

    Ok((FrequencyTable::from_pairs(pairs), header_len(count)))
}
