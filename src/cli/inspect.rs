use serde::Serialize;

use crate::algorithms::huffman::codes::CodeTable;
use crate::algorithms::huffman::header;
use crate::algorithms::huffman::tree::HuffmanTree;
use crate::cli::{InspectArgs, Result, read_file};

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct HeaderReport {
    pub total_symbols: u64,
    pub distinct_symbols: usize,
    pub header_len: usize,
    pub packed_len: usize,
    pub tree_depth: usize,
    pub entries: Vec<EntryReport>,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct EntryReport {
    pub byte: u8,
    pub frequency: u64,
    pub code: String,
}

/// Describes a compressed stream. Empty streams report no entries.
pub fn build_report(data: &[u8]) -> Result<HeaderReport> {
    if data.is_empty() {
        return Ok(HeaderReport {
            total_symbols: 0,
            distinct_symbols: 0,
            header_len: 0,
            packed_len: 0,
            tree_depth: 0,
            entries: Vec::new(),
        });
    }

    let (table, header_len) = header::decode_header(data)?;
    let tree = HuffmanTree::from_frequencies(&table)?;
    let codes = CodeTable::from_tree(&tree)?;

    let entries = table
        .iter()
        .map(|(&byte, &frequency)| EntryReport {
            byte,
            frequency,
            code: codes.get(byte).map(ToString::to_string).unwrap_or_default(),
        })
        .collect();

    Ok(HeaderReport {
        total_symbols: table.total(),
        distinct_symbols: table.len(),
        header_len,
        packed_len: data.len() - header_len,
        tree_depth: tree.depth(),
        entries,
    })
}

pub fn inspect(args: InspectArgs) -> Result<()> {
    let data = read_file(&args.input)?;
    let report = build_report(&data)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::HuffmanCoding;
    use crate::cli::CliError;
    use crate::compressor::HuffmanError;
    use crate::mutator::Mutator;

    #[test]
    fn reports_codes_for_each_entry() {
        let mut compressed = Vec::new();
        HuffmanCoding.drive_mutation(b"aabbbcccc", &mut compressed).unwrap();
        let report = build_report(&compressed).unwrap();

        assert_eq!(report.total_symbols, 9);
        assert_eq!(report.distinct_symbols, 3);
        assert_eq!(report.header_len, header::header_len(3));
        assert_eq!(report.packed_len, 2);
        assert_eq!(report.tree_depth, 2);
        let codes: Vec<(u8, &str)> = report.entries.iter().map(|e| (e.byte, e.code.as_str())).collect();
        assert_eq!(codes, vec![(b'a', "10"), (b'b', "11"), (b'c', "0")]);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["entries"][2]["code"], "0");
        assert_eq!(json["entries"][0]["frequency"], 2);
    }

    #[test]
    fn empty_stream_has_no_entries() {
        let report = build_report(&[]).unwrap();
        assert!(report.entries.is_empty());
        assert_eq!(report.total_symbols, 0);
    }

    #[test]
    fn malformed_header_surfaces_as_codec_error() {
        let err = build_report(&[0, 0]).unwrap_err();
        assert!(matches!(err, CliError::Codec(HuffmanError::MalformedHeader(_))));
    }
}
