use std::collections::BTreeMap;
use std::collections::btree_map;
use std::io::{self, BufReader, Read};

/// Occurrence counts for every byte value seen at least once.
///
/// Iteration is in ascending byte order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<u8, u64>,
}

impl FrequencyTable {
    /// Counts every byte of `reader` exactly once.
    pub fn from_reader<R: Read>(reader: R) -> io::Result<Self> {
        let mut counts = [0u64; 256];
        let mut reader = BufReader::new(reader);
        let mut chunk = [0u8; 8192];
        loop {
            let n = match reader.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            for &b in &chunk[..n] {
                counts[b as usize] += 1;
            }
        }
        Ok(Self::from_dense(&counts))
    }

    pub fn from_bytes(data: &[u8]) -> Self {
        let mut counts = [0u64; 256];
        for &b in data {
            counts[b as usize] += 1;
        }
        Self::from_dense(&counts)
    }

    fn from_dense(counts: &[u64; 256]) -> Self {
        let counts = counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(byte, &count)| (byte as u8, count))
            .collect();
        Self { counts }
    }

    /// Builds a table from `(byte, count)` pairs. Zero counts are dropped, repeated bytes accumulate.
    pub fn from_pairs<I: IntoIterator<Item = (u8, u64)>>(pairs: I) -> Self {
        let mut counts = BTreeMap::new();
        for (byte, count) in pairs {
            if count > 0 {
                *counts.entry(byte).or_insert(0) += count;
            }
        }
        Self { counts }
    }

    #[cfg(test)]
    pub fn get(&self, byte: u8) -> Option<u64> {
        self.counts.get(&byte).copied()
    }

    /// Number of distinct bytes.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the length of the original input.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, u8, u64> {
        self.counts.iter()
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = (&'a u8, &'a u64);
    type IntoIter = btree_map::Iter<'a, u8, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn empty_input_gives_empty_table() {
        let table = FrequencyTable::from_bytes(b"");
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn counts_each_byte() {
        let table = FrequencyTable::from_bytes(b"aabbbcccc");
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(b'a'), Some(2));
        assert_eq!(table.get(b'b'), Some(3));
        assert_eq!(table.get(b'c'), Some(4));
        assert_eq!(table.get(b'd'), None);
        assert_eq!(table.total(), 9);
    }

    #[test]
    fn reader_agrees_with_slice() {
        let data: Vec<u8> = (0..20_000u32).map(|i| (i * 7 % 251) as u8).collect();
        let from_reader = FrequencyTable::from_reader(Cursor::new(&data)).unwrap();
        assert_eq!(from_reader, FrequencyTable::from_bytes(&data));
        assert_eq!(from_reader.total(), data.len() as u64);
    }

    #[test]
    fn iterates_in_ascending_byte_order() {
        let table = FrequencyTable::from_bytes(b"zyxzyx\x00\xff");
        let keys: Vec<u8> = table.iter().map(|(&b, _)| b).collect();
        assert_eq!(keys, vec![0x00, b'x', b'y', b'z', 0xff]);
    }

    #[test]
    fn from_pairs_drops_zero_counts() {
        let table = FrequencyTable::from_pairs([(1, 0), (2, 5), (2, 1)]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(2), Some(6));
    }
}
