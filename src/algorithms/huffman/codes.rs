use core::fmt;
use std::collections::BTreeMap;

use super::tree::{HuffmanTree, Node};
use crate::compressor::HuffmanError;

/// A root-to-leaf path. `false` is a left edge (0), `true` a right edge (1).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    #[cfg(any(test, feature = "tracing"))]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    #[cfg(test)]
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<u8, Code>,
}

impl CodeTable {
    pub fn from_tree(tree: &HuffmanTree) -> Result<Self, HuffmanError> {
        if let Node::Leaf { .. } = tree.node(tree.root()) {
            return Err(HuffmanError::DegenerateTree);
        }

        let mut codes = BTreeMap::new();
        let mut path = Vec::new();
        walk(tree, tree.root(), &mut path, &mut codes);
        Ok(Self { codes })
    }

    pub fn get(&self, byte: u8) -> Option<&Code> {
        self.codes.get(&byte)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> {
        self.codes.iter().map(|(&b, c)| (b, c))
    }

    /// Total number of bits needed to encode every byte of `data`.
    #[cfg(any(test, feature = "tracing"))]
    pub fn encoded_bits<'a, I: IntoIterator<Item = (&'a u8, &'a u64)>>(&self, counts: I) -> u64 {
        counts
            .into_iter()
            .map(|(b, &n)| self.codes.get(b).map_or(0, |c| c.len() as u64 * n))
            .sum()
    }
}

// Recursion depth is bounded by the tree depth, at most 255.
fn walk(tree: &HuffmanTree, id: usize, path: &mut Vec<bool>, out: &mut BTreeMap<u8, Code>) {
    match *tree.node(id) {
        Node::Leaf { byte, .. } => {
            out.insert(byte, Code { bits: path.clone() });
        }
        Node::Internal { left, right, .. } => {
            path.push(false);
            walk(tree, left, path, out);
            path.pop();
            if let Some(right) = right {
                path.push(true);
                walk(tree, right, path, out);
                path.pop();
            }
        }
    }
}
