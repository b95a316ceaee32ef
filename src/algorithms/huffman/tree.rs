use core::cmp::Reverse;
use std::collections::BinaryHeap;

use super::frequency::FrequencyTable;
use crate::compressor::HuffmanError;

if_tracing! {
    use tracing::debug;
}

/// Index of a node inside [`HuffmanTree`]'s arena.
pub type NodeId = usize;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Leaf {
        byte: u8,
        weight: u64,
    },
    /// `right` is `None` only for the wrapper placed above a lone symbol.
    Internal {
        weight: u64,
        left: NodeId,
        right: Option<NodeId>,
    },
}

impl Node {
    pub const fn weight(&self) -> u64 {
        match *self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => weight,
        }
    }
}

/// A Huffman tree stored as an arena. Every node except the root has exactly one parent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl HuffmanTree {
    /// Builds the tree by greedily merging the two lightest nodes.
    ///
    /// Equal weights are ordered by arena index: leaves are seeded in ascending byte order
    /// and every merged node takes the next free index. The first node popped becomes the
    /// left child. The result depends only on `table`, so rebuilding from a decoded header
    /// reproduces the compress-time tree.
    pub fn from_frequencies(table: &FrequencyTable) -> Result<Self, HuffmanError> {
        if table.is_empty() {
            return Err(HuffmanError::EmptyAlphabet);
        }

        let mut nodes: Vec<Node> = Vec::with_capacity(2 * table.len());
        let mut heap: BinaryHeap<Reverse<(u64, NodeId)>> = BinaryHeap::with_capacity(table.len());
        for (&byte, &weight) in table {
            heap.push(Reverse((weight, nodes.len())));
            nodes.push(Node::Leaf { byte, weight });
        }

        if nodes.len() == 1 {
            let weight = nodes[0].weight();
            nodes.push(Node::Internal { weight, left: 0, right: None });
            if_tracing! {
                debug!(target = "huffman", "single symbol, wrapping leaf under synthetic root");
            }
            return Ok(Self { nodes, root: 1 });
        }

        while let (Some(Reverse((lw, left))), Some(Reverse((rw, right)))) = (heap.pop(), heap.pop()) {
            let weight = lw + rw;
            let id = nodes.len();
            nodes.push(Node::Internal {
                weight,
                left,
                right: Some(right),
            });
            heap.push(Reverse((weight, id)));
        }

        // The loop exits after popping the root alone.
        let root = nodes.len() - 1;
        if_tracing! {
            debug!(target = "huffman", leaves = table.len(), nodes = nodes.len(), "tree built");
        }
        Ok(Self { nodes, root })
    }

    pub const fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Follows one edge from `id`: `false` goes left, `true` goes right.
    ///
    /// Returns `None` for a missing branch or when `id` is a leaf.
    pub fn step(&self, id: NodeId, bit: bool) -> Option<NodeId> {
        match self.nodes[id] {
            Node::Internal { left, right, .. } => {
                if bit {
                    right
                } else {
                    Some(left)
                }
            }
            Node::Leaf { .. } => None,
        }
    }

    /// The byte stored at `id`, if it is a leaf.
    pub fn symbol(&self, id: NodeId) -> Option<u8> {
        match self.nodes[id] {
            Node::Leaf { byte, .. } => Some(byte),
            Node::Internal { .. } => None,
        }
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self.root, 0usize)];
        while let Some((id, d)) = stack.pop() {
            match self.nodes[id] {
                Node::Leaf { .. } => max = max.max(d),
                Node::Internal { left, right, .. } => {
                    stack.push((left, d + 1));
                    if let Some(right) = right {
                        stack.push((right, d + 1));
                    }
                }
            }
        }
        max
    }

    #[cfg(test)]
    pub(super) fn bare_leaf(byte: u8, weight: u64) -> Self {
        Self {
            nodes: vec![Node::Leaf { byte, weight }],
            root: 0,
        }
    }
}
