use log::{debug, trace};

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{HufError, Result};
use crate::tools::freq_count::FrequencyTable;

/// A node of the coding tree. Leaves carry a symbol, internal nodes own exactly two children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: u8,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    /// Join two nodes under a new parent. `a` (extracted first) goes left.
    fn merge(a: Node, b: Node) -> Result<Node> {
        let weight = a
            .weight()
            .checked_add(b.weight())
            .ok_or(HufError::WeightOverflow)?;
        Ok(Node::Internal {
            weight,
            left: Box::new(a),
            right: Box::new(b),
        })
    }
}

/// Priority queue entry. `seq` is the insertion sequence number used to break weight ties.
#[derive(Debug, PartialEq, Eq)]
struct QueueEntry {
    weight: u64,
    seq: u32,
    node: Node,
}

impl Ord for QueueEntry {
    /// BinaryHeap is a max-heap, so compare reversed: lowest weight first, then lowest seq.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The coding tree for one compress or decompress run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    pub root: Node,
}

impl HuffmanTree {
    /// Build the tree by repeatedly merging the two lightest nodes.
    ///
    /// Ties are broken by insertion order: leaves are queued in ascending symbol
    /// order with sequence numbers 0..n, and every merged node takes the next
    /// number. Of two equal weights the smaller sequence number leaves the queue
    /// first. Encoder and decoder therefore always build identical trees.
    pub fn build(freqs: &FrequencyTable) -> Result<Self> {
        if freqs.is_empty() {
            return Err(HufError::EmptyInput);
        }
        if freqs.total().is_none() {
            return Err(HufError::WeightOverflow);
        }

        let mut heap = BinaryHeap::with_capacity(freqs.distinct());
        let mut seq = 0_u32;
        for (symbol, weight) in freqs.symbols() {
            heap.push(QueueEntry {
                weight,
                seq,
                node: Node::Leaf { symbol, weight },
            });
            seq += 1;
        }

        let root = loop {
            let a = heap.pop().ok_or(HufError::EmptyInput)?;
            let b = match heap.pop() {
                Some(b) => b,
                None => break a.node,
            };
            let node = Node::merge(a.node, b.node)?;
            trace!(
                "merged #{} ({}) and #{} ({}) into #{} ({})",
                a.seq,
                a.weight,
                b.seq,
                b.weight,
                seq,
                node.weight()
            );
            heap.push(QueueEntry {
                weight: node.weight(),
                seq,
                node,
            });
            seq += 1;
        };

        let tree = HuffmanTree { root };
        debug!(
            "Built coding tree: {} symbols, weight {}, depth {}",
            freqs.distinct(),
            tree.weight(),
            tree.depth()
        );
        Ok(tree)
    }

    /// Total weight of the tree, equal to the number of symbols it encodes.
    pub fn weight(&self) -> u64 {
        self.root.weight()
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        depth(&self.root)
    }

    /// Log the tree shape at trace level.
    pub fn trace_structure(&self) {
        trace!("Huffman tree structure:");
        trace_node(&self.root, 0, "root");
    }
}

fn depth(node: &Node) -> usize {
    match node {
        Node::Leaf { .. } => 0,
        Node::Internal { left, right, .. } => 1 + depth(left).max(depth(right)),
    }
}

fn trace_node(node: &Node, level: usize, label: &str) {
    let indent = "  ".repeat(level);
    match node {
        Node::Leaf { symbol, weight } => {
            trace!("{}{} -> leaf {:#04x} [weight {}]", indent, label, symbol, weight);
        }
        Node::Internal {
            weight,
            left,
            right,
        } => {
            trace!("{}{} -> internal [weight {}]", indent, label, weight);
            trace_node(left, level + 1, "L");
            trace_node(right, level + 1, "R");
        }
    }
}
