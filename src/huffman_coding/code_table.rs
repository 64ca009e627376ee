//! Derive the bit code of every symbol from its path in the coding tree.
//!
//! Left edges append a 0, right edges a 1. Codes come from leaf paths in a full
//! binary tree, so no code is a prefix of another.

use rustc_hash::FxHashMap;
use std::fmt::{Display, Formatter};

use super::huffman::{HuffmanTree, Node};

/// Longest code a Code can hold. A tree whose total weight fits in a u64 is far shallower.
pub const MAX_CODE_LEN: u8 = 128;

/// A variable length bit code, right aligned in `bits`, most significant bit first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code {
    pub bits: u128,
    pub len: u8,
}

impl Code {
    /// Append one bit.
    fn push(self, bit: bool) -> Self {
        debug_assert!(self.len < MAX_CODE_LEN);
        Code {
            bits: (self.bits << 1) | bit as u128,
            len: self.len + 1,
        }
    }

    /// True if `self` is a prefix of `other` (or equal to it).
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        self.len <= other.len
            && other.bits.checked_shr((other.len - self.len) as u32).unwrap_or(0) == self.bits
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for pos in (0..self.len).rev() {
            write!(f, "{}", (self.bits >> pos) & 1)?;
        }
        Ok(())
    }
}

/// Symbol to code lookup for the encoder.
#[derive(Debug, Clone, Default)]
pub struct CodeTable {
    codes: FxHashMap<u8, Code>,
}

impl CodeTable {
    /// Walk the tree and record the path of every leaf.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = FxHashMap::default();
        match &tree.root {
            // A lone leaf would get an empty path. Give it a single 0 bit instead.
            Node::Leaf { symbol, .. } => {
                codes.insert(*symbol, Code { bits: 0, len: 1 });
            }
            root => return_leaves(root, Code { bits: 0, len: 0 }, &mut codes),
        }
        CodeTable { codes }
    }

    pub fn get(&self, symbol: u8) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// All (symbol, code) pairs sorted by symbol, for reporting.
    pub fn sorted(&self) -> Vec<(u8, Code)> {
        let mut entries = self
            .codes
            .iter()
            .map(|(&symbol, &code)| (symbol, code))
            .collect::<Vec<_>>();
        entries.sort_unstable_by_key(|&(symbol, _)| symbol);
        entries
    }
}

/// Recursively walk the tree, recording the accumulated path at every leaf.
fn return_leaves(node: &Node, code: Code, codes: &mut FxHashMap<u8, Code>) {
    match node {
        Node::Internal { left, right, .. } => {
            return_leaves(left, code.push(false), codes);
            return_leaves(right, code.push(true), codes);
        }
        Node::Leaf { symbol, .. } => {
            codes.insert(*symbol, code);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tools::freq_count::FrequencyTable;

    fn table_for(text: &[u8]) -> CodeTable {
        CodeTable::from_tree(&HuffmanTree::build(&FrequencyTable::from_bytes(text)).unwrap())
    }

    #[test]
    fn abracadabra_codes_test() {
        let table = table_for(b"abracadabra");
        assert_eq!(table.len(), 5);
        assert_eq!(table.get(b'a').unwrap().to_string(), "0");
        assert_eq!(table.get(b'c').unwrap().to_string(), "100");
        assert_eq!(table.get(b'd').unwrap().to_string(), "101");
        assert_eq!(table.get(b'b').unwrap().to_string(), "110");
        assert_eq!(table.get(b'r').unwrap().to_string(), "111");
    }

    #[test]
    fn prefix_free_test() {
        let table = table_for(b"it was the best of times, it was the worst of times");
        let entries = table.sorted();
        for (i, (_, a)) in entries.iter().enumerate() {
            assert!(a.len > 0);
            for (j, (_, b)) in entries.iter().enumerate() {
                if i != j {
                    assert!(!a.is_prefix_of(b), "{} is a prefix of {}", a, b);
                }
            }
        }
    }

    #[test]
    fn single_symbol_gets_one_bit_test() {
        let table = table_for(b"aaaa");
        assert_eq!(table.get(b'a'), Some(&Code { bits: 0, len: 1 }));
    }

    #[test]
    fn display_keeps_leading_zeros_test() {
        let code = Code { bits: 0b0011, len: 4 };
        assert_eq!(code.to_string(), "0011");
    }

    #[test]
    fn sorted_is_by_symbol_test() {
        let symbols = table_for(b"zebra")
            .sorted()
            .into_iter()
            .map(|(symbol, _)| symbol)
            .collect::<Vec<_>>();
        assert_eq!(symbols, b"aberz".to_vec());
    }
}
