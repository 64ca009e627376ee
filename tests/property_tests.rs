use hufzip::compression::compress::compress_detailed;
use hufzip::huffman_coding::code_table::CodeTable;
use hufzip::huffman_coding::huffman::{HuffmanTree, Node};
use hufzip::{compress, decompress, pack, unpack, EncodedPayload, FrequencyTable, HufError};
use proptest::prelude::*;

/// True when every internal node weighs the sum of its children.
fn weights_consistent(node: &Node) -> bool {
    match node {
        Node::Leaf { .. } => true,
        Node::Internal {
            weight,
            left,
            right,
        } => {
            *weight == left.weight() + right.weight()
                && weights_consistent(left)
                && weights_consistent(right)
        }
    }
}

proptest! {
    #[test]
    fn test_payload_roundtrip(data in prop::collection::vec(any::<u8>(), 1..2000)) {
        let payload = compress(&data).unwrap();
        let freqs = FrequencyTable::from_bytes(&data);
        prop_assert_eq!(decompress(&payload, &freqs).unwrap(), data);
    }

    #[test]
    fn test_container_roundtrip(data in prop::collection::vec(any::<u8>(), 1..2000)) {
        prop_assert_eq!(unpack(&pack(&data).unwrap()).unwrap(), data);
    }

    #[test]
    fn test_skewed_alphabet_roundtrip(data in prop::collection::vec(0..4u8, 1..500)) {
        // Few symbols and long runs of one of them
        let mut data = data;
        let run = data.len() * 3;
        data.extend(std::iter::repeat(b'x').take(run));
        prop_assert_eq!(unpack(&pack(&data).unwrap()).unwrap(), data);
    }

    #[test]
    fn test_codes_prefix_free(data in prop::collection::vec(any::<u8>(), 1..1000)) {
        let tree = HuffmanTree::build(&FrequencyTable::from_bytes(&data)).unwrap();
        let codes = CodeTable::from_tree(&tree).sorted();
        for (i, (_, a)) in codes.iter().enumerate() {
            prop_assert!(a.len >= 1);
            for (j, (_, b)) in codes.iter().enumerate() {
                if i != j {
                    prop_assert!(!a.is_prefix_of(b), "{} is a prefix of {}", a, b);
                }
            }
        }
    }

    #[test]
    fn test_codes_fill_the_tree(data in prop::collection::vec(any::<u8>(), 1..1000)) {
        // Kraft sum of a full binary tree is exactly one
        let tree = HuffmanTree::build(&FrequencyTable::from_bytes(&data)).unwrap();
        let codes = CodeTable::from_tree(&tree).sorted();
        prop_assume!(codes.len() > 1);
        let max = codes.iter().map(|(_, c)| c.len as u32).max().unwrap();
        prop_assume!(max < 64);
        let sum: u64 = codes.iter().map(|(_, c)| 1_u64 << (max - c.len as u32)).sum();
        prop_assert_eq!(sum, 1_u64 << max);
    }

    #[test]
    fn test_padding_and_length(data in prop::collection::vec(any::<u8>(), 1..2000)) {
        let compression = compress_detailed(&data).unwrap();
        let coded: u64 = compression
            .freqs
            .symbols()
            .map(|(symbol, count)| count * compression.codes.get(symbol).unwrap().len as u64)
            .sum();
        let payload = &compression.payload;
        prop_assert!(payload.padding <= 7);
        prop_assert_eq!(payload.bit_len() as u64, coded);
        prop_assert_eq!((payload.bytes.len() * 8) as u64, coded + payload.padding as u64);
        prop_assert!(payload.padding_is_clean());
    }

    #[test]
    fn test_deterministic(data in prop::collection::vec(any::<u8>(), 1..1000)) {
        prop_assert_eq!(compress(&data).unwrap(), compress(&data).unwrap());
        prop_assert_eq!(pack(&data).unwrap(), pack(&data).unwrap());
    }

    #[test]
    fn test_permutation_keeps_code_lengths(data in prop::collection::vec(any::<u8>(), 1..500)) {
        // The same histogram in any order gives the same tree
        let mut sorted = data.clone();
        sorted.sort_unstable();
        let a = CodeTable::from_tree(&HuffmanTree::build(&FrequencyTable::from_bytes(&data)).unwrap());
        let b = CodeTable::from_tree(&HuffmanTree::build(&FrequencyTable::from_bytes(&sorted)).unwrap());
        prop_assert_eq!(a.sorted(), b.sorted());
    }

    #[test]
    fn test_tree_weights(data in prop::collection::vec(any::<u8>(), 1..2000)) {
        let tree = HuffmanTree::build(&FrequencyTable::from_bytes(&data)).unwrap();
        prop_assert_eq!(tree.root.weight(), data.len() as u64);
        prop_assert!(weights_consistent(&tree.root));
    }

    #[test]
    fn test_dropped_last_byte_is_truncated(data in prop::collection::vec(any::<u8>(), 1..2000)) {
        let mut bytes = compress(&data).unwrap().to_bytes();
        bytes.pop();
        let freqs = FrequencyTable::from_bytes(&data);
        let result = EncodedPayload::from_bytes(&bytes).and_then(|payload| decompress(&payload, &freqs));
        prop_assert!(
            matches!(result, Err(HufError::TruncatedStream { .. })),
            "got {:?}",
            result
        );
    }
}
