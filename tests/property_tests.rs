//! Property tests for the helper functions
//!
//! - Batching reassembles the source and respects chunk sizes
//! - Concatenation preserves length and order
//! - Hex output has the expected shape and decodes back
//! - Seeded selection is deterministic and agrees across collection types

use proptest::prelude::*;

// ============================================================================
// Batching
// ============================================================================

mod batching {
    use super::*;
    use utilbelt::utils::data::batches;

    proptest! {
        #[test]
        fn chunks_reassemble_source(source in prop::collection::vec(any::<i32>(), 0..200), length in 1usize..20) {
            let chunks: Vec<&[i32]> = batches(&source, length).unwrap().collect();
            let rejoined: Vec<i32> = chunks.concat();
            prop_assert_eq!(rejoined, source);
        }

        #[test]
        fn chunk_sizes_follow_length(source in prop::collection::vec(any::<u8>(), 1..200), length in 1usize..20) {
            let chunks: Vec<&[u8]> = batches(&source, length).unwrap().collect();

            prop_assert_eq!(chunks.len(), source.len().div_ceil(length));
            let (last, full) = chunks.split_last().unwrap();
            prop_assert!(full.iter().all(|c| c.len() == length));
            prop_assert!(!last.is_empty() && last.len() <= length);
            prop_assert_eq!(last.len(), source.len() - length * (chunks.len() - 1));
        }

        #[test]
        fn empty_source_has_no_chunks(length in 1usize..100) {
            let source: Vec<u8> = Vec::new();
            prop_assert_eq!(batches(&source, length).unwrap().count(), 0);
        }

        #[test]
        fn zero_length_always_fails(source in prop::collection::vec(any::<u8>(), 0..50)) {
            prop_assert!(batches(&source, 0).is_err());
        }
    }
}

// ============================================================================
// Concatenation and conversion
// ============================================================================

mod collections {
    use super::*;
    use utilbelt::utils::data::{arrays_concatenate, to_str_array};

    proptest! {
        #[test]
        fn concatenation_is_a_then_b(
            a in prop::collection::vec(any::<i64>(), 0..50),
            b in prop::collection::vec(any::<i64>(), 0..50),
        ) {
            let joined = arrays_concatenate(&a, &b);
            prop_assert_eq!(joined.len(), a.len() + b.len());
            prop_assert_eq!(&joined[..a.len()], &a[..]);
            prop_assert_eq!(&joined[a.len()..], &b[..]);
        }

        #[test]
        fn to_str_array_keeps_length(values in prop::collection::vec(prop::option::of(any::<u16>()), 0..50)) {
            let rendered = to_str_array(&values);
            prop_assert_eq!(rendered.len(), values.len());
            for (value, text) in values.iter().zip(&rendered) {
                match value {
                    Some(v) => {
                        prop_assert_eq!(text, &v.to_string());
                    }
                    None => {
                        prop_assert_eq!(text, "null");
                    }
                }
            }
        }
    }
}

// ============================================================================
// Hex encoding
// ============================================================================

mod hex_encoding {
    use super::*;
    use utilbelt::utils::encoding::bytes_to_hex;

    proptest! {
        #[test]
        fn hex_shape(bytes in prop::collection::vec(any::<u8>(), 0..100)) {
            let encoded = bytes_to_hex(&bytes);
            prop_assert_eq!(encoded.len(), bytes.len() * 2);
            prop_assert!(encoded.chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
        }

        #[test]
        fn hex_decodes_back(bytes in prop::collection::vec(any::<u8>(), 0..100)) {
            let encoded = bytes_to_hex(&bytes);
            let decoded: Vec<u8> = (0..encoded.len())
                .step_by(2)
                .map(|i| u8::from_str_radix(&encoded[i..i + 2], 16).unwrap())
                .collect();
            prop_assert_eq!(decoded, bytes);
        }
    }
}

// ============================================================================
// Random selection
// ============================================================================

mod selection {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::VecDeque;
    use utilbelt::utils::random::{random_element_from_iter, random_element_with};

    proptest! {
        #[test]
        fn seeded_selection_is_deterministic(items in prop::collection::vec(any::<u32>(), 1..100), seed in any::<u64>()) {
            let first = random_element_with(&items, &mut StdRng::seed_from_u64(seed));
            let second = random_element_with(&items, &mut StdRng::seed_from_u64(seed));
            prop_assert!(first.is_some());
            prop_assert_eq!(first, second);
        }

        #[test]
        fn indexed_and_walked_selection_agree(items in prop::collection::vec(any::<u32>(), 0..100), seed in any::<u64>()) {
            let queue: VecDeque<u32> = items.iter().copied().collect();
            let by_index = random_element_with(&items, &mut StdRng::seed_from_u64(seed)).copied();
            let by_walk = random_element_from_iter(queue, &mut StdRng::seed_from_u64(seed));
            prop_assert_eq!(by_index, by_walk);
        }
    }
}
