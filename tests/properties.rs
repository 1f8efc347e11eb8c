//! Property-based checks of the algebraic laws the operations promise.

use std::cmp::Ordering;

use itertools::Itertools;
use proptest::prelude::*;
use seqs::{
    chunk, compact, compare, count, equal, find, skip, skip_kv, with, with_kv, Seq, SeqKV,
};

fn small_vec() -> impl Strategy<Value = Vec<i8>> {
    prop::collection::vec(-3i8..3, 0..12)
}

proptest! {
    #[test]
    fn compare_is_antisymmetric(a in small_vec(), b in small_vec()) {
        let ab = compare(with(a.clone()), with(b.clone()));
        let ba = compare(with(b), with(a));
        prop_assert_eq!(ab, ba.reverse());
    }

    #[test]
    fn compare_agrees_with_slices(a in small_vec(), b in small_vec()) {
        prop_assert_eq!(compare(with(a.clone()), with(b.clone())), a.cmp(&b));
    }

    #[test]
    fn equal_iff_compare_equal(a in small_vec(), b in small_vec()) {
        let eq = equal(with(a.clone()), with(b.clone()));
        prop_assert_eq!(eq, compare(with(a), with(b)) == Ordering::Equal);
    }

    #[test]
    fn compare_is_reflexive(a in small_vec()) {
        prop_assert_eq!(compare(with(a.clone()), with(a.clone())), Ordering::Equal);
        prop_assert!(equal(with(a.clone()), with(a)));
    }

    #[test]
    fn strict_prefix_is_less(a in small_vec(), tail in prop::collection::vec(-3i8..3, 1..5)) {
        let mut longer = a.clone();
        longer.extend(tail);
        prop_assert_eq!(compare(with(a.clone()), with(longer.clone())), Ordering::Less);
        prop_assert_eq!(compare(with(longer), with(a)), Ordering::Greater);
    }

    #[test]
    fn chunks_reconstruct_input(a in small_vec(), size in 1usize..6) {
        let chunks = chunk(with(a.clone()), size).to_vec();
        let n = chunks.len();
        for (i, c) in chunks.iter().enumerate() {
            prop_assert!(!c.is_empty());
            if i + 1 < n {
                prop_assert_eq!(c.len(), size);
            } else {
                prop_assert!(c.len() <= size);
            }
        }
        let flat = chunks.into_iter().flat_map(|c| c.into_inner()).collect_vec();
        prop_assert_eq!(flat, a);
    }

    #[test]
    fn compact_is_idempotent_dedup(a in small_vec()) {
        let once = compact(with(a.clone())).to_vec();
        prop_assert_eq!(&once, &a.iter().copied().dedup().collect_vec());
        prop_assert_eq!(compact(with(once.clone())).to_vec(), once);
    }

    #[test]
    fn find_miss_reports_length(a in small_vec()) {
        prop_assert_eq!(find(with(a.clone()), &100), Err(a.len()));
    }

    #[test]
    fn find_hit_is_first_position(a in small_vec(), needle in -3i8..3) {
        let expected = a.iter().position(|t| *t == needle).ok_or(a.len());
        prop_assert_eq!(find(with(a), &needle), expected);
    }

    #[test]
    fn skip_drops_prefix(a in small_vec(), n in 0usize..16) {
        let skipped = skip(with(a.clone()), n).to_vec();
        prop_assert_eq!(skipped, a.iter().copied().skip(n).collect_vec());
        prop_assert_eq!(count(skip(with(a.clone()), n)), a.len().saturating_sub(n));
    }

    #[test]
    fn skip_kv_drops_prefix(a in small_vec(), n in 0usize..16) {
        let pairs = a.iter().copied().enumerate().collect_vec();
        let skipped = skip_kv(with_kv(pairs.clone()), n);
        let expected = pairs.iter().copied().skip(n).collect_vec();
        let got = skipped.to_pairs().into_iter().map(|kv| kv.into_tuple()).collect_vec();
        prop_assert_eq!(&got, &expected);
        // runs are independent of each other
        let again = skipped.to_pairs().into_iter().map(|kv| kv.into_tuple()).collect_vec();
        prop_assert_eq!(again, expected);
    }
}
