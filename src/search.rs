//! Positional search.
//!
//! Like `slice::binary_search`, a hit is `Ok` with its 0-based position and a
//! miss is `Err` with the position the element would have had if appended,
//! i.e. the number of elements traversed.

use crate::seq::{Seq, SeqKV};

pub fn find<S>(seq: S, value: &S::Item) -> Result<usize, usize>
where
    S: Seq,
    S::Item: PartialEq,
{
    find_by(seq, |t| t == value).map(|(i, _)| i)
}

pub fn find_by<S, F>(seq: S, mut predicate: F) -> Result<(usize, S::Item), usize>
where
    S: Seq,
    F: FnMut(&S::Item) -> bool,
{
    let mut i = 0;
    let mut found = None;
    seq.each(|t| {
        if predicate(&t) {
            found = Some(t);
            return false;
        }
        i += 1;
        true
    });
    found.map(|t| (i, t)).ok_or(i)
}

/// The value of the first pair whose key equals `key`.
pub fn find_by_key<S>(seq: S, key: &S::Key) -> Result<(usize, S::Value), usize>
where
    S: SeqKV,
    S::Key: PartialEq,
{
    let mut i = 0;
    let mut found = None;
    seq.each_kv(|k, v| {
        if k == *key {
            found = Some(v);
            return false;
        }
        i += 1;
        true
    });
    found.map(|v| (i, v)).ok_or(i)
}

/// The key of the first pair whose value equals `value`.
pub fn find_by_value<S>(seq: S, value: &S::Value) -> Result<(usize, S::Key), usize>
where
    S: SeqKV,
    S::Value: PartialEq,
{
    let mut i = 0;
    let mut found = None;
    seq.each_kv(|k, v| {
        if v == *value {
            found = Some(k);
            return false;
        }
        i += 1;
        true
    });
    found.map(|k| (i, k)).ok_or(i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creation::{with, with_kv};

    #[test]
    fn test_find() {
        let s = with([1, 2, 3, 4, 5]);
        assert_eq!(find(s.clone(), &3), Ok(2));
        assert_eq!(find(s, &6), Err(5));
        assert_eq!(find(with(Vec::<i32>::new()), &1), Err(0));
    }

    #[test]
    fn test_find_first_occurrence() {
        assert_eq!(find(with([7, 1, 7]), &7), Ok(0));
    }

    #[test]
    fn test_find_by() {
        let s = with([1, 2, 3, 4, 5]);
        assert_eq!(find_by(s.clone(), |t| t % 2 == 0), Ok((1, 2)));
        assert_eq!(find_by(s, |t| *t > 5), Err(5));
    }

    #[test]
    fn test_find_by_key() {
        let s = with_kv([("a", 1), ("b", 2), ("c", 3)]);
        assert_eq!(find_by_key(s.clone(), &"b"), Ok((1, 2)));
        assert_eq!(find_by_key(s, &"d"), Err(3));
    }

    #[test]
    fn test_find_by_value() {
        let s = with_kv([("a", 1), ("b", 2), ("c", 3)]);
        assert_eq!(find_by_value(s.clone(), &2), Ok((1, "b")));
        assert_eq!(find_by_value(s, &4), Err(3));
    }
}
