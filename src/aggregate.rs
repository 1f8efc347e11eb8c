use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

use crate::creation::WithKV;
use crate::kv::KeyValue;
use crate::seq::{Seq, SeqKV};

// shared by the min/max family: keep the first element, replace it only when
// `replace(candidate, current)` says so
fn extreme<T>(seq: impl Seq<Item = T>, mut replace: impl FnMut(&T, &T) -> bool) -> Option<T> {
    let mut ret: Option<T> = None;
    seq.each(|t| {
        if ret.as_ref().map_or(true, |current| replace(&t, current)) {
            ret = Some(t);
        }
        true
    });
    ret
}

fn extreme_kv<K, V>(
    seq: impl SeqKV<Key = K, Value = V>,
    mut replace: impl FnMut(&KeyValue<K, V>, &KeyValue<K, V>) -> bool,
) -> Option<KeyValue<K, V>> {
    let mut ret: Option<KeyValue<K, V>> = None;
    seq.each_kv(|k, v| {
        let kv = KeyValue::new(k, v);
        if ret.as_ref().map_or(true, |current| replace(&kv, current)) {
            ret = Some(kv);
        }
        true
    });
    ret
}

/// The smallest element, or `None` for an empty sequence. Of equal elements the
/// earliest wins.
pub fn min<S>(seq: S) -> Option<S::Item>
where
    S: Seq,
    S::Item: Ord,
{
    extreme(seq, |t, current| t < current)
}

pub fn max<S>(seq: S) -> Option<S::Item>
where
    S: Seq,
    S::Item: Ord,
{
    extreme(seq, |t, current| t > current)
}

/// The smallest element according to `compare`, which is called once per
/// element after the first as `compare(candidate, current_min)`.
pub fn min_by<S, F>(seq: S, mut compare: F) -> Option<S::Item>
where
    S: Seq,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    extreme(seq, |t, current| compare(t, current) == Ordering::Less)
}

pub fn max_by<S, F>(seq: S, mut compare: F) -> Option<S::Item>
where
    S: Seq,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    extreme(seq, |t, current| compare(t, current) == Ordering::Greater)
}

pub fn min_kv_by<S, F>(seq: S, mut compare: F) -> Option<KeyValue<S::Key, S::Value>>
where
    S: SeqKV,
    F: FnMut(&KeyValue<S::Key, S::Value>, &KeyValue<S::Key, S::Value>) -> Ordering,
{
    extreme_kv(seq, |kv, current| compare(kv, current) == Ordering::Less)
}

pub fn max_kv_by<S, F>(seq: S, mut compare: F) -> Option<KeyValue<S::Key, S::Value>>
where
    S: SeqKV,
    F: FnMut(&KeyValue<S::Key, S::Value>, &KeyValue<S::Key, S::Value>) -> Ordering,
{
    extreme_kv(seq, |kv, current| compare(kv, current) == Ordering::Greater)
}

/// Left fold; an empty sequence gives back `initial`.
pub fn reduce<S, O, F>(seq: S, initial: O, mut f: F) -> O
where
    S: Seq,
    F: FnMut(O, S::Item) -> O,
{
    let mut agg = Some(initial);
    seq.each(|t| {
        agg = agg.take().map(|a| f(a, t));
        true
    });
    let Some(agg) = agg else { unreachable!() };
    agg
}

pub fn reduce_kv<S, O, F>(seq: S, initial: O, mut f: F) -> O
where
    S: SeqKV,
    F: FnMut(O, S::Key, S::Value) -> O,
{
    let mut agg = Some(initial);
    seq.each_kv(|k, v| {
        agg = agg.take().map(|a| f(a, k, v));
        true
    });
    let Some(agg) = agg else { unreachable!() };
    agg
}

pub fn count<S: Seq>(seq: S) -> usize {
    count_by(seq, |_| true)
}

pub fn count_kv<S: SeqKV>(seq: S) -> usize {
    count_kv_by(seq, |_, _| true)
}

pub fn count_by<S, F>(seq: S, mut predicate: F) -> usize
where
    S: Seq,
    F: FnMut(&S::Item) -> bool,
{
    let mut ret = 0;
    seq.each(|t| {
        if predicate(&t) {
            ret += 1;
        }
        true
    });
    ret
}

pub fn count_kv_by<S, F>(seq: S, mut predicate: F) -> usize
where
    S: SeqKV,
    F: FnMut(&S::Key, &S::Value) -> bool,
{
    let mut ret = 0;
    seq.each_kv(|k, v| {
        if predicate(&k, &v) {
            ret += 1;
        }
        true
    });
    ret
}

/// Counts how many times each distinct element occurs.
///
/// `seq` is consumed before this returns. The resulting pairs come out in no
/// particular order, but the same order on every run.
pub fn count_values<S>(seq: S) -> WithKV<S::Item, usize>
where
    S: Seq,
    S::Item: Hash + Eq,
{
    let mut counts: HashMap<S::Item, usize> = HashMap::new();
    seq.each(|t| {
        *counts.entry(t).or_default() += 1;
        true
    });
    WithKV::new(counts.into_iter().map(KeyValue::from).collect())
}

pub fn contains<S>(seq: S, value: &S::Item) -> bool
where
    S: Seq,
    S::Item: PartialEq,
{
    contains_by(seq, |t| t == value)
}

pub fn contains_kv<S>(seq: S, key: &S::Key, value: &S::Value) -> bool
where
    S: SeqKV,
    S::Key: PartialEq,
    S::Value: PartialEq,
{
    contains_kv_by(seq, |k, v| k == key && v == value)
}

pub fn contains_by<S, F>(seq: S, mut predicate: F) -> bool
where
    S: Seq,
    F: FnMut(&S::Item) -> bool,
{
    let mut found = false;
    seq.each(|t| {
        found = predicate(&t);
        !found
    });
    found
}

pub fn contains_kv_by<S, F>(seq: S, mut predicate: F) -> bool
where
    S: SeqKV,
    F: FnMut(&S::Key, &S::Value) -> bool,
{
    let mut found = false;
    seq.each_kv(|k, v| {
        found = predicate(&k, &v);
        !found
    });
    found
}

/// The first element that is not `Default::default()`.
pub fn coalesce<S>(seq: S) -> Option<S::Item>
where
    S: Seq,
    S::Item: Default + PartialEq,
{
    let zero = <S::Item as Default>::default();
    let mut ret = None;
    seq.each(|t| {
        if t == zero {
            return true;
        }
        ret = Some(t);
        false
    });
    ret
}

/// The first pair whose value is not `Default::default()`.
pub fn coalesce_kv<S>(seq: S) -> Option<KeyValue<S::Key, S::Value>>
where
    S: SeqKV,
    S::Value: Default + PartialEq,
{
    let zero = <S::Value as Default>::default();
    let mut ret = None;
    seq.each_kv(|k, v| {
        if v == zero {
            return true;
        }
        ret = Some(KeyValue::new(k, v));
        false
    });
    ret
}

/// Whether every element is no smaller than the one before it.
pub fn is_sorted<S>(seq: S) -> bool
where
    S: Seq,
    S::Item: Ord,
{
    is_sorted_by(seq, Ord::cmp)
}

pub fn is_sorted_by<S, F>(seq: S, mut compare: F) -> bool
where
    S: Seq,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let mut prev: Option<S::Item> = None;
    let mut sorted = true;
    seq.each(|t| {
        if let Some(p) = &prev {
            sorted = compare(&t, p) != Ordering::Less;
        }
        prev = Some(t);
        sorted
    });
    sorted
}

/// Whether keys and values are each non-decreasing from one pair to the next.
///
/// The two fields are checked independently: a step where the key grows but the
/// value shrinks counts as unsorted, even though the pairs are in ascending
/// key-then-value order.
pub fn is_sorted_kv<S>(seq: S) -> bool
where
    S: SeqKV,
    S::Key: Ord,
    S::Value: Ord,
{
    let mut prev: Option<KeyValue<S::Key, S::Value>> = None;
    let mut sorted = true;
    seq.each_kv(|k, v| {
        if let Some(p) = &prev {
            sorted = k >= p.key && v >= p.value;
        }
        prev = Some(KeyValue::new(k, v));
        sorted
    });
    sorted
}
