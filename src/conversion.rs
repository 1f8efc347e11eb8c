use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::seq::{from_fn, from_fn_kv, Seq, SeqKV};

/// Returns a key function that ignores its argument and counts up from zero.
///
/// Every call to `int_k` gets its own counter. The counter keeps going across
/// runs of whatever sequence it is attached to, and may be shared between
/// threads.
pub fn int_k<V>() -> impl Fn(&V) -> usize + Clone + Send + Sync {
    let next = Arc::new(AtomicUsize::new(0));
    move |_: &V| next.fetch_add(1, Ordering::Relaxed)
}

pub fn iter_kv<S, K, F>(seq: S, key_fn: F) -> impl SeqKV<Key = K, Value = S::Item>
where
    S: Seq,
    F: Fn(&S::Item) -> K,
{
    from_fn_kv(move |yield_: &mut dyn FnMut(K, S::Item) -> bool| {
        seq.each(|v| {
            let k = key_fn(&v);
            yield_(k, v)
        })
    })
}

pub fn iter_k<S: SeqKV>(seq: S) -> impl Seq<Item = S::Key> {
    from_fn(move |yield_: &mut dyn FnMut(S::Key) -> bool| seq.each_kv(|k, _| yield_(k)))
}

pub fn iter_v<S: SeqKV>(seq: S) -> impl Seq<Item = S::Value> {
    from_fn(move |yield_: &mut dyn FnMut(S::Value) -> bool| seq.each_kv(|_, v| yield_(v)))
}

pub fn map_to_kv<S, K, V, F>(seq: S, f: F) -> impl SeqKV<Key = K, Value = V>
where
    S: Seq,
    F: Fn(S::Item) -> (K, V),
{
    from_fn_kv(move |yield_: &mut dyn FnMut(K, V) -> bool| {
        seq.each(|t| {
            let (k, v) = f(t);
            yield_(k, v)
        })
    })
}
