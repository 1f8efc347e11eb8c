use std::mem;

use crate::creation::{With, WithKV};
use crate::error::{or_panic, SeqError};
use crate::kv::KeyValue;
use crate::seq::{from_fn, from_fn_kv, Seq, SeqKV};

pub fn map<S, O, F>(seq: S, f: F) -> impl Seq<Item = O>
where
    S: Seq,
    F: Fn(S::Item) -> O,
{
    from_fn(move |yield_: &mut dyn FnMut(O) -> bool| seq.each(|t| yield_(f(t))))
}

pub fn map_kv<S, K1, V1, F>(seq: S, f: F) -> impl SeqKV<Key = K1, Value = V1>
where
    S: SeqKV,
    F: Fn(S::Key, S::Value) -> (K1, V1),
{
    from_fn_kv(move |yield_: &mut dyn FnMut(K1, V1) -> bool| {
        seq.each_kv(|k, v| {
            let (k, v) = f(k, v);
            yield_(k, v)
        })
    })
}

pub fn filter<S, F>(seq: S, predicate: F) -> impl Seq<Item = S::Item>
where
    S: Seq,
    F: Fn(&S::Item) -> bool,
{
    from_fn(move |yield_: &mut dyn FnMut(S::Item) -> bool| {
        seq.each(|t| if predicate(&t) { yield_(t) } else { true })
    })
}

pub fn filter_kv<S, F>(seq: S, predicate: F) -> impl SeqKV<Key = S::Key, Value = S::Value>
where
    S: SeqKV,
    F: Fn(&S::Key, &S::Value) -> bool,
{
    from_fn_kv(move |yield_: &mut dyn FnMut(S::Key, S::Value) -> bool| {
        seq.each_kv(|k, v| if predicate(&k, &v) { yield_(k, v) } else { true })
    })
}

/// Everything in `seq`, then `items`.
pub fn append<S>(seq: S, items: impl IntoIterator<Item = S::Item>) -> impl Seq<Item = S::Item>
where
    S: Seq,
    S::Item: Clone,
{
    let items = items.into_iter().collect::<Vec<_>>();
    from_fn(move |yield_: &mut dyn FnMut(S::Item) -> bool| {
        let mut done = false;
        seq.each(|t| {
            done = !yield_(t);
            !done
        });
        if done {
            return;
        }
        for t in &items {
            if !yield_(t.clone()) {
                return;
            }
        }
    })
}

pub fn append_kv<S, P>(
    seq: S,
    items: impl IntoIterator<Item = P>,
) -> impl SeqKV<Key = S::Key, Value = S::Value>
where
    S: SeqKV,
    S::Key: Clone,
    S::Value: Clone,
    P: Into<KeyValue<S::Key, S::Value>>,
{
    let items = items.into_iter().map(Into::into).collect::<Vec<KeyValue<_, _>>>();
    from_fn_kv(move |yield_: &mut dyn FnMut(S::Key, S::Value) -> bool| {
        let mut done = false;
        seq.each_kv(|k, v| {
            done = !yield_(k, v);
            !done
        });
        if done {
            return;
        }
        for kv in &items {
            if !yield_(kv.key.clone(), kv.value.clone()) {
                return;
            }
        }
    })
}

/// Substitutes `new` for every element equal to `old`.
pub fn replace<S>(seq: S, old: S::Item, new: S::Item) -> impl Seq<Item = S::Item>
where
    S: Seq,
    S::Item: PartialEq + Clone,
{
    from_fn(move |yield_: &mut dyn FnMut(S::Item) -> bool| {
        seq.each(|t| yield_(if t == old { new.clone() } else { t }))
    })
}

/// Substitutes `new` for every pair whose key and value both equal `old`'s.
pub fn replace_kv<S>(
    seq: S,
    old: impl Into<KeyValue<S::Key, S::Value>>,
    new: impl Into<KeyValue<S::Key, S::Value>>,
) -> impl SeqKV<Key = S::Key, Value = S::Value>
where
    S: SeqKV,
    S::Key: PartialEq + Clone,
    S::Value: PartialEq + Clone,
{
    let old = old.into();
    let new = new.into();
    from_fn_kv(move |yield_: &mut dyn FnMut(S::Key, S::Value) -> bool| {
        seq.each_kv(|k, v| {
            if k == old.key && v == old.value {
                yield_(new.key.clone(), new.value.clone())
            } else {
                yield_(k, v)
            }
        })
    })
}

/// Collapses runs of adjacent equal elements into their first element.
pub fn compact<S>(seq: S) -> impl Seq<Item = S::Item>
where
    S: Seq,
    S::Item: PartialEq + Clone,
{
    compact_by(seq, |prev: &S::Item, t: &S::Item| prev == t)
}

/// Like [`compact`], with `equal(first_of_run, candidate)` deciding whether the
/// candidate continues the current run.
pub fn compact_by<S, F>(seq: S, equal: F) -> impl Seq<Item = S::Item>
where
    S: Seq,
    S::Item: Clone,
    F: Fn(&S::Item, &S::Item) -> bool,
{
    from_fn(move |yield_: &mut dyn FnMut(S::Item) -> bool| {
        let mut prev: Option<S::Item> = None;
        seq.each(|t| {
            if matches!(&prev, Some(p) if equal(p, &t)) {
                return true;
            }
            prev = Some(t.clone());
            yield_(t)
        })
    })
}

pub fn compact_kv<S>(seq: S) -> impl SeqKV<Key = S::Key, Value = S::Value>
where
    S: SeqKV,
    S::Key: PartialEq + Clone,
    S::Value: PartialEq + Clone,
{
    compact_kv_by(seq, |prev, kv| prev == kv)
}

pub fn compact_kv_by<S, F>(seq: S, equal: F) -> impl SeqKV<Key = S::Key, Value = S::Value>
where
    S: SeqKV,
    S::Key: Clone,
    S::Value: Clone,
    F: Fn(&KeyValue<S::Key, S::Value>, &KeyValue<S::Key, S::Value>) -> bool,
{
    from_fn_kv(move |yield_: &mut dyn FnMut(S::Key, S::Value) -> bool| {
        let mut prev: Option<KeyValue<S::Key, S::Value>> = None;
        seq.each_kv(|k, v| {
            let kv = KeyValue::new(k, v);
            if matches!(&prev, Some(p) if equal(p, &kv)) {
                return true;
            }
            prev = Some(kv.clone());
            yield_(kv.key, kv.value)
        })
    })
}

/// Groups consecutive elements into replayable batches of `size`; the last
/// batch holds whatever is left over.
pub fn try_chunk<S: Seq>(seq: S, size: usize) -> Result<impl Seq<Item = With<S::Item>>, SeqError> {
    if size == 0 {
        return Err(SeqError::ZeroChunkSize);
    }
    Ok(from_fn(move |yield_: &mut dyn FnMut(With<S::Item>) -> bool| {
        let mut chunk = Vec::new();
        let mut stopped = false;
        seq.each(|t| {
            chunk.push(t);
            if chunk.len() == size {
                stopped = !yield_(With::new(mem::take(&mut chunk)));
            }
            !stopped
        });
        if !stopped && !chunk.is_empty() {
            yield_(With::new(chunk));
        }
    }))
}

/// Panicking form of [`try_chunk`]; a zero size is rejected before any element
/// is pulled.
pub fn chunk<S: Seq>(seq: S, size: usize) -> impl Seq<Item = With<S::Item>> {
    or_panic(try_chunk(seq, size))
}

pub fn try_chunk_kv<S: SeqKV>(
    seq: S,
    size: usize,
) -> Result<impl Seq<Item = WithKV<S::Key, S::Value>>, SeqError> {
    if size == 0 {
        return Err(SeqError::ZeroChunkSize);
    }
    Ok(from_fn(move |yield_: &mut dyn FnMut(WithKV<S::Key, S::Value>) -> bool| {
        let mut chunk = Vec::new();
        let mut stopped = false;
        seq.each_kv(|k, v| {
            chunk.push(KeyValue::new(k, v));
            if chunk.len() == size {
                stopped = !yield_(WithKV::new(mem::take(&mut chunk)));
            }
            !stopped
        });
        if !stopped && !chunk.is_empty() {
            yield_(WithKV::new(chunk));
        }
    }))
}

pub fn chunk_kv<S: SeqKV>(seq: S, size: usize) -> impl Seq<Item = WithKV<S::Key, S::Value>> {
    or_panic(try_chunk_kv(seq, size))
}

/// Skips the first `n` elements. The position is counted afresh on every run.
pub fn skip<S: Seq>(seq: S, n: usize) -> impl Seq<Item = S::Item> {
    from_fn(move |yield_: &mut dyn FnMut(S::Item) -> bool| {
        let mut i = 0;
        seq.each(|t| {
            if i < n {
                i += 1;
                return true;
            }
            yield_(t)
        })
    })
}

pub fn skip_kv<S: SeqKV>(seq: S, n: usize) -> impl SeqKV<Key = S::Key, Value = S::Value> {
    from_fn_kv(move |yield_: &mut dyn FnMut(S::Key, S::Value) -> bool| {
        let mut i = 0;
        seq.each_kv(|k, v| {
            if i < n {
                i += 1;
                return true;
            }
            yield_(k, v)
        })
    })
}

/// The opposite of [`filter`]: drops the elements `predicate` accepts.
pub fn skip_by<S, F>(seq: S, predicate: F) -> impl Seq<Item = S::Item>
where
    S: Seq,
    F: Fn(&S::Item) -> bool,
{
    filter(seq, move |t: &S::Item| !predicate(t))
}

pub fn skip_kv_by<S, F>(seq: S, predicate: F) -> impl SeqKV<Key = S::Key, Value = S::Value>
where
    S: SeqKV,
    F: Fn(&S::Key, &S::Value) -> bool,
{
    filter_kv(seq, move |k: &S::Key, v: &S::Value| !predicate(k, v))
}
