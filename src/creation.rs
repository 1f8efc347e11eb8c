use crate::kv::KeyValue;
use crate::seq::{from_fn, from_fn_kv, Seq, SeqKV};

/// A sequence that replays a fixed list of values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct With<T> {
    values: Vec<T>,
}

impl<T> With<T> {
    pub fn new(values: Vec<T>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_inner(self) -> Vec<T> {
        self.values
    }
}

impl<T: Clone> Seq for With<T> {
    type Item = T;

    fn each<Y: FnMut(T) -> bool>(&self, mut yield_: Y) {
        for t in &self.values {
            if !yield_(t.clone()) {
                return;
            }
        }
    }
}

/// A paired sequence that replays a fixed list of key-value pairs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WithKV<K, V> {
    pairs: Vec<KeyValue<K, V>>,
}

impl<K, V> WithKV<K, V> {
    pub fn new(pairs: Vec<KeyValue<K, V>>) -> Self {
        Self { pairs }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn into_inner(self) -> Vec<KeyValue<K, V>> {
        self.pairs
    }
}

impl<K: Clone, V: Clone> SeqKV for WithKV<K, V> {
    type Key = K;
    type Value = V;

    fn each_kv<Y: FnMut(K, V) -> bool>(&self, mut yield_: Y) {
        for kv in &self.pairs {
            if !yield_(kv.key.clone(), kv.value.clone()) {
                return;
            }
        }
    }
}

pub fn with<T: Clone>(values: impl IntoIterator<Item = T>) -> With<T> {
    With::new(values.into_iter().collect())
}

pub fn with_kv<K: Clone, V: Clone, P: Into<KeyValue<K, V>>>(
    pairs: impl IntoIterator<Item = P>,
) -> WithKV<K, V> {
    WithKV::new(pairs.into_iter().map(Into::into).collect())
}

/// Wraps an iterator; every run of the sequence starts from a fresh clone of it.
pub fn of_iter<I>(iter: I) -> impl Seq<Item = I::Item> + Clone
where
    I: IntoIterator,
    I::IntoIter: Clone,
{
    let iter = iter.into_iter();
    from_fn(move |yield_: &mut dyn FnMut(I::Item) -> bool| {
        for t in iter.clone() {
            if !yield_(t) {
                return;
            }
        }
    })
}

pub fn repeat<T: Clone>(n: usize, t: T) -> impl Seq<Item = T> + Clone {
    from_fn(move |yield_: &mut dyn FnMut(T) -> bool| {
        for _ in 0..n {
            if !yield_(t.clone()) {
                return;
            }
        }
    })
}

pub fn repeat_kv<K: Clone, V: Clone>(
    n: usize,
    k: K,
    v: V,
) -> impl SeqKV<Key = K, Value = V> + Clone {
    from_fn_kv(move |yield_: &mut dyn FnMut(K, V) -> bool| {
        for _ in 0..n {
            if !yield_(k.clone(), v.clone()) {
                return;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_is_restartable() {
        let s = with([1, 2, 3]);
        assert_eq!(s.to_vec(), vec![1, 2, 3]);
        assert_eq!(s.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_with_stops_early() {
        let s = with([1, 2, 3, 4]);
        let mut seen = vec![];
        s.each(|t| {
            seen.push(t);
            t != 2
        });
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn test_with_kv_from_tuples() {
        let s = with_kv([("a", 1), ("b", 2)]);
        assert_eq!(
            s.to_pairs(),
            vec![KeyValue::new("a", 1), KeyValue::new("b", 2)]
        );
    }

    #[test]
    fn test_of_iter() {
        let s = of_iter(1..4);
        assert_eq!(s.to_vec(), vec![1, 2, 3]);
        assert_eq!(s.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_repeat() {
        assert_eq!(repeat(3, "hi").to_vec(), vec!["hi", "hi", "hi"]);
        assert!(repeat(0, "hi").to_vec().is_empty());
        assert_eq!(repeat_kv(2, "a", 1).to_pairs().len(), 2);
    }
}
