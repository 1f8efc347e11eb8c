use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::Arc;

use derivative::Derivative;

use crate::kv::KeyValue;

/// A lazy sequence of values, driven by the consumer.
///
/// `each` hands every element to `yield_` in order. Returning `false` from
/// `yield_` stops production: no further element is produced or pulled from
/// anything upstream. Because `each` takes `&self`, a sequence may be driven
/// any number of times; whether every run sees the same elements depends on
/// where they come from (literal data replays, a channel drains).
pub trait Seq {
    type Item;

    fn each<Y: FnMut(Self::Item) -> bool>(&self, yield_: Y);

    fn to_vec(&self) -> Vec<Self::Item> {
        let mut ret = Vec::new();
        self.each(|t| {
            ret.push(t);
            true
        });
        ret
    }
}

/// A lazy sequence of key-value pairs, with the same contract as [`Seq`].
pub trait SeqKV {
    type Key;
    type Value;

    fn each_kv<Y: FnMut(Self::Key, Self::Value) -> bool>(&self, yield_: Y);

    fn to_pairs(&self) -> Vec<KeyValue<Self::Key, Self::Value>> {
        let mut ret = Vec::new();
        self.each_kv(|key, value| {
            ret.push(KeyValue::new(key, value));
            true
        });
        ret
    }
}

#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = "F: Clone"))]
pub struct FromFn<F, T> {
    #[derivative(Debug = "ignore")]
    f: F,
    _item: PhantomData<fn() -> T>,
}

/// Builds a sequence out of a producer closure.
///
/// The closure receives the consumer's acceptance callback and must stop
/// producing as soon as that callback returns `false`.
pub fn from_fn<T, F>(f: F) -> FromFn<F, T>
where
    F: Fn(&mut dyn FnMut(T) -> bool),
{
    FromFn {
        f,
        _item: PhantomData,
    }
}

impl<T, F> Seq for FromFn<F, T>
where
    F: Fn(&mut dyn FnMut(T) -> bool),
{
    type Item = T;

    fn each<Y: FnMut(T) -> bool>(&self, mut yield_: Y) {
        (self.f)(&mut yield_)
    }
}

#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = "F: Clone"))]
pub struct FromFnKV<F, K, V> {
    #[derivative(Debug = "ignore")]
    f: F,
    _pair: PhantomData<fn() -> (K, V)>,
}

/// The key-value counterpart of [`from_fn`].
pub fn from_fn_kv<K, V, F>(f: F) -> FromFnKV<F, K, V>
where
    F: Fn(&mut dyn FnMut(K, V) -> bool),
{
    FromFnKV {
        f,
        _pair: PhantomData,
    }
}

impl<K, V, F> SeqKV for FromFnKV<F, K, V>
where
    F: Fn(&mut dyn FnMut(K, V) -> bool),
{
    type Key = K;
    type Value = V;

    fn each_kv<Y: FnMut(K, V) -> bool>(&self, mut yield_: Y) {
        (self.f)(&mut yield_)
    }
}

macro_rules! forward_seq {
    ($($ptr:ty),*) => {
        $(
            impl<S: Seq + ?Sized> Seq for $ptr {
                type Item = S::Item;

                fn each<Y: FnMut(S::Item) -> bool>(&self, yield_: Y) {
                    (**self).each(yield_)
                }
            }

            impl<S: SeqKV + ?Sized> SeqKV for $ptr {
                type Key = S::Key;
                type Value = S::Value;

                fn each_kv<Y: FnMut(S::Key, S::Value) -> bool>(&self, yield_: Y) {
                    (**self).each_kv(yield_)
                }
            }
        )*
    };
}

forward_seq!(&S, Box<S>, Rc<S>, Arc<S>);
