//! Lexicographic comparison of two sequences.
//!
//! Both sides are push-driven, so they cannot be stepped in lockstep from one
//! loop. The first sequence is driven on the calling thread; the second one is
//! driven on a thread of its own and handed over one element at a time through
//! a rendezvous channel, so it never runs more than one element ahead of what
//! has been compared. Leaving the comparison by any path, a panicking
//! comparator included, fires a cancellation signal that stops that thread.
//! The calling thread does not wait for it to finish, except when the channel
//! closes: then the thread is joined, and a panic inside the second sequence
//! is resumed on the calling thread.

use std::cmp::Ordering;
use std::panic;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, select, Receiver};
use tracing::{debug, trace};

use crate::cancel::{cancel_pair, CancelToken};
use crate::kv::KeyValue;
use crate::seq::{from_fn, Seq, SeqKV};

/// Compares `a` and `b` element-wise using their natural order.
///
/// A sequence that is a strict prefix of the other is the smaller one.
pub fn compare<A, B>(a: A, b: B) -> Ordering
where
    A: Seq,
    B: Seq<Item = A::Item> + Send + 'static,
    A::Item: Ord + Send + 'static,
{
    compare_by(a, b, |x, y| x.cmp(&y))
}

/// Compares `a` and `b` element-wise with `cmp`.
///
/// The first pair of elements for which `cmp` is not `Equal` decides the
/// result. If no such pair exists, the shorter sequence is `Less`; sequences of
/// equal length are `Equal`. `cmp` runs at most once per position.
pub fn compare_by<A, B, F>(a: A, b: B, mut cmp: F) -> Ordering
where
    A: Seq,
    B: Seq + Send + 'static,
    B::Item: Send + 'static,
    F: FnMut(A::Item, B::Item) -> Ordering,
{
    let (exit, cancelled) = cancel_pair();
    let (b_values, driver) = spawn_driver(b, cancelled);

    let mut outcome = None;
    let mut b_closed = false;
    a.each(|av| match b_values.recv() {
        // b ran out first
        Err(_) => {
            b_closed = true;
            outcome = Some(Ordering::Greater);
            false
        }
        Ok(bv) => match cmp(av, bv) {
            Ordering::Equal => true,
            c => {
                outcome = Some(c);
                false
            }
        },
    });

    let ret = outcome.unwrap_or_else(|| match b_values.recv() {
        Ok(_) => Ordering::Less,
        Err(_) => {
            b_closed = true;
            Ordering::Equal
        }
    });
    // a closed channel is either the end of b or b unwinding; only the
    // driver's result tells them apart
    if b_closed {
        if let Err(payload) = driver.join() {
            debug!(target: "seqs", "comparison driver panicked");
            panic::resume_unwind(payload);
        }
    }
    trace!(target: "seqs", ?ret, "comparison finished");
    exit.cancel();
    ret
}

fn spawn_driver<B>(b: B, cancelled: CancelToken) -> (Receiver<B::Item>, JoinHandle<()>)
where
    B: Seq + Send + 'static,
    B::Item: Send + 'static,
{
    let (tx, rx) = bounded(0);
    let driver = thread::spawn(move || {
        trace!(target: "seqs", "comparison driver started");
        b.each(|bv| {
            if cancelled.is_cancelled() {
                debug!(target: "seqs", "comparison driver cancelled");
                return false;
            }
            select! {
                send(tx, bv) -> res => res.is_ok(),
                recv(cancelled.signal()) -> _ => {
                    debug!(target: "seqs", "comparison driver cancelled while handing off");
                    false
                }
            }
        });
        trace!(target: "seqs", "comparison driver finished");
    });
    (rx, driver)
}

/// Compares two paired sequences by key, then by value.
pub fn compare_kv<A, B>(a: A, b: B) -> Ordering
where
    A: SeqKV,
    B: SeqKV<Key = A::Key, Value = A::Value> + Send + 'static,
    A::Key: Ord + Send + 'static,
    A::Value: Ord + Send + 'static,
{
    compare_kv_by(a, b, |x, y| x.cmp(&y))
}

/// Compares two paired sequences with `cmp`; the two sides may have different
/// key and value types.
pub fn compare_kv_by<A, B, F>(a: A, b: B, cmp: F) -> Ordering
where
    A: SeqKV,
    B: SeqKV + Send + 'static,
    B::Key: Send + 'static,
    B::Value: Send + 'static,
    F: FnMut(KeyValue<A::Key, A::Value>, KeyValue<B::Key, B::Value>) -> Ordering,
{
    compare_by(pairs(a), pairs(b), cmp)
}

fn pairs<S: SeqKV>(seq: S) -> impl Seq<Item = KeyValue<S::Key, S::Value>> {
    from_fn(move |yield_: &mut dyn FnMut(KeyValue<S::Key, S::Value>) -> bool| {
        seq.each_kv(|k, v| yield_(KeyValue::new(k, v)))
    })
}

// equality only needs "not Equal"; which side of it is irrelevant
fn equality_ordering(equal: bool) -> Ordering {
    if equal {
        Ordering::Equal
    } else {
        Ordering::Less
    }
}

pub fn equal<A, B>(a: A, b: B) -> bool
where
    A: Seq,
    B: Seq<Item = A::Item> + Send + 'static,
    A::Item: PartialEq + Send + 'static,
{
    equal_by(a, b, |x, y| x == y)
}

pub fn equal_by<A, B, F>(a: A, b: B, mut eq: F) -> bool
where
    A: Seq,
    B: Seq + Send + 'static,
    B::Item: Send + 'static,
    F: FnMut(A::Item, B::Item) -> bool,
{
    compare_by(a, b, |x, y| equality_ordering(eq(x, y))) == Ordering::Equal
}

pub fn equal_kv<A, B>(a: A, b: B) -> bool
where
    A: SeqKV,
    B: SeqKV<Key = A::Key, Value = A::Value> + Send + 'static,
    A::Key: PartialEq + Send + 'static,
    A::Value: PartialEq + Send + 'static,
{
    equal_kv_by(a, b, |x, y| x == y)
}

pub fn equal_kv_by<A, B, F>(a: A, b: B, mut eq: F) -> bool
where
    A: SeqKV,
    B: SeqKV + Send + 'static,
    B::Key: Send + 'static,
    B::Value: Send + 'static,
    F: FnMut(KeyValue<A::Key, A::Value>, KeyValue<B::Key, B::Value>) -> bool,
{
    compare_kv_by(a, b, |x, y| equality_ordering(eq(x, y))) == Ordering::Equal
}
