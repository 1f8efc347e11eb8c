use std::thread;

use crossbeam_channel::{bounded, select, Receiver};
use tracing::{debug, trace};

use crate::cancel::CancelToken;
use crate::seq::{from_fn, Seq};

/// Yields values received from `rx` until every sender is gone.
///
/// Receiving drains the channel, so a second run only sees what arrived after
/// the first one stopped.
pub fn from_channel<T>(rx: Receiver<T>) -> impl Seq<Item = T> + Clone {
    from_fn(move |yield_: &mut dyn FnMut(T) -> bool| {
        for t in rx.iter() {
            if !yield_(t) {
                return;
            }
        }
    })
}

/// Drives `seq` on its own thread and hands each value over a rendezvous
/// channel, which is closed once `seq` is exhausted.
///
/// The caller has to drain the returned receiver or drop it. A receiver that is
/// kept alive but never read leaves the driving thread blocked for good.
///
/// A panic inside `seq` stays on the driving thread. The receiver only sees
/// the channel close early, the same as when `seq` is exhausted.
pub fn to_channel<S>(seq: S) -> Receiver<S::Item>
where
    S: Seq + Send + 'static,
    S::Item: Send + 'static,
{
    let (tx, rx) = bounded(0);
    thread::spawn(move || {
        trace!(target: "seqs", "channel driver started");
        seq.each(|t| {
            if tx.send(t).is_err() {
                debug!(target: "seqs", "channel receiver dropped, stopping driver");
                return false;
            }
            true
        });
        trace!(target: "seqs", "channel driver finished");
    });
    rx
}

/// Like [`to_channel`], but the driver also stops, closing the channel, as
/// soon as `token` fires.
///
/// The token is checked before each send and raced against the send itself,
/// so at most one value that was already on its way may still be delivered
/// after cancellation.
///
/// As with [`to_channel`], a panic inside `seq` shows up only as an early
/// close.
pub fn to_channel_with_cancel<S>(token: CancelToken, seq: S) -> Receiver<S::Item>
where
    S: Seq + Send + 'static,
    S::Item: Send + 'static,
{
    let (tx, rx) = bounded(0);
    thread::spawn(move || {
        trace!(target: "seqs", "cancellable channel driver started");
        seq.each(|t| {
            if token.is_cancelled() {
                debug!(target: "seqs", "channel driver cancelled");
                return false;
            }
            select! {
                send(tx, t) -> res => res.is_ok(),
                recv(token.signal()) -> _ => {
                    debug!(target: "seqs", "channel driver cancelled during send");
                    false
                }
            }
        });
        trace!(target: "seqs", "cancellable channel driver finished");
    });
    rx
}
