use crossbeam_channel::{bounded, Receiver, Sender, TryRecvError};

/// The firing side of a cancellation signal.
///
/// The signal fires when the handle is cancelled or dropped, whichever comes
/// first, so a handle held in a stack frame fires on every way out of that
/// frame, unwinding included.
#[derive(Debug)]
pub struct CancelHandle {
    _tx: Sender<()>,
}

impl CancelHandle {
    pub fn cancel(self) {
        drop(self);
    }
}

/// The observing side of a cancellation signal. Cheap to clone.
///
/// Nothing is ever sent over the inner channel; cancellation is its
/// disconnection, which every clone observes at once.
#[derive(Debug, Clone)]
pub struct CancelToken {
    rx: Receiver<()>,
}

impl CancelToken {
    pub fn is_cancelled(&self) -> bool {
        matches!(self.rx.try_recv(), Err(TryRecvError::Disconnected))
    }

    /// Blocks until the signal fires.
    pub fn wait(&self) {
        let _ = self.rx.recv();
    }

    /// Receiver that becomes ready, with an error, once the signal fires; meant
    /// for `select!`.
    pub(crate) fn signal(&self) -> &Receiver<()> {
        &self.rx
    }
}

pub fn cancel_pair() -> (CancelHandle, CancelToken) {
    let (tx, rx) = bounded(0);
    (CancelHandle { _tx: tx }, CancelToken { rx })
}
