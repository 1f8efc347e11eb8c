use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use seqs::Seq;

/// A replayable sequence that counts how many elements were pulled out of it
/// and how many runs of it are currently in progress.
#[derive(Debug, Clone)]
pub struct CountingSeq<T> {
    values: Arc<Vec<T>>,
    pulls: Arc<AtomicUsize>,
    live: Arc<AtomicUsize>,
}

struct LiveGuard(Arc<AtomicUsize>);

impl Drop for LiveGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl<T> CountingSeq<T> {
    pub fn new(values: impl IntoIterator<Item = T>) -> Self {
        Self {
            values: Arc::new(values.into_iter().collect()),
            pulls: Arc::new(AtomicUsize::new(0)),
            live: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Same counters, different elements.
    pub fn sharing(&self, values: impl IntoIterator<Item = T>) -> Self {
        Self {
            values: Arc::new(values.into_iter().collect()),
            pulls: self.pulls.clone(),
            live: self.live.clone(),
        }
    }

    pub fn pulls(&self) -> usize {
        self.pulls.load(Ordering::SeqCst)
    }

    pub fn live(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }
}

impl<T: Clone> Seq for CountingSeq<T> {
    type Item = T;

    fn each<Y: FnMut(T) -> bool>(&self, mut yield_: Y) {
        self.live.fetch_add(1, Ordering::SeqCst);
        let _guard = LiveGuard(self.live.clone());
        for t in self.values.iter() {
            self.pulls.fetch_add(1, Ordering::SeqCst);
            if !yield_(t.clone()) {
                return;
            }
        }
    }
}

pub fn wait_until(cond: impl Fn() -> bool, timeout: Duration) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if cond() {
            return true;
        }
        thread::sleep(Duration::from_millis(1));
    }
    cond()
}
