use std::time::{Duration, Instant};

use crossbeam_channel::{tick, Receiver};
#[cfg(feature = "either")]
use either::{for_both, Either};

/// Source of periodic ticks for the timed sequences.
///
/// A fresh receiver is requested for every run of a timed sequence; ticking
/// stops once that receiver is dropped or the provider disconnects it.
pub trait TimeProvider {
    fn ticks(&self, interval: Duration) -> Receiver<Instant>;
}

/// Wall-clock ticks. A consumer that falls behind gets ticks dropped, not
/// queued.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn ticks(&self, interval: Duration) -> Receiver<Instant> {
        tick(interval)
    }
}

impl<T: TimeProvider + ?Sized> TimeProvider for &T {
    fn ticks(&self, interval: Duration) -> Receiver<Instant> {
        (**self).ticks(interval)
    }
}

#[cfg(feature = "either")]
impl<T0: TimeProvider, T1: TimeProvider> TimeProvider for Either<T0, T1> {
    fn ticks(&self, interval: Duration) -> Receiver<Instant> {
        for_both!(self, i => i.ticks(interval))
    }
}
