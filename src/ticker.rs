use std::time::{Duration, Instant};

use tracing::trace;

use crate::error::{or_panic, SeqError};
use crate::seq::Seq;
use crate::time_provider::{SystemTimeProvider, TimeProvider};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Limit {
    Until(Instant),
    Count(usize),
}

/// A sequence of tick instants, one per interval.
///
/// The first tick arrives a full interval after the run starts. Every run asks
/// its provider for a new ticker.
#[derive(Debug, Clone)]
pub struct Ticks<P> {
    provider: P,
    interval: Duration,
    limit: Limit,
}

impl<P> Ticks<P> {
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl<P: TimeProvider> Seq for Ticks<P> {
    type Item = Instant;

    fn each<Y: FnMut(Instant) -> bool>(&self, mut yield_: Y) {
        let mut remaining = match self.limit {
            Limit::Count(0) => return,
            Limit::Count(n) => Some(n),
            Limit::Until(_) => None,
        };
        let ticks = self.provider.ticks(self.interval);
        trace!(target: "seqs", interval = ?self.interval, "ticker started");
        for now in ticks.iter() {
            if let Limit::Until(deadline) = self.limit {
                if now > deadline {
                    return;
                }
            }
            if !yield_(now) {
                return;
            }
            if let Some(n) = remaining.as_mut() {
                *n -= 1;
                if *n == 0 {
                    return;
                }
            }
        }
    }
}

fn check_interval(interval: Duration) -> Result<(), SeqError> {
    if interval.is_zero() {
        return Err(SeqError::ZeroInterval);
    }
    Ok(())
}

/// Ticks every `interval` until a tick lands after `deadline`.
pub fn try_every_until_with<P: TimeProvider>(
    provider: P,
    interval: Duration,
    deadline: Instant,
) -> Result<Ticks<P>, SeqError> {
    check_interval(interval)?;
    Ok(Ticks {
        provider,
        interval,
        limit: Limit::Until(deadline),
    })
}

/// Ticks every `interval`, `n` times.
pub fn try_every_n_with<P: TimeProvider>(
    provider: P,
    interval: Duration,
    n: usize,
) -> Result<Ticks<P>, SeqError> {
    check_interval(interval)?;
    Ok(Ticks {
        provider,
        interval,
        limit: Limit::Count(n),
    })
}

pub fn try_every_until(
    interval: Duration,
    deadline: Instant,
) -> Result<Ticks<SystemTimeProvider>, SeqError> {
    try_every_until_with(SystemTimeProvider, interval, deadline)
}

pub fn try_every_n(interval: Duration, n: usize) -> Result<Ticks<SystemTimeProvider>, SeqError> {
    try_every_n_with(SystemTimeProvider, interval, n)
}

/// Panics right away on a zero interval, before anything ticks.
pub fn every_until_with<P: TimeProvider>(
    provider: P,
    interval: Duration,
    deadline: Instant,
) -> Ticks<P> {
    or_panic(try_every_until_with(provider, interval, deadline))
}

pub fn every_n_with<P: TimeProvider>(provider: P, interval: Duration, n: usize) -> Ticks<P> {
    or_panic(try_every_n_with(provider, interval, n))
}

/// Wall-clock form of [`every_until_with`].
pub fn every_until(interval: Duration, deadline: Instant) -> Ticks<SystemTimeProvider> {
    every_until_with(SystemTimeProvider, interval, deadline)
}

/// Wall-clock form of [`every_n_with`].
pub fn every_n(interval: Duration, n: usize) -> Ticks<SystemTimeProvider> {
    every_n_with(SystemTimeProvider, interval, n)
}
