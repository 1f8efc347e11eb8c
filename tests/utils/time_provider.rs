use std::time::{Duration, Instant};

use crossbeam_channel::{unbounded, Receiver};
use either::Either;
use seqs::time_provider::{SystemTimeProvider, TimeProvider};

/// Hands out a fixed number of ticks, all ready at once and spaced exactly one
/// interval apart from `start`.
pub struct ScriptedTimeProvider {
    pub start: Instant,
    pub count: u32,
}

impl TimeProvider for ScriptedTimeProvider {
    fn ticks(&self, interval: Duration) -> Receiver<Instant> {
        let (tx, rx) = unbounded();
        for i in 1..=self.count {
            tx.send(self.start + interval * i).unwrap();
        }
        rx
    }
}

pub fn mk_time_provider(scripted: Option<(Instant, u32)>) -> impl TimeProvider {
    if let Some((start, count)) = scripted {
        Either::Left(ScriptedTimeProvider { start, count })
    } else {
        Either::Right(SystemTimeProvider)
    }
}
