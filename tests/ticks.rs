mod utils;

use std::time::{Duration, Instant};

use seqs::{count, every_n, map, try_every_n_with, try_every_until_with, with, Seq, SeqError};
use utils::time_provider::mk_time_provider;

#[test]
fn test_scripted_every_n() {
    let start = Instant::now();
    let provider = mk_time_provider(Some((start, 100)));
    let ticks = try_every_n_with(provider, Duration::from_secs(60), 4).unwrap();
    let offsets = map(ticks, move |t| (t - start).as_secs()).to_vec();
    assert_eq!(offsets, vec![60, 120, 180, 240]);
}

#[test]
fn test_scripted_every_until_is_restartable() {
    let start = Instant::now();
    let provider = mk_time_provider(Some((start, 100)));
    let deadline = start + Duration::from_secs(10 * 60);
    let ticks = try_every_until_with(provider, Duration::from_secs(60), deadline).unwrap();
    assert_eq!(count(&ticks), 10);
    assert_eq!(count(&ticks), 10);
}

#[test]
fn test_scripted_stop_early() {
    let provider = mk_time_provider(Some((Instant::now(), 100)));
    let ticks = try_every_n_with(provider, Duration::from_secs(1), 50).unwrap();
    let mut seen = 0;
    ticks.each(|_| {
        seen += 1;
        seen < 3
    });
    assert_eq!(seen, 3);
}

#[test]
fn test_system_every_until() {
    let provider = mk_time_provider(None);
    let start = Instant::now();
    let deadline = start + Duration::from_millis(30);
    let ticks = try_every_until_with(provider, Duration::from_millis(5), deadline).unwrap();
    let got = ticks.to_vec();
    assert!(!got.is_empty());
    assert!(got.iter().all(|t| *t > start && *t <= deadline));
}

#[test]
fn test_system_every_n_drives_a_pipeline() {
    let ticks = every_n(Duration::from_millis(1), 5);
    let stamps = ticks.to_vec();
    assert_eq!(stamps.len(), 5);
    assert!(stamps.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(count(with(stamps)), 5);
}

#[test]
fn test_zero_interval_is_rejected() {
    let provider = mk_time_provider(None);
    assert_eq!(
        try_every_n_with(provider, Duration::ZERO, 3).err(),
        Some(SeqError::ZeroInterval)
    );
}
