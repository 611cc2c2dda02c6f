use chainview::{BlockHeader, BlockTimeTracker, Chainview, ChainviewError};
use chainview_mock::MockSource;

fn header(round: u64, timestamp: i64) -> BlockHeader {
    BlockHeader { round, timestamp }
}

#[test]
fn reports_zero_until_two_blocks_seen() {
    let mut t = BlockTimeTracker::new(8).unwrap();
    assert_eq!(t.average_block_time(), 0.0);
    assert_eq!(t.sample_count(), 0);
    assert_eq!(t.observe(header(10, 1_000)), None);
    assert_eq!(t.average_block_time(), 0.0);
    assert_eq!(t.sample_count(), 0);
    assert_eq!(t.last_round(), Some(10));
}

#[test]
fn steady_chain_averages_its_interval() {
    let blocks = MockSource::new().blocks("steady", 1, 50).unwrap();
    let mut t = Chainview::builder()
        .block_time_capacity(10)
        .build()
        .unwrap()
        .block_time_tracker()
        .unwrap();
    for b in blocks {
        t.observe(b);
    }
    assert_eq!(t.sample_count(), 10);
    assert_eq!(t.average_block_time(), 5.0);
}

#[test]
fn irregular_chain_settles_on_cycle_mean() {
    let blocks = MockSource::new().blocks("algorand", 40_000_000, 1_001).unwrap();
    let mut t = BlockTimeTracker::new(4).unwrap();
    for b in blocks {
        t.observe(b);
    }
    assert_eq!(t.sample_count(), 4);
    assert_eq!(t.average_block_time(), 3.25);
}

#[test]
fn duplicate_rounds_are_ignored() {
    let mut t = BlockTimeTracker::new(4).unwrap();
    t.observe(header(1, 100));
    assert_eq!(t.observe(header(2, 104)), Some(4.0));
    assert_eq!(t.observe(header(2, 104)), None);
    assert_eq!(t.observe(header(1, 100)), None);
    assert_eq!(t.sample_count(), 1);
    assert_eq!(t.average_block_time(), 4.0);
}

#[test]
fn skipped_rounds_are_spread_evenly() {
    let mut t = BlockTimeTracker::new(4).unwrap();
    t.observe(header(100, 1_000));
    assert_eq!(t.observe(header(105, 1_020)), Some(4.0));
    assert_eq!(t.sample_count(), 1);
}

#[test]
fn backwards_timestamps_are_ignored() {
    let mut t = BlockTimeTracker::new(4).unwrap();
    t.observe(header(1, 100));
    assert_eq!(t.observe(header(2, 90)), None);
    assert_eq!(t.last_round(), Some(1));
    assert_eq!(t.observe(header(3, 106)), Some(3.0));
}

#[test]
fn window_evicts_oldest_interval() {
    let mut t = BlockTimeTracker::new(2).unwrap();
    t.observe(header(1, 0));
    t.observe(header(2, 10));
    t.observe(header(3, 12));
    t.observe(header(4, 16));
    // Intervals 10, 2, 4: only the last two remain.
    assert_eq!(t.sample_count(), 2);
    assert_eq!(t.average_block_time(), 3.0);
}

#[test]
fn reset_forgets_everything() {
    let mut t = BlockTimeTracker::new(3).unwrap();
    t.observe(header(1, 0));
    t.observe(header(2, 4));
    t.reset();
    assert_eq!(t.average_block_time(), 0.0);
    assert_eq!(t.last_round(), None);
    // The next header primes again instead of producing a stale interval.
    assert_eq!(t.observe(header(3, 100)), None);
}

#[test]
fn zero_capacity_is_rejected() {
    assert_eq!(
        BlockTimeTracker::new(0).unwrap_err(),
        ChainviewError::InvalidCapacity { capacity: 0 }
    );
}
