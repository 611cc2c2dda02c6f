use chainview::{Chainview, FillPolicy, TimeRange};
use chainview_mock::MockSource;

use crate::helpers::{NOW, engine, ts};

#[test]
fn algo_usdc_swaps_last_hour() {
    let swaps = MockSource::new().swaps("ALGO/USDC").unwrap();
    let now = ts(2024, 3, 1, 12, 10, 0);
    let series = engine().chart(&swaps, "1H", now).unwrap();

    assert_eq!(series.candles.len(), 10);
    assert_eq!(series.candles[0].bucket.start, ts(2024, 3, 1, 12, 0, 0));

    let c0 = &series.candles[0];
    assert_eq!((c0.open, c0.high, c0.low, c0.close), (0.2510, 0.2534, 0.2498, 0.2498));
    assert_eq!(c0.swap_count, 3);
    assert_eq!(c0.volume, 1_605.0);

    // Two swaps in the same second: input order decides open and close.
    let c3 = &series.candles[3];
    assert_eq!((c3.open, c3.close), (0.2521, 0.2519));
    assert_eq!(c3.swap_count, 2);

    let filled: Vec<usize> = series
        .candles
        .iter()
        .enumerate()
        .filter(|(_, c)| c.filled)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(filled, vec![2, 4, 5, 7, 8, 9]);
    assert_eq!(series.candles[9].close, 0.2555);
}

#[test]
fn pool_balances_bridge_indexer_outage() {
    let balances = MockSource::new().pool_balances("ALGO-USDC-TM").unwrap();
    let now = ts(2024, 3, 1, 10, 0, 0);

    let carry = engine().chart(&balances, "24H", now).unwrap();
    assert_eq!(carry.candles.len(), 40);
    let at_five = carry
        .candles
        .iter()
        .find(|c| c.bucket.start == ts(2024, 3, 1, 5, 0, 0))
        .unwrap();
    assert!(at_five.filled);
    assert_eq!(at_five.close, 4_830_250.0);

    let skip = Chainview::builder()
        .fill_policy(FillPolicy::Skip)
        .build()
        .unwrap()
        .chart(&balances, "24H", now)
        .unwrap();
    assert_eq!(skip.candles.len(), 6);
    assert!(skip.candles.iter().all(|c| !c.filled));
}

#[test]
fn week_of_synthetic_swaps() {
    let swaps = MockSource::new().swap_stream(NOW - 604_800, 20_000, 30, 0.25);
    let engine = Chainview::builder().smoothing_window(24).build().unwrap();
    let series = engine.chart(&swaps, "7D", NOW).unwrap();

    assert_eq!(series.candles.len(), 168);
    assert_eq!(series.smoothed.len(), 168);
    let swaps_total: u64 = series.candles.iter().map(|c| c.swap_count).sum();
    assert_eq!(swaps_total, 20_000);
    for c in &series.candles {
        assert!(c.low <= c.open.min(c.close));
        assert!(c.high >= c.open.max(c.close));
    }
    assert_eq!(engine.suggest_range(&swaps), Some(TimeRange::H1));
}
