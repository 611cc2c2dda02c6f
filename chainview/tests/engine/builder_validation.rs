use chainview::{Chainview, ChainviewError, FillPolicy, RangeSpec, RangeTable, TimeRange};

#[test]
fn defaults_are_conservative() {
    let engine = Chainview::builder().build().unwrap();
    let cfg = engine.config();
    assert_eq!(cfg.fill_policy, FillPolicy::CarryForward);
    assert_eq!(cfg.smoothing_window, None);
    assert_eq!(cfg.block_time_capacity, 100);
    assert_eq!(cfg.ranges, RangeTable::default());
}

#[test]
fn zero_smoothing_window_is_rejected() {
    let err = Chainview::builder().smoothing_window(0).build().unwrap_err();
    assert_eq!(err, ChainviewError::InvalidWindow { window: 0 });
    assert!(err.is_fatal());
}

#[test]
fn zero_block_capacity_is_rejected() {
    let err = Chainview::builder().block_time_capacity(0).build().unwrap_err();
    assert_eq!(err, ChainviewError::InvalidCapacity { capacity: 0 });
}

#[test]
fn non_positive_bucket_width_is_rejected() {
    let err = Chainview::builder()
        .range_spec(RangeSpec::new(TimeRange::D7, 604_800, -3_600))
        .build()
        .unwrap_err();
    assert_eq!(err, ChainviewError::InvalidBucketWidth { width: -3_600 });
}

#[test]
fn no_smoothing_clears_earlier_window() {
    let engine = Chainview::builder()
        .smoothing_window(5)
        .no_smoothing()
        .build()
        .unwrap();
    assert_eq!(engine.config().smoothing_window, None);
    assert_eq!(engine.smooth(&[1.0, 5.0]).unwrap(), vec![1.0, 5.0]);
}

#[test]
fn smooth_uses_configured_window() {
    let engine = Chainview::builder().smoothing_window(2).build().unwrap();
    assert_eq!(
        engine.smooth(&[2.0, 4.0, 8.0]).unwrap(),
        vec![2.0, 3.0, 6.0]
    );
}

#[test]
fn oversized_range_window_is_rejected() {
    let err = Chainview::builder()
        .range_spec(RangeSpec::new(TimeRange::D30, 1_700_000_000, 1))
        .build()
        .unwrap_err();
    assert!(matches!(err, ChainviewError::InvalidArg(_)));
    assert!(err.is_fatal());
}

#[test]
fn unvalidated_table_fails_cleanly_at_chart_time() {
    // Bypasses the builder: the grid itself refuses to allocate.
    let window = chainview::resolve(
        &RangeTable::empty().with_spec(RangeSpec::new(TimeRange::H1, i64::MAX, 1)),
        "1H",
        1_700_000_000,
    )
    .unwrap();
    let err = chainview::BucketGrid::anchored(&window, &[chainview::Observation::new(5, 1.0)])
        .unwrap_err();
    assert!(matches!(err, ChainviewError::InvalidArg(_)));
}
