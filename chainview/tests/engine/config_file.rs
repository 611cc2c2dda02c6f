use chainview::{Chainview, ChainviewConfig, FillPolicy, TimeRange};

#[test]
fn engine_from_deserialized_config() {
    let json = r#"{
        "ranges": { "specs": [
            { "range": "1H",  "window_secs": 3600,  "bucket_width": 30 },
            { "range": "24H", "window_secs": 86400, "bucket_width": 600 }
        ] },
        "fill_policy": "Skip",
        "smoothing_window": 4,
        "block_time_capacity": 12
    }"#;
    let cfg: ChainviewConfig = serde_json::from_str(json).expect("parse config");
    let engine = Chainview::builder().config(cfg).build().unwrap();

    let c = engine.config();
    assert_eq!(c.fill_policy, FillPolicy::Skip);
    assert_eq!(c.smoothing_window, Some(4));
    assert_eq!(c.ranges.spec(TimeRange::H1).map(|s| s.bucket_width), Some(30));
    assert!(c.ranges.spec(TimeRange::D7).is_none());

    // Ranges absent from the file are unknown to this engine.
    let err = engine.chart(&[], "7D", 0).unwrap_err();
    assert!(matches!(err, chainview::ChainviewError::InvalidRange { .. }));
}

#[test]
fn duplicate_ranges_in_config_are_rejected() {
    let json = r#"{
        "ranges": { "specs": [
            { "range": "7D", "window_secs": 604800, "bucket_width": 3600 },
            { "range": "7D", "window_secs": 604800, "bucket_width": 7200 }
        ] },
        "fill_policy": "CarryForward",
        "smoothing_window": null,
        "block_time_capacity": 100
    }"#;
    let cfg: ChainviewConfig = serde_json::from_str(json).expect("parse config");
    let err = Chainview::builder().config(cfg).build().unwrap_err();
    assert!(matches!(err, chainview::ChainviewError::InvalidArg(_)));
}
