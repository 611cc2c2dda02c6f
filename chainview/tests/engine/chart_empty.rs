use chainview::{Chainview, FillPolicy};

use crate::helpers::{NOW, engine, obs};

#[test]
fn empty_input_yields_empty_series() {
    let series = engine().chart(&[], "24H", NOW).unwrap();
    assert!(series.is_empty());
    assert!(series.smoothed.is_empty());
    assert_eq!(series.window.end, NOW);
    assert_eq!(series.window.bucket_width, 900);
}

#[test]
fn data_outside_window_yields_empty_series() {
    let input = obs(&[(NOW - 90_000, 1.0), (NOW, 2.0), (NOW + 10, 3.0)]);
    let series = engine().chart(&input, "24H", NOW).unwrap();
    assert!(series.is_empty());
}

#[test]
fn non_finite_values_alone_yield_empty_series() {
    let input = obs(&[(NOW - 10, f64::NAN), (NOW - 5, f64::INFINITY)]);
    let series = engine().chart(&input, "1H", NOW).unwrap();
    assert!(series.is_empty());
}

#[test]
fn smoothing_an_empty_series_is_empty() {
    let engine = Chainview::builder()
        .smoothing_window(4)
        .fill_policy(FillPolicy::Skip)
        .build()
        .unwrap();
    let series = engine.chart(&[], "7D", NOW).unwrap();
    assert!(series.is_empty());
}
