use chainview::{Chainview, FillPolicy, Observation, TimeRange};
use proptest::prelude::*;

use crate::helpers::NOW;

fn arb_range() -> impl Strategy<Value = TimeRange> {
    prop::sample::select(TimeRange::ALL.to_vec())
}

fn arb_observations() -> impl Strategy<Value = Vec<Observation>> {
    proptest::collection::vec(
        (NOW - 3_000_000..NOW + 1_000, 0.01f64..10_000.0),
        0..300,
    )
    .prop_map(|v| v.into_iter().map(|(t, p)| Observation::new(t, p)).collect())
}

proptest! {
    #[test]
    fn chart_invariants(
        input in arb_observations(),
        range in arb_range(),
        fill in prop::sample::select(vec![FillPolicy::CarryForward, FillPolicy::Skip]),
        window in 1usize..20,
    ) {
        let engine = Chainview::builder()
            .fill_policy(fill)
            .smoothing_window(window)
            .build()
            .unwrap();
        let series = engine.chart_range(&input, range, NOW).unwrap();

        prop_assert_eq!(series.smoothed.len(), series.candles.len());
        prop_assert!(series.candles.windows(2).all(|w| w[0].bucket.start < w[1].bucket.start));
        for c in &series.candles {
            prop_assert!(c.low <= c.open && c.low <= c.close);
            prop_assert!(c.high >= c.open && c.high >= c.close);
        }

        let in_window = input.iter().any(|o| series.window.contains(o.timestamp));
        prop_assert_eq!(series.is_empty(), !in_window);
    }

    #[test]
    fn chart_ignores_arrival_order(
        (sorted, shuffled) in proptest::collection::btree_map(NOW - 90_000..NOW, 0.01f64..10_000.0, 1..200)
            .prop_map(|m| m.into_iter().map(|(t, p)| Observation::new(t, p)).collect::<Vec<_>>())
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle())),
        range in arb_range(),
    ) {
        let engine = Chainview::builder().smoothing_window(3).build().unwrap();
        let a = engine.chart_range(&sorted, range, NOW).unwrap();
        let b = engine.chart_range(&shuffled, range, NOW).unwrap();
        prop_assert_eq!(a, b);
    }
}
