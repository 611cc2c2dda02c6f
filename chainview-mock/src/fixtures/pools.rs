use chainview_core::Observation;

use super::ts;

pub fn by_pool(pool: &str) -> Option<Vec<Observation>> {
    match pool {
        // Indexer outage between 03:00 and 07:00.
        "ALGO-USDC-TM" => Some(build(&[
            ("2024-03-01 00:00:00", 4_812_000.0),
            ("2024-03-01 01:00:00", 4_809_500.0),
            ("2024-03-01 02:00:00", 4_830_250.0),
            ("2024-03-01 07:00:00", 4_901_000.0),
            ("2024-03-01 08:00:00", 4_899_750.0),
            ("2024-03-01 09:00:00", 4_876_125.0),
        ])),
        _ => None,
    }
}

fn build(rows: &[(&str, f64)]) -> Vec<Observation> {
    rows.iter()
        .map(|&(at, balance)| Observation::new(ts(at), balance))
        .collect()
}
