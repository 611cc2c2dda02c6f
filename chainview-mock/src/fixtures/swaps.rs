use chainview_core::Observation;

use super::ts;

pub fn by_pair(pair: &str) -> Option<Vec<Observation>> {
    match pair {
        "ALGO/USDC" => Some(build(&[
            ("2024-03-01 12:00:05", 0.2510, 1_200.0),
            ("2024-03-01 12:00:41", 0.2534, 310.0),
            ("2024-03-01 12:00:52", 0.2498, 95.0),
            ("2024-03-01 12:01:17", 0.2502, 2_040.0),
            ("2024-03-01 12:03:30", 0.2521, 18.5),
            ("2024-03-01 12:03:30", 0.2519, 44.0),
            ("2024-03-01 12:06:59", 0.2555, 600.0),
        ])),
        "GOBTC/ALGO" => Some(build(&[
            ("2024-03-01 11:15:00", 252_110.0, 0.02),
            ("2024-03-01 11:47:12", 251_870.0, 0.11),
            ("2024-03-01 12:29:40", 253_020.0, 0.05),
        ])),
        _ => None,
    }
}

fn build(rows: &[(&str, f64, f64)]) -> Vec<Observation> {
    rows.iter()
        .map(|&(at, price, volume)| Observation::new(ts(at), price).with_volume(volume))
        .collect()
}

// Gap multipliers in tenths; the pattern averages 10/10.
const GAPS: [i64; 8] = [4, 17, 9, 2, 21, 6, 13, 8];
// Price offsets in per-mille of the base price.
const WAVE: [i64; 12] = [0, 3, 7, 4, -2, -6, -9, -5, 1, 6, 2, -1];

pub fn stream(start: i64, count: usize, mean_gap: i64, base_price: f64) -> Vec<Observation> {
    let mut out = Vec::with_capacity(count);
    let mut t = start;
    for i in 0..count {
        let offset = WAVE[i % WAVE.len()] as f64 / 1_000.0;
        let volume = ((i * 37) % 500) as f64 + 1.0;
        out.push(Observation::new(t, base_price * (1.0 + offset)).with_volume(volume));
        t += (mean_gap * GAPS[i % GAPS.len()] / 10).max(1);
    }
    out
}
