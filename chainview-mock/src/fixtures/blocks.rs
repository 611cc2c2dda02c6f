use chainview_core::BlockHeader;

use super::ts;

// Seconds between consecutive rounds; averages 3.25s over the cycle.
const ALGORAND_GAPS: [i64; 4] = [3, 4, 3, 3];

pub fn by_chain(chain: &str, first_round: u64, count: usize) -> Option<Vec<BlockHeader>> {
    let (genesis, gaps): (i64, &[i64]) = match chain {
        "algorand" => (ts("2024-03-01 00:00:00"), &ALGORAND_GAPS[..]),
        "steady" => (ts("2024-03-01 00:00:00"), &[5][..]),
        _ => return None,
    };
    let mut out = Vec::with_capacity(count);
    let mut t = genesis;
    for (i, round) in (first_round..).take(count).enumerate() {
        out.push(BlockHeader {
            round,
            timestamp: t,
        });
        t += gaps[i % gaps.len()];
    }
    Some(out)
}
