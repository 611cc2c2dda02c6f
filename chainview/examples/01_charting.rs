use chainview::{Chainview, FillPolicy};
use chainview_mock::MockSource;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let source = MockSource::new();

    // 1. A long synthetic swap stream: about one trade every 12 seconds over two days.
    let start = 1_709_251_200; // 2024-03-01 00:00:00 UTC
    let stream = source.swap_stream(start, 14_400, 12, 0.18);
    let now = stream.iter().map(|o| o.timestamp).max().unwrap_or(start) + 1;

    let engine = Chainview::builder().smoothing_window(6).build()?;
    if let Some(range) = engine.suggest_range(&stream) {
        println!("Suggested default range for this stream: {range}");
    }

    // 2. Candles for the last 24 hours.
    let series = engine.chart(&stream, "24H", now)?;
    println!(
        "\n## {} candles of {}s over [{}, {})",
        series.candles.len(),
        series.window.bucket_width,
        series.window.start,
        series.window.end
    );
    println!(
        "{:<12} | {:<9} | {:<9} | {:<9} | {:<9} | {:<9} | {:<6}",
        "Start", "Open", "High", "Low", "Close", "Smoothed", "Swaps"
    );
    for (candle, smooth) in series.candles.iter().zip(&series.smoothed).take(8) {
        println!(
            "{:<12} | {:<9.5} | {:<9.5} | {:<9.5} | {:<9.5} | {:<9.5} | {:<6}",
            candle.timestamp(),
            candle.open,
            candle.high,
            candle.low,
            candle.close,
            smooth.value,
            candle.swap_count
        );
    }

    // 3. Pool balances through an outage, filled and skipped.
    let balances = source.pool_balances("ALGO-USDC-TM")?;
    let now = balances.iter().map(|o| o.timestamp).max().unwrap_or_default() + 1;
    let filled = engine.chart(&balances, "24H", now)?;
    let skipped = Chainview::builder()
        .fill_policy(FillPolicy::Skip)
        .build()?
        .chart(&balances, "24H", now)?;
    println!(
        "\nPool buckets: {} with carry-forward ({} filled), {} when skipping gaps",
        filled.candles.len(),
        filled.candles.iter().filter(|c| c.filled).count(),
        skipped.candles.len()
    );

    // 4. Rolling block time.
    let mut tracker = engine.block_time_tracker()?;
    for header in source.blocks("algorand", 40_000_000, 500)? {
        tracker.observe(header);
    }
    println!(
        "\nAverage block time over the last {} blocks: {:.2}s",
        tracker.sample_count(),
        tracker.average_block_time()
    );

    Ok(())
}
