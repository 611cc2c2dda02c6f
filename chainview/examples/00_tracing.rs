use chainview::Chainview;
use chainview_mock::MockSource;
use tracing_subscriber::fmt::format::FmtSpan;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Human-friendly subscriber with env-based filtering.
    // Suggested: RUST_LOG=debug,chainview=trace,chainview_core=trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let source = MockSource::new();
    let engine = Chainview::builder().smoothing_window(3).build()?;

    // Swap chart over the last hour of the fixture trades.
    let swaps = source.swaps("ALGO/USDC")?;
    let now = swaps.iter().map(|o| o.timestamp).max().unwrap_or_default() + 1;
    let _ = engine.chart(&swaps, "1H", now)?;

    // Pool balances with an outage: carried-forward buckets show up in the debug log.
    let balances = source.pool_balances("ALGO-USDC-TM")?;
    let now = balances.iter().map(|o| o.timestamp).max().unwrap_or_default() + 1;
    let _ = engine.chart(&balances, "24H", now)?;

    // Unknown tokens fail before any work is done.
    let _ = engine.chart(&swaps, "1Y", now);

    // Re-delivered headers are skipped with a trace line.
    let mut tracker = engine.block_time_tracker()?;
    for header in source.blocks("algorand", 1, 20)? {
        tracker.observe(header);
        tracker.observe(header);
    }

    Ok(())
}
