use crate::{Candle, ChainviewError, SmoothedPoint};

/// Trailing simple moving average.
///
/// Position `i` is the mean of `values[max(0, i - window + 1)..=i]`. The window
/// never looks ahead and is shorter at the start of the series, so the output
/// always has the same length as the input.
///
/// Each position is summed from the source slice rather than with an
/// add/subtract running total, so `window == 1` reproduces the input exactly.
///
/// # Errors
/// Returns `InvalidWindow` if `window == 0`.
///
/// ```
/// use chainview_core::moving_average;
///
/// let out = moving_average(&[1.0, 2.0, 3.0, 4.0], 2).unwrap();
/// assert_eq!(out, vec![1.0, 1.5, 2.5, 3.5]);
/// ```
pub fn moving_average(values: &[f64], window: usize) -> Result<Vec<f64>, ChainviewError> {
    if window == 0 {
        return Err(ChainviewError::InvalidWindow { window });
    }
    Ok((0..values.len())
        .map(|i| {
            let lo = (i + 1).saturating_sub(window);
            let slice = &values[lo..=i];
            slice.iter().sum::<f64>() / slice.len() as f64
        })
        .collect())
}

/// Apply [`moving_average`] to candle closes, stamping each point with its
/// bucket start.
///
/// # Errors
/// Returns `InvalidWindow` if `window == 0`.
pub fn smooth_closes(
    candles: &[Candle],
    window: usize,
) -> Result<Vec<SmoothedPoint>, ChainviewError> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let means = moving_average(&closes, window)?;
    Ok(candles
        .iter()
        .zip(means)
        .map(|(c, value)| SmoothedPoint {
            timestamp: c.timestamp(),
            value,
        })
        .collect())
}
