//! Normalized Average True Range
//!
//! ATR with Wilder smoothing (SMA seed over the first `length` true
//! ranges, then `ATR = (prev_ATR * (N-1) + TR) / N`), normalized by the
//! close so the output is a fraction of price. The first `length - 1`
//! rows are `NaN` warmup.

/// True range series: `max(h-l, |h-prev_close|, |l-prev_close|)`,
/// degenerating to `h-l` on the first bar.
fn true_range(high: &[f64], low: &[f64], close: &[f64]) -> Vec<f64> {
    let mut tr = Vec::with_capacity(high.len());
    for i in 0..high.len() {
        let range = if i == 0 {
            high[0] - low[0]
        } else {
            let prev_close = close[i - 1];
            (high[i] - low[i])
                .max((high[i] - prev_close).abs())
                .max((low[i] - prev_close).abs())
        };
        tr.push(range);
    }
    tr
}

/// NATR over aligned high/low/close series, as a fraction of price.
///
/// Returns all-`NaN` when the series is shorter than `length` or
/// `length` is zero.
pub fn natr(high: &[f64], low: &[f64], close: &[f64], length: usize) -> Vec<f64> {
    let n = close.len();
    let mut out = vec![f64::NAN; n];
    if length == 0 || n < length {
        return out;
    }

    let tr = true_range(high, low, close);

    // Seed with the SMA of the first `length` true ranges
    let mut atr = tr[..length].iter().sum::<f64>() / length as f64;
    out[length - 1] = atr / close[length - 1];

    for i in length..n {
        atr = (atr * (length as f64 - 1.0) + tr[i]) / length as f64;
        out[i] = atr / close[i];
    }
    out
}
