/// MACD output: the line, its smoothed signal line, and the histogram
/// (line minus signal). All three series are aligned with the input.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdOutput {
    pub line: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
}

/// Port for technical-indicator computation
///
/// A narrow seam over the indicator library so the signal pipeline can be
/// tested against synthetic fixed series. Implementations work on `f64`
/// series and may emit `NaN` for warmup rows; callers are expected to
/// guard with a lookback margin before trusting trailing values.
pub trait IndicatorEngine: Send + Sync {
    /// Normalized average true range over `length` candles, as a
    /// *fraction* of price (not a percentage)
    fn natr(&self, high: &[f64], low: &[f64], close: &[f64], length: usize) -> Vec<f64>;

    /// MACD over close prices with periods `(fast, slow, signal)`
    fn macd(&self, close: &[f64], fast: usize, slow: usize, signal: usize) -> MacdOutput;
}
