use crate::ema::Ema;
use midas_ports::MacdOutput;

/// MACD over a close-price series.
///
/// `line = EMA(fast) - EMA(slow)`, `signal = EMA(line, signal_window)`,
/// `histogram = line - signal`. All three outputs are aligned with the
/// input; the early rows carry seed bias rather than `NaN`, so callers
/// should only trust values past the slow+signal warmup.
pub fn macd(close: &[f64], fast: usize, slow: usize, signal: usize) -> MacdOutput {
    let mut ema_fast = Ema::new(fast);
    let mut ema_slow = Ema::new(slow);
    let mut ema_signal = Ema::new(signal);

    let mut line = Vec::with_capacity(close.len());
    let mut signal_line = Vec::with_capacity(close.len());
    let mut histogram = Vec::with_capacity(close.len());

    for &price in close {
        let macd_value = ema_fast.update(price) - ema_slow.update(price);
        let signal_value = ema_signal.update(macd_value);
        line.push(macd_value);
        signal_line.push(signal_value);
        histogram.push(macd_value - signal_value);
    }

    MacdOutput {
        line,
        signal: signal_line,
        histogram,
    }
}
