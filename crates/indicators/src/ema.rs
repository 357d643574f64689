/// Exponential Moving Average — incremental computation.
///
/// Matches pandas `ewm(span=window, adjust=False).mean()`:
///   bar 0  → value = price (first observation)
///   bar 1+ → value = α·price + (1−α)·prev   where α = 2/(window+1)
///
/// `is_warm()` returns true once `window` bars have been seen, so callers
/// can skip the warmup region.
#[derive(Debug, Clone)]
pub struct Ema {
    alpha: f64,
    pub value: f64,
    window: usize,
    count: usize,
    warm: bool,
}

impl Ema {
    pub fn new(window: usize) -> Self {
        Self {
            alpha: 2.0 / (window as f64 + 1.0),
            value: 0.0,
            window,
            count: 0,
            warm: false,
        }
    }

    /// Feed one price, return the current EMA value.
    pub fn update(&mut self, price: f64) -> f64 {
        if self.count == 0 {
            // First bar: seed with the observation itself (adjust=False)
            self.value = price;
        } else {
            self.value = self.alpha * price + (1.0 - self.alpha) * self.value;
        }
        self.count += 1;
        if !self.warm && self.count >= self.window {
            self.warm = true;
        }
        self.value
    }

    pub fn is_warm(&self) -> bool {
        self.warm
    }
}

/// EMA over a whole series
pub fn ema_series(values: &[f64], window: usize) -> Vec<f64> {
    let mut ema = Ema::new(window);
    values.iter().map(|&v| ema.update(v)).collect()
}
