use crate::FixedDecimal;
use crate::engine::Period;
use crate::errors::{Error, Result};

/// Lower bound of the fixed value scale.
pub const SCALE_MIN: f64 = 0.0;

/// Upper bound of the fixed value scale.
pub const SCALE_MAX: f64 = 100.0;

/// One OHLC sample, bound to its period.
///
/// Invariants, enforced at construction:
/// - `low <= min(open, close)` and `high >= max(open, close)`.
/// - All four values lie within the fixed `[0, 100]` scale.
/// - Values carry one decimal digit of precision.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    period: Period,
    open: f64,
    close: f64,
    low: f64,
    high: f64,
}

impl Sample {
    /// Creates a sample, validating the scale and wick-order invariants.
    ///
    /// ### Arguments
    /// * `period` - The month this sample belongs to.
    /// * `open`, `close` - Body values.
    /// * `low`, `high` - Wick extremes, which must enclose the body.
    ///
    /// ### Returns
    /// The sample with all values rounded to one decimal digit, or an error
    /// describing the violated invariant.
    pub fn new(period: Period, open: f64, close: f64, low: f64, high: f64) -> Result<Self> {
        for value in [open, close, low, high] {
            if !(SCALE_MIN..=SCALE_MAX).contains(&value) {
                return Err(Error::SampleOutOfScale(value));
            }
        }
        if low > open.min(close) || high < open.max(close) {
            return Err(Error::SampleWickOrder);
        }
        Ok(Self::emit(period, open, close, low, high))
    }

    /// Builds a sample from values the synthesizer already guarantees.
    /// Rounding is monotone, so the invariants survive it.
    pub(crate) fn emit(period: Period, open: f64, close: f64, low: f64, high: f64) -> Self {
        let sample = Self {
            period,
            open: open.round_to(1),
            close: close.round_to(1),
            low: low.round_to(1),
            high: high.round_to(1),
        };
        debug_assert!(sample.low <= sample.open.min(sample.close));
        debug_assert!(sample.high >= sample.open.max(sample.close));
        debug_assert!(sample.low >= SCALE_MIN && sample.high <= SCALE_MAX);
        sample
    }

    /// Returns the period this sample belongs to.
    pub fn period(&self) -> Period {
        self.period
    }

    /// Returns the open value.
    pub fn open(&self) -> f64 {
        self.open
    }

    /// Returns the close value.
    pub fn close(&self) -> f64 {
        self.close
    }

    /// Returns the lower wick extreme.
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Returns the upper wick extreme.
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Returns the values ordered `[open, close, low, high]`, the layout the
    /// rendering boundary consumes.
    pub fn values(&self) -> [f64; 4] {
        [self.open, self.close, self.low, self.high]
    }
}
