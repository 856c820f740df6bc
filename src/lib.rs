//! # FTS: Fortune Time Series
//!
//! **FTS** is a Rust library that synthesizes a decade-long synthetic "fortune"
//! candlestick series from a birth date and its position in the 12-year zodiac
//! cycle. The output is a bounded monthly OHLC (Open, Close, Low, High) walk
//! with cycle-dependent volatility and a long-period sinusoidal trend, ready
//! to be charted or summarized.
//!
//! The values are intentionally synthetic pseudo-random data with cosmetic
//! structure. Nothing here models a real financial, astrological, or
//! predictive process.
//!
//! ## Core Components
//! | Component   | Description                                                                  |
//! |-------------|------------------------------------------------------------------------------|
//! | **`ZodiacCycle`** | Maps any calendar year to its 12-year-cycle sign and classifies year relations. |
//! | **`VolatilityPolicy`** | Two-level volatility from cycle alignment: self/opposition years swing harder. |
//! | **`Synthesizer`** | Walks month-by-month over a span, emitting one bounded OHLC `Sample` per period. |
//! | **`Series`** | The immutable ordered result, one sample per period, continuity guaranteed.  |
//! | **`SummaryDeriver`** | Classifies the first-year trend and composes a short narrative.          |
//! | **`ChartSlot`** | Scoped ownership of at most one live rendered chart (`draws` feature).      |
//!
//! ## Getting Started
//! ```rust
//! use fts::prelude::*;
//!
//! let mut rng = rand::rng();
//! let synth = Synthesizer::new(ZodiacSign::Horse);
//! let series = synth.synthesize(Span::forecast_window(), &mut rng);
//!
//! assert_eq!(series.len(), 121); // 2026-02 ..= 2036-02, one sample per month
//! for pair in series.samples().windows(2) {
//!     assert_eq!(pair[1].open(), pair[0].close());
//! }
//! ```
//!
//! ## Determinism
//! The random source is an explicit parameter, never an ambient global. Pass a
//! seeded or mock generator to reproduce a series exactly:
//! ```rust
//! use fts::prelude::*;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let synth = Synthesizer::new(ZodiacSign::Rat);
//! let a = synth.synthesize(Span::forecast_window(), &mut StdRng::seed_from_u64(7));
//! let b = synth.synthesize(Span::forecast_window(), &mut StdRng::seed_from_u64(7));
//! assert_eq!(a, b);
//! ```
//!
//! ## Features
//! | Feature   | Description                                                       |
//! |-----------|-------------------------------------------------------------------|
//! | `draws`   | Candlestick rendering through [`plotters`](https://crates.io/crates/plotters) (default). |
//! | `serde`   | Serialize the chart-data contract (labels + `[open, close, low, high]` rows). |
//! | `wasm`    | Random-source shim for `wasm32` targets.                          |
//!
//! ## Error Handling
//! FTS uses a custom error type for:
//! - Birth-date validation (policy window 1900-2026, leap-year-aware days).
//! - Sample invariant violations when constructing samples by hand.
//! - Rendering failures.
//!
//! The synthesis itself is total: an inverted or zero-length span yields an
//! empty [`engine::Series`], never an error.
//!
//! ## License
//! MIT
#![warn(missing_docs)]

/// Core series components: periods, samples, series, and the synthesizer.
pub mod engine;

/// Error types for the library.
pub mod errors;

/// Birth-date validation and the lunar almanac seam.
pub mod calendar;

/// The 12-sign zodiac cycle and year-relation classification.
pub mod zodiac;

/// Cycle-dependent volatility policy.
pub mod volatility;

/// First-year trend classification and narrative composition.
pub mod summary;

/// Draw candlestick charts with several backends: png, svg.
#[cfg(feature = "draws")]
pub mod draws;

/// Re-exports of commonly used types and traits for convenience.
pub mod prelude {
    pub use super::*;
    pub use crate::calendar::*;
    pub use crate::engine::*;
    pub use crate::errors::*;
    pub use crate::summary::*;
    pub use crate::volatility::*;
    pub use crate::zodiac::*;

    #[cfg(feature = "draws")]
    pub use crate::draws::*;
}

/// Trait for fixed-precision rounding of sample values.
///
/// The output contract is one decimal digit; consumers must not assume higher
/// precision. Rounding is monotone, so it preserves the ordering invariants
/// between open/close and the wick extremes.
pub trait FixedDecimal {
    /// Rounds the value to `digits` decimal digits.
    ///
    /// ### Arguments
    /// * `digits` - Number of decimal digits to keep.
    ///
    /// ### Returns
    /// The rounded value.
    fn round_to(self, digits: u32) -> Self;
}

impl FixedDecimal for f64 {
    fn round_to(self, digits: u32) -> Self {
        let factor = 10f64.powi(digits as i32);
        (self * factor).round() / factor
    }
}

#[cfg(test)]
mod fixed_decimal {
    use super::*;

    #[test]
    fn one_digit() {
        assert_eq!(50.0, 50.04999.round_to(1));
        assert_eq!(50.1, 50.05001.round_to(1));
        assert_eq!(-3.2, (-3.24).round_to(1));
    }

    #[test]
    fn zero_digits() {
        assert_eq!(50.0, 50.4.round_to(0));
    }

    #[test]
    fn monotone() {
        // low <= min(open, close) must survive rounding
        let low = 49.96;
        let open = 49.97;
        assert!(low.round_to(1) <= open.round_to(1));
    }
}
