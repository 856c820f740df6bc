//! Core series components.
//!
//! This module provides the fundamental types for fortune synthesis:
//! - `Period`: One calendar month of the output span.
//! - `Span`: An inclusive month range with chronological iteration.
//! - `Sample`: Bounded OHLC values for a single period.
//! - `Series`: The ordered, immutable synthesis result.
//! - `Synthesizer`: The month-by-month walk that produces a series.

mod period;
mod sample;
mod series;
mod synth;

pub use period::*;
pub use sample::*;
pub use series::*;
pub use synth::*;
