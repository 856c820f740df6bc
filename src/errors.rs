/// Convenience alias over the crate error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by date validation, sample construction, and rendering.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The birth year is outside the accepted policy window.
    #[error("Year must be between 1900 and 2026 (got: {0})")]
    YearOutOfRange(i32),

    /// The birth month is not a calendar month.
    #[error("Month must be between 1 and 12 (got: {0})")]
    MonthOutOfRange(u32),

    /// The day exceeds the month's actual length, leap years included.
    #[error("{year}-{month:02} has only {max_days} days (got: {day})")]
    DayOutOfRange {
        /// Gregorian year.
        year: i32,
        /// Gregorian month (1-12).
        month: u32,
        /// The rejected day-of-month.
        day: u32,
        /// Actual length of that month.
        max_days: u32,
    },

    /// A sample value falls outside the fixed `[0, 100]` scale.
    #[error("Sample values must lie within [0, 100] (got: {0})")]
    SampleOutOfScale(f64),

    /// The wick extremes do not enclose the body.
    #[error("Sample requires low <= min(open, close) and high >= max(open, close)")]
    SampleWickOrder,

    /// The series holds no samples. Rendering requires at least one sample.
    #[error("Series is empty: rendering requires at least one sample")]
    SeriesEmpty,

    /// I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Chart backend error occurred.
    #[cfg(feature = "draws")]
    #[error("Plotters error: {0}")]
    Plotters(String),

    /// JSON serialization/deserialization error occurred.
    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Generic error message.
    #[error("{0}")]
    Msg(String),
}
