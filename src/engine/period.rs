use chrono::NaiveDate;

/// One month of the output span, an (year, month) pair.
///
/// Stored as a flat month ordinal so ordering, succession, and span length
/// are plain integer arithmetic. A period always refers to the whole month;
/// enumeration starts on the first day of the month regardless of any
/// day-of-month in the triggering input, to avoid drift from variable month
/// lengths.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    ord: i32,
}

impl Period {
    /// Creates a period from a calendar year and a 1-based month.
    pub fn new(year: i32, month: u32) -> Self {
        debug_assert!((1..=12).contains(&month));
        Self {
            ord: year * 12 + (month as i32 - 1),
        }
    }

    /// Returns the calendar year.
    pub fn year(&self) -> i32 {
        self.ord.div_euclid(12)
    }

    /// Returns the 1-based month.
    pub fn month(&self) -> u32 {
        (self.ord.rem_euclid(12) + 1) as u32
    }

    /// Returns the next month.
    pub fn succ(&self) -> Self {
        Self { ord: self.ord + 1 }
    }

    /// Returns the period label, formatted `"YYYY-MM"`.
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year(), self.month())
    }

    /// Returns the Unix timestamp (seconds) of the first day of the month at
    /// midnight UTC. This is the time coordinate fed to the trend term.
    pub fn timestamp(&self) -> i64 {
        NaiveDate::from_ymd_opt(self.year(), self.month(), 1)
            .expect("first day of a month is a valid calendar date")
            .and_hms_opt(0, 0, 0)
            .expect("midnight is a valid time")
            .and_utc()
            .timestamp()
    }
}

impl From<(i32, u32)> for Period {
    fn from((year, month): (i32, u32)) -> Self {
        Self::new(year, month)
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// An inclusive range of months.
///
/// An inverted span (`end` before `start`) is a documented edge case, not an
/// error: it simply contains no periods.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    start: Period,
    end: Period,
}

impl Span {
    /// Creates a span from a start and an inclusive end period.
    pub fn new(start: Period, end: Period) -> Self {
        Self { start, end }
    }

    /// The fixed ten-year forecast window, 2026-02 through 2036-02 inclusive
    /// (121 monthly periods).
    pub fn forecast_window() -> Self {
        Self::new(Period::new(2026, 2), Period::new(2036, 2))
    }

    /// Returns the first period.
    pub fn start(&self) -> Period {
        self.start
    }

    /// Returns the last period.
    pub fn end(&self) -> Period {
        self.end
    }

    /// Returns the number of periods in the span, zero when inverted.
    pub fn len(&self) -> usize {
        (self.end.ord - self.start.ord + 1).max(0) as usize
    }

    /// Returns true when the span contains no periods.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the periods in strictly increasing chronological order.
    pub fn months(&self) -> Months {
        Months {
            cur: self.start.ord,
            end: self.end.ord,
        }
    }
}

/// Chronological iterator over the periods of a [`Span`].
#[derive(Debug, Clone)]
pub struct Months {
    cur: i32,
    end: i32,
}

impl Iterator for Months {
    type Item = Period;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cur > self.end {
            return None;
        }
        let period = Period { ord: self.cur };
        self.cur += 1;
        Some(period)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = (self.end - self.cur + 1).max(0) as usize;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for Months {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_zero_padded() {
        assert_eq!(Period::new(2026, 2).label(), "2026-02");
        assert_eq!(Period::new(2036, 12).label(), "2036-12");
    }

    #[test]
    fn succession_wraps_years() {
        let dec = Period::new(2026, 12);
        let jan = dec.succ();
        assert_eq!(jan.year(), 2027);
        assert_eq!(jan.month(), 1);
    }

    #[test]
    fn forecast_window_has_121_months() {
        let span = Span::forecast_window();
        assert_eq!(span.len(), 121);
        assert_eq!(span.months().count(), 121);

        let periods = span.months().collect::<Vec<_>>();
        assert_eq!(periods.first(), Some(&Period::new(2026, 2)));
        assert_eq!(periods.last(), Some(&Period::new(2036, 2)));
        for pair in periods.windows(2) {
            assert!(pair[0] < pair[1]);
            assert_eq!(pair[0].succ(), pair[1]);
        }
    }

    #[test]
    fn inverted_span_is_empty() {
        let span = Span::new(Period::new(2030, 1), Period::new(2026, 1));
        assert_eq!(span.len(), 0);
        assert!(span.is_empty());
        assert_eq!(span.months().count(), 0);
    }

    #[test]
    fn single_month_span() {
        let period = Period::new(2026, 7);
        let span = Span::new(period, period);
        assert_eq!(span.len(), 1);
        assert_eq!(span.months().next(), Some(period));
    }

    #[test]
    fn timestamps_increase_with_periods() {
        let a = Period::new(2026, 2).timestamp();
        let b = Period::new(2026, 3).timestamp();
        assert!(a < b);
        // 2026-02-01T00:00:00Z
        assert_eq!(a, 1769904000);
    }
}
