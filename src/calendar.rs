//! Birth-date validation and the lunar almanac seam.
//!
//! Validation is a pure, standalone utility over the Gregorian calendar. The
//! lunar side (localized month/day labels and the birth-year sign) is an
//! external collaborator contract, modeled as the [`Almanac`] trait; the
//! crate never reimplements a real lunar conversion.

use crate::errors::{Error, Result};
use crate::zodiac::{ZodiacCycle, ZodiacSign};

/// First year of the accepted policy window.
pub const YEAR_MIN: i32 = 1900;

/// Last year of the accepted policy window.
pub const YEAR_MAX: i32 = 2026;

/// Month lengths of a common year.
const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns true for Gregorian leap years: divisible by 4 but not by 100,
/// or divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the actual length of a month, or `None` for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let days = *DAYS_IN_MONTH.get(month.checked_sub(1)? as usize)?;
    if month == 2 && is_leap_year(year) {
        return Some(days + 1);
    }
    Some(days)
}

/// Validates a Gregorian date against the policy window.
///
/// The year must fall in `[1900, 2026]`, the month in `[1, 12]`, and the day
/// within the month's actual length, February 29 included on leap years.
pub fn validate_date(year: i32, month: u32, day: u32) -> Result<()> {
    if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
        return Err(Error::YearOutOfRange(year));
    }
    let max_days = days_in_month(year, month).ok_or(Error::MonthOutOfRange(month))?;
    if day < 1 || day > max_days {
        return Err(Error::DayOutOfRange {
            year,
            month,
            day,
            max_days,
        });
    }
    Ok(())
}

/// A validated Gregorian birth date.
///
/// Constructed only through [`BirthDate::new`] (or parsing), so holding one
/// proves the date passed the policy validation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthDate {
    year: i32,
    month: u32,
    day: u32,
}

impl BirthDate {
    /// Validates and wraps a Gregorian date.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        validate_date(year, month, day)?;
        Ok(Self { year, month, day })
    }

    /// Returns the Gregorian year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the 1-based month.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the day of month.
    pub fn day(&self) -> u32 {
        self.day
    }
}

impl std::str::FromStr for BirthDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.splitn(3, '-');
        let parse = |part: Option<&str>| {
            part.and_then(|p| p.parse::<i32>().ok())
                .ok_or_else(|| Error::Msg(format!("Invalid date format (expected YYYY-MM-DD): {s}")))
        };
        let year = parse(parts.next())?;
        let month = parse(parts.next())? as u32;
        let day = parse(parts.next())? as u32;
        Self::new(year, month, day)
    }
}

impl std::fmt::Display for BirthDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Lunar facts about a birth date, as returned by the almanac collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LunarInfo {
    month_label: String,
    day_label: String,
    sign: ZodiacSign,
}

impl LunarInfo {
    /// Creates the lookup result an almanac hands back.
    pub fn new(month_label: impl Into<String>, day_label: impl Into<String>, sign: ZodiacSign) -> Self {
        Self {
            month_label: month_label.into(),
            day_label: day_label.into(),
            sign,
        }
    }

    /// Returns the localized lunar month label.
    pub fn month_label(&self) -> &str {
        &self.month_label
    }

    /// Returns the localized lunar day label.
    pub fn day_label(&self) -> &str {
        &self.day_label
    }

    /// Returns the zodiac sign of the birth date's lunar year.
    pub fn sign(&self) -> ZodiacSign {
        self.sign
    }
}

/// The consumed collaborator contract: given a validated date, return lunar
/// month/day labels and the zodiac sign of the date's lunar year.
///
/// The core treats this as an opaque lookup.
pub trait Almanac {
    /// Looks up the lunar facts for a validated birth date.
    fn lookup(&self, date: &BirthDate) -> LunarInfo;
}

/// Coarse stand-in almanac keyed on the Gregorian year.
///
/// Real lunar conversion belongs to an external collaborator; this default
/// labels months and days with their Gregorian ordinals and derives the sign
/// from the Gregorian year through [`ZodiacCycle`]. Dates in January or early
/// February may be attributed to the wrong lunar year.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolarAlmanac {
    cycle: ZodiacCycle,
}

impl Almanac for SolarAlmanac {
    fn lookup(&self, date: &BirthDate) -> LunarInfo {
        LunarInfo::new(
            date.month().to_string(),
            date.day().to_string(),
            self.cycle.sign_of(date.year()),
        )
    }
}
