//! Per-period volatility derived from zodiac-cycle alignment.

use crate::zodiac::{YearRelation, ZodiacCycle, ZodiacSign};

/// Magnitude of an ordinary year, on the 0-100 value scale.
pub const LOW_MAGNITUDE: f64 = 5.0;

/// Magnitude of a self or opposition year, on the 0-100 value scale.
pub const HIGH_MAGNITUDE: f64 = 15.0;

/// Two-level volatility of a period.
///
/// This is a deliberate step function of the year relation, never a
/// continuous function of cyclic distance.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Volatility {
    /// Baseline volatility of an ordinary year.
    Low,
    /// Elevated volatility of a cycle-return or cycle-opposition year.
    High,
}

impl Volatility {
    /// Returns the magnitude on the 0-100 value scale.
    pub fn magnitude(&self) -> f64 {
        match self {
            Self::Low => LOW_MAGNITUDE,
            Self::High => HIGH_MAGNITUDE,
        }
    }
}

impl From<YearRelation> for Volatility {
    fn from(relation: YearRelation) -> Self {
        match relation {
            YearRelation::SelfYear | YearRelation::Opposition => Self::High,
            YearRelation::Ordinary => Self::Low,
        }
    }
}

/// Derives a volatility level for any year, given a subject's sign.
#[derive(Debug, Clone, Copy)]
pub struct VolatilityPolicy {
    subject: ZodiacSign,
    cycle: ZodiacCycle,
}

impl VolatilityPolicy {
    /// Creates a policy for a subject's sign over the default cycle.
    pub fn new(subject: ZodiacSign) -> Self {
        Self::with_cycle(subject, ZodiacCycle::default())
    }

    /// Creates a policy over a custom-anchored cycle.
    pub fn with_cycle(subject: ZodiacSign, cycle: ZodiacCycle) -> Self {
        Self { subject, cycle }
    }

    /// Returns the subject's sign.
    pub fn subject(&self) -> ZodiacSign {
        self.subject
    }

    /// Returns the volatility level of a calendar year.
    pub fn for_year(&self, year: i32) -> Volatility {
        self.cycle.relation(self.subject, year).into()
    }
}
