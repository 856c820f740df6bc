//! The fixed 12-sign zodiac cycle.
//!
//! Every calendar year carries one of 12 signs in a repeating order. The
//! cycle is anchored on a reference year whose sign is known (2026 is a Horse
//! year); every other year's sign follows from its offset modulo 12.

/// Number of signs in the cycle.
pub const CYCLE_LEN: i32 = 12;

/// The anchor year whose sign is fixed by the almanac.
pub const ANCHOR_YEAR: i32 = 2026;

/// The sign of the anchor year.
pub const ANCHOR_SIGN: ZodiacSign = ZodiacSign::Horse;

/// One of the 12 zodiac signs, in cyclic order.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZodiacSign {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

/// All signs in cyclic order, used for index arithmetic.
const ORDER: [ZodiacSign; 12] = [
    ZodiacSign::Rat,
    ZodiacSign::Ox,
    ZodiacSign::Tiger,
    ZodiacSign::Rabbit,
    ZodiacSign::Dragon,
    ZodiacSign::Snake,
    ZodiacSign::Horse,
    ZodiacSign::Goat,
    ZodiacSign::Monkey,
    ZodiacSign::Rooster,
    ZodiacSign::Dog,
    ZodiacSign::Pig,
];

impl std::fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Rat => "Rat",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Goat => "Goat",
            Self::Monkey => "Monkey",
            Self::Rooster => "Rooster",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
        };
        write!(f, "{name}")
    }
}

impl ZodiacSign {
    /// Returns the sign's position in the cyclic order (0-11).
    pub fn index(&self) -> i32 {
        ORDER.iter().position(|s| s == self).unwrap_or_default() as i32
    }

    /// Returns the sign at a cyclic position. The index is taken modulo 12,
    /// so any integer (negative included) maps to a sign.
    pub fn from_index(index: i32) -> Self {
        ORDER[index.rem_euclid(CYCLE_LEN) as usize]
    }

    /// Returns the minimum number of forward/backward steps between two
    /// signs in the cycle, always in `[0, 6]`.
    pub fn cyclic_distance(self, other: Self) -> i32 {
        let diff = (self.index() - other.index()).rem_euclid(CYCLE_LEN);
        diff.min(CYCLE_LEN - diff)
    }
}

/// How a subject's sign relates to a given year's sign.
///
/// The two traditionally significant years in a 12-year cycle are the
/// recurrence year and its exact opposite; everything else is ordinary.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearRelation {
    /// The year's sign matches the subject's own sign (cycle-return year).
    SelfYear,
    /// The year's sign sits exactly 6 positions away (cycle-opposition year).
    Opposition,
    /// Any other distance (1-5).
    Ordinary,
}

/// Maps calendar years to signs relative to a known anchor year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZodiacCycle {
    anchor_year: i32,
    anchor_sign: ZodiacSign,
}

impl Default for ZodiacCycle {
    fn default() -> Self {
        Self {
            anchor_year: ANCHOR_YEAR,
            anchor_sign: ANCHOR_SIGN,
        }
    }
}

impl ZodiacCycle {
    /// Creates a cycle anchored on a year with a known sign.
    pub fn new(anchor_year: i32, anchor_sign: ZodiacSign) -> Self {
        Self {
            anchor_year,
            anchor_sign,
        }
    }

    /// Returns the sign of any calendar year.
    ///
    /// Total over all years: offsets before the anchor wrap backwards
    /// through the cycle.
    pub fn sign_of(&self, year: i32) -> ZodiacSign {
        ZodiacSign::from_index(self.anchor_sign.index() + (year - self.anchor_year))
    }

    /// Classifies how `subject`'s sign relates to `year`'s sign.
    pub fn relation(&self, subject: ZodiacSign, year: i32) -> YearRelation {
        let year_sign = self.sign_of(year);
        if year_sign == subject {
            YearRelation::SelfYear
        } else if subject.cyclic_distance(year_sign) == CYCLE_LEN / 2 {
            YearRelation::Opposition
        } else {
            YearRelation::Ordinary
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_year_is_horse() {
        let cycle = ZodiacCycle::default();
        assert_eq!(cycle.sign_of(2026), ZodiacSign::Horse);
    }

    #[test]
    fn twelve_year_periodicity() {
        let cycle = ZodiacCycle::default();
        assert_eq!(cycle.sign_of(2038), cycle.sign_of(2026));
        assert_eq!(cycle.sign_of(2014), cycle.sign_of(2026));
    }

    #[test]
    fn signs_walk_the_cycle() {
        let cycle = ZodiacCycle::default();
        assert_eq!(cycle.sign_of(2027), ZodiacSign::Goat);
        assert_eq!(cycle.sign_of(2031), ZodiacSign::Pig);
        assert_eq!(cycle.sign_of(2032), ZodiacSign::Rat);
        assert_eq!(cycle.sign_of(2025), ZodiacSign::Snake);
    }

    #[test]
    fn years_before_the_anchor() {
        let cycle = ZodiacCycle::default();
        assert_eq!(cycle.sign_of(1990), ZodiacSign::Horse);
        assert_eq!(cycle.sign_of(1900), ZodiacSign::Rat);
    }

    #[test]
    fn cyclic_distance_bounds() {
        for a in 0..12 {
            for b in 0..12 {
                let d = ZodiacSign::from_index(a).cyclic_distance(ZodiacSign::from_index(b));
                assert!((0..=6).contains(&d));
            }
        }
        assert_eq!(ZodiacSign::Rat.cyclic_distance(ZodiacSign::Horse), 6);
        assert_eq!(ZodiacSign::Rat.cyclic_distance(ZodiacSign::Pig), 1);
        assert_eq!(ZodiacSign::Horse.cyclic_distance(ZodiacSign::Horse), 0);
    }

    #[test]
    fn relation_three_categories() {
        let cycle = ZodiacCycle::default();
        assert_eq!(cycle.relation(ZodiacSign::Horse, 2026), YearRelation::SelfYear);
        assert_eq!(cycle.relation(ZodiacSign::Rat, 2026), YearRelation::Opposition);
        assert_eq!(cycle.relation(ZodiacSign::Rooster, 2026), YearRelation::Ordinary);
    }
}
