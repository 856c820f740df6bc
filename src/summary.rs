//! First-year trend classification and narrative composition.
//!
//! The deriver inspects the first calendar year of a synthesized series (12
//! monthly samples) and classifies its overall direction, then combines that
//! with the subject's year relation to pick short narrative lines. Wealth
//! and love commentary come from fixed text pools with a uniform random
//! pick through the injected source.

use rand::Rng;

use crate::calendar::LunarInfo;
use crate::engine::Series;
use crate::zodiac::{ANCHOR_YEAR, YearRelation, ZodiacCycle, ZodiacSign};

/// Number of samples that make up the first calendar year.
pub const FIRST_YEAR_SAMPLES: usize = 12;

const WEALTH_LINES: [&str; 5] = [
    "A steady wealth star shines: regular income holds firm, and measured investments pay off.",
    "Windfall luck runs strong with the odd pleasant surprise, but guard against impulse spending.",
    "Money matters stay flat: defend rather than attack, and let savings do the work.",
    "Finances swing widely: opportunities abound, yet so do the risks that ride along with them.",
    "A side venture can bring decent returns; mind both the inflow and the outflow.",
];

const LOVE_LINES: [&str; 5] = [
    "Peach blossoms are in full bloom: singles may pair up, and couples grow warmer.",
    "Affection runs calm and steady; a shared trip would deepen the bond.",
    "Minor bumps ahead: talk more, forgive more, and keep small quarrels small.",
    "Your charm is on the rise; social gatherings may introduce someone special.",
    "The focus is on self-improvement; let love take its natural course without forcing it.",
];

/// Overall direction of the first year of a series.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendOutcome {
    /// The twelfth close strictly exceeds the first open.
    Rising,
    /// The first year ends at or below where it started.
    Settling,
    /// The series holds fewer than twelve samples; no reading is possible.
    Insufficient,
}

/// Classifies a series and composes the narrative around it.
#[derive(Debug, Clone, Copy)]
pub struct SummaryDeriver {
    subject: ZodiacSign,
    cycle: ZodiacCycle,
}

impl SummaryDeriver {
    /// Creates a deriver for a subject's sign over the default cycle.
    pub fn new(subject: ZodiacSign) -> Self {
        Self::with_cycle(subject, ZodiacCycle::default())
    }

    /// Creates a deriver over a custom-anchored cycle.
    pub fn with_cycle(subject: ZodiacSign, cycle: ZodiacCycle) -> Self {
        Self { subject, cycle }
    }

    /// Classifies the first calendar year of a series.
    ///
    /// Compares the open of the first sample against the close of the
    /// twelfth. A series shorter than twelve samples reports
    /// [`TrendOutcome::Insufficient`] instead of reading out of range.
    pub fn first_year_trend(&self, series: &Series) -> TrendOutcome {
        let samples = series.samples();
        if samples.len() < FIRST_YEAR_SAMPLES {
            return TrendOutcome::Insufficient;
        }
        let start = samples[0].open();
        let end = samples[FIRST_YEAR_SAMPLES - 1].close();
        if end > start {
            TrendOutcome::Rising
        } else {
            TrendOutcome::Settling
        }
    }

    /// Classifies the subject's relation to a calendar year.
    pub fn relation(&self, year: i32) -> YearRelation {
        self.cycle.relation(self.subject, year)
    }

    /// Composes the full narrative for a series.
    ///
    /// The year relation is read against the span's first year (the anchor
    /// year when the series is empty). Wealth and love lines are uniform
    /// random picks from the fixed pools.
    pub fn compose<R: Rng + ?Sized>(&self, series: &Series, lunar: &LunarInfo, rng: &mut R) -> Narrative {
        let first_year = series
            .samples()
            .first()
            .map(|s| s.period().year())
            .unwrap_or(ANCHOR_YEAR);
        let year_sign = self.cycle.sign_of(first_year);

        let relation_line = match self.relation(first_year) {
            YearRelation::SelfYear => {
                "A cycle-return year under the reigning sign: expect sharper swings, keep a low profile, \
                 and wear a touch of red for luck."
                    .to_string()
            }
            YearRelation::Opposition => {
                "A clash year against the reigning sign: change is in the air, so seek it out yourself \
                 (a move, a trip) rather than waiting for it."
                    .to_string()
            }
            YearRelation::Ordinary => format!(
                "For those born under the {}, the {year_sign} year mixes opportunity with challenge; \
                 a steady outlook rides it out.",
                self.subject
            ),
        };

        let trend_line = match self.first_year_trend(series) {
            TrendOutcome::Rising => "The year trends upward overall: momentum is with you.",
            TrendOutcome::Settling => "The year is a consolidation phase: gather strength and bide your time.",
            TrendOutcome::Insufficient => "Not enough of the year is charted to read a trend.",
        };

        Narrative {
            lunar_line: format!(
                "Your lunar birthday: month {}, day {} (sign: {})",
                lunar.month_label(),
                lunar.day_label(),
                lunar.sign()
            ),
            wealth: pick(rng, &WEALTH_LINES).to_string(),
            love: pick(rng, &LOVE_LINES).to_string(),
            overall: format!(
                "{first_year} is the year of the {year_sign}. {relation_line} {trend_line}"
            ),
        }
    }
}

/// Uniform pick over a fixed pool, mirroring a floor of `r * len`.
fn pick<'p, R: Rng + ?Sized>(rng: &mut R, pool: &'p [&'p str]) -> &'p str {
    let index = (rng.random::<f64>() * pool.len() as f64) as usize;
    pool[index.min(pool.len() - 1)]
}

/// The composed narrative: four independent display lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narrative {
    lunar_line: String,
    wealth: String,
    love: String,
    overall: String,
}

impl Narrative {
    /// Returns the lunar-birthday line.
    pub fn lunar_line(&self) -> &str {
        &self.lunar_line
    }

    /// Returns the wealth commentary.
    pub fn wealth(&self) -> &str {
        &self.wealth
    }

    /// Returns the love commentary.
    pub fn love(&self) -> &str {
        &self.love
    }

    /// Returns the overall year reading.
    pub fn overall(&self) -> &str {
        &self.overall
    }
}

impl std::fmt::Display for Narrative {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.lunar_line)?;
        writeln!(f, "Wealth: {}", self.wealth)?;
        writeln!(f, "Love: {}", self.love)?;
        write!(f, "{}", self.overall)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Period, Sample, Series, Span, Synthesizer};
    use rand::{SeedableRng, rngs::StdRng};

    fn flat_series(months: usize, open0: f64, close11: f64) -> Series {
        let start = Period::new(2026, 2);
        let mut samples = Vec::new();
        let mut carried = open0;
        for (i, period) in Span::new(start, Period::new(2036, 2)).months().take(months).enumerate() {
            let close = if i == FIRST_YEAR_SAMPLES - 1 { close11 } else { carried };
            samples.push(Sample::new(period, carried, close, carried.min(close), carried.max(close)).unwrap());
            carried = close;
        }
        Series::from(samples)
    }

    #[test]
    fn rising_when_twelfth_close_exceeds_first_open() {
        let deriver = SummaryDeriver::new(ZodiacSign::Horse);
        let series = flat_series(12, 50.0, 62.5);
        assert_eq!(deriver.first_year_trend(&series), TrendOutcome::Rising);
    }

    #[test]
    fn settling_on_flat_or_falling_first_year() {
        let deriver = SummaryDeriver::new(ZodiacSign::Horse);
        assert_eq!(deriver.first_year_trend(&flat_series(12, 50.0, 50.0)), TrendOutcome::Settling);
        assert_eq!(deriver.first_year_trend(&flat_series(12, 50.0, 41.0)), TrendOutcome::Settling);
    }

    #[test]
    fn insufficient_series_never_panics() {
        let deriver = SummaryDeriver::new(ZodiacSign::Horse);
        assert_eq!(deriver.first_year_trend(&Series::default()), TrendOutcome::Insufficient);
        assert_eq!(deriver.first_year_trend(&flat_series(11, 50.0, 50.0)), TrendOutcome::Insufficient);
    }

    #[test]
    fn relation_categories() {
        let deriver = SummaryDeriver::new(ZodiacSign::Horse);
        assert_eq!(deriver.relation(2026), YearRelation::SelfYear);
        let deriver = SummaryDeriver::new(ZodiacSign::Rat);
        assert_eq!(deriver.relation(2026), YearRelation::Opposition);
        let deriver = SummaryDeriver::new(ZodiacSign::Dragon);
        assert_eq!(deriver.relation(2026), YearRelation::Ordinary);
    }

    #[test]
    fn narrative_lines_come_from_the_pools() {
        let lunar = LunarInfo::new("6", "15", ZodiacSign::Horse);
        let deriver = SummaryDeriver::new(ZodiacSign::Horse);
        let mut rng = StdRng::seed_from_u64(5);
        let series = Synthesizer::new(ZodiacSign::Horse).synthesize(Span::forecast_window(), &mut rng);

        let narrative = deriver.compose(&series, &lunar, &mut rng);
        assert!(WEALTH_LINES.contains(&narrative.wealth()));
        assert!(LOVE_LINES.contains(&narrative.love()));
        assert!(narrative.overall().starts_with("2026 is the year of the Horse."));
        assert!(narrative.overall().contains("cycle-return year"));
        assert!(narrative.lunar_line().contains("month 6, day 15"));
    }

    #[test]
    fn narrative_tolerates_an_empty_series() {
        let lunar = LunarInfo::new("1", "1", ZodiacSign::Dragon);
        let deriver = SummaryDeriver::new(ZodiacSign::Dragon);
        let mut rng = StdRng::seed_from_u64(6);

        let narrative = deriver.compose(&Series::default(), &lunar, &mut rng);
        assert!(narrative.overall().contains("Not enough of the year is charted"));
        assert!(narrative.overall().contains("year of the Horse"));
    }
}
