use crate::engine::Sample;

#[cfg(feature = "serde")]
use crate::errors::Result;

/// An ordered, immutable sequence of samples, one per period.
///
/// A series is created once per generation request and owned exclusively by
/// the caller; it is never shared or mutated in the background. It may be
/// empty when the requested span contains no periods.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Series {
    samples: Vec<Sample>,
}

impl From<Vec<Sample>> for Series {
    fn from(samples: Vec<Sample>) -> Self {
        Self { samples }
    }
}

impl Series {
    /// Returns the samples in chronological order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Returns the parallel sequence of period labels, `"YYYY-MM"` each.
    pub fn labels(&self) -> impl Iterator<Item = String> + '_ {
        self.samples.iter().map(|s| s.period().label())
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true when the series holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// The structure handed to the rendering boundary: an ordered sequence of
/// period labels and the parallel sequence of `[open, close, low, high]`
/// rows, one decimal digit, values within `[0, 100]`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    labels: Vec<String>,
    values: Vec<[f64; 4]>,
}

impl From<&Series> for ChartData {
    fn from(series: &Series) -> Self {
        Self {
            labels: series.labels().collect(),
            values: series.samples().iter().map(|s| s.values()).collect(),
        }
    }
}

impl ChartData {
    /// Returns the period labels.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the `[open, close, low, high]` rows.
    pub fn values(&self) -> &[[f64; 4]] {
        &self.values
    }

    /// Serializes the contract to a JSON string.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Into::into)
    }
}
