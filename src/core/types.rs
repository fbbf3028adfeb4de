use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Point estimate with low/high uncertainty bounds.
///
/// A `point` of exactly `0.0` is treated as the "nothing predicted" sentinel
/// for onset/peak markers; the ordering invariant is not enforced against it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub point: f64,
    pub low: f64,
    pub high: f64,
}

impl Interval {
    #[must_use]
    pub const fn new(point: f64, low: f64, high: f64) -> Self {
        Self { point, low, high }
    }

    /// Degenerate interval where all three values coincide.
    #[must_use]
    pub const fn degenerate(value: f64) -> Self {
        Self::new(value, value, value)
    }

    #[must_use]
    pub fn is_sentinel(self) -> bool {
        self.point == 0.0
    }

    pub fn validate(self, name: &str) -> ChartResult<()> {
        if !self.point.is_finite() || !self.low.is_finite() || !self.high.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "interval `{name}` values must be finite"
            )));
        }
        if self.low > self.high {
            return Err(ChartError::InvalidData(format!(
                "interval `{name}` must satisfy low <= high"
            )));
        }
        if !self.is_sentinel() && (self.point < self.low || self.point > self.high) {
            return Err(ChartError::InvalidData(format!(
                "interval `{name}` must satisfy low <= point <= high"
            )));
        }
        Ok(())
    }
}

/// One observed weekly sample.
///
/// `week` carries the full two-digit-cycled form (e.g. `201552`); the ordinal
/// x-domain is built from `week % 100`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActualPoint {
    pub week: u32,
    pub data: f64,
}

impl ActualPoint {
    #[must_use]
    pub const fn new(week: u32, data: f64) -> Self {
        Self { week, data }
    }
}

/// One forecast issuance: four forward horizons plus onset/peak estimates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionFrame {
    pub week: u32,
    pub onset_week: Interval,
    pub peak_week: Interval,
    pub peak_percent: Interval,
    pub one_wk: Interval,
    pub two_wk: Interval,
    pub three_wk: Interval,
    pub four_wk: Interval,
}

impl PredictionFrame {
    /// Forward horizons in ascending horizon order.
    #[must_use]
    pub fn horizons(&self) -> [Interval; 4] {
        [self.one_wk, self.two_wk, self.three_wk, self.four_wk]
    }

    fn validate(&self) -> ChartResult<()> {
        self.onset_week.validate("onset_week")?;
        self.peak_week.validate("peak_week")?;
        self.peak_percent.validate("peak_percent")?;
        self.one_wk.validate("one_wk")?;
        self.two_wk.validate("two_wk")?;
        self.three_wk.validate("three_wk")?;
        self.four_wk.validate("four_wk")?;
        Ok(())
    }
}

/// Full chart input: baseline threshold, observed series, forecast issuances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub baseline: f64,
    pub actual: Vec<ActualPoint>,
    pub predictions: Vec<PredictionFrame>,
}

impl Dataset {
    /// Checks the dataset invariants before any geometry is derived:
    /// non-empty ordered series, finite values, well-formed intervals, and an
    /// observed anchor for every forecast issuance week.
    pub fn validate(&self) -> ChartResult<()> {
        if !self.baseline.is_finite() {
            return Err(ChartError::InvalidData(
                "baseline must be finite".to_owned(),
            ));
        }

        if self.actual.is_empty() {
            return Err(ChartError::InvalidData(
                "dataset must contain at least one observed point".to_owned(),
            ));
        }
        for pair in self.actual.windows(2) {
            if pair[1].week <= pair[0].week {
                return Err(ChartError::InvalidData(
                    "observed weeks must be strictly ascending".to_owned(),
                ));
            }
        }
        for point in &self.actual {
            if !point.data.is_finite() || point.data < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "observed value at week {} must be finite and >= 0",
                    point.week
                )));
            }
        }

        if self.predictions.is_empty() {
            return Err(ChartError::InvalidData(
                "dataset must contain at least one prediction frame".to_owned(),
            ));
        }
        for pair in self.predictions.windows(2) {
            if pair[1].week <= pair[0].week {
                return Err(ChartError::InvalidData(
                    "prediction frames must be strictly ascending by issuance week".to_owned(),
                ));
            }
        }
        for frame in &self.predictions {
            frame.validate()?;
            if self.actual_value_at(frame.week).is_none() {
                return Err(ChartError::MissingAnchor { week: frame.week });
            }
        }

        Ok(())
    }

    /// Observed value for the given full issuance week, if present.
    #[must_use]
    pub fn actual_value_at(&self, week: u32) -> Option<f64> {
        self.actual
            .binary_search_by_key(&week, |point| point.week)
            .ok()
            .map(|index| self.actual[index].data)
    }
}
