use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::core::types::ActualPoint;
use crate::error::{ChartError, ChartResult};

/// Ordinal week axis.
///
/// The domain is the distinct, ascending-sorted set of `week % 100` values
/// across the observed series. Keys map to evenly spaced pixel positions over
/// `[0, width]`; a single-key domain sits at the range midpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekScale {
    domain: IndexSet<u32>,
    width: f64,
}

impl WeekScale {
    pub fn fit(actual: &[ActualPoint], width: f64) -> ChartResult<Self> {
        if actual.is_empty() {
            return Err(ChartError::InvalidData(
                "week scale cannot be built from an empty observed series".to_owned(),
            ));
        }
        if !width.is_finite() || width <= 0.0 {
            return Err(ChartError::InvalidData(
                "week scale width must be finite and > 0".to_owned(),
            ));
        }

        let mut weeks: Vec<u32> = actual.iter().map(|point| point.week % 100).collect();
        weeks.sort_unstable();
        weeks.dedup();

        Ok(Self {
            domain: weeks.into_iter().collect(),
            width,
        })
    }

    /// Pixel position for a full or cycled week number, `None` for keys
    /// outside the domain.
    #[must_use]
    pub fn position(&self, week: u32) -> Option<f64> {
        let index = self.domain.get_index_of(&(week % 100))?;
        Some(self.spaced(index))
    }

    /// Pixel position for a float week estimate.
    ///
    /// Resolves only non-negative whole numbers present in the domain; the
    /// `0.0` sentinel and fractional estimates yield `None`.
    #[must_use]
    pub fn position_for_estimate(&self, week: f64) -> Option<f64> {
        if !week.is_finite() || week <= 0.0 || week.fract() != 0.0 || week > f64::from(u32::MAX) {
            return None;
        }
        self.position(week as u32)
    }

    /// Next `count` domain weeks strictly after the given week, in domain
    /// order. Truncates at the end of the domain, never wraps.
    #[must_use]
    pub fn next_weeks(&self, week: u32, count: usize) -> Vec<u32> {
        let Some(index) = self.domain.get_index_of(&(week % 100)) else {
            return Vec::new();
        };
        (index + 1..self.domain.len())
            .take(count)
            .filter_map(|i| self.domain.get_index(i).copied())
            .collect()
    }

    /// Every second domain week, for axis tick cadence.
    #[must_use]
    pub fn tick_weeks(&self) -> Vec<u32> {
        self.domain.iter().copied().step_by(2).collect()
    }

    #[must_use]
    pub fn domain(&self) -> impl Iterator<Item = u32> + '_ {
        self.domain.iter().copied()
    }

    #[must_use]
    pub fn domain_len(&self) -> usize {
        self.domain.len()
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    fn spaced(&self, index: usize) -> f64 {
        let count = self.domain.len();
        if count == 1 {
            return self.width * 0.5;
        }
        index as f64 * self.width / (count - 1) as f64
    }
}
