use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::types::{Dataset, Viewport};
use crate::core::value_scale::ValueScale;
use crate::core::week_scale::WeekScale;
use crate::error::{ChartError, ChartResult};

/// Display ceiling headroom above the largest displayed value.
const CEILING_HEADROOM: f64 = 1.1;

/// Coordinate state derived from one dataset: the ordinal week axis, the
/// linear value axis, and the viewport they project into.
///
/// Recomputed in full on every dataset load and never partially mutated, so
/// stepping the prediction pointer never rescales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartScales {
    week: WeekScale,
    value: ValueScale,
    viewport: Viewport,
    y_max: f64,
}

impl ChartScales {
    /// Fits both axes from the dataset.
    ///
    /// The value ceiling is 10% above the largest value appearing anywhere in
    /// the observed data or in any forecast interval's high bound, across the
    /// entire predictions sequence, not just the current frame.
    pub fn fit(dataset: &Dataset, viewport: Viewport) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let week = WeekScale::fit(&dataset.actual, f64::from(viewport.width))?;
        let y_max = display_ceiling(dataset);
        let value = ValueScale::new(y_max, f64::from(viewport.height))?;

        Ok(Self {
            week,
            value,
            viewport,
            y_max,
        })
    }

    /// Pixel x for a full or cycled week number; `None` outside the domain.
    #[must_use]
    pub fn week_to_pixel(&self, week: u32) -> Option<f64> {
        self.week.position(week)
    }

    /// Pixel x for a week under the documented zero-fallback policy:
    /// sentinel or unknown keys resolve to 0 instead of an undefined pixel.
    #[must_use]
    pub fn week_pixel_or_zero(&self, week: u32) -> f64 {
        self.week.position(week).unwrap_or(0.0)
    }

    /// Zero-fallback projection for float week estimates (onset/peak weeks).
    #[must_use]
    pub fn week_estimate_pixel_or_zero(&self, week: f64) -> f64 {
        self.week.position_for_estimate(week).unwrap_or(0.0)
    }

    #[must_use]
    pub fn value_to_pixel(&self, value: f64) -> f64 {
        self.value.value_to_pixel(value)
    }

    /// Zero-fallback projection for value estimates (peak percent).
    #[must_use]
    pub fn value_estimate_pixel_or_zero(&self, value: f64) -> f64 {
        self.value.pixel_for_estimate(value)
    }

    #[must_use]
    pub fn week_scale(&self) -> &WeekScale {
        &self.week
    }

    #[must_use]
    pub fn value_scale(&self) -> ValueScale {
        self.value
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }
}

fn display_ceiling(dataset: &Dataset) -> f64 {
    let actual_max = dataset
        .actual
        .iter()
        .map(|point| OrderedFloat(point.data))
        .max()
        .map_or(0.0, |value| value.0);

    let prediction_max = dataset
        .predictions
        .iter()
        .flat_map(|frame| {
            frame
                .horizons()
                .into_iter()
                .chain([frame.peak_percent])
                .map(|interval| OrderedFloat(interval.high))
        })
        .max()
        .map_or(0.0, |value| value.0);

    CEILING_HEADROOM * actual_max.max(prediction_max)
}
