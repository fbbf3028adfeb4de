use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Linear value axis with inverted pixel range.
///
/// The domain is `[0, max]`, the range `[height, 0]`: pixel y grows downward
/// while the value grows upward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    max: f64,
    height: f64,
}

impl ValueScale {
    pub fn new(max: f64, height: f64) -> ChartResult<Self> {
        if !max.is_finite() || max <= 0.0 {
            return Err(ChartError::InvalidData(
                "value scale ceiling must be finite and > 0".to_owned(),
            ));
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(ChartError::InvalidData(
                "value scale height must be finite and > 0".to_owned(),
            ));
        }
        Ok(Self { max, height })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (0.0, self.max)
    }

    #[must_use]
    pub fn value_to_pixel(self, value: f64) -> f64 {
        self.height - (value / self.max) * self.height
    }

    /// Projection for estimates that may be absent: a non-finite value
    /// defaults to pixel 0 instead of propagating NaN.
    #[must_use]
    pub fn pixel_for_estimate(self, value: f64) -> f64 {
        if value.is_finite() {
            self.value_to_pixel(value)
        } else {
            0.0
        }
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.height
    }
}
