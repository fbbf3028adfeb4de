use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Bounded integer cursor into the predictions sequence.
///
/// Both step directions saturate at the bounds; saturation is a no-op, never
/// an error. The pointer always starts at the most recent issuance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionPointer {
    index: usize,
    len: usize,
}

impl PredictionPointer {
    pub fn latest(len: usize) -> ChartResult<Self> {
        if len == 0 {
            return Err(ChartError::InvalidData(
                "prediction pointer requires at least one frame".to_owned(),
            ));
        }
        Ok(Self {
            index: len - 1,
            len,
        })
    }

    /// Advances towards the latest issuance. Returns whether the pointer moved.
    pub fn step_forward(&mut self) -> bool {
        if self.index + 1 < self.len {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Retreats towards the earliest issuance. Returns whether the pointer moved.
    pub fn step_backward(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    #[must_use]
    pub fn frame_count(self) -> usize {
        self.len
    }

    #[must_use]
    pub fn at_latest(self) -> bool {
        self.index == self.len - 1
    }

    #[must_use]
    pub fn at_earliest(self) -> bool {
        self.index == 0
    }
}
