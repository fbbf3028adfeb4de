use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::markers::SeriesPoint;
use crate::error::ChartResult;

/// Enter/update/exit sets for one keyed point collection, in series order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointDelta {
    pub entered: Vec<SeriesPoint>,
    pub updated: Vec<SeriesPoint>,
    pub exited: Vec<u32>,
}

impl PointDelta {
    pub fn validate(&self) -> ChartResult<()> {
        for point in self.entered.iter().chain(&self.updated) {
            point.validate()?;
        }
        Ok(())
    }
}

/// Identity-keyed reconciliation for dynamically sized point collections.
///
/// Maintains the mapping from stable key (week) to last-rendered geometry.
/// Each refresh computes the new key set, reports keys that vanished as
/// exited, new keys as entered, and surviving keys as geometry updates, so
/// continuing points keep their rendered identity across dataset reloads.
#[derive(Debug, Default)]
pub struct PointReconciler {
    current: IndexMap<u32, SeriesPoint>,
}

impl PointReconciler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reconcile(&mut self, next: &[SeriesPoint]) -> PointDelta {
        let mut entered = Vec::new();
        let mut updated = Vec::new();
        let mut next_map = IndexMap::with_capacity(next.len());

        for point in next {
            if self.current.contains_key(&point.week) {
                updated.push(*point);
            } else {
                entered.push(*point);
            }
            next_map.insert(point.week, *point);
        }

        let exited = self
            .current
            .keys()
            .filter(|key| !next_map.contains_key(*key))
            .copied()
            .collect();

        self.current = next_map;
        PointDelta {
            entered,
            updated,
            exited,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.current.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }
}
