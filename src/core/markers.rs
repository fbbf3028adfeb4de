use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::scales::ChartScales;
use crate::core::types::{Dataset, PredictionFrame};
use crate::error::{ChartError, ChartResult};

/// Pixel metrics for marker shapes. Defaults match the reference chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerLayoutConfig {
    pub mark_size_px: f64,
    pub onset_row_offset_px: f64,
    pub onset_stopper_length_px: f64,
    pub peak_stopper_half_px: f64,
    pub actual_point_radius_px: f64,
    pub prediction_point_radius_px: f64,
}

impl Default for MarkerLayoutConfig {
    fn default() -> Self {
        Self {
            mark_size_px: 8.0,
            onset_row_offset_px: 15.0,
            onset_stopper_length_px: 10.0,
            peak_stopper_half_px: 5.0,
            actual_point_radius_px: 2.5,
            prediction_point_radius_px: 3.0,
        }
    }
}

impl MarkerLayoutConfig {
    pub fn validate(self) -> ChartResult<Self> {
        for (value, name) in [
            (self.mark_size_px, "mark_size_px"),
            (self.onset_row_offset_px, "onset_row_offset_px"),
            (self.onset_stopper_length_px, "onset_stopper_length_px"),
            (self.peak_stopper_half_px, "peak_stopper_half_px"),
            (self.actual_point_radius_px, "actual_point_radius_px"),
            (self.prediction_point_radius_px, "prediction_point_radius_px"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "marker layout `{name}` must be finite and > 0"
                )));
            }
        }
        Ok(self)
    }
}

/// One line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Segment {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    #[must_use]
    pub const fn horizontal(x1: f64, x2: f64, y: f64) -> Self {
        Self::new(x1, y, x2, y)
    }

    #[must_use]
    pub const fn vertical(x: f64, y1: f64, y2: f64) -> Self {
        Self::new(x, y1, x, y2)
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "segment coordinates must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Square central mark of the onset/peak overlays, addressed by its center.
///
/// `hover_emphasis` asks the rendering substrate to thicken the mark while
/// hovered; the emphasis itself is substrate behavior, not engine state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CentralMark {
    pub x: f64,
    pub y: f64,
    pub size_px: f64,
    pub hover_emphasis: bool,
}

impl CentralMark {
    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "mark coordinates must be finite".to_owned(),
            ));
        }
        if !self.size_px.is_finite() || self.size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "mark size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Horizontal baseline threshold line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaselineMarker {
    pub y: f64,
    pub x_start: f64,
    pub x_end: f64,
}

impl BaselineMarker {
    pub fn validate(self) -> ChartResult<()> {
        if !self.y.is_finite() || !self.x_start.is_finite() || !self.x_end.is_finite() {
            return Err(ChartError::InvalidData(
                "baseline coordinates must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

/// "Now" rectangle from the left edge up to the current issuance week.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeCursor {
    pub width: f64,
    pub height: f64,
}

impl TimeCursor {
    pub fn validate(self) -> ChartResult<()> {
        if !self.width.is_finite() || self.width < 0.0 {
            return Err(ChartError::InvalidData(
                "time cursor width must be finite and >= 0".to_owned(),
            ));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(ChartError::InvalidData(
                "time cursor height must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Predicted onset overlay: central mark, range line, two stopper ticks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OnsetMarker {
    pub mark: CentralMark,
    pub range: Segment,
    pub low_stopper: Segment,
    pub high_stopper: Segment,
}

impl OnsetMarker {
    pub fn validate(self) -> ChartResult<()> {
        self.mark.validate()?;
        self.range.validate()?;
        self.low_stopper.validate()?;
        self.high_stopper.validate()
    }
}

/// Predicted peak overlay: central mark, two crossed range lines, four
/// stopper ticks at the interval ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeakMarker {
    pub mark: CentralMark,
    pub week_range: Segment,
    pub percent_range: Segment,
    pub week_low_stopper: Segment,
    pub week_high_stopper: Segment,
    pub percent_low_stopper: Segment,
    pub percent_high_stopper: Segment,
}

impl PeakMarker {
    pub fn validate(self) -> ChartResult<()> {
        self.mark.validate()?;
        self.week_range.validate()?;
        self.percent_range.validate()?;
        self.week_low_stopper.validate()?;
        self.week_high_stopper.validate()?;
        self.percent_low_stopper.validate()?;
        self.percent_high_stopper.validate()
    }
}

/// One rendered series vertex with its stable identity key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub week: u32,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

impl SeriesPoint {
    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "series point coordinates must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "series point radius must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathVertex {
    pub x: f64,
    pub y: f64,
}

impl PathVertex {
    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "path vertex must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

/// One column of the uncertainty band, low/high in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandVertex {
    pub x: f64,
    pub low_y: f64,
    pub high_y: f64,
}

impl BandVertex {
    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.low_y.is_finite() || !self.high_y.is_finite() {
            return Err(ChartError::InvalidData(
                "band vertex must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Observed series geometry: polyline plus one keyed point per week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActualSeries {
    pub path: Vec<PathVertex>,
    pub points: Vec<SeriesPoint>,
}

impl ActualSeries {
    pub fn validate(&self) -> ChartResult<()> {
        for vertex in &self.path {
            vertex.validate()?;
        }
        for point in &self.points {
            point.validate()?;
        }
        Ok(())
    }
}

/// Forecast series geometry for the current frame: anchor plus up to four
/// horizon points, the connecting path, and the low/high band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionSeries {
    pub points: SmallVec<[SeriesPoint; 5]>,
    pub path: SmallVec<[PathVertex; 5]>,
    pub band: SmallVec<[BandVertex; 5]>,
}

impl PredictionSeries {
    pub fn validate(&self) -> ChartResult<()> {
        if self.points.len() > 5 {
            return Err(ChartError::InvalidData(
                "prediction series cannot exceed 5 points".to_owned(),
            ));
        }
        for point in &self.points {
            point.validate()?;
        }
        for vertex in &self.path {
            vertex.validate()?;
        }
        for vertex in &self.band {
            vertex.validate()?;
        }
        Ok(())
    }
}

/// Markers that depend only on the dataset, rebuilt once per load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticMarkers {
    pub baseline: BaselineMarker,
    pub actual: ActualSeries,
}

impl StaticMarkers {
    #[must_use]
    pub fn build(dataset: &Dataset, scales: &ChartScales, layout: &MarkerLayoutConfig) -> Self {
        let baseline = BaselineMarker {
            y: scales.value_to_pixel(dataset.baseline),
            x_start: 0.0,
            x_end: scales.week_scale().width(),
        };

        let points: Vec<SeriesPoint> = dataset
            .actual
            .iter()
            .map(|sample| SeriesPoint {
                week: sample.week,
                x: scales.week_pixel_or_zero(sample.week),
                y: scales.value_to_pixel(sample.data),
                radius: layout.actual_point_radius_px,
            })
            .collect();
        let path = points
            .iter()
            .map(|point| PathVertex {
                x: point.x,
                y: point.y,
            })
            .collect();

        Self {
            baseline,
            actual: ActualSeries { path, points },
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.baseline.validate()?;
        self.actual.validate()
    }
}

/// Markers that follow the prediction pointer, rebuilt on every step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameMarkers {
    pub time_cursor: TimeCursor,
    pub onset: OnsetMarker,
    pub peak: PeakMarker,
    pub prediction: PredictionSeries,
}

impl FrameMarkers {
    pub fn build(
        dataset: &Dataset,
        scales: &ChartScales,
        frame_index: usize,
        layout: &MarkerLayoutConfig,
    ) -> ChartResult<Self> {
        let frame = dataset.predictions.get(frame_index).ok_or_else(|| {
            ChartError::InvalidData(format!(
                "prediction pointer {frame_index} out of range (frames: {})",
                dataset.predictions.len()
            ))
        })?;

        Ok(Self {
            time_cursor: time_cursor(frame, scales),
            onset: onset_marker(frame, scales, layout),
            peak: peak_marker(frame, scales, layout),
            prediction: prediction_series(frame, dataset, scales, layout)?,
        })
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.time_cursor.validate()?;
        self.onset.validate()?;
        self.peak.validate()?;
        self.prediction.validate()
    }
}

fn time_cursor(frame: &PredictionFrame, scales: &ChartScales) -> TimeCursor {
    TimeCursor {
        width: scales.week_pixel_or_zero(frame.week),
        height: scales.value_scale().height(),
    }
}

fn onset_marker(
    frame: &PredictionFrame,
    scales: &ChartScales,
    layout: &MarkerLayoutConfig,
) -> OnsetMarker {
    let onset = frame.onset_week;
    let row_y = scales.value_scale().height() - layout.onset_row_offset_px;
    let half = layout.onset_stopper_length_px * 0.5;

    let mark_x = scales.week_estimate_pixel_or_zero(onset.point);
    let low_x = scales.week_estimate_pixel_or_zero(onset.low);
    let high_x = scales.week_estimate_pixel_or_zero(onset.high);

    OnsetMarker {
        mark: CentralMark {
            x: mark_x,
            y: row_y,
            size_px: layout.mark_size_px,
            hover_emphasis: true,
        },
        range: Segment::horizontal(low_x, high_x, row_y),
        low_stopper: Segment::vertical(low_x, row_y - half, row_y + half),
        high_stopper: Segment::vertical(high_x, row_y - half, row_y + half),
    }
}

fn peak_marker(
    frame: &PredictionFrame,
    scales: &ChartScales,
    layout: &MarkerLayoutConfig,
) -> PeakMarker {
    let peak_week = frame.peak_week;
    let peak_percent = frame.peak_percent;
    let half = layout.peak_stopper_half_px;

    // Zero-fallback applies to each axis independently.
    let week_x = scales.week_estimate_pixel_or_zero(peak_week.point);
    let percent_y = scales.value_estimate_pixel_or_zero(peak_percent.point);

    let week_low_x = scales.week_estimate_pixel_or_zero(peak_week.low);
    let week_high_x = scales.week_estimate_pixel_or_zero(peak_week.high);
    let percent_low_y = scales.value_to_pixel(peak_percent.low);
    let percent_high_y = scales.value_to_pixel(peak_percent.high);

    PeakMarker {
        mark: CentralMark {
            x: week_x,
            y: percent_y,
            size_px: layout.mark_size_px,
            hover_emphasis: true,
        },
        week_range: Segment::horizontal(week_low_x, week_high_x, percent_y),
        percent_range: Segment::vertical(week_x, percent_low_y, percent_high_y),
        week_low_stopper: Segment::vertical(week_low_x, percent_y - half, percent_y + half),
        week_high_stopper: Segment::vertical(week_high_x, percent_y - half, percent_y + half),
        percent_low_stopper: Segment::horizontal(week_x - half, week_x + half, percent_low_y),
        percent_high_stopper: Segment::horizontal(week_x - half, week_x + half, percent_high_y),
    }
}

fn prediction_series(
    frame: &PredictionFrame,
    dataset: &Dataset,
    scales: &ChartScales,
    layout: &MarkerLayoutConfig,
) -> ChartResult<PredictionSeries> {
    let anchor_value = dataset
        .actual_value_at(frame.week)
        .ok_or(ChartError::MissingAnchor { week: frame.week })?;

    let mut points: SmallVec<[SeriesPoint; 5]> = SmallVec::new();
    let mut band: SmallVec<[BandVertex; 5]> = SmallVec::new();

    // Anchor point: the observed value at issuance time, degenerate band.
    let anchor_x = scales.week_pixel_or_zero(frame.week);
    let anchor_y = scales.value_to_pixel(anchor_value);
    points.push(SeriesPoint {
        week: frame.week % 100,
        x: anchor_x,
        y: anchor_y,
        radius: layout.prediction_point_radius_px,
    });
    band.push(BandVertex {
        x: anchor_x,
        low_y: anchor_y,
        high_y: anchor_y,
    });

    let forward_weeks = scales.week_scale().next_weeks(frame.week, 4);
    for (week, horizon) in forward_weeks.into_iter().zip(frame.horizons()) {
        let x = scales.week_pixel_or_zero(week);
        points.push(SeriesPoint {
            week,
            x,
            y: scales.value_to_pixel(horizon.point),
            radius: layout.prediction_point_radius_px,
        });
        band.push(BandVertex {
            x,
            low_y: scales.value_to_pixel(horizon.low),
            high_y: scales.value_to_pixel(horizon.high),
        });
    }

    let path = points
        .iter()
        .map(|point| PathVertex {
            x: point.x,
            y: point.y,
        })
        .collect();

    Ok(PredictionSeries { points, path, band })
}
