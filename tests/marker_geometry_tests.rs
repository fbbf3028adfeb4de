use approx::assert_relative_eq;
use epicast_rs::core::markers::{FrameMarkers, MarkerLayoutConfig, StaticMarkers};
use epicast_rs::core::{ActualPoint, ChartScales, Dataset, Interval, PredictionFrame, Viewport};

const VIEWPORT: Viewport = Viewport {
    width: 300,
    height: 270,
};

fn frame(week: u32) -> PredictionFrame {
    PredictionFrame {
        week,
        onset_week: Interval::new(2.0, 1.0, 3.0),
        peak_week: Interval::new(2.0, 1.0, 3.0),
        peak_percent: Interval::new(3.0, 2.0, 3.5),
        one_wk: Interval::new(2.8, 2.0, 3.5),
        two_wk: Interval::new(2.6, 1.8, 3.2),
        three_wk: Interval::new(2.4, 1.6, 3.0),
        four_wk: Interval::new(2.2, 1.4, 2.8),
    }
}

fn dataset() -> Dataset {
    Dataset {
        baseline: 2.0,
        actual: vec![
            ActualPoint::new(1, 2.0),
            ActualPoint::new(2, 3.0),
            ActualPoint::new(3, 2.5),
        ],
        predictions: vec![frame(1), frame(2), frame(3)],
    }
}

fn scales(data: &Dataset) -> ChartScales {
    ChartScales::fit(data, VIEWPORT).expect("scales fit")
}

#[test]
fn baseline_sits_at_projected_threshold() {
    let data = dataset();
    let scales = scales(&data);
    let markers = StaticMarkers::build(&data, &scales, &MarkerLayoutConfig::default());

    assert_relative_eq!(markers.baseline.y, scales.value_to_pixel(2.0));
    assert_relative_eq!(markers.baseline.x_start, 0.0);
    assert_relative_eq!(markers.baseline.x_end, 300.0);
}

#[test]
fn actual_series_is_keyed_by_week_in_order() {
    let data = dataset();
    let scales = scales(&data);
    let markers = StaticMarkers::build(&data, &scales, &MarkerLayoutConfig::default());

    let weeks: Vec<u32> = markers.actual.points.iter().map(|p| p.week).collect();
    assert_eq!(weeks, vec![1, 2, 3]);
    assert_eq!(markers.actual.path.len(), markers.actual.points.len());
    assert_relative_eq!(markers.actual.points[1].x, 150.0);
    assert_relative_eq!(markers.actual.points[1].y, scales.value_to_pixel(3.0));
}

#[test]
fn time_cursor_spans_up_to_the_issuance_week() {
    let data = dataset();
    let scales = scales(&data);
    let markers =
        FrameMarkers::build(&data, &scales, 1, &MarkerLayoutConfig::default()).expect("frame 1");

    assert_relative_eq!(markers.time_cursor.width, 150.0);
    assert_relative_eq!(markers.time_cursor.height, 270.0);
}

#[test]
fn onset_marker_projects_point_and_bounds() {
    let data = dataset();
    let scales = scales(&data);
    let layout = MarkerLayoutConfig::default();
    let markers = FrameMarkers::build(&data, &scales, 2, &layout).expect("frame 2");

    let row_y = 270.0 - layout.onset_row_offset_px;
    assert_relative_eq!(markers.onset.mark.x, 150.0);
    assert_relative_eq!(markers.onset.mark.y, row_y);
    assert!(markers.onset.mark.hover_emphasis);

    assert_relative_eq!(markers.onset.range.x1, 0.0);
    assert_relative_eq!(markers.onset.range.x2, 300.0);
    assert_relative_eq!(markers.onset.low_stopper.y1, row_y - 5.0);
    assert_relative_eq!(markers.onset.low_stopper.y2, row_y + 5.0);
    assert_relative_eq!(markers.onset.high_stopper.x1, 300.0);
}

#[test]
fn onset_sentinel_defaults_to_coordinate_zero() {
    let mut data = dataset();
    data.predictions[2].onset_week = Interval::new(0.0, 1.0, 3.0);
    let scales = scales(&data);
    let markers = FrameMarkers::build(&data, &scales, 2, &MarkerLayoutConfig::default())
        .expect("frame with sentinel onset");

    assert_relative_eq!(markers.onset.mark.x, 0.0);
    assert!(markers.onset.mark.x.is_finite());
}

#[test]
fn peak_fallback_applies_per_axis() {
    let mut data = dataset();
    // Week estimate missing, percent estimate present.
    data.predictions[2].peak_week = Interval::new(0.0, 1.0, 3.0);
    let scales = scales(&data);
    let markers = FrameMarkers::build(&data, &scales, 2, &MarkerLayoutConfig::default())
        .expect("frame with sentinel peak week");

    assert_relative_eq!(markers.peak.mark.x, 0.0);
    assert_relative_eq!(markers.peak.mark.y, scales.value_to_pixel(3.0));
}

#[test]
fn peak_ranges_cross_at_the_point_estimate() {
    let data = dataset();
    let scales = scales(&data);
    let layout = MarkerLayoutConfig::default();
    let markers = FrameMarkers::build(&data, &scales, 2, &layout).expect("frame 2");

    let percent_y = scales.value_to_pixel(3.0);
    assert_relative_eq!(markers.peak.week_range.y1, percent_y);
    assert_relative_eq!(markers.peak.week_range.x1, 0.0);
    assert_relative_eq!(markers.peak.week_range.x2, 300.0);

    assert_relative_eq!(markers.peak.percent_range.x1, 150.0);
    assert_relative_eq!(markers.peak.percent_range.y1, scales.value_to_pixel(2.0));
    assert_relative_eq!(markers.peak.percent_range.y2, scales.value_to_pixel(3.5));

    assert_relative_eq!(markers.peak.week_low_stopper.y1, percent_y - 5.0);
    assert_relative_eq!(markers.peak.week_low_stopper.y2, percent_y + 5.0);
    assert_relative_eq!(markers.peak.percent_high_stopper.x1, 150.0 - 5.0);
    assert_relative_eq!(markers.peak.percent_high_stopper.x2, 150.0 + 5.0);
}

#[test]
fn prediction_series_anchors_to_the_observed_value() {
    let data = dataset();
    let scales = scales(&data);
    let markers =
        FrameMarkers::build(&data, &scales, 0, &MarkerLayoutConfig::default()).expect("frame 0");

    let series = &markers.prediction;
    assert_eq!(series.points.len(), 3);
    assert_eq!(series.points[0].week, 1);
    assert_relative_eq!(series.points[0].y, scales.value_to_pixel(2.0));
    // Band degenerates to zero width at the anchor.
    assert_relative_eq!(series.band[0].low_y, series.band[0].high_y);
    assert_relative_eq!(series.points[1].y, scales.value_to_pixel(2.8));
    assert_relative_eq!(series.band[1].low_y, scales.value_to_pixel(2.0));
    assert_relative_eq!(series.band[1].high_y, scales.value_to_pixel(3.5));
}

#[test]
fn prediction_series_truncates_at_the_domain_end() {
    let data = dataset();
    let scales = scales(&data);
    let layout = MarkerLayoutConfig::default();

    let at_last_week =
        FrameMarkers::build(&data, &scales, 2, &layout).expect("frame at last week");
    assert_eq!(at_last_week.prediction.points.len(), 1);

    let one_before = FrameMarkers::build(&data, &scales, 1, &layout).expect("frame 1");
    assert_eq!(one_before.prediction.points.len(), 2);
    assert_eq!(one_before.prediction.points[1].week, 3);

    assert!(at_last_week.prediction.points.len() <= 5);
}

#[test]
fn prediction_series_has_at_most_five_points() {
    let actual: Vec<ActualPoint> = (1..=10).map(|week| ActualPoint::new(week, 2.0)).collect();
    let data = Dataset {
        baseline: 2.0,
        actual,
        predictions: vec![frame(1)],
    };
    let scales = scales(&data);
    let markers =
        FrameMarkers::build(&data, &scales, 0, &MarkerLayoutConfig::default()).expect("frame 0");

    assert_eq!(markers.prediction.points.len(), 5);
    let weeks: Vec<u32> = markers.prediction.points.iter().map(|p| p.week).collect();
    assert_eq!(weeks, vec![1, 2, 3, 4, 5]);
}

#[test]
fn missing_anchor_is_a_data_integrity_error() {
    let mut data = dataset();
    data.predictions[0].week = 7;
    let scales = scales(&data);

    let result = FrameMarkers::build(&data, &scales, 0, &MarkerLayoutConfig::default());
    assert!(result.is_err());
}
