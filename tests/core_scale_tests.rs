use approx::assert_relative_eq;
use epicast_rs::core::{
    ActualPoint, ChartScales, Dataset, Interval, PredictionFrame, ValueScale, Viewport, WeekScale,
};

fn frame(week: u32, horizon_high: f64) -> PredictionFrame {
    PredictionFrame {
        week,
        onset_week: Interval::degenerate(0.0),
        peak_week: Interval::degenerate(0.0),
        peak_percent: Interval::degenerate(0.0),
        one_wk: Interval::new(horizon_high - 0.5, horizon_high - 1.0, horizon_high),
        two_wk: Interval::degenerate(0.0),
        three_wk: Interval::degenerate(0.0),
        four_wk: Interval::degenerate(0.0),
    }
}

#[test]
fn week_domain_is_distinct_sorted_mod_100() {
    let actual = vec![
        ActualPoint::new(201_552, 1.0),
        ActualPoint::new(201_550, 1.0),
        ActualPoint::new(201_601, 1.0),
        ActualPoint::new(201_603, 1.0),
        ActualPoint::new(201_550, 2.0),
    ];
    let scale = WeekScale::fit(&actual, 300.0).expect("week fit");

    let domain: Vec<u32> = scale.domain().collect();
    assert_eq!(domain, vec![1, 3, 50, 52]);
    assert_eq!(scale.domain_len(), 4);
}

#[test]
fn week_positions_are_evenly_spaced() {
    let actual = vec![
        ActualPoint::new(1, 1.0),
        ActualPoint::new(2, 1.0),
        ActualPoint::new(3, 1.0),
        ActualPoint::new(4, 1.0),
    ];
    let scale = WeekScale::fit(&actual, 300.0).expect("week fit");

    assert_relative_eq!(scale.position(1).expect("week 1"), 0.0);
    assert_relative_eq!(scale.position(2).expect("week 2"), 100.0);
    assert_relative_eq!(scale.position(4).expect("week 4"), 300.0);
}

#[test]
fn single_week_domain_sits_at_range_midpoint() {
    let actual = vec![ActualPoint::new(201_552, 1.0)];
    let scale = WeekScale::fit(&actual, 400.0).expect("week fit");

    assert_relative_eq!(scale.position(201_552).expect("single week"), 200.0);
}

#[test]
fn unknown_week_has_no_position() {
    let actual = vec![ActualPoint::new(1, 1.0), ActualPoint::new(2, 1.0)];
    let scale = WeekScale::fit(&actual, 100.0).expect("week fit");

    assert!(scale.position(7).is_none());
    assert!(scale.position_for_estimate(0.0).is_none());
    assert!(scale.position_for_estimate(1.5).is_none());
    assert!(scale.position_for_estimate(f64::NAN).is_none());
}

#[test]
fn empty_observed_series_is_rejected() {
    assert!(WeekScale::fit(&[], 100.0).is_err());
}

#[test]
fn next_weeks_truncates_at_domain_end() {
    let actual = vec![
        ActualPoint::new(201_550, 1.0),
        ActualPoint::new(201_551, 1.0),
        ActualPoint::new(201_552, 1.0),
    ];
    let scale = WeekScale::fit(&actual, 100.0).expect("week fit");

    assert_eq!(scale.next_weeks(201_550, 4), vec![51, 52]);
    assert_eq!(scale.next_weeks(201_552, 4), Vec::<u32>::new());
    assert_eq!(scale.next_weeks(201_530, 4), Vec::<u32>::new());
}

#[test]
fn tick_weeks_skip_every_other_label() {
    let actual: Vec<ActualPoint> = (40..=47).map(|week| ActualPoint::new(week, 1.0)).collect();
    let scale = WeekScale::fit(&actual, 100.0).expect("week fit");

    assert_eq!(scale.tick_weeks(), vec![40, 42, 44, 46]);
}

#[test]
fn value_scale_inverts_pixel_range() {
    let scale = ValueScale::new(10.0, 270.0).expect("value scale");

    assert_relative_eq!(scale.value_to_pixel(0.0), 270.0);
    assert_relative_eq!(scale.value_to_pixel(10.0), 0.0);
    assert_relative_eq!(scale.value_to_pixel(5.0), 135.0);
}

#[test]
fn value_estimate_fallback_defaults_to_zero_pixel() {
    let scale = ValueScale::new(10.0, 270.0).expect("value scale");

    assert_relative_eq!(scale.pixel_for_estimate(f64::NAN), 0.0);
    assert_relative_eq!(scale.pixel_for_estimate(2.0), scale.value_to_pixel(2.0));
}

#[test]
fn display_ceiling_spans_the_whole_predictions_sequence() {
    let dataset = Dataset {
        baseline: 2.0,
        actual: vec![
            ActualPoint::new(1, 2.0),
            ActualPoint::new(2, 3.0),
            ActualPoint::new(3, 2.5),
        ],
        predictions: vec![frame(1, 3.5), frame(2, 9.0), frame(3, 4.0)],
    };
    let scales = ChartScales::fit(&dataset, Viewport::new(300, 270)).expect("scales fit");

    // 10% above the largest interval high bound across all frames.
    assert_relative_eq!(scales.y_max(), 1.1 * 9.0);
}

#[test]
fn invalid_viewport_is_rejected() {
    let dataset = Dataset {
        baseline: 1.0,
        actual: vec![ActualPoint::new(1, 2.0)],
        predictions: vec![frame(1, 3.0)],
    };

    assert!(ChartScales::fit(&dataset, Viewport::new(0, 0)).is_err());
}
