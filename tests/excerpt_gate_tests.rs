use boundary_series::api::{BoundaryLinesModel, ExcerptRequest};
use boundary_series::core::{AggregationStrategy, DataPoint, SeriesConfig};

fn single_trace_model() -> BoundaryLinesModel {
    let mut model = BoundaryLinesModel::new();
    let full: Vec<DataPoint> = (0..200)
        .map(|i| DataPoint::new(f64::from(i), f64::from(i % 10)))
        .collect();
    model
        .insert_dataset(
            "trace",
            full,
            SeriesConfig::new(8, AggregationStrategy::Max).expect("config"),
        )
        .expect("insert");
    model
}

#[test]
fn excerpt_during_edit_is_deferred_until_edit_completes() {
    let mut model = single_trace_model();
    model
        .request_excerpt(ExcerptRequest::new(0.0, 199.0).without_margin())
        .expect("initial excerpt");

    model.begin_edit();
    let ran = model
        .request_excerpt(ExcerptRequest::new(0.0, 50.0).without_margin())
        .expect("deferred request");
    assert!(!ran);

    // Displayed series still covers the original full window.
    let displayed_before = model.dataset("trace").expect("dataset").displayed.clone();
    assert!(displayed_before.iter().any(|point| point.x > 50.0));

    model.finish_edit("trace", 0, 42.0).expect("edit");

    // The deferred window ran exactly once after the edit.
    let displayed_after = &model.dataset("trace").expect("dataset").displayed;
    assert!(displayed_after.iter().all(|point| point.x <= 50.0));
}

#[test]
fn latest_deferred_window_supersedes_earlier_ones() {
    let mut model = single_trace_model();
    model
        .request_excerpt(ExcerptRequest::new(0.0, 199.0).without_margin())
        .expect("initial excerpt");

    model.begin_edit();
    model
        .request_excerpt(ExcerptRequest::new(0.0, 30.0).without_margin())
        .expect("first deferred");
    model
        .request_excerpt(ExcerptRequest::new(100.0, 199.0).without_margin())
        .expect("second deferred");

    model.finish_edit("trace", 0, 3.0).expect("edit");

    let displayed = &model.dataset("trace").expect("dataset").displayed;
    assert!(displayed.iter().all(|point| point.x >= 100.0));
}

#[test]
fn failed_edit_releases_gate_and_drops_deferred_window() {
    let mut model = single_trace_model();
    model
        .request_excerpt(ExcerptRequest::new(0.0, 199.0).without_margin())
        .expect("initial excerpt");

    model.begin_edit();
    model
        .request_excerpt(ExcerptRequest::new(0.0, 50.0).without_margin())
        .expect("deferred request");

    let displayed_len = model.dataset("trace").expect("dataset").displayed.len();
    assert!(model.finish_edit("trace", displayed_len + 5, 1.0).is_err());
    assert!(!model.is_editing());

    // Dropped with the failed edit: the displayed window is unchanged.
    let displayed = &model.dataset("trace").expect("dataset").displayed;
    assert!(displayed.iter().any(|point| point.x > 50.0));

    // The gate is idle again, so a fresh request runs immediately.
    let ran = model
        .request_excerpt(ExcerptRequest::new(0.0, 50.0).without_margin())
        .expect("fresh request");
    assert!(ran);
}
