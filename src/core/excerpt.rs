use crate::core::types::{AggregationStrategy, DataPoint, SeriesConfig};
use crate::core::windowing::{points_in_time_window, widen_window};
use crate::error::{SeriesError, SeriesResult};

/// Excerpts `full_series` for a visible window: inclusive time filter
/// (margin-widened when `has_margin` is set), then one-pass count-bounded
/// aggregation toward `config.max_data_points`.
///
/// The output is a fresh series of bucket anchor points whose `y` carries the
/// folded value of every point in its bucket; `x` values are anchor times
/// copied verbatim from the input. Output length is bounded by the number of
/// bucket-opening events, which can differ from `max_data_points` by one at
/// window boundaries.
pub fn excerpt_points(
    full_series: &[DataPoint],
    config: SeriesConfig,
    from: f64,
    to: f64,
    has_margin: bool,
) -> SeriesResult<Vec<DataPoint>> {
    let (from, to) = if has_margin {
        widen_window(from, to, config.max_data_points)
    } else {
        (from, to)
    };

    let windowed = points_in_time_window(full_series, from, to);
    if windowed.is_empty() {
        return Err(SeriesError::EmptyRange { from, to });
    }

    Ok(aggregate_by_max_data_points(&windowed, config))
}

/// Walks the windowed series once, left to right. A point opens a new bucket
/// exactly when its time reaches `next_bucket_at`; every other point folds
/// into the most recently opened anchor.
fn aggregate_by_max_data_points(points: &[DataPoint], config: SeriesConfig) -> Vec<DataPoint> {
    let first_x = points[0].x;
    let last_x = points[points.len() - 1].x;
    let timespan_per_bucket = (last_x - first_x) / config.max_data_points as f64;

    let mut excerpt: Vec<DataPoint> = Vec::with_capacity(config.max_data_points + 1);
    let mut next_bucket_at = first_x;

    for point in points {
        if point.x >= next_bucket_at {
            next_bucket_at = point.x + timespan_per_bucket;
            excerpt.push(*point);
        } else if let Some(anchor) = excerpt.last_mut() {
            anchor.y = fold(config.aggregation_strategy, anchor.y, point.y);
        }
    }

    excerpt
}

/// Single fold step. `Average` and `None` share the running pairwise average
/// `(running + incoming) / 2` on purpose: it is not a true arithmetic mean,
/// and downstream consumers depend on the exact curve shape it produces.
fn fold(strategy: AggregationStrategy, running: f64, incoming: f64) -> f64 {
    match strategy {
        AggregationStrategy::Max => {
            if running > incoming {
                running
            } else {
                incoming
            }
        }
        AggregationStrategy::Min => {
            if running < incoming {
                running
            } else {
                incoming
            }
        }
        AggregationStrategy::Average | AggregationStrategy::None => (running + incoming) / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::{excerpt_points, fold};
    use crate::core::types::{AggregationStrategy, DataPoint, SeriesConfig};

    #[test]
    fn anchor_times_strictly_increase() {
        let points: Vec<DataPoint> = (0..100)
            .map(|i| DataPoint::new(f64::from(i), f64::from(i % 7)))
            .collect();
        let config = SeriesConfig::new(10, AggregationStrategy::Max).expect("valid config");

        let excerpt = excerpt_points(&points, config, 0.0, 99.0, false).expect("excerpt");
        for pair in excerpt.windows(2) {
            assert!(pair[0].x < pair[1].x);
        }
    }

    #[test]
    fn average_fold_is_pairwise_not_true_mean() {
        // Folding 1 then 2 then 3 pairwise: ((1+2)/2 + 3)/2 = 2.25, mean = 2.
        let step = fold(AggregationStrategy::Average, 1.0, 2.0);
        let folded = fold(AggregationStrategy::Average, step, 3.0);
        assert_eq!(folded, 2.25);
    }

    #[test]
    fn none_strategy_matches_average_fold() {
        assert_eq!(
            fold(AggregationStrategy::None, 4.0, 8.0),
            fold(AggregationStrategy::Average, 4.0, 8.0),
        );
    }
}
