use crate::core::DataPoint;

/// Widens `[from, to]` symmetrically so enough off-screen context survives
/// excerpting for smooth pan/zoom: two bucket-widths of margin per side.
#[must_use]
pub fn widen_window(from: f64, to: f64, max_data_points: usize) -> (f64, f64) {
    let timespan = to - from;
    let margin = 2.0 * timespan / max_data_points as f64;
    (from - margin, to + margin)
}

/// Returns points whose time falls inside an inclusive time window.
///
/// A reversed window (`from > to`) matches nothing; the caller sees that as
/// an empty-range condition.
#[must_use]
pub fn points_in_time_window(points: &[DataPoint], from: f64, to: f64) -> Vec<DataPoint> {
    points
        .iter()
        .copied()
        .filter(|point| point.x >= from && point.x <= to)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{points_in_time_window, widen_window};
    use crate::core::DataPoint;

    #[test]
    fn window_filter_is_inclusive_on_both_edges() {
        let points = vec![
            DataPoint::new(0.0, 1.0),
            DataPoint::new(5.0, 2.0),
            DataPoint::new(10.0, 3.0),
        ];

        let kept = points_in_time_window(&points, 0.0, 10.0);
        assert_eq!(kept.len(), 3);

        let inner = points_in_time_window(&points, 1.0, 9.0);
        assert_eq!(inner.len(), 1);
        assert_eq!(inner[0].x, 5.0);
    }

    #[test]
    fn widen_window_adds_two_bucket_widths_per_side() {
        let (from, to) = widen_window(10.0, 20.0, 5);
        assert_eq!(from, 6.0);
        assert_eq!(to, 24.0);
    }

    #[test]
    fn reversed_window_matches_nothing() {
        let points = vec![DataPoint::new(1.0, 1.0)];
        assert!(points_in_time_window(&points, 5.0, 0.0).is_empty());
    }
}
