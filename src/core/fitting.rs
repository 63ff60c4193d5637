use smallvec::SmallVec;

use crate::core::DataPoint;
use crate::error::{SeriesError, SeriesResult};

/// Redistributes an edited displayed point onto the full-resolution series.
///
/// A displayed point may stand for a whole folded bucket, so the edit is
/// spread linearly over every full-resolution point between the edited point
/// and each immediate displayed neighbor. Only `y` values change; `x` values
/// and series length are untouched.
///
/// Spans are rewritten left neighbor first. When the right span turns out to
/// be degenerate the left span has already been rewritten; callers that need
/// all-or-nothing semantics should validate displayed indices up front.
pub fn fit_edited_point(
    full_series: &mut [DataPoint],
    displayed: &[DataPoint],
    edited_index: usize,
) -> SeriesResult<()> {
    if edited_index >= displayed.len() {
        return Err(SeriesError::InvalidData(format!(
            "edited point index {edited_index} out of bounds for displayed series of length {}",
            displayed.len()
        )));
    }

    let mut spans: SmallVec<[(DataPoint, DataPoint); 2]> = SmallVec::new();
    if edited_index >= 1 {
        spans.push((displayed[edited_index - 1], displayed[edited_index]));
    }
    if edited_index + 1 < displayed.len() {
        spans.push((displayed[edited_index], displayed[edited_index + 1]));
    }

    for (p0, p1) in spans {
        interpolate_span(full_series, p0, p1)?;
    }

    Ok(())
}

/// Ramps the full-resolution points with `x` in `[p0.x, p1.x]` from `p0.y`
/// toward `p1.y` in `(p1.y - p0.y) / count` steps. The ramp approaches but
/// does not force `p1.y` onto the span's last element.
fn interpolate_span(
    full_series: &mut [DataPoint],
    p0: DataPoint,
    p1: DataPoint,
) -> SeriesResult<()> {
    let count = full_series
        .iter()
        .filter(|point| point.x >= p0.x && point.x <= p1.x)
        .count();
    if count == 0 {
        return Err(SeriesError::DegenerateInterval {
            left_x: p0.x,
            right_x: p1.x,
        });
    }

    let slope = (p1.y - p0.y) / count as f64;
    for (position, point) in full_series
        .iter_mut()
        .filter(|point| point.x >= p0.x && point.x <= p1.x)
        .enumerate()
    {
        point.y = p0.y + slope * position as f64;
    }

    Ok(())
}
