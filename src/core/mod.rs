pub mod excerpt;
pub mod fitting;
pub mod primitives;
pub mod types;
pub mod windowing;

pub use excerpt::excerpt_points;
pub use fitting::fit_edited_point;
pub use types::{AggregationStrategy, DEFAULT_MAX_DATA_POINTS, DataPoint, SeriesConfig};
pub use windowing::{points_in_time_window, widen_window};
