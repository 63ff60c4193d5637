use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_seconds, decimal_to_f64};
use crate::error::{SeriesError, SeriesResult};

/// Caller-facing default for `SeriesConfig::max_data_points`.
pub const DEFAULT_MAX_DATA_POINTS: usize = 48;

/// One full-resolution or displayed sample: unix-seconds time and value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn from_decimal_time(time: DateTime<Utc>, value: Decimal) -> SeriesResult<Self> {
        Ok(Self {
            x: datetime_to_unix_seconds(time),
            y: decimal_to_f64(value, "value")?,
        })
    }
}

/// Reducer applied when folding a point into its bucket anchor.
///
/// `None` intentionally shares the averaging reducer with `Average`; callers
/// that want a pass-through must raise `max_data_points` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AggregationStrategy {
    Max,
    Min,
    Average,
    #[default]
    None,
}

/// Per-series excerpting configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesConfig {
    pub max_data_points: usize,
    pub aggregation_strategy: AggregationStrategy,
}

impl SeriesConfig {
    pub fn new(max_data_points: usize, aggregation_strategy: AggregationStrategy) -> SeriesResult<Self> {
        if max_data_points == 0 {
            return Err(SeriesError::InvalidData(
                "max_data_points must be positive".to_owned(),
            ));
        }

        Ok(Self {
            max_data_points,
            aggregation_strategy,
        })
    }
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            max_data_points: DEFAULT_MAX_DATA_POINTS,
            aggregation_strategy: AggregationStrategy::None,
        }
    }
}
