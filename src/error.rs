use thiserror::Error;

pub type SeriesResult<T> = Result<T, SeriesError>;

#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("no points inside excerpt window: from={from}, to={to}")]
    EmptyRange { from: f64, to: f64 },

    #[error(
        "no full-resolution points between displayed neighbors: left_x={left_x}, right_x={right_x}"
    )]
    DegenerateInterval { left_x: f64, right_x: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
