//! boundary-series-rs: viewport excerpting and drag-edit refitting for
//! time-ordered series.
//!
//! The crate is a pure data-transform core: `core` holds the two stateless
//! algorithms (count-bounded downsampling and local linear refitting), and
//! `api` holds a plain-data model layer hosts can drive from their own
//! rendering and input plumbing. Nothing here draws or reads input devices.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{BoundaryLinesModel, DatasetPair};
pub use error::{SeriesError, SeriesResult};
