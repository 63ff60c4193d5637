mod dataset;
mod excerpt_gate;
mod json_contract;

pub use dataset::{BoundaryLinesModel, DatasetPair};
pub use excerpt_gate::{ExcerptGate, ExcerptRequest};
pub use json_contract::{
    DatasetSnapshot, MODEL_SNAPSHOT_JSON_SCHEMA_V1, ModelSnapshotJsonContractV1,
    snapshot_from_json_str,
};
