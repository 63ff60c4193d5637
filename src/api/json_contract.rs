use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, SeriesConfig};
use crate::error::{SeriesError, SeriesResult};

use super::BoundaryLinesModel;

pub const MODEL_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// One dataset's state as captured for diagnostics or host persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSnapshot {
    pub label: String,
    pub config: SeriesConfig,
    pub full: Vec<DataPoint>,
    pub displayed: Vec<DataPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub datasets: Vec<DatasetSnapshot>,
}

impl BoundaryLinesModel {
    /// Captures every dataset in registration order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<DatasetSnapshot> {
        self.labels()
            .map(str::to_owned)
            .collect::<Vec<_>>()
            .into_iter()
            .filter_map(|label| {
                let pair = self.dataset(&label)?;
                Some(DatasetSnapshot {
                    label,
                    config: pair.config,
                    full: pair.full.clone(),
                    displayed: pair.displayed.clone(),
                })
            })
            .collect()
    }

    pub fn to_json_contract_v1_pretty(&self) -> SeriesResult<String> {
        let payload = ModelSnapshotJsonContractV1 {
            schema_version: MODEL_SNAPSHOT_JSON_SCHEMA_V1,
            datasets: self.snapshot(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            SeriesError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }
}

pub fn snapshot_from_json_str(input: &str) -> SeriesResult<Vec<DatasetSnapshot>> {
    let payload: ModelSnapshotJsonContractV1 = serde_json::from_str(input)
        .map_err(|e| SeriesError::InvalidData(format!("failed to parse snapshot payload: {e}")))?;
    if payload.schema_version != MODEL_SNAPSHOT_JSON_SCHEMA_V1 {
        return Err(SeriesError::InvalidData(format!(
            "unsupported snapshot schema version: {}",
            payload.schema_version
        )));
    }
    Ok(payload.datasets)
}
