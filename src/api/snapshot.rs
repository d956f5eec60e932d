use serde::{Deserialize, Serialize};

use crate::animation::AnimationState;
use crate::core::{AxisScale, BarGeometry, ChartLayout, DataEntry, TextMeasurer, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::BarChart;

pub const CHART_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Deterministic view of everything the chart derived for the current frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub viewport: Viewport,
    pub entries: Vec<DataEntry>,
    pub y_axis_title: Option<String>,
    pub scale: AxisScale,
    pub layout: ChartLayout,
    pub bars: Vec<BarGeometry>,
    pub animation: AnimationState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ChartSnapshot,
}

impl ChartSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartSnapshotJsonContractV1 {
            schema_version: CHART_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts both a bare snapshot and a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<ChartSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: ChartSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != CHART_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer, M: TextMeasurer> BarChart<R, M> {
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        ChartSnapshot {
            viewport: self.config.viewport,
            entries: self.series.entries().to_vec(),
            y_axis_title: self.y_axis_title().map(str::to_owned),
            scale: self.scale.clone(),
            layout: self.layout.clone(),
            bars: self.bars.clone(),
            animation: self.animation.state(),
        }
    }

    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
