use serde::Serialize;

use crate::error::{ChartError, ChartResult};

use super::{ChartConfiguration, PrecisionController};

pub const CHART_CONFIGURATION_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, Serialize)]
pub struct ChartConfigurationJsonContractV1<'a> {
    pub schema_version: u32,
    pub formula_id: &'a str,
    pub precision: u8,
    pub configuration: &'a ChartConfiguration,
}

impl ChartConfiguration {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart configuration: {e}"))
        })
    }

    pub fn to_json_value(&self) -> ChartResult<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart configuration: {e}"))
        })
    }
}

impl PrecisionController {
    /// Versioned export for rendering hosts outside Rust.
    pub fn configuration_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartConfigurationJsonContractV1 {
            schema_version: CHART_CONFIGURATION_JSON_SCHEMA_V1,
            formula_id: &self.descriptor().id,
            precision: self.precision().digits(),
            configuration: self.configuration(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!(
                "failed to serialize chart configuration contract v1: {e}"
            ))
        })
    }
}
