use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Static parameter set distinguishing one formula's chart from another.
///
/// Everything else in a chart configuration is a shared visual convention and
/// is derived by [`crate::api::ConfigBuilder`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormulaDescriptor {
    pub id: String,
    pub y_axis_title: String,
    pub unit: String,
    pub time_range_length: u32,
    #[serde(default)]
    pub tick_interval: Option<u32>,
    pub export_base_name: String,
    #[serde(default = "default_gradient_enabled")]
    pub gradient_enabled: bool,
}

fn default_gradient_enabled() -> bool {
    true
}

impl FormulaDescriptor {
    /// Creates a descriptor with a 25-hour axis, no explicit ticks and the
    /// gradient fill enabled.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        y_axis_title: impl Into<String>,
        unit: impl Into<String>,
        export_base_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            y_axis_title: y_axis_title.into(),
            unit: unit.into(),
            time_range_length: 25,
            tick_interval: None,
            export_base_name: export_base_name.into(),
            gradient_enabled: default_gradient_enabled(),
        }
    }

    #[must_use]
    pub fn with_time_range_length(mut self, time_range_length: u32) -> Self {
        self.time_range_length = time_range_length;
        self
    }

    #[must_use]
    pub fn with_tick_interval(mut self, tick_interval: Option<u32>) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    #[must_use]
    pub fn with_gradient_enabled(mut self, enabled: bool) -> Self {
        self.gradient_enabled = enabled;
        self
    }

    /// Explicit x-axis tick amount, when the descriptor carries an interval.
    #[must_use]
    pub fn tick_amount(&self) -> Option<u32> {
        self.tick_interval
            .filter(|interval| *interval > 0)
            .map(|interval| self.time_range_length / interval)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.id.trim().is_empty() {
            return Err(ChartError::InvalidArgument(
                "formula id must not be empty".to_owned(),
            ));
        }
        if self.time_range_length == 0 {
            return Err(ChartError::InvalidArgument(format!(
                "formula `{}` time range length must be >= 1",
                self.id
            )));
        }
        if self.tick_interval == Some(0) {
            return Err(ChartError::InvalidArgument(format!(
                "formula `{}` tick interval must be >= 1",
                self.id
            )));
        }
        if self.unit.trim().is_empty() {
            return Err(ChartError::InvalidArgument(format!(
                "formula `{}` unit must not be empty",
                self.id
            )));
        }
        if self.export_base_name.trim().is_empty() {
            return Err(ChartError::InvalidArgument(format!(
                "formula `{}` export base name must not be empty",
                self.id
            )));
        }
        Ok(())
    }

    /// Parses and validates a descriptor supplied by a host application.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let descriptor: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse formula descriptor: {e}"))
        })?;
        descriptor.validate()?;
        Ok(descriptor)
    }
}
