use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_PRECISION, MAX_PRECISION};
use crate::error::{ChartError, ChartResult};

/// Host-level display settings applied to every precision controller.
///
/// Serializable so host applications can ship settings alongside their own
/// configuration files. Missing fields fall back to defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default = "default_precision")]
    pub default_precision: u8,
    #[serde(default = "default_max_precision")]
    pub max_precision: u8,
}

fn default_precision() -> u8 {
    DEFAULT_PRECISION
}

fn default_max_precision() -> u8 {
    MAX_PRECISION
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            default_precision: default_precision(),
            max_precision: default_max_precision(),
        }
    }
}

impl DisplaySettings {
    #[must_use]
    pub fn with_default_precision(mut self, precision: u8) -> Self {
        self.default_precision = precision;
        self
    }

    /// Caps precision requests below the hard limit of 100 digits.
    #[must_use]
    pub fn with_max_precision(mut self, max_precision: u8) -> Self {
        self.max_precision = max_precision;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        if self.max_precision > MAX_PRECISION {
            return Err(ChartError::InvalidArgument(format!(
                "max precision must be <= {MAX_PRECISION}, got {}",
                self.max_precision
            )));
        }
        if self.default_precision > self.max_precision {
            return Err(ChartError::InvalidArgument(format!(
                "default precision {} exceeds max precision {}",
                self.default_precision, self.max_precision
            )));
        }
        Ok(self)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let settings: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse display settings: {e}"))
        })?;
        settings.validate()
    }
}
