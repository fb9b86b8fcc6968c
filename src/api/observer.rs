use serde::{Deserialize, Serialize};

use crate::core::Precision;

use super::ChartConfiguration;

/// Notifications emitted by a precision controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigurationEvent {
    PrecisionChanged {
        previous: Precision,
        current: Precision,
        formatter_revision: u64,
    },
}

/// Read-only view handed to observers after a change has been applied.
#[derive(Debug, Clone, Copy)]
pub struct ConfigurationContext<'a> {
    pub formula_id: &'a str,
    pub configuration: &'a ChartConfiguration,
}

/// Hook for UI layers that re-render when a configuration changes.
///
/// Observers see the configuration only after both formatters have been
/// swapped; they cannot mutate it.
pub trait ConfigurationObserver: Send {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: ConfigurationEvent, context: ConfigurationContext<'_>);
}
