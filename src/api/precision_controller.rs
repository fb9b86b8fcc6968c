use tracing::{debug, trace, warn};

use crate::core::{FormulaDescriptor, Precision};
use crate::error::{ChartError, ChartResult};

use super::config_builder::PrecisionFormatters;
use super::{
    ChartConfiguration, ConfigBuilder, ConfigurationContext, ConfigurationEvent,
    ConfigurationObserver, DisplaySettings,
};

/// Owns the display precision and chart configuration of one formula view.
///
/// The only mutation exposed is [`PrecisionController::set_precision`], which
/// swaps the y-axis label and tooltip value formatters as one step. Every
/// other configuration section keeps its identity for the controller's
/// lifetime.
pub struct PrecisionController {
    descriptor: FormulaDescriptor,
    settings: DisplaySettings,
    precision: Precision,
    configuration: ChartConfiguration,
    formatter_revision: u64,
    observers: Vec<Box<dyn ConfigurationObserver>>,
}

impl PrecisionController {
    /// Creates a controller at the default precision of 2.
    pub fn initialize(descriptor: FormulaDescriptor) -> ChartResult<Self> {
        Self::with_settings(descriptor, DisplaySettings::default())
    }

    pub fn with_settings(
        descriptor: FormulaDescriptor,
        settings: DisplaySettings,
    ) -> ChartResult<Self> {
        let settings = settings.validate()?;
        let precision = Precision::new(i64::from(settings.default_precision))?;
        let configuration = ConfigBuilder::build_with_precision(&descriptor, precision)?;
        debug!(formula = %descriptor.id, %precision, "initialize precision controller");

        Ok(Self {
            descriptor,
            settings,
            precision,
            configuration,
            formatter_revision: 0,
            observers: Vec::new(),
        })
    }

    /// Applies a new display precision.
    ///
    /// Rejected requests leave precision, formatters and revision untouched.
    pub fn set_precision(&mut self, precision: i64) -> ChartResult<&ChartConfiguration> {
        let next = match self.validate_precision(precision) {
            Ok(next) => next,
            Err(err) => {
                warn!(
                    formula = %self.descriptor.id,
                    requested = precision,
                    error = %err,
                    "rejecting precision change"
                );
                return Err(err);
            }
        };

        // Both formatters are ready before anything is written.
        let formatters = PrecisionFormatters::new(next, &self.descriptor.unit);
        let previous = self.precision;
        self.precision = next;
        self.configuration.replace_precision_formatters(formatters);
        self.formatter_revision = self.formatter_revision.saturating_add(1);

        debug!(
            formula = %self.descriptor.id,
            %previous,
            current = %next,
            revision = self.formatter_revision,
            "precision changed"
        );
        self.notify(ConfigurationEvent::PrecisionChanged {
            previous,
            current: next,
            formatter_revision: self.formatter_revision,
        });

        Ok(&self.configuration)
    }

    fn validate_precision(&self, precision: i64) -> ChartResult<Precision> {
        let next = Precision::new(precision)?;
        if next.digits() > self.settings.max_precision {
            return Err(ChartError::InvalidArgument(format!(
                "precision must be <= {}, got {precision}",
                self.settings.max_precision
            )));
        }
        Ok(next)
    }

    fn notify(&mut self, event: ConfigurationEvent) {
        let context = ConfigurationContext {
            formula_id: &self.descriptor.id,
            configuration: &self.configuration,
        };
        for observer in &mut self.observers {
            trace!(observer = observer.id(), ?event, "dispatch configuration event");
            observer.on_event(event, context);
        }
    }

    #[must_use]
    pub fn precision(&self) -> Precision {
        self.precision
    }

    #[must_use]
    pub fn configuration(&self) -> &ChartConfiguration {
        &self.configuration
    }

    #[must_use]
    pub fn descriptor(&self) -> &FormulaDescriptor {
        &self.descriptor
    }

    #[must_use]
    pub fn settings(&self) -> DisplaySettings {
        self.settings
    }

    /// Number of successful precision changes since construction.
    #[must_use]
    pub fn formatter_revision(&self) -> u64 {
        self.formatter_revision
    }

    /// Registers an observer with unique identifier.
    pub fn register_observer(
        &mut self,
        observer: Box<dyn ConfigurationObserver>,
    ) -> ChartResult<()> {
        let observer_id = observer.id().to_owned();
        if observer_id.is_empty() {
            return Err(ChartError::InvalidArgument(
                "observer id must not be empty".to_owned(),
            ));
        }
        if self.has_observer(&observer_id) {
            return Err(ChartError::InvalidArgument(format!(
                "observer with id `{observer_id}` is already registered"
            )));
        }
        self.observers.push(observer);
        Ok(())
    }

    /// Unregisters an observer by id. Returns `true` when removed.
    pub fn unregister_observer(&mut self, observer_id: &str) -> bool {
        if let Some(position) = self
            .observers
            .iter()
            .position(|entry| entry.id() == observer_id)
        {
            self.observers.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn has_observer(&self, observer_id: &str) -> bool {
        self.observers
            .iter()
            .any(|observer| observer.id() == observer_id)
    }
}
