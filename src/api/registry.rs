use indexmap::IndexMap;
use tracing::debug;

use crate::core::{FormulaCatalog, FormulaDescriptor};
use crate::error::{ChartError, ChartResult};

use super::{DisplaySettings, PrecisionController};

/// One precision controller per formula view, created on first access.
pub struct ControllerRegistry {
    settings: DisplaySettings,
    descriptors: IndexMap<String, FormulaDescriptor>,
    /// Route path to formula id.
    paths: IndexMap<String, String>,
    controllers: IndexMap<String, PrecisionController>,
}

impl ControllerRegistry {
    /// Registry over every formula in [`FormulaCatalog`].
    #[must_use]
    pub fn from_catalog() -> Self {
        let entries = FormulaCatalog::list();
        let descriptors = entries
            .iter()
            .map(|entry| (entry.descriptor.id.clone(), entry.descriptor.clone()))
            .collect();
        let paths = entries
            .iter()
            .map(|entry| (entry.route.path.to_owned(), entry.descriptor.id.clone()))
            .collect();
        Self {
            settings: DisplaySettings::default(),
            descriptors,
            paths,
            controllers: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self {
            settings: DisplaySettings::default(),
            descriptors: IndexMap::new(),
            paths: IndexMap::new(),
            controllers: IndexMap::new(),
        }
    }

    /// Settings for controllers created after this call.
    pub fn with_settings(mut self, settings: DisplaySettings) -> ChartResult<Self> {
        self.settings = settings.validate()?;
        Ok(self)
    }

    pub fn register_descriptor(&mut self, descriptor: FormulaDescriptor) -> ChartResult<()> {
        descriptor.validate()?;
        if self.descriptors.contains_key(&descriptor.id) {
            return Err(ChartError::InvalidArgument(format!(
                "formula `{}` is already registered",
                descriptor.id
            )));
        }
        self.descriptors.insert(descriptor.id.clone(), descriptor);
        Ok(())
    }

    /// Registers `descriptor` and makes it reachable through `path`.
    ///
    /// Nothing is registered when either the id or the path is taken.
    pub fn register_descriptor_at(
        &mut self,
        descriptor: FormulaDescriptor,
        path: &str,
    ) -> ChartResult<()> {
        if path.is_empty() {
            return Err(ChartError::InvalidArgument(
                "route path must not be empty".to_owned(),
            ));
        }
        if let Some(owner) = self.paths.get(path) {
            return Err(ChartError::InvalidArgument(format!(
                "route `{path}` already resolves to `{owner}`"
            )));
        }
        let formula_id = descriptor.id.clone();
        self.register_descriptor(descriptor)?;
        self.paths.insert(path.to_owned(), formula_id);
        Ok(())
    }

    /// Returns the controller for `formula_id`, building it on first use.
    pub fn controller(&mut self, formula_id: &str) -> ChartResult<&mut PrecisionController> {
        if !self.controllers.contains_key(formula_id) {
            let descriptor = self
                .descriptors
                .get(formula_id)
                .cloned()
                .ok_or_else(|| ChartError::UnknownFormula(formula_id.to_owned()))?;
            let controller = PrecisionController::with_settings(descriptor, self.settings)?;
            debug!(formula = formula_id, "create controller on first access");
            self.controllers.insert(formula_id.to_owned(), controller);
        }
        self.controllers
            .get_mut(formula_id)
            .ok_or_else(|| ChartError::UnknownFormula(formula_id.to_owned()))
    }

    /// Resolves a route path, from the catalog or from
    /// [`Self::register_descriptor_at`], to its controller.
    pub fn controller_for_path(&mut self, path: &str) -> ChartResult<&mut PrecisionController> {
        let formula_id = self
            .paths
            .get(path)
            .cloned()
            .ok_or_else(|| ChartError::UnknownFormula(path.to_owned()))?;
        self.controller(&formula_id)
    }

    #[must_use]
    pub fn get(&self, formula_id: &str) -> Option<&PrecisionController> {
        self.controllers.get(formula_id)
    }

    /// Drops the controller of a discarded view. Returns `true` when one
    /// existed.
    pub fn release(&mut self, formula_id: &str) -> bool {
        self.controllers.shift_remove(formula_id).is_some()
    }

    pub fn active_ids(&self) -> impl Iterator<Item = &str> {
        self.controllers.keys().map(String::as_str)
    }

    pub fn formula_ids(&self) -> impl Iterator<Item = &str> {
        self.descriptors.keys().map(String::as_str)
    }
}

impl Default for ControllerRegistry {
    fn default() -> Self {
        Self::from_catalog()
    }
}
