use std::sync::{Arc, Mutex, MutexGuard};

use crate::core::{FormulaDescriptor, Precision};
use crate::error::{ChartError, ChartResult};

use super::{ChartConfiguration, PrecisionController};

/// Cloneable, lock-guarded handle for hosts that touch a controller from
/// more than one thread.
///
/// The lock is scoped to one controller; `set_precision` holds it for the
/// whole formatter swap and observer dispatch.
#[derive(Clone)]
pub struct SharedPrecisionController {
    inner: Arc<Mutex<PrecisionController>>,
}

impl SharedPrecisionController {
    #[must_use]
    pub fn new(controller: PrecisionController) -> Self {
        Self {
            inner: Arc::new(Mutex::new(controller)),
        }
    }

    pub fn initialize(descriptor: FormulaDescriptor) -> ChartResult<Self> {
        PrecisionController::initialize(descriptor).map(Self::new)
    }

    fn lock(&self) -> ChartResult<MutexGuard<'_, PrecisionController>> {
        self.inner.lock().map_err(|_| ChartError::LockPoisoned)
    }

    /// Applies a precision change and returns a snapshot of the result.
    pub fn set_precision(&self, precision: i64) -> ChartResult<ChartConfiguration> {
        let mut controller = self.lock()?;
        controller.set_precision(precision).cloned()
    }

    pub fn precision(&self) -> ChartResult<Precision> {
        Ok(self.lock()?.precision())
    }

    /// Snapshot of the current configuration. Structural sections stay
    /// shared with the controller.
    pub fn configuration(&self) -> ChartResult<ChartConfiguration> {
        Ok(self.lock()?.configuration().clone())
    }

    /// Runs `f` with exclusive access to the controller.
    pub fn with_controller<T>(
        &self,
        f: impl FnOnce(&mut PrecisionController) -> T,
    ) -> ChartResult<T> {
        let mut controller = self.lock()?;
        Ok(f(&mut controller))
    }
}
