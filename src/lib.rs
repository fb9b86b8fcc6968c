//! pkchart: chart display configuration for pharmacokinetic concentration curves.
//!
//! The crate derives renderer-ready chart configurations from small
//! per-formula descriptors and keeps the precision-dependent label formatters
//! consistent while users change display precision.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{ChartConfiguration, ConfigBuilder, PrecisionController};
pub use core::{FormulaCatalog, FormulaDescriptor};
pub use error::{ChartError, ChartResult};
