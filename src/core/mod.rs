pub mod catalog;
pub mod descriptor;
pub mod number_format;

pub use catalog::{CatalogEntry, FormulaCatalog, FormulaRoute};
pub use descriptor::FormulaDescriptor;
pub use number_format::{
    DEFAULT_PRECISION, MAX_PRECISION, Precision, format_fixed, format_floor, format_plain,
};
