mod chart_options;
mod config_builder;
mod display_settings;
mod formatter;
mod json_contract;
mod observer;
mod precision_controller;
mod registry;
mod shared;

pub use chart_options::{
    AxisLabels, AxisTitle, ChartConfiguration, ChartSection, ChartType, ColorStop, ExportFile,
    ExportFilenames, FillType, Gradient, GradientDirection, GradientFill, GridAxisLines,
    GridLines, LineVisibility, StrokeCurve, StrokeStyle, Toolbar, Tooltip, TooltipAxis, XAxis,
    YAxis, ZoomAxis, ZoomPolicy,
};
pub use config_builder::{
    CHART_ID, ConfigBuilder, GRADIENT_STOPS, TIME_AXIS_TITLE, TOOLTIP_HOUR_OFFSET,
};
pub use display_settings::DisplaySettings;
pub use formatter::{FormatterSpec, LabelFormatter, ValueFormatterFn};
pub use json_contract::{CHART_CONFIGURATION_JSON_SCHEMA_V1, ChartConfigurationJsonContractV1};
pub use observer::{ConfigurationContext, ConfigurationEvent, ConfigurationObserver};
pub use precision_controller::PrecisionController;
pub use registry::ControllerRegistry;
pub use shared::SharedPrecisionController;
