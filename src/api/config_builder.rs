use std::sync::Arc;

use smallvec::SmallVec;
use tracing::debug;

use crate::core::{FormulaDescriptor, Precision};
use crate::error::ChartResult;

use super::{
    AxisLabels, AxisTitle, ChartConfiguration, ChartSection, ChartType, ColorStop,
    ExportFilenames, FillType, Gradient, GradientDirection, GradientFill, GridAxisLines,
    GridLines, LabelFormatter, LineVisibility, StrokeCurve, StrokeStyle, Toolbar, Tooltip,
    TooltipAxis, XAxis, YAxis, ZoomAxis, ZoomPolicy,
};

pub const CHART_ID: &str = "basic-bar";
pub const TIME_AXIS_TITLE: &str = "Time (hours)";

/// Offset subtracted by the tooltip x formatter: series indices start at 1
/// while displayed hours start at 0.
pub const TOOLTIP_HOUR_OFFSET: i32 = 1;

/// Shared vertical gradient: dark blue, blue, light blue, light gray.
pub const GRADIENT_STOPS: [ColorStop; 4] = [
    ColorStop {
        offset: 25,
        color: "#00008B",
    },
    ColorStop {
        offset: 50,
        color: "#0000FF",
    },
    ColorStop {
        offset: 75,
        color: "#ADD8E6",
    },
    ColorStop {
        offset: 100,
        color: "#D3D3D3",
    },
];

/// The two formatters whose output depends on display precision.
#[derive(Debug, Clone)]
pub(crate) struct PrecisionFormatters {
    pub(crate) y_axis_label: LabelFormatter,
    pub(crate) tooltip_value: LabelFormatter,
}

impl PrecisionFormatters {
    pub(crate) fn new(precision: Precision, unit: &str) -> Self {
        Self {
            y_axis_label: LabelFormatter::fixed_decimals(precision),
            tooltip_value: LabelFormatter::fixed_decimals_with_unit(precision, unit),
        }
    }
}

/// Derives full chart configurations from formula descriptors.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigBuilder;

impl ConfigBuilder {
    /// Builds the configuration for `descriptor` at a raw precision.
    ///
    /// Fails with [`crate::ChartError::InvalidArgument`] for a malformed
    /// descriptor or a precision outside `0..=100`.
    pub fn build(
        descriptor: &FormulaDescriptor,
        precision: i64,
    ) -> ChartResult<ChartConfiguration> {
        Self::build_with_precision(descriptor, Precision::new(precision)?)
    }

    pub fn build_with_precision(
        descriptor: &FormulaDescriptor,
        precision: Precision,
    ) -> ChartResult<ChartConfiguration> {
        descriptor.validate()?;

        let categories: Arc<[u32]> = (0..descriptor.time_range_length).collect();
        let tick_amount = descriptor.tick_amount();
        let fill = descriptor.gradient_enabled.then(|| Arc::new(gradient_fill()));
        let formatters = PrecisionFormatters::new(precision, &descriptor.unit);

        debug!(
            formula = %descriptor.id,
            categories = categories.len(),
            ?tick_amount,
            gradient = descriptor.gradient_enabled,
            %precision,
            "build chart configuration"
        );

        Ok(ChartConfiguration {
            chart: Arc::new(chart_section(&descriptor.export_base_name)),
            stroke: Arc::new(StrokeStyle {
                curve: StrokeCurve::Straight,
            }),
            fill,
            grid: Arc::new(GridLines {
                xaxis: GridAxisLines {
                    lines: LineVisibility { show: false },
                },
                yaxis: GridAxisLines {
                    lines: LineVisibility { show: true },
                },
            }),
            xaxis: XAxis {
                title: Arc::new(AxisTitle {
                    text: TIME_AXIS_TITLE.to_owned(),
                }),
                categories,
                tick_amount,
                labels: AxisLabels {
                    formatter: LabelFormatter::whole_hours(),
                },
            },
            yaxis: YAxis {
                title: Arc::new(AxisTitle {
                    text: descriptor.y_axis_title.clone(),
                }),
                labels: AxisLabels {
                    formatter: formatters.y_axis_label,
                },
            },
            tooltip: Tooltip {
                x: TooltipAxis {
                    formatter: LabelFormatter::index_hours(TOOLTIP_HOUR_OFFSET),
                },
                y: TooltipAxis {
                    formatter: formatters.tooltip_value,
                },
            },
        })
    }
}

fn chart_section(export_base_name: &str) -> ChartSection {
    ChartSection {
        id: CHART_ID,
        chart_type: ChartType::Line,
        zoom: ZoomPolicy {
            axis: ZoomAxis::X,
            enabled: false,
            auto_scale_y_axis: true,
        },
        toolbar: Toolbar {
            export: ExportFilenames::uniform(export_base_name),
        },
    }
}

fn gradient_fill() -> GradientFill {
    GradientFill {
        fill_type: FillType::Gradient,
        gradient: Gradient {
            direction: GradientDirection::Vertical,
            color_stops: SmallVec::from_buf(GRADIENT_STOPS),
        },
    }
}
