use std::sync::Arc;

use serde::Serialize;
use smallvec::SmallVec;

use super::LabelFormatter;
use super::config_builder::PrecisionFormatters;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoomAxis {
    X,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoomPolicy {
    #[serde(rename = "type")]
    pub axis: ZoomAxis,
    pub enabled: bool,
    #[serde(rename = "autoScaleYaxis")]
    pub auto_scale_y_axis: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportFile {
    pub filename: String,
}

/// File base names used by the renderer's export toolbar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportFilenames {
    pub csv: ExportFile,
    pub svg: ExportFile,
    pub png: ExportFile,
}

impl ExportFilenames {
    #[must_use]
    pub fn uniform(base_name: &str) -> Self {
        let file = ExportFile {
            filename: base_name.to_owned(),
        };
        Self {
            csv: file.clone(),
            svg: file.clone(),
            png: file,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toolbar {
    pub export: ExportFilenames,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSection {
    pub id: &'static str,
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub zoom: ZoomPolicy,
    pub toolbar: Toolbar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeCurve {
    Straight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrokeStyle {
    pub curve: StrokeCurve,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FillType {
    Gradient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientDirection {
    Vertical,
}

/// One gradient stop; `offset` is a percentage of the plot height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorStop {
    pub offset: u8,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Gradient {
    #[serde(rename = "type")]
    pub direction: GradientDirection,
    pub color_stops: SmallVec<[ColorStop; 4]>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradientFill {
    #[serde(rename = "type")]
    pub fill_type: FillType,
    pub gradient: Gradient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineVisibility {
    pub show: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridAxisLines {
    pub lines: LineVisibility,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridLines {
    pub xaxis: GridAxisLines,
    pub yaxis: GridAxisLines,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AxisTitle {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AxisLabels {
    pub formatter: LabelFormatter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XAxis {
    pub(crate) title: Arc<AxisTitle>,
    pub(crate) categories: Arc<[u32]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) tick_amount: Option<u32>,
    pub(crate) labels: AxisLabels,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YAxis {
    pub(crate) title: Arc<AxisTitle>,
    pub(crate) labels: AxisLabels,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TooltipAxis {
    pub formatter: LabelFormatter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tooltip {
    pub(crate) x: TooltipAxis,
    pub(crate) y: TooltipAxis,
}

/// Complete display configuration consumed by the rendering library.
///
/// Structural sections sit behind `Arc`s and are never replaced after
/// construction, so renderers can diff by pointer. Only
/// [`crate::api::PrecisionController::set_precision`] mutates a built
/// configuration, and it touches the y-axis label and tooltip value
/// formatters only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartConfiguration {
    pub(crate) chart: Arc<ChartSection>,
    pub(crate) stroke: Arc<StrokeStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) fill: Option<Arc<GradientFill>>,
    pub(crate) grid: Arc<GridLines>,
    pub(crate) xaxis: XAxis,
    pub(crate) yaxis: YAxis,
    pub(crate) tooltip: Tooltip,
}

impl ChartConfiguration {
    #[must_use]
    pub fn chart(&self) -> &Arc<ChartSection> {
        &self.chart
    }

    #[must_use]
    pub fn export_filenames(&self) -> &ExportFilenames {
        &self.chart.toolbar.export
    }

    #[must_use]
    pub fn stroke(&self) -> &Arc<StrokeStyle> {
        &self.stroke
    }

    #[must_use]
    pub fn fill(&self) -> Option<&Arc<GradientFill>> {
        self.fill.as_ref()
    }

    /// Gradient stops, empty when the formula disables the gradient fill.
    #[must_use]
    pub fn gradient_stops(&self) -> &[ColorStop] {
        match self.fill.as_deref() {
            Some(fill) => fill.gradient.color_stops.as_slice(),
            None => &[],
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Arc<GridLines> {
        &self.grid
    }

    #[must_use]
    pub fn x_axis_title(&self) -> &Arc<AxisTitle> {
        &self.xaxis.title
    }

    #[must_use]
    pub fn categories(&self) -> &Arc<[u32]> {
        &self.xaxis.categories
    }

    #[must_use]
    pub fn tick_amount(&self) -> Option<u32> {
        self.xaxis.tick_amount
    }

    #[must_use]
    pub fn y_axis_title(&self) -> &Arc<AxisTitle> {
        &self.yaxis.title
    }

    #[must_use]
    pub fn x_axis_label_formatter(&self) -> &LabelFormatter {
        &self.xaxis.labels.formatter
    }

    #[must_use]
    pub fn y_axis_label_formatter(&self) -> &LabelFormatter {
        &self.yaxis.labels.formatter
    }

    #[must_use]
    pub fn tooltip_x_formatter(&self) -> &LabelFormatter {
        &self.tooltip.x.formatter
    }

    #[must_use]
    pub fn tooltip_value_formatter(&self) -> &LabelFormatter {
        &self.tooltip.y.formatter
    }

    /// Swaps both precision-dependent formatters together.
    pub(crate) fn replace_precision_formatters(&mut self, formatters: PrecisionFormatters) {
        self.yaxis.labels.formatter = formatters.y_axis_label;
        self.tooltip.y.formatter = formatters.tooltip_value;
    }
}
