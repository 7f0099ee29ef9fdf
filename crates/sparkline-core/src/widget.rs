// File: crates/sparkline-core/src/widget.rs
// Summary: Single value sparkline widget: average of one measure plus a trend line of another.

use log::{debug, warn};

use crate::aggregate::{compute_average, series_values};
use crate::config::{DEFAULT_VALUE_FORMAT, SPARKLINE_COLOR, VALUE_COLOR, VALUE_FORMAT};
use crate::format::ValueFormatter;
use crate::geometry::sparkline_geometry;
use crate::plugin::{
    OptionDisplay, OptionSpec, OptionType, RenderInput, RenderResult, RenderSummary, Visualization,
    VisualizationDescriptor,
};
use crate::surface::SvgSurface;
use crate::validate::validate;

pub const WIDGET_ID: &str = "single_value_sparkline_avg";
pub const WIDGET_LABEL: &str = "Single Value Sparkline (Avg)";

pub struct SparklineWidget {
    descriptor: VisualizationDescriptor,
}

impl SparklineWidget {
    pub fn new() -> Self {
        Self { descriptor: descriptor() }
    }
}

impl Default for SparklineWidget {
    fn default() -> Self { Self::new() }
}

/// Registration: id, label and the three user options with their defaults.
pub fn descriptor() -> VisualizationDescriptor {
    VisualizationDescriptor {
        id: WIDGET_ID,
        label: WIDGET_LABEL,
        options: vec![
            OptionSpec {
                key: SPARKLINE_COLOR,
                kind: OptionType::String,
                label: "Sparkline Color",
                display: OptionDisplay::Color,
                default: "#60B17D",
                placeholder: None,
            },
            OptionSpec {
                key: VALUE_COLOR,
                kind: OptionType::String,
                label: "Value Color",
                display: OptionDisplay::Color,
                default: "#424242",
                placeholder: None,
            },
            OptionSpec {
                key: VALUE_FORMAT,
                kind: OptionType::String,
                label: "Value Format",
                display: OptionDisplay::Text,
                default: DEFAULT_VALUE_FORMAT,
                placeholder: Some(DEFAULT_VALUE_FORMAT),
            },
        ],
    }
}

impl Visualization for SparklineWidget {
    fn descriptor(&self) -> &VisualizationDescriptor { &self.descriptor }

    fn initialize(&mut self, surface: &mut SvgSurface) {
        surface.mount();
    }

    fn render(&mut self, surface: &mut SvgSurface, input: &RenderInput<'_>) -> RenderResult {
        let binding = validate(input.schema).inspect_err(|e| {
            warn!(
                "{WIDGET_ID}: rejected query with {} dimension(s) and {} measure(s)",
                e.dimensions, e.measures
            );
        })?;
        if !surface.is_mounted() {
            self.initialize(surface);
        }
        if let Some(size) = input.container {
            surface.resize(size);
        }

        let average = compute_average(input.rows, &binding.value);
        let formatter = ValueFormatter::resolve(
            input.formatters,
            &binding.value,
            input.config.value_format.as_deref(),
        );
        let value_text = formatter.format(average);

        let values = series_values(input.rows, &binding.series);
        let geometry = sparkline_geometry(&values, &surface.sparkline_viewport());

        surface.set_value(value_text.clone(), input.config.value_color);
        surface.clear_sparkline();
        if !geometry.is_empty() {
            surface.draw_sparkline(geometry.to_path_data(), input.config.sparkline_color);
        }
        debug!(
            "{WIDGET_ID}: rendered {} rows, average {average}, {} sparkline points, formatter {:?}",
            input.rows.len(),
            geometry.points.len(),
            formatter
        );

        Ok(RenderSummary { average, value_text, geometry })
    }
}
