// File: crates/sparkline-core/src/plugin.rs
// Summary: Visualization trait and registration descriptor, free of host vocabulary.

use serde::Serialize;

use crate::config::RenderConfig;
use crate::error::ConfigurationError;
use crate::format::FieldFormatters;
use crate::geometry::PathGeometry;
use crate::series::{QuerySchema, ResultSet};
use crate::surface::SvgSurface;
use crate::types::ContainerSize;

/// Value type of a user option.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    String,
}

/// UI affordance the host shows for an option.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionDisplay {
    Color,
    Text,
}

/// One user-configurable option.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OptionSpec {
    #[serde(skip)]
    pub key: &'static str,
    #[serde(rename = "type")]
    pub kind: OptionType,
    pub label: &'static str,
    pub display: OptionDisplay,
    pub default: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
}

/// What the host needs to register a visualization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisualizationDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    pub options: Vec<OptionSpec>,
}

impl VisualizationDescriptor {
    pub fn option(&self, key: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|o| o.key == key)
    }

    /// Registration object in the host's JSON shape.
    pub fn to_json(&self) -> serde_json::Value {
        let options: serde_json::Map<String, serde_json::Value> = self
            .options
            .iter()
            .map(|o| (o.key.to_string(), serde_json::json!(o)))
            .collect();
        serde_json::json!({ "id": self.id, "label": self.label, "options": options })
    }
}

/// Everything one render needs; arrives fresh on every update.
#[derive(Clone, Copy)]
pub struct RenderInput<'a> {
    pub rows: &'a ResultSet,
    pub schema: &'a QuerySchema,
    pub config: &'a RenderConfig,
    pub formatters: Option<&'a dyn FieldFormatters>,
    /// New container size reported by the host; applied only once the query is accepted.
    pub container: Option<ContainerSize>,
}

impl<'a> RenderInput<'a> {
    pub fn new(rows: &'a ResultSet, schema: &'a QuerySchema, config: &'a RenderConfig) -> Self {
        Self { rows, schema, config, formatters: None, container: None }
    }

    pub fn with_formatters(mut self, formatters: &'a dyn FieldFormatters) -> Self {
        self.formatters = Some(formatters);
        self
    }

    pub fn with_container(mut self, size: ContainerSize) -> Self {
        self.container = Some(size);
        self
    }
}

/// Outcome of a successful render.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderSummary {
    pub average: f64,
    pub value_text: String,
    pub geometry: PathGeometry,
}

pub type RenderResult = Result<RenderSummary, ConfigurationError>;

/// A visualization driven by an external host.
pub trait Visualization {
    fn descriptor(&self) -> &VisualizationDescriptor;

    /// One-time setup of the static skeleton.
    fn initialize(&mut self, surface: &mut SvgSurface);

    /// Compute and draw. On error the surface must be left untouched.
    fn render(&mut self, surface: &mut SvgSurface, input: &RenderInput<'_>) -> RenderResult;
}
