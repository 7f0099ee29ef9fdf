// File: crates/sparkline-core/src/lib.rs
// Summary: Core library entry point; exports the widget, its data model and sparkline geometry.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod format;
pub mod geometry;
pub mod plugin;
pub mod scale;
pub mod series;
pub mod surface;
pub mod theme;
pub mod types;
pub mod validate;
pub mod widget;

pub use aggregate::compute_average;
pub use config::RenderConfig;
pub use error::ConfigurationError;
pub use format::{format_locale, FieldFormatters, FormatterMap, NumberPattern, ValueFormatter};
pub use geometry::{compute_sparkline_path, sparkline_geometry, PathGeometry, Point};
pub use plugin::{RenderInput, RenderResult, RenderSummary, Visualization, VisualizationDescriptor};
pub use series::{Cell, FieldDescriptor, FieldRole, QuerySchema, ResultRow, ResultSet};
pub use surface::SvgSurface;
pub use theme::Color;
pub use types::{ContainerSize, Viewport};
pub use validate::{validate, FieldBinding};
pub use widget::SparklineWidget;
