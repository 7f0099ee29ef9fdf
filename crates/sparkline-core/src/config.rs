// File: crates/sparkline-core/src/config.rs
// Summary: User-adjustable presentation settings (colors and value format).

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

use crate::theme::Color;

/// Option keys, as registered with the host.
pub const SPARKLINE_COLOR: &str = "sparkline_color";
pub const VALUE_COLOR: &str = "value_color";
pub const VALUE_FORMAT: &str = "value_format";

/// Default number pattern for the self-formatting variant.
pub const DEFAULT_VALUE_FORMAT: &str = "#,##0.0";

/// Presentation parameters. They only affect display, never the computed numbers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub sparkline_color: Color,
    pub value_color: Color,
    /// Number pattern used when the host supplies no formatter for the value field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_format: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            sparkline_color: Color::SPARKLINE,
            value_color: Color::VALUE,
            value_format: Some(DEFAULT_VALUE_FORMAT.to_string()),
        }
    }
}

impl RenderConfig {
    /// Lenient read of a host options object.
    ///
    /// Missing keys take their registered defaults; malformed colors are
    /// logged and replaced by the default. An empty `value_format` disables
    /// pattern formatting.
    pub fn from_options(options: &Json) -> Self {
        let mut cfg = Self::default();
        let Some(map) = options.as_object() else {
            if !options.is_null() {
                warn!("render options are not an object; using defaults");
            }
            return cfg;
        };
        if let Some(c) = color_option(map.get(SPARKLINE_COLOR), SPARKLINE_COLOR) {
            cfg.sparkline_color = c;
        }
        if let Some(c) = color_option(map.get(VALUE_COLOR), VALUE_COLOR) {
            cfg.value_color = c;
        }
        match map.get(VALUE_FORMAT) {
            Some(Json::String(s)) if s.trim().is_empty() => cfg.value_format = None,
            Some(Json::String(s)) => cfg.value_format = Some(s.clone()),
            Some(Json::Null) | None => {}
            Some(other) => warn!("option {VALUE_FORMAT} is not a string ({other}); using default"),
        }
        cfg
    }

    pub fn with_value_format(mut self, pattern: Option<&str>) -> Self {
        self.value_format = pattern.map(str::to_string);
        self
    }
}

fn color_option(v: Option<&Json>, key: &str) -> Option<Color> {
    match v? {
        Json::String(s) => match s.parse() {
            Ok(c) => Some(c),
            Err(e) => {
                warn!("option {key}: {e}; using default");
                None
            }
        },
        Json::Null => None,
        other => {
            warn!("option {key} is not a string ({other}); using default");
            None
        }
    }
}
