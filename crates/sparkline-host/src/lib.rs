// File: crates/sparkline-host/src/lib.rs
// Summary: Host adapter; maps the dashboard's create/update callbacks onto a `Visualization`.
// Notes:
// - The host serializes invocations, so the adapter needs no locking: `&mut self` is enough.
// - `done` is invoked exactly once per update, including every failure path.

pub mod error;
pub mod payload;

use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde_json::Value as Json;
use sparkline_core::{
    ContainerSize, FieldFormatters, RenderConfig, RenderInput, RenderSummary, SvgSurface, Visualization,
};

pub use error::HostError;
pub use payload::{HostCell, HostRow, QueryResponse};

/// Error surface and other callbacks the host exposes to a visualization.
pub trait HostRuntime {
    fn clear_errors(&mut self);
    fn add_error(&mut self, title: &str, message: &str);
}

/// Host runtime that keeps the currently shown errors in memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorPanel {
    pub errors: Vec<(String, String)>,
}

impl ErrorPanel {
    pub fn is_empty(&self) -> bool { self.errors.is_empty() }
}

impl HostRuntime for ErrorPanel {
    fn clear_errors(&mut self) { self.errors.clear(); }

    fn add_error(&mut self, title: &str, message: &str) {
        self.errors.push((title.to_string(), message.to_string()));
    }
}

/// Optional per-render details from the host.
#[derive(Clone, Copy, Default)]
pub struct RenderDetails<'a> {
    /// Host value formatters keyed by field name.
    pub formatters: Option<&'a dyn FieldFormatters>,
    /// Current container size, when the host reports it.
    pub container: Option<ContainerSize>,
}

pub type UpdateOutcome = Result<RenderSummary, HostError>;

pub struct HostAdapter<V: Visualization> {
    vis: V,
    surface: SvgSurface,
}

impl<V: Visualization> HostAdapter<V> {
    pub fn new(vis: V) -> Self {
        Self { vis, surface: SvgSurface::default() }
    }

    /// Registration object (id, label, options) in the host's JSON shape.
    pub fn registration(&self) -> Json {
        self.vis.descriptor().to_json()
    }

    pub fn surface(&self) -> &SvgSurface { &self.surface }
    pub fn visualization(&self) -> &V { &self.vis }

    /// One-time mount into a container of `size`.
    pub fn create(&mut self, size: ContainerSize, _options: &Json) {
        self.surface = SvgSurface::new(size);
        self.vis.initialize(&mut self.surface);
        info!("{}: created in {}x{} container", self.vis.descriptor().id, size.width, size.height);
    }

    /// Render one update: clear errors, decode payloads, render, report, then call `done`.
    pub fn update<R, F>(
        &mut self,
        runtime: &mut R,
        data: &Json,
        options: &Json,
        query_response: &Json,
        details: RenderDetails<'_>,
        done: F,
    ) -> UpdateOutcome
    where
        R: HostRuntime + ?Sized,
        F: FnOnce(),
    {
        runtime.clear_errors();
        let outcome = self.try_update(data, options, query_response, details);
        if let Err(e) = &outcome {
            warn!("{}: {}", self.vis.descriptor().id, e);
            runtime.add_error(e.title(), &e.to_string());
        }
        done();
        outcome
    }

    /// Same as [`HostAdapter::update`] with payloads given as JSON text.
    pub fn update_str<R, F>(
        &mut self,
        runtime: &mut R,
        data: &str,
        options: &str,
        query_response: &str,
        details: RenderDetails<'_>,
        done: F,
    ) -> UpdateOutcome
    where
        R: HostRuntime + ?Sized,
        F: FnOnce(),
    {
        let parsed = parse_text("data", data)
            .and_then(|d| Ok((d, parse_text("options", options)?)))
            .and_then(|(d, o)| Ok((d, o, parse_text("query response", query_response)?)));
        match parsed {
            Ok((d, o, q)) => self.update(runtime, &d, &o, &q, details, done),
            Err(e) => {
                runtime.clear_errors();
                warn!("{}: {}", self.vis.descriptor().id, e);
                runtime.add_error(e.title(), &e.to_string());
                done();
                Err(e)
            }
        }
    }

    fn try_update(
        &mut self,
        data: &Json,
        options: &Json,
        query_response: &Json,
        details: RenderDetails<'_>,
    ) -> UpdateOutcome {
        let query: QueryResponse = decode("query response", query_response)?;
        let rows: Vec<HostRow> = if data.is_null() { Vec::new() } else { decode("data", data)? };
        let schema = query.schema();
        let rows = payload::result_set(&rows);
        let config = RenderConfig::from_options(options);
        debug!("{}: update with {} rows", self.vis.descriptor().id, rows.len());

        let mut input = RenderInput::new(&rows, &schema, &config);
        input.formatters = details.formatters;
        input.container = details.container;
        Ok(self.vis.render(&mut self.surface, &input)?)
    }
}

fn decode<T: DeserializeOwned>(what: &'static str, v: &Json) -> Result<T, HostError> {
    T::deserialize(v).map_err(|source| HostError::InvalidPayload { what, source })
}

fn parse_text(what: &'static str, text: &str) -> Result<Json, HostError> {
    if text.trim().is_empty() { return Ok(Json::Null); }
    serde_json::from_str(text).map_err(|source| HostError::InvalidPayload { what, source })
}
