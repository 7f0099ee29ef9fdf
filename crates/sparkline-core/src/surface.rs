// File: crates/sparkline-core/src/surface.rs
// Summary: Retained SVG/HTML drawing surface owned by one widget instance.
// Notes:
// - The static skeleton (stylesheet, value slot, sparkline svg) is created once by `mount`.
// - Renders mutate the slots in place; each render replaces the previous path entirely.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};

use crate::theme::Color;
use crate::types::{ContainerSize, Viewport};

const STYLE: &str = "\
.vis-container { display: flex; flex-direction: column; justify-content: center; align-items: center; height: 100%; font-family: 'Google Sans', 'Noto Sans', sans-serif; }
.vis-value { font-size: 4em; font-weight: 500; margin-bottom: 8px; }
.vis-sparkline-svg { width: 90%; height: 45%; }
.sparkline-path { fill: none; stroke-width: 2.5; }";

/// The single `<path>` drawn inside the sparkline svg.
#[derive(Clone, Debug, PartialEq)]
pub struct SparklineElement {
    pub d: String,
    pub stroke: Color,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SvgSurface {
    size: ContainerSize,
    mounted: bool,
    value_text: String,
    value_color: Option<Color>,
    sparkline: Option<SparklineElement>,
}

impl SvgSurface {
    pub fn new(size: ContainerSize) -> Self {
        Self { size, ..Self::default() }
    }

    /// Create the static skeleton. Idempotent: a mounted surface is left alone.
    pub fn mount(&mut self) {
        if self.mounted { return; }
        self.mounted = true;
        self.value_text.clear();
        self.value_color = None;
        self.sparkline = None;
    }

    pub fn is_mounted(&self) -> bool { self.mounted }
    pub fn size(&self) -> ContainerSize { self.size }

    /// Host reported a new container size; takes effect on the next render.
    pub fn resize(&mut self, size: ContainerSize) { self.size = size; }

    /// Drawing area of the sparkline svg for the current container size.
    pub fn sparkline_viewport(&self) -> Viewport { Viewport::for_container(self.size) }

    pub fn value_text(&self) -> &str { &self.value_text }
    pub fn value_color(&self) -> Option<Color> { self.value_color }
    pub fn sparkline(&self) -> Option<&SparklineElement> { self.sparkline.as_ref() }

    pub fn set_value(&mut self, text: impl Into<String>, color: Color) {
        self.value_text = text.into();
        self.value_color = Some(color);
    }

    /// Remove any drawn sparkline.
    pub fn clear_sparkline(&mut self) { self.sparkline = None; }

    /// Replace the sparkline with a single path.
    pub fn draw_sparkline(&mut self, d: String, stroke: Color) {
        self.sparkline = Some(SparklineElement { d, stroke });
    }

    /// HTML fragment as it would sit inside the host container.
    pub fn to_markup(&self) -> String {
        let vp = self.sparkline_viewport();
        let mut out = String::with_capacity(1024);
        let _ = writeln!(out, "<style>\n{STYLE}\n</style>");
        out.push_str("<div class=\"vis-container\">\n");
        match self.value_color {
            Some(c) => {
                let _ = writeln!(out, "  <div class=\"vis-value\" style=\"color: {}\">{}</div>", c, escape(&self.value_text));
            }
            None => {
                let _ = writeln!(out, "  <div class=\"vis-value\">{}</div>", escape(&self.value_text));
            }
        }
        let _ = write!(
            out,
            "  <svg class=\"vis-sparkline-svg\" xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\">",
            vp.width, vp.height
        );
        if let Some(p) = &self.sparkline {
            let _ = write!(out, "{}", path_element(p));
        }
        out.push_str("</svg>\n</div>\n");
        out
    }

    /// Standalone SVG document: value text above the sparkline.
    pub fn to_svg_document(&self) -> String {
        let ContainerSize { width, height } = self.size;
        let vp = self.sparkline_viewport();
        let left = (width - vp.width) / 2.0;
        let top = height - vp.height - height * 0.05;
        let mut out = String::with_capacity(1024);
        let _ = writeln!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
        );
        let fill = self.value_color.unwrap_or(Color::VALUE);
        let _ = writeln!(
            out,
            "  <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-family=\"'Google Sans', 'Noto Sans', sans-serif\" font-size=\"{}\" font-weight=\"500\" fill=\"{}\">{}</text>",
            width / 2.0,
            top - 8.0,
            (height * 0.25).round().max(1.0),
            fill,
            escape(&self.value_text)
        );
        let _ = write!(out, "  <g transform=\"translate({left},{top})\">");
        if let Some(p) = &self.sparkline {
            let _ = write!(out, "{}", path_element(p));
        }
        out.push_str("</g>\n</svg>\n");
        out
    }

    /// Write the surface to `path`: `.svg` gets a standalone document, anything else HTML markup.
    pub fn render_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let is_svg = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("svg"))
            .unwrap_or(false);
        let body = if is_svg { self.to_svg_document() } else { self.to_markup() };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, body).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

fn path_element(p: &SparklineElement) -> String {
    format!(
        "<path d=\"{}\" class=\"sparkline-path\" style=\"fill: none; stroke-width: 2.5; stroke: {}\"/>",
        escape(&p.d),
        p.stroke
    )
}

/// Escape text for XML/HTML content and attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
