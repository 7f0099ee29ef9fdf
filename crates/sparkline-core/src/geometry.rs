// File: crates/sparkline-core/src/geometry.rs
// Summary: Sparkline path geometry (scaled points and SVG path data).

use std::fmt::Write as _;

use crate::aggregate::series_values;
use crate::scale::{IndexScale, ValueScale};
use crate::series::ResultSet;
use crate::types::Viewport;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
}

/// Scaled polyline of a sparkline. Ephemeral: rebuilt on every render.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathGeometry {
    pub points: Vec<Point>,
}

impl PathGeometry {
    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// SVG path data: `M` to the first point, `L` to each following point.
    /// Empty when the geometry has no points.
    pub fn to_path_data(&self) -> String {
        let mut d = String::with_capacity(self.points.len() * 16);
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 { d.push(' '); }
            let cmd = if i == 0 { 'M' } else { 'L' };
            // writing into a String cannot fail
            let _ = write!(d, "{cmd}{},{}", p.x, p.y);
        }
        d
    }
}

/// Scale an ordered series into the viewport.
///
/// x is driven by row index over the full series length; null and non-finite
/// values are skipped (they keep their x slot but draw nothing). Fewer than
/// two drawable points produce an empty geometry.
pub fn sparkline_geometry(values: &[Option<f64>], viewport: &Viewport) -> PathGeometry {
    let drawable = || {
        values
            .iter()
            .enumerate()
            .filter_map(|(i, v)| match *v {
                Some(v) if v.is_finite() => Some((i, v)),
                _ => None,
            })
    };
    if drawable().take(2).count() < 2 {
        return PathGeometry::default();
    }
    let Some(ys) = ValueScale::fit(viewport, drawable().map(|(_, v)| v)) else {
        return PathGeometry::default();
    };
    let xs = IndexScale::new(viewport, values.len());
    let points = drawable().map(|(i, v)| Point::new(xs.to_px(i), ys.to_px(v))).collect();
    PathGeometry { points }
}

/// Sparkline of `field` across `rows`, scaled to `width` x `height` with `padding`.
pub fn compute_sparkline_path(rows: &ResultSet, field: &str, width: f64, height: f64, padding: f64) -> PathGeometry {
    let values = series_values(rows, field);
    sparkline_geometry(&values, &Viewport::new(width, height, padding))
}
