// File: crates/sparkline-core/src/scale.rs
// Summary: Index (X) and value (Y) scale transforms for the sparkline drawing area.

use crate::types::Viewport;

/// Horizontal scale spreading `count` row indices evenly across the padded width.
///
/// Index 0 lands on the left padding, index `count - 1` on `width - padding`.
#[derive(Clone, Copy, Debug)]
pub struct IndexScale {
    pub left_px: f64,
    pub span_px: f64,
    pub count: usize,
}

impl IndexScale {
    pub fn new(viewport: &Viewport, count: usize) -> Self {
        Self { left_px: viewport.padding, span_px: viewport.inner_width(), count }
    }

    #[inline]
    pub fn to_px(&self, i: usize) -> f64 {
        if self.count < 2 { return self.left_px; }
        i as f64 / (self.count - 1) as f64 * self.span_px + self.left_px
    }
}

/// Vertical value scale mapping `[vmin, vmax]` to `[height - padding, padding]`.
///
/// Drawing coordinates grow downward, so higher values map to smaller y.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub height_px: f64,
    pub padding_px: f64,
    pub vmin: f64,
    pub vmax: f64,
}

impl ValueScale {
    pub fn new_linear(viewport: &Viewport, vmin: f64, vmax: f64) -> Self {
        Self { height_px: viewport.height, padding_px: viewport.padding, vmin, vmax }
    }

    /// Fit the scale to the finite values of `values`; `None` when there are none.
    pub fn fit<I: IntoIterator<Item = f64>>(viewport: &Viewport, values: I) -> Option<Self> {
        let mut vmin = f64::INFINITY;
        let mut vmax = f64::NEG_INFINITY;
        for v in values.into_iter().filter(|v| v.is_finite()) {
            vmin = vmin.min(v);
            vmax = vmax.max(v);
        }
        if !vmin.is_finite() || !vmax.is_finite() { return None; }
        Some(Self::new_linear(viewport, vmin, vmax))
    }

    /// True when every value is equal (zero range).
    #[inline]
    pub fn is_flat(&self) -> bool { self.vmax - self.vmin == 0.0 }

    /// Range used as divisor; a zero range is replaced by 1.
    #[inline]
    pub fn range(&self) -> f64 {
        let r = self.vmax - self.vmin;
        if r == 0.0 { 1.0 } else { r }
    }

    #[inline]
    pub fn to_px(&self, y: f64) -> f64 {
        // flat series: draw through the middle of the padded area
        if self.is_flat() { return self.height_px / 2.0; }
        let inner = self.height_px - 2.0 * self.padding_px;
        self.height_px - ((y - self.vmin) / self.range()) * inner - self.padding_px
    }
}
