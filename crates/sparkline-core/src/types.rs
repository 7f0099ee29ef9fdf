// File: crates/sparkline-core/src/types.rs
// Summary: Shared types and constants (surface sizes, drawing-area proportions, padding).

/// Default container width in pixels when the host does not report one.
pub const WIDTH: f64 = 400.0;
/// Default container height in pixels when the host does not report one.
pub const HEIGHT: f64 = 200.0;
/// Inner padding of the sparkline drawing area, in pixels.
pub const PADDING: f64 = 3.0;

/// Fraction of the container width taken by the sparkline `<svg>`.
pub const SPARKLINE_WIDTH_RATIO: f64 = 0.9;
/// Fraction of the container height taken by the sparkline `<svg>`.
pub const SPARKLINE_HEIGHT_RATIO: f64 = 0.45;

/// Size of the host-provided container, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerSize {
    pub width: f64,
    pub height: f64,
}

impl ContainerSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for ContainerSize {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

/// Drawing area of the sparkline.
/// Contract: `width`, `height` and `padding` are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Viewport {
    /// Create a viewport; negative inputs are clamped to zero.
    pub fn new(width: f64, height: f64, padding: f64) -> Self {
        Self { width: width.max(0.0), height: height.max(0.0), padding: padding.max(0.0) }
    }

    /// Sparkline area inside a container, using the skeleton's stylesheet proportions.
    pub fn for_container(size: ContainerSize) -> Self {
        Self::new(size.width * SPARKLINE_WIDTH_RATIO, size.height * SPARKLINE_HEIGHT_RATIO, PADDING)
    }

    /// Horizontal span available to points (width minus both paddings).
    pub fn inner_width(&self) -> f64 { self.width - 2.0 * self.padding }
    /// Vertical span available to points (height minus both paddings).
    pub fn inner_height(&self) -> f64 { self.height - 2.0 * self.padding }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::for_container(ContainerSize::default())
    }
}
