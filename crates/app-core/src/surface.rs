//! Capability traits the wave renderer needs from its host.
//!
//! These types intentionally avoid referencing platform-specific APIs.
//! The web frontend implements them over a canvas 2D context; tests
//! implement them with a recording fake and assert on the call stream.

/// Stroke appearance for one strand. Strokes are white; only the alpha
/// and the line width vary across the bundle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub alpha: f64,
    pub width: f64,
}

/// Read-only metrics of the element hosting the drawing surface.
pub trait HostMetrics {
    /// Physical-to-logical pixel ratio reported by the host.
    fn device_pixel_ratio(&self) -> f64;
    /// Current rendered box of the host element in logical (CSS) pixels.
    fn surface_box(&self) -> (f64, f64);
}

/// Minimal 2D drawing surface: backing-store sizing, a DPR transform,
/// and single-path stroking. All coordinates are logical pixels once
/// the pixel scale is set.
pub trait DrawSurface {
    fn set_backing_size(&mut self, width: u32, height: u32);
    fn set_pixel_scale(&mut self, dpr: f64);
    fn clear(&mut self, width: f64, height: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self, style: &StrokeStyle);
}
