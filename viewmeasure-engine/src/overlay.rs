//! World-space line segment a host can draw over the viewport

use serde::Serialize;
use viewmeasure_core::{Point3d, Space};

/// RGBA colour, components in `0.0..=1.0`
pub type Rgba = [f32; 4];

/// Line colour for local-space measurements
pub const COLOR_LOCAL: Rgba = [1.0, 0.0, 0.0, 0.8];

/// Line colour for global-space measurements
pub const COLOR_GLOBAL: Rgba = [0.0, 0.0, 1.0, 0.8];

/// Default line width in pixels
pub const LINE_WIDTH: f32 = 2.0;

/// The measured segment, endpoints always in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Overlay {
    pub start: Point3d,
    pub end: Point3d,
    pub color: Rgba,
    pub width: f32,
}

impl Overlay {
    pub fn new(start: Point3d, end: Point3d, space: Space) -> Self {
        let color = match space {
            Space::Local => COLOR_LOCAL,
            Space::Global => COLOR_GLOBAL,
        };
        Self {
            start,
            end,
            color,
            width: LINE_WIDTH,
        }
    }

    /// Where the value label goes
    pub fn midpoint(&self) -> Point3d {
        self.end + (self.start - self.end) * 0.5
    }

    /// World-space length of the drawn segment
    pub fn length(&self) -> f64 {
        (self.start - self.end).norm()
    }
}
