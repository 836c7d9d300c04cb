//! Measurement settings threaded through every engine call

use serde::{Deserialize, Serialize};
use viewmeasure_core::Space;

/// Default number of decimals shown for distances and areas
pub const DEFAULT_PRECISION: usize = 4;

/// What to do with faces that are neither triangles nor quads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacePolicy {
    /// Count them as zero area (legacy behavior)
    #[default]
    SkipUnsupported,
    /// Report them as `Error::InvalidFace`
    Strict,
}

/// Configuration for resolving and evaluating measurements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeasureConfig {
    /// Space the user wants values expressed in
    pub space: Space,
    /// Compute surface areas (heavy on big meshes, off by default)
    pub calc_area: bool,
    /// Decimals used when formatting values
    pub precision: usize,
    /// Handling of n-gon faces during area accumulation
    pub face_policy: FacePolicy,
    /// Whether the host should draw the overlay line
    pub draw_overlay: bool,
}

impl Default for MeasureConfig {
    fn default() -> Self {
        Self {
            space: Space::Global,
            calc_area: false,
            precision: DEFAULT_PRECISION,
            face_policy: FacePolicy::SkipUnsupported,
            draw_overlay: true,
        }
    }
}

impl MeasureConfig {
    pub fn with_space(mut self, space: Space) -> Self {
        self.space = space;
        self
    }

    pub fn with_area(mut self, calc_area: bool) -> Self {
        self.calc_area = calc_area;
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_face_policy(mut self, face_policy: FacePolicy) -> Self {
        self.face_policy = face_policy;
        self
    }

    pub fn with_overlay(mut self, draw_overlay: bool) -> Self {
        self.draw_overlay = draw_overlay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MeasureConfig::default();
        assert_eq!(config.space, Space::Global);
        assert!(!config.calc_area);
        assert_eq!(config.precision, 4);
        assert_eq!(config.face_policy, FacePolicy::SkipUnsupported);
        assert!(config.draw_overlay);
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let config: MeasureConfig =
            serde_json::from_str(r#"{"space":"local","face_policy":"strict"}"#).unwrap();
        assert_eq!(config.space, Space::Local);
        assert_eq!(config.face_policy, FacePolicy::Strict);
        assert_eq!(config.precision, DEFAULT_PRECISION);
        assert!(!config.calc_area);
    }
}
