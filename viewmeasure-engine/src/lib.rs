//! # viewmeasure engine
//!
//! Measures distances and surface areas for whatever is selected in a 3D
//! viewport. The host passes a read-only [`SelectionContext`] snapshot and a
//! [`MeasureConfig`]; the engine resolves the selection into a
//! [`MeasurementInput`] and evaluates it into a [`MeasurementResult`]. Nothing
//! is cached between calls and no input is mutated.
//!
//! ```rust
//! use viewmeasure_core::{Point3d, SceneObject};
//! use viewmeasure_engine::{measure, MeasureConfig, SelectionContext};
//!
//! let a = SceneObject::empty_at("A", Point3d::new(0.0, 0.0, 0.0));
//! let b = SceneObject::empty_at("B", Point3d::new(5.0, 0.0, 0.0));
//!
//! let ctx = SelectionContext::object_mode(Point3d::origin(), vec![&a, &b]);
//! let result = measure(&ctx, &MeasureConfig::default()).unwrap();
//! assert_eq!(result.scalar(), 5.0);
//! assert_eq!(result.summary(4), "Distance: 5.0000 BU (A <-> B, Global)");
//! ```

pub mod area;
pub mod config;
pub mod distance;
pub mod evaluate;
pub mod format;
pub mod input;
pub mod overlay;
pub mod result;
pub mod selection;

pub use area::{face_area, quad_area, surface_area, surface_area_report, triangle_area, AreaReport, FaceArea};
pub use config::{FacePolicy, MeasureConfig, DEFAULT_PRECISION};
pub use distance::{distance, point_distance, point_in_space, world_position};
pub use evaluate::{evaluate, measure};
pub use format::{format_area, format_distance, format_value, round_to, AREA_UNIT, LENGTH_UNIT};
pub use input::{Anchor, AreaQuery, AreaTarget, DistanceQuery, MeasurePoint, MeasurementInput};
pub use overlay::{Overlay, Rgba, COLOR_GLOBAL, COLOR_LOCAL};
pub use result::{AreaFailure, AreaMeasurement, DistanceMeasurement, MeasurementKind, MeasurementResult, ObjectArea};
pub use selection::{resolve_selection, InteractionMode, SelectionContext};
