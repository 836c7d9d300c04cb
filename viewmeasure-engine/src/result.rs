//! Evaluated measurements handed back to the host

use serde::Serialize;
use viewmeasure_core::Space;

use crate::format::{format_area, format_distance};
use crate::input::Anchor;
use crate::overlay::Overlay;

/// Which quantity a result carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementKind {
    Distance,
    Area,
}

/// Surface area of one object
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectArea {
    pub name: String,
    pub area: f64,
    pub face_count: usize,
    pub skipped_faces: usize,
}

/// An object whose area could not be measured
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaFailure {
    pub name: String,
    pub error: String,
}

/// A distance between two anchors
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceMeasurement {
    pub value: f64,
    pub space: Space,
    pub from: Anchor,
    pub to: Anchor,
    pub overlay: Overlay,
    /// Areas of the measured objects, when requested alongside the distance
    pub areas: Vec<ObjectArea>,
    pub area_failures: Vec<AreaFailure>,
}

/// Surface areas of one or more objects
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaMeasurement {
    pub space: Space,
    pub selected_only: bool,
    pub entries: Vec<ObjectArea>,
    pub total: f64,
}

impl AreaMeasurement {
    /// Selected or counted faces across all entries
    pub fn face_count(&self) -> usize {
        self.entries.iter().map(|e| e.face_count).sum()
    }
}

/// The outcome of evaluating a measurement input
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MeasurementResult {
    Distance(DistanceMeasurement),
    Area(AreaMeasurement),
}

impl MeasurementResult {
    pub fn kind(&self) -> MeasurementKind {
        match self {
            MeasurementResult::Distance(_) => MeasurementKind::Distance,
            MeasurementResult::Area(_) => MeasurementKind::Area,
        }
    }

    /// The distance, or the total area
    pub fn scalar(&self) -> f64 {
        match self {
            MeasurementResult::Distance(d) => d.value,
            MeasurementResult::Area(a) => a.total,
        }
    }

    pub fn space(&self) -> Space {
        match self {
            MeasurementResult::Distance(d) => d.space,
            MeasurementResult::Area(a) => a.space,
        }
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        match self {
            MeasurementResult::Distance(d) => Some(&d.overlay),
            MeasurementResult::Area(_) => None,
        }
    }

    pub fn as_distance(&self) -> Option<&DistanceMeasurement> {
        match self {
            MeasurementResult::Distance(d) => Some(d),
            MeasurementResult::Area(_) => None,
        }
    }

    pub fn as_area(&self) -> Option<&AreaMeasurement> {
        match self {
            MeasurementResult::Area(a) => Some(a),
            MeasurementResult::Distance(_) => None,
        }
    }

    /// One-line text for the host's status area
    pub fn summary(&self, precision: usize) -> String {
        match self {
            MeasurementResult::Distance(d) => format!(
                "{} ({} <-> {}, {})",
                format_distance(d.value, precision),
                d.from.label(),
                d.to.label(),
                d.space
            ),
            MeasurementResult::Area(a) => {
                let scope = if a.selected_only { "selected faces" } else { "surface" };
                format!(
                    "Area: {} ({} objects, {} {}, {})",
                    format_area(a.total, precision),
                    a.entries.len(),
                    a.face_count(),
                    scope,
                    a.space
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use viewmeasure_core::Point3d;

    #[test]
    fn test_distance_accessors_and_summary() {
        let result = MeasurementResult::Distance(DistanceMeasurement {
            value: 5.0,
            space: Space::Global,
            from: Anchor::Object { name: "A".into() },
            to: Anchor::Object { name: "B".into() },
            overlay: Overlay::new(Point3d::origin(), Point3d::new(5.0, 0.0, 0.0), Space::Global),
            areas: Vec::new(),
            area_failures: Vec::new(),
        });
        assert_eq!(result.kind(), MeasurementKind::Distance);
        assert_eq!(result.scalar(), 5.0);
        assert!(result.overlay().is_some());
        assert_eq!(result.summary(4), "Distance: 5.0000 BU (A <-> B, Global)");
    }

    #[test]
    fn test_area_summary() {
        let result = MeasurementResult::Area(AreaMeasurement {
            space: Space::Local,
            selected_only: true,
            entries: vec![ObjectArea {
                name: "Plane".into(),
                area: 2.5,
                face_count: 3,
                skipped_faces: 0,
            }],
            total: 2.5,
        });
        assert_eq!(result.kind(), MeasurementKind::Area);
        assert!(result.overlay().is_none());
        assert_eq!(result.summary(2), "Area: 2.50 BU^2 (1 objects, 3 selected faces, Local)");
    }
}
