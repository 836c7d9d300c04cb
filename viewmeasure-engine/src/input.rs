//! The canonical measurement input produced by the selection resolver

use serde::Serialize;
use viewmeasure_core::{Frame, Point3d, SceneObject, Space, Transform3D};

/// What a measured point stands for, used for label text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Anchor {
    /// The 3D cursor
    Cursor,
    /// The world origin `[0, 0, 0]`
    WorldOrigin,
    /// The origin of the object being edited
    ObjectCenter { name: String },
    /// The origin of a selected object
    Object { name: String },
    /// A mesh vertex of the object being edited
    Vertex { index: usize },
}

impl Anchor {
    /// Short text a host can show next to the value
    pub fn label(&self) -> String {
        match self {
            Anchor::Cursor => "3D Cursor".to_string(),
            Anchor::WorldOrigin => "Origin [0,0,0]".to_string(),
            Anchor::ObjectCenter { .. } => "Obj. Center".to_string(),
            Anchor::Object { name } => name.clone(),
            Anchor::Vertex { index } => format!("Vertex #{index}"),
        }
    }
}

/// A point to measure from or to, tagged with the frame it is written in
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasurePoint {
    pub position: Point3d,
    pub frame: Frame,
    pub anchor: Anchor,
}

impl MeasurePoint {
    /// A point given in world coordinates
    pub fn world(position: Point3d, anchor: Anchor) -> Self {
        Self {
            position,
            frame: Frame::World,
            anchor,
        }
    }

    /// A point given in the owning object's local coordinates
    pub fn local(position: Point3d, anchor: Anchor) -> Self {
        Self {
            position,
            frame: Frame::ObjectLocal,
            anchor,
        }
    }

    pub fn cursor(position: Point3d) -> Self {
        Self::world(position, Anchor::Cursor)
    }

    pub fn world_origin() -> Self {
        Self::world(Point3d::origin(), Anchor::WorldOrigin)
    }
}

/// An object whose surface area should be summed
#[derive(Debug, Clone, Copy)]
pub struct AreaTarget<'a> {
    pub object: &'a SceneObject,
    /// Only count faces flagged as selected
    pub selected_only: bool,
}

/// Area mode: one entry per object
#[derive(Debug, Clone)]
pub struct AreaQuery<'a> {
    pub targets: Vec<AreaTarget<'a>>,
    pub space: Space,
}

impl<'a> AreaQuery<'a> {
    /// Whole-surface query over the given objects
    pub fn whole_objects(objects: &[&'a SceneObject], space: Space) -> Self {
        Self {
            targets: objects
                .iter()
                .map(|&object| AreaTarget {
                    object,
                    selected_only: false,
                })
                .collect(),
            space,
        }
    }

    /// Query over the selected faces of a single object
    pub fn selected_faces(object: &'a SceneObject, space: Space) -> Self {
        Self {
            targets: vec![AreaTarget {
                object,
                selected_only: true,
            }],
            space,
        }
    }

    pub fn selected_only(&self) -> bool {
        self.targets.iter().all(|t| t.selected_only)
    }
}

/// Distance mode: two points, the requested space and the transform of the
/// object whose local frame any `ObjectLocal` point is written in
#[derive(Debug, Clone)]
pub struct DistanceQuery<'a> {
    pub from: MeasurePoint,
    pub to: MeasurePoint,
    pub space: Space,
    pub owner: Option<Transform3D>,
    /// Areas shown alongside the distance (object mode with area enabled)
    pub companion_areas: Option<AreaQuery<'a>>,
}

/// What the resolver decided to measure
#[derive(Debug, Clone)]
pub enum MeasurementInput<'a> {
    Distance(DistanceQuery<'a>),
    Area(AreaQuery<'a>),
}

impl<'a> MeasurementInput<'a> {
    pub fn space(&self) -> Space {
        match self {
            MeasurementInput::Distance(q) => q.space,
            MeasurementInput::Area(q) => q.space,
        }
    }

    pub fn as_distance(&self) -> Option<&DistanceQuery<'a>> {
        match self {
            MeasurementInput::Distance(q) => Some(q),
            MeasurementInput::Area(_) => None,
        }
    }

    pub fn as_area(&self) -> Option<&AreaQuery<'a>> {
        match self {
            MeasurementInput::Area(q) => Some(q),
            MeasurementInput::Distance(_) => None,
        }
    }
}
