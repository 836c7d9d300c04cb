//! Selection resolver: which points or faces the current selection measures
//!
//! Edit mode reads the committed selection flags of the active mesh, i.e. the
//! state at the last edit-mode entry. Selection changes made while editing are
//! only seen after the host refreshes (see `viewmeasure_core::EditSession`).

use serde::{Deserialize, Serialize};
use tracing::debug;
use viewmeasure_core::{
    EditSession, Error, Point3d, Result, SceneObject, Space, UnsupportedReason,
};

use crate::config::MeasureConfig;
use crate::input::{Anchor, AreaQuery, DistanceQuery, MeasurePoint, MeasurementInput};

/// The host's interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionMode {
    Object,
    EditMesh,
    /// Anything else, e.g. sculpting or a non-3D editor
    Other,
}

/// Read-only snapshot of the host's selection state
#[derive(Debug, Clone)]
pub struct SelectionContext<'a> {
    pub mode: InteractionMode,
    /// 3D cursor, world space
    pub cursor: Point3d,
    /// Selected objects in host order; the active object is not implied
    pub selected: Vec<&'a SceneObject>,
    /// The object being edited (edit mode only)
    pub active: Option<&'a SceneObject>,
}

impl<'a> SelectionContext<'a> {
    /// Object mode with the given selection
    pub fn object_mode(cursor: Point3d, selected: Vec<&'a SceneObject>) -> Self {
        Self {
            mode: InteractionMode::Object,
            cursor,
            selected,
            active: None,
        }
    }

    /// Mesh edit mode on `active`, whose mesh flags are the committed selection
    pub fn edit_mode(cursor: Point3d, active: &'a SceneObject) -> Self {
        Self {
            mode: InteractionMode::EditMesh,
            cursor,
            selected: vec![active],
            active: Some(active),
        }
    }

    /// Mesh edit mode from a live session; sees the committed selection only
    pub fn from_session(cursor: Point3d, session: &'a EditSession) -> Self {
        Self::edit_mode(cursor, session.committed_object())
    }
}

/// Decide what the current selection measures.
///
/// Edit mode, by number of committed selected vertices: 0 measures the cursor
/// against the object center (Local) or the world origin (Global), 1 the
/// vertex against the cursor, 2 the vertices against each other, 3 or more
/// switches to the area of the selected faces. Object mode, by number of
/// selected objects: 0 measures the world origin against the cursor, 1 the
/// object origin against the cursor, 2 the two origins, more than 2 the
/// surface area of every selected mesh object.
pub fn resolve_selection<'a>(
    ctx: &SelectionContext<'a>,
    config: &MeasureConfig,
) -> Result<MeasurementInput<'a>> {
    debug!(
        mode = ?ctx.mode,
        selected = ctx.selected.len(),
        space = %config.space,
        calc_area = config.calc_area,
        "resolving selection"
    );

    match ctx.mode {
        InteractionMode::EditMesh => resolve_edit_mode(ctx, config),
        InteractionMode::Object => resolve_object_mode(ctx, config),
        InteractionMode::Other => Err(Error::Unsupported(UnsupportedReason::UnsupportedMode)),
    }
}

fn resolve_edit_mode<'a>(
    ctx: &SelectionContext<'a>,
    config: &MeasureConfig,
) -> Result<MeasurementInput<'a>> {
    let object = ctx
        .active
        .ok_or(Error::Unsupported(UnsupportedReason::NotMeshEditMode))?;
    let mesh = object
        .mesh_data()
        .ok_or(Error::Unsupported(UnsupportedReason::NotMeshEditMode))?;

    let space = config.space;
    // counting stops at three, that already decides the case
    let selected: Vec<usize> = mesh.selected_vertices().take(3).collect();
    let vertex = |index: usize| {
        MeasurePoint::local(mesh.vertices[index].position, Anchor::Vertex { index })
    };

    // only vertex points live in the object's frame; the cursor and the
    // object center are compared as plain world positions
    let (from, to, owner) = match selected.as_slice() {
        [] => match space {
            Space::Local => (
                MeasurePoint::cursor(ctx.cursor),
                MeasurePoint::world(
                    object.origin(),
                    Anchor::ObjectCenter {
                        name: object.name.clone(),
                    },
                ),
                None,
            ),
            Space::Global => (MeasurePoint::world_origin(), MeasurePoint::cursor(ctx.cursor), None),
        },
        [v] => (vertex(*v), MeasurePoint::cursor(ctx.cursor), Some(object.transform)),
        [v1, v2] => (vertex(*v1), vertex(*v2), Some(object.transform)),
        _ => {
            if !config.calc_area {
                return Err(Error::Unsupported(UnsupportedReason::AreaDisabled));
            }
            if mesh.selected_face_count() == 0 {
                return Err(Error::Unsupported(UnsupportedReason::NoSelectedFaces));
            }
            debug!(object = %object.name, "three or more vertices selected, measuring face area");
            return Ok(MeasurementInput::Area(AreaQuery::selected_faces(object, space)));
        }
    };

    Ok(MeasurementInput::Distance(DistanceQuery {
        from,
        to,
        space,
        owner,
        companion_areas: None,
    }))
}

fn resolve_object_mode<'a>(
    ctx: &SelectionContext<'a>,
    config: &MeasureConfig,
) -> Result<MeasurementInput<'a>> {
    let object_point = |object: &SceneObject| {
        MeasurePoint::world(
            object.origin(),
            Anchor::Object {
                name: object.name.clone(),
            },
        )
    };

    let (from, to) = match ctx.selected.as_slice() {
        [] => (MeasurePoint::world_origin(), MeasurePoint::cursor(ctx.cursor)),
        [object] => (object_point(*object), MeasurePoint::cursor(ctx.cursor)),
        [first, second] => (object_point(*first), object_point(*second)),
        many => {
            if !config.calc_area {
                return Err(Error::Unsupported(UnsupportedReason::TooManyObjects));
            }
            let meshes: Vec<&SceneObject> = many.iter().copied().filter(|o| o.is_mesh()).collect();
            if meshes.is_empty() {
                return Err(Error::Unsupported(UnsupportedReason::NoMeshObjects));
            }
            return Ok(MeasurementInput::Area(AreaQuery::whole_objects(&meshes, config.space)));
        }
    };

    // areas of the one or two selected objects ride along with the distance
    let companion_areas = (config.calc_area && !ctx.selected.is_empty())
        .then(|| AreaQuery::whole_objects(&ctx.selected, config.space));

    // object origins are world points, so the distance itself is always global
    Ok(MeasurementInput::Distance(DistanceQuery {
        from,
        to,
        space: Space::Global,
        owner: None,
        companion_areas,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use viewmeasure_core::{quad_grid, ObjectKind, Transform3D, Frame};

    fn grid_object(selected_vertices: &[usize]) -> SceneObject {
        let mut mesh = quad_grid(2, 2.0);
        for &i in selected_vertices {
            mesh.vertices[i].selected = true;
        }
        SceneObject::mesh("Grid", Transform3D::identity(), mesh)
    }

    #[test]
    fn test_edit_mode_vertex_counts() {
        let config = MeasureConfig::default();
        let cursor = Point3d::new(1.0, 1.0, 1.0);

        let none = grid_object(&[]);
        let input = resolve_selection(&SelectionContext::edit_mode(cursor, &none), &config).unwrap();
        let q = input.as_distance().unwrap();
        assert_eq!(q.from.anchor, Anchor::WorldOrigin);
        assert_eq!(q.to.anchor, Anchor::Cursor);

        let one = grid_object(&[4]);
        let input = resolve_selection(&SelectionContext::edit_mode(cursor, &one), &config).unwrap();
        let q = input.as_distance().unwrap();
        assert_eq!(q.from.anchor, Anchor::Vertex { index: 4 });
        assert_eq!(q.from.frame, Frame::ObjectLocal);
        assert_eq!(q.to.anchor, Anchor::Cursor);

        let two = grid_object(&[8, 0]);
        let input = resolve_selection(&SelectionContext::edit_mode(cursor, &two), &config).unwrap();
        let q = input.as_distance().unwrap();
        assert_eq!(q.from.anchor, Anchor::Vertex { index: 0 });
        assert_eq!(q.to.anchor, Anchor::Vertex { index: 8 });
        assert!(q.owner.is_some());
    }

    #[test]
    fn test_edit_mode_local_zero_vertices_uses_object_center() {
        let config = MeasureConfig::default().with_space(Space::Local);
        let obj = grid_object(&[]);
        let input = resolve_selection(&SelectionContext::edit_mode(Point3d::origin(), &obj), &config).unwrap();
        let q = input.as_distance().unwrap();
        assert_eq!(q.from.anchor, Anchor::Cursor);
        assert!(matches!(q.to.anchor, Anchor::ObjectCenter { .. }));
        assert_eq!(q.space, Space::Local);
        assert!(q.owner.is_none());
    }

    #[test]
    fn test_edit_mode_many_vertices_switches_to_area() {
        let mut obj = grid_object(&[0, 1, 3, 4]);
        let cursor = Point3d::origin();

        let off = MeasureConfig::default();
        let err = resolve_selection(&SelectionContext::edit_mode(cursor, &obj), &off).unwrap_err();
        assert!(matches!(err, Error::Unsupported(UnsupportedReason::AreaDisabled)));

        let on = MeasureConfig::default().with_area(true);
        let err = resolve_selection(&SelectionContext::edit_mode(cursor, &obj), &on).unwrap_err();
        assert!(matches!(err, Error::Unsupported(UnsupportedReason::NoSelectedFaces)));

        if let Some(mesh) = obj.mesh.as_mut() {
            mesh.faces[0].selected = true;
        }
        let input = resolve_selection(&SelectionContext::edit_mode(cursor, &obj), &on).unwrap();
        let q = input.as_area().unwrap();
        assert_eq!(q.targets.len(), 1);
        assert!(q.selected_only());
    }

    #[test]
    fn test_edit_mode_needs_mesh() {
        let lamp = SceneObject::new("Lamp", ObjectKind::Light, Transform3D::identity());
        let err = resolve_selection(
            &SelectionContext::edit_mode(Point3d::origin(), &lamp),
            &MeasureConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Unsupported(UnsupportedReason::NotMeshEditMode)));
    }

    #[test]
    fn test_object_mode_companion_areas() {
        let a = grid_object(&[]);
        let lamp = SceneObject::new("Lamp", ObjectKind::Light, Transform3D::identity());
        let config = MeasureConfig::default().with_area(true).with_space(Space::Local);

        let ctx = SelectionContext::object_mode(Point3d::origin(), vec![&a, &lamp]);
        let input = resolve_selection(&ctx, &config).unwrap();
        let q = input.as_distance().unwrap();
        // distance between origins is global regardless of the preference
        assert_eq!(q.space, Space::Global);
        let areas = q.companion_areas.as_ref().unwrap();
        assert_eq!(areas.targets.len(), 2);
        assert_eq!(areas.space, Space::Local);

        let ctx = SelectionContext::object_mode(Point3d::origin(), vec![]);
        let input = resolve_selection(&ctx, &config).unwrap();
        assert!(input.as_distance().unwrap().companion_areas.is_none());
    }

    #[test]
    fn test_object_mode_many_objects() {
        let a = grid_object(&[]);
        let b = grid_object(&[]);
        let lamp = SceneObject::new("Lamp", ObjectKind::Light, Transform3D::identity());
        let ctx = SelectionContext::object_mode(Point3d::origin(), vec![&a, &lamp, &b]);

        let input = resolve_selection(&ctx, &MeasureConfig::default().with_area(true)).unwrap();
        let q = input.as_area().unwrap();
        assert_eq!(q.targets.len(), 2);
        assert!(!q.selected_only());

        let lamps = [lamp.clone(), lamp.clone(), lamp];
        let ctx = SelectionContext::object_mode(Point3d::origin(), lamps.iter().collect());
        let err = resolve_selection(&ctx, &MeasureConfig::default().with_area(true)).unwrap_err();
        assert!(matches!(err, Error::Unsupported(UnsupportedReason::NoMeshObjects)));
    }

    #[test]
    fn test_other_mode() {
        let ctx = SelectionContext {
            mode: InteractionMode::Other,
            cursor: Point3d::origin(),
            selected: Vec::new(),
            active: None,
        };
        let err = resolve_selection(&ctx, &MeasureConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Unsupported(UnsupportedReason::UnsupportedMode)));
    }
}
