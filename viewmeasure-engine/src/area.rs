//! Surface area of triangle and quad faces
//!
//! Quads are always split along the v2-v4 diagonal into (v1, v2, v4) and
//! (v3, v4, v2). Results for non-planar quads depend on that choice, so it
//! is fixed rather than picking the shorter diagonal.

use tracing::{debug, trace};
use viewmeasure_core::{ensure_finite, Error, FaceShape, Point3d, PolyMesh, Result, SceneObject, Space, Transform3D};

use crate::config::FacePolicy;

/// Area of the triangle (v1, v2, v3)
pub fn triangle_area(v1: &Point3d, v2: &Point3d, v3: &Point3d) -> f64 {
    (v3 - v2).cross(&(v1 - v2)).norm() / 2.0
}

/// Area of the quad (v1, v2, v3, v4) using the fixed v2-v4 split
pub fn quad_area(v1: &Point3d, v2: &Point3d, v3: &Point3d, v4: &Point3d) -> f64 {
    let first = (v2 - v1).cross(&(v4 - v1)).norm() / 2.0;
    let second = (v4 - v3).cross(&(v2 - v3)).norm() / 2.0;
    first + second
}

/// Area of a single face, with each corner mapped through `transform` first
/// when one is given.
///
/// Out-of-range vertex indices are always an error. Faces that are neither
/// triangles nor quads count as zero under [`FacePolicy::SkipUnsupported`]
/// and fail under [`FacePolicy::Strict`]; see [`FaceArea::Skipped`].
pub fn face_area(
    mesh: &PolyMesh,
    face_index: usize,
    transform: Option<&Transform3D>,
    policy: FacePolicy,
) -> Result<FaceArea> {
    let mut corners = mesh.face_positions(face_index)?;
    let shape = mesh.faces[face_index].shape();

    if let FaceShape::Unsupported(arity) = shape {
        return match policy {
            FacePolicy::SkipUnsupported => {
                debug!(face = face_index, arity, "skipping face that is neither tri nor quad");
                Ok(FaceArea::Skipped)
            }
            FacePolicy::Strict => Err(Error::invalid_face(
                face_index,
                format!("{arity} vertices, only triangles and quads are supported"),
            )),
        };
    }

    for corner in &corners {
        ensure_finite(corner, &format!("vertex of face {face_index}"))?;
    }
    if let Some(t) = transform {
        corners.iter_mut().for_each(|p| *p = t.transform_point(p));
    }

    let area = match corners.as_slice() {
        [v1, v2, v3] => triangle_area(v1, v2, v3),
        [v1, v2, v3, v4] => quad_area(v1, v2, v3, v4),
        other => {
            return Err(Error::invalid_face(
                face_index,
                format!("{} vertices", other.len()),
            ))
        }
    };
    Ok(FaceArea::Measured(area))
}

/// Outcome of measuring one face
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FaceArea {
    Measured(f64),
    /// Legacy deviation: unsupported faces contribute nothing to the sum
    Skipped,
}

impl FaceArea {
    pub fn value(self) -> f64 {
        match self {
            FaceArea::Measured(area) => area,
            FaceArea::Skipped => 0.0,
        }
    }
}

/// Summed area of a mesh object plus bookkeeping for display
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AreaReport {
    pub area: f64,
    /// Faces that contributed to `area`
    pub face_count: usize,
    /// Faces left out under [`FacePolicy::SkipUnsupported`]
    pub skipped_faces: usize,
}

/// Surface area of a mesh object.
///
/// Global space applies the object's transform to every vertex before the
/// cross products, so non-uniform scale and shear are accounted for exactly.
/// Local space works on raw mesh coordinates. Non-mesh objects and mesh
/// objects without data yield [`Error::NotAMesh`].
pub fn surface_area_report(
    object: &SceneObject,
    selected_only: bool,
    space: Space,
    policy: FacePolicy,
) -> Result<AreaReport> {
    let mesh = object.require_mesh()?;
    let transform = match space {
        Space::Global => {
            object.transform.validate()?;
            Some(&object.transform)
        }
        Space::Local => None,
    };

    let mut report = AreaReport::default();
    for (index, face) in mesh.faces.iter().enumerate() {
        if selected_only && !face.selected {
            continue;
        }
        match face_area(mesh, index, transform, policy)? {
            FaceArea::Measured(area) => {
                report.area += area;
                report.face_count += 1;
            }
            FaceArea::Skipped => report.skipped_faces += 1,
        }
    }

    trace!(
        object = %object.name,
        %space,
        selected_only,
        area = report.area,
        faces = report.face_count,
        skipped = report.skipped_faces,
        "surface area"
    );
    Ok(report)
}

/// Surface area of a mesh object, see [`surface_area_report`]
pub fn surface_area(
    object: &SceneObject,
    selected_only: bool,
    space: Space,
    policy: FacePolicy,
) -> Result<f64> {
    surface_area_report(object, selected_only, space, policy).map(|r| r.area)
}
