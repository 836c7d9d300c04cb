//! Point-to-point distance in local or global space

use viewmeasure_core::{ensure_finite, Frame, Point3d, Result, Space, Transform3D};

use crate::input::MeasurePoint;

/// Express a measure point in the requested space.
///
/// Global maps object-local points through `owner`; Local maps world points
/// back through the inverse of `owner`, which fails for singular transforms.
/// Without an owner the two frames coincide and the point is returned as is.
pub fn point_in_space(
    point: &MeasurePoint,
    space: Space,
    owner: Option<&Transform3D>,
) -> Result<Point3d> {
    let Some(transform) = owner else {
        return Ok(point.position);
    };

    match (point.frame, space) {
        (Frame::World, Space::Global) | (Frame::ObjectLocal, Space::Local) => Ok(point.position),
        (Frame::ObjectLocal, Space::Global) => Ok(transform.transform_point(&point.position)),
        (Frame::World, Space::Local) => transform.inverse_transform_point(&point.position),
    }
}

/// World position of a measure point, for overlay drawing
pub fn world_position(point: &MeasurePoint, owner: Option<&Transform3D>) -> Point3d {
    match (point.frame, owner) {
        (Frame::ObjectLocal, Some(transform)) => transform.transform_point(&point.position),
        _ => point.position,
    }
}

/// Distance between two measure points in the requested space
pub fn distance(
    from: &MeasurePoint,
    to: &MeasurePoint,
    space: Space,
    owner: Option<&Transform3D>,
) -> Result<f64> {
    ensure_finite(&from.position, "first point")?;
    ensure_finite(&to.position, "second point")?;
    if let Some(transform) = owner {
        transform.validate()?;
    }

    let a = point_in_space(from, space, owner)?;
    let b = point_in_space(to, space, owner)?;
    Ok(point_distance(&a, &b))
}

/// Plain Euclidean distance
pub fn point_distance(a: &Point3d, b: &Point3d) -> f64 {
    (a - b).norm()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Anchor;
    use viewmeasure_core::Error;
    use approx::assert_relative_eq;
    use nalgebra::{UnitQuaternion, Vector3};

    fn vertex(x: f64, y: f64, z: f64) -> MeasurePoint {
        MeasurePoint::local(Point3d::new(x, y, z), Anchor::Vertex { index: 0 })
    }

    #[test]
    fn test_local_points_ignore_transform_in_local_space() {
        let owner = Transform3D::uniform_scaling(3.0);
        let d = distance(&vertex(0.0, 0.0, 0.0), &vertex(1.0, 0.0, 0.0), Space::Local, Some(&owner)).unwrap();
        assert_relative_eq!(d, 1.0);

        let d = distance(&vertex(0.0, 0.0, 0.0), &vertex(1.0, 0.0, 0.0), Space::Global, Some(&owner)).unwrap();
        assert_relative_eq!(d, 3.0);
    }

    #[test]
    fn test_cursor_brought_into_local_frame() {
        let owner = Transform3D::translation(Vector3::new(10.0, 0.0, 0.0))
            * Transform3D::uniform_scaling(2.0);
        let cursor = MeasurePoint::cursor(Point3d::new(14.0, 0.0, 0.0));

        // cursor sits at local x = 2
        let local = distance(&vertex(0.0, 0.0, 0.0), &cursor, Space::Local, Some(&owner)).unwrap();
        assert_relative_eq!(local, 2.0, epsilon = 1e-12);

        // vertex lands at world x = 10
        let global = distance(&vertex(0.0, 0.0, 0.0), &cursor, Space::Global, Some(&owner)).unwrap();
        assert_relative_eq!(global, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_preserves_distance() {
        let owner = Transform3D::from_translation_rotation(
            Vector3::new(1.0, -2.0, 0.5),
            UnitQuaternion::from_euler_angles(0.3, 1.1, -0.4),
        );
        let a = vertex(1.0, 2.0, 3.0);
        let b = vertex(-1.0, 0.5, 2.0);
        let local = distance(&a, &b, Space::Local, Some(&owner)).unwrap();
        let global = distance(&a, &b, Space::Global, Some(&owner)).unwrap();
        assert_relative_eq!(local, global, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_owner_in_local_space() {
        let owner = Transform3D::scaling(Vector3::new(0.0, 1.0, 1.0));
        let cursor = MeasurePoint::cursor(Point3d::new(1.0, 0.0, 0.0));
        let err = distance(&vertex(0.0, 0.0, 0.0), &cursor, Space::Local, Some(&owner)).unwrap_err();
        assert!(matches!(err, Error::DegenerateTransform));

        // global space never needs the inverse
        assert!(distance(&vertex(0.0, 0.0, 0.0), &cursor, Space::Global, Some(&owner)).is_ok());
    }

    #[test]
    fn test_non_finite_input() {
        let bad = MeasurePoint::cursor(Point3d::new(f64::NAN, 0.0, 0.0));
        let err = distance(&bad, &vertex(0.0, 0.0, 0.0), Space::Global, None).unwrap_err();
        assert!(matches!(err, Error::NonFiniteInput(_)));

        let mut owner = Transform3D::identity();
        owner.matrix[(1, 3)] = f64::INFINITY;
        assert!(distance(&vertex(0.0, 0.0, 0.0), &vertex(1.0, 0.0, 0.0), Space::Global, Some(&owner)).is_err());
    }

    #[test]
    fn test_world_position() {
        let owner = Transform3D::translation(Vector3::new(0.0, 5.0, 0.0));
        assert_eq!(world_position(&vertex(1.0, 0.0, 0.0), Some(&owner)), Point3d::new(1.0, 5.0, 0.0));
        let cursor = MeasurePoint::cursor(Point3d::new(1.0, 1.0, 1.0));
        assert_eq!(world_position(&cursor, Some(&owner)), cursor.position);
    }
}
