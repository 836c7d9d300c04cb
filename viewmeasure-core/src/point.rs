//! Point types and related functionality

use nalgebra::{Point3, Vector3};

use crate::error::{Error, Result};

/// A 3D point with double precision coordinates
pub type Point3d = Point3<f64>;

/// A 3D vector with double precision components
pub type Vector3d = Vector3<f64>;

/// The world origin `[0, 0, 0]`
pub fn world_origin() -> Point3d {
    Point3d::origin()
}

/// Check that every coordinate of a point is finite
pub fn is_finite_point(point: &Point3d) -> bool {
    point.coords.iter().all(|c| c.is_finite())
}

/// Reject points carrying NaN or infinite coordinates
pub fn ensure_finite(point: &Point3d, what: &str) -> Result<()> {
    if is_finite_point(point) {
        Ok(())
    } else {
        Err(Error::NonFiniteInput(format!(
            "{what} = [{}, {}, {}]",
            point.x, point.y, point.z
        )))
    }
}
