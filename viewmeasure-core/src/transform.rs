//! Object-to-world transforms and coordinate spaces
//!
//! Matrices use nalgebra's column-vector convention: a point is mapped as
//! `matrix * point`. Distances and areas both go through [`Transform3D::transform_point`]
//! so there is exactly one place where that convention is applied.

use nalgebra::{Isometry3, Matrix4, Point3, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Determinants below this magnitude are treated as singular
pub const SINGULAR_EPSILON: f64 = 1e-12;

/// The space a measurement is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Space {
    /// Raw mesh / object-local coordinates
    Local,
    /// World coordinates, after the owning object's transform
    #[default]
    Global,
}

impl Space {
    pub fn is_local(self) -> bool {
        self == Space::Local
    }

    pub fn is_global(self) -> bool {
        self == Space::Global
    }
}

impl std::fmt::Display for Space {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Space::Local => f.write_str("Local"),
            Space::Global => f.write_str("Global"),
        }
    }
}

/// The frame a single point's coordinates are currently written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frame {
    World,
    ObjectLocal,
}

/// An affine object-to-world transformation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform3D {
    pub matrix: Matrix4<f64>,
}

impl Transform3D {
    /// Create an identity transformation
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Wrap an existing homogeneous matrix
    pub fn from_matrix(matrix: Matrix4<f64>) -> Self {
        Self { matrix }
    }

    /// Create a translation transformation
    pub fn translation(translation: Vector3<f64>) -> Self {
        Self {
            matrix: Matrix4::new_translation(&translation),
        }
    }

    /// Create a rotation transformation from a quaternion
    pub fn rotation(rotation: UnitQuaternion<f64>) -> Self {
        Self {
            matrix: rotation.to_homogeneous(),
        }
    }

    /// Create a scaling transformation
    pub fn scaling(scale: Vector3<f64>) -> Self {
        Self {
            matrix: Matrix4::new_nonuniform_scaling(&scale),
        }
    }

    /// Create a uniform scaling transformation
    pub fn uniform_scaling(scale: f64) -> Self {
        Self {
            matrix: Matrix4::new_scaling(scale),
        }
    }

    /// Create a transformation from translation and rotation
    pub fn from_translation_rotation(
        translation: Vector3<f64>,
        rotation: UnitQuaternion<f64>,
    ) -> Self {
        let isometry = Isometry3::from_parts(translation.into(), rotation);
        Self {
            matrix: isometry.to_homogeneous(),
        }
    }

    /// Apply the transformation to a point.
    ///
    /// Only the affine part is used; callers check [`Transform3D::validate`]
    /// before trusting the result.
    pub fn transform_point(&self, point: &Point3<f64>) -> Point3<f64> {
        let linear = self.matrix.fixed_view::<3, 3>(0, 0);
        Point3::from(linear * point.coords + self.matrix.fixed_view::<3, 1>(0, 3))
    }

    /// Bottom row is exactly `(0, 0, 0, 1)`
    pub fn is_affine(&self) -> bool {
        let row = self.matrix.row(3);
        row[0] == 0.0 && row[1] == 0.0 && row[2] == 0.0 && row[3] == 1.0
    }

    /// Reject matrices that cannot act as an object transform: non-finite
    /// entries, or a projective bottom row.
    pub fn validate(&self) -> Result<()> {
        if !self.is_finite() {
            return Err(Error::NonFiniteInput("transform matrix".to_string()));
        }
        if !self.is_affine() {
            let row = self.matrix.row(3);
            return Err(Error::InvalidData(format!(
                "transform bottom row is [{}, {}, {}, {}], expected [0, 0, 0, 1]",
                row[0], row[1], row[2], row[3]
            )));
        }
        Ok(())
    }

    /// Compose this transformation with another (`other` is applied first)
    pub fn compose(self, other: Self) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Get the inverse transformation
    ///
    /// Fails with [`Error::DegenerateTransform`] for singular or non-finite
    /// matrices instead of falling back to the identity.
    pub fn try_inverse(&self) -> Result<Self> {
        if !self.is_finite() || !self.is_affine() || self.matrix.determinant().abs() < SINGULAR_EPSILON {
            return Err(Error::DegenerateTransform);
        }
        self.matrix
            .try_inverse()
            .map(Self::from_matrix)
            .ok_or(Error::DegenerateTransform)
    }

    /// Map a world-space point back into this transform's local frame
    pub fn inverse_transform_point(&self, point: &Point3<f64>) -> Result<Point3<f64>> {
        Ok(self.try_inverse()?.transform_point(point))
    }

    /// World position of the local origin (the object's location)
    pub fn origin(&self) -> Point3<f64> {
        Point3::new(self.matrix[(0, 3)], self.matrix[(1, 3)], self.matrix[(2, 3)])
    }

    /// Check that no matrix entry is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.matrix.iter().all(|v| v.is_finite())
    }

    /// Check if this is approximately the identity transformation
    pub fn is_identity(&self, epsilon: f64) -> bool {
        let identity = Matrix4::identity();
        (self.matrix - identity).norm() < epsilon
    }
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for Transform3D {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.compose(rhs)
    }
}
