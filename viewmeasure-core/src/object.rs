//! Scene objects as seen by the measurement engine

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::mesh::PolyMesh;
use crate::point::Point3d;
use crate::transform::Transform3D;

/// The type of a scene object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Mesh,
    #[default]
    Empty,
    Camera,
    Light,
    Curve,
    Other,
}

/// A scene object: a named transform with optional mesh data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub name: String,
    #[serde(default)]
    pub kind: ObjectKind,
    #[serde(default)]
    pub transform: Transform3D,
    #[serde(default)]
    pub mesh: Option<PolyMesh>,
}

impl SceneObject {
    /// Create a non-mesh object
    pub fn new(name: impl Into<String>, kind: ObjectKind, transform: Transform3D) -> Self {
        Self {
            name: name.into(),
            kind,
            transform,
            mesh: None,
        }
    }

    /// Create a mesh object owning `mesh`
    pub fn mesh(name: impl Into<String>, transform: Transform3D, mesh: PolyMesh) -> Self {
        Self {
            name: name.into(),
            kind: ObjectKind::Mesh,
            transform,
            mesh: Some(mesh),
        }
    }

    /// Create an empty (locator) object at a world position
    pub fn empty_at(name: impl Into<String>, position: Point3d) -> Self {
        Self::new(
            name,
            ObjectKind::Empty,
            Transform3D::translation(position.coords),
        )
    }

    /// World position of the object's origin
    pub fn origin(&self) -> Point3d {
        self.transform.origin()
    }

    pub fn is_mesh(&self) -> bool {
        self.kind == ObjectKind::Mesh
    }

    /// The mesh, if this is a mesh-typed object carrying data
    pub fn mesh_data(&self) -> Option<&PolyMesh> {
        match self.kind {
            ObjectKind::Mesh => self.mesh.as_ref(),
            _ => None,
        }
    }

    /// Like [`Self::mesh_data`] but reporting [`Error::NotAMesh`]
    pub fn require_mesh(&self) -> Result<&PolyMesh> {
        self.mesh_data().ok_or_else(|| Error::NotAMesh {
            name: self.name.clone(),
        })
    }
}
