//! Polygon mesh data structures
//!
//! Faces are triangles or quads. Anything else can still be stored, since
//! hosts hand over whatever their mesh holds, but it is classified as
//! [`FaceShape::Unsupported`] and left to the caller's face policy.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::point::*;

/// A mesh vertex with its persisted selection flag
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub position: Point3d,
    #[serde(default)]
    pub selected: bool,
}

impl Vertex {
    pub fn new(position: Point3d) -> Self {
        Self {
            position,
            selected: false,
        }
    }

    pub fn selected(position: Point3d) -> Self {
        Self {
            position,
            selected: true,
        }
    }
}

/// Classification of a face by vertex count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceShape {
    Triangle,
    Quad,
    Unsupported(usize),
}

/// A polygon face referencing vertices by index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Face {
    pub vertices: Vec<usize>,
    #[serde(default)]
    pub selected: bool,
}

impl Face {
    /// Create a triangle face
    pub fn triangle(indices: [usize; 3]) -> Self {
        Self {
            vertices: indices.to_vec(),
            selected: false,
        }
    }

    /// Create a quad face
    pub fn quad(indices: [usize; 4]) -> Self {
        Self {
            vertices: indices.to_vec(),
            selected: false,
        }
    }

    /// Mark the face as selected
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Number of vertices the face references
    pub fn arity(&self) -> usize {
        self.vertices.len()
    }

    pub fn shape(&self) -> FaceShape {
        match self.arity() {
            3 => FaceShape::Triangle,
            4 => FaceShape::Quad,
            n => FaceShape::Unsupported(n),
        }
    }
}

/// A polygon mesh with vertices and tri/quad faces
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolyMesh {
    pub vertices: Vec<Vertex>,
    pub faces: Vec<Face>,
}

impl PolyMesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mesh from vertices and faces
    pub fn from_vertices_and_faces(vertices: Vec<Vertex>, faces: Vec<Face>) -> Self {
        Self { vertices, faces }
    }

    /// Create an unselected mesh from raw positions and faces
    pub fn from_positions(positions: Vec<Point3d>, faces: Vec<Face>) -> Self {
        Self {
            vertices: positions.into_iter().map(Vertex::new).collect(),
            faces,
        }
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of faces
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh is empty
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }

    /// Add a vertex to the mesh
    pub fn add_vertex(&mut self, vertex: Vertex) -> usize {
        let index = self.vertices.len();
        self.vertices.push(vertex);
        index
    }

    /// Add a face to the mesh
    pub fn add_face(&mut self, face: Face) -> usize {
        let index = self.faces.len();
        self.faces.push(face);
        index
    }

    /// Indices of selected vertices, in mesh order
    pub fn selected_vertices(&self) -> impl Iterator<Item = usize> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(_, v)| v.selected)
            .map(|(i, _)| i)
    }

    /// Indices of selected faces, in mesh order
    pub fn selected_faces(&self) -> impl Iterator<Item = usize> + '_ {
        self.faces
            .iter()
            .enumerate()
            .filter(|(_, f)| f.selected)
            .map(|(i, _)| i)
    }

    pub fn selected_vertex_count(&self) -> usize {
        self.selected_vertices().count()
    }

    pub fn selected_face_count(&self) -> usize {
        self.selected_faces().count()
    }

    /// Check that every face only references existing vertices
    pub fn validate(&self) -> Result<()> {
        (0..self.faces.len()).try_for_each(|i| self.check_face(i))
    }

    /// Check a single face's vertex indices
    pub fn check_face(&self, face_index: usize) -> Result<()> {
        let face = self
            .faces
            .get(face_index)
            .ok_or_else(|| Error::invalid_face(face_index, "face does not exist"))?;

        match face.vertices.iter().find(|&&v| v >= self.vertices.len()) {
            Some(v) => Err(Error::invalid_face(
                face_index,
                format!(
                    "vertex index {v} out of range ({} vertices)",
                    self.vertices.len()
                ),
            )),
            None => Ok(()),
        }
    }

    /// Local-space positions of a face's corners, in face order
    pub fn face_positions(&self, face_index: usize) -> Result<Vec<Point3d>> {
        self.check_face(face_index)?;
        Ok(self.faces[face_index]
            .vertices
            .iter()
            .map(|&v| self.vertices[v].position)
            .collect())
    }

    /// Copy of the selection flags, vertices first then faces
    pub fn selection_flags(&self) -> (Vec<bool>, Vec<bool>) {
        (
            self.vertices.iter().map(|v| v.selected).collect(),
            self.faces.iter().map(|f| f.selected).collect(),
        )
    }
}

/// Build an axis-aligned quad grid in the XY plane, `cells` x `cells` quads
/// spanning `size` x `size` and centered at the origin
pub fn quad_grid(cells: usize, size: f64) -> PolyMesh {
    let n = cells.max(1);
    let step = size / n as f64;
    let half = size / 2.0;

    let mut mesh = PolyMesh::new();
    for y in 0..=n {
        for x in 0..=n {
            mesh.add_vertex(Vertex::new(Point3d::new(
                x as f64 * step - half,
                y as f64 * step - half,
                0.0,
            )));
        }
    }
    for y in 0..n {
        for x in 0..n {
            let bl = y * (n + 1) + x;
            let br = bl + 1;
            let tl = bl + n + 1;
            let tr = tl + 1;
            mesh.add_face(Face::quad([bl, br, tr, tl]));
        }
    }
    mesh
}
