//! Edit-mode session with snapshot-at-entry selection semantics
//!
//! A host's mesh API only exposes the selection flags as they were when edit
//! mode was last entered. Clicks made while editing land in the live
//! selection and stay invisible to measurements until [`EditSession::refresh`]
//! commits them, the same as leaving and re-entering edit mode.

use crate::error::{Error, Result};
use crate::object::SceneObject;

/// The active mesh object while in edit mode
#[derive(Debug, Clone)]
pub struct EditSession {
    object: SceneObject,
    live_vertices: Vec<bool>,
    live_faces: Vec<bool>,
}

impl EditSession {
    /// Enter edit mode on a mesh object; its current flags become both the
    /// committed and the live selection
    pub fn enter(object: SceneObject) -> Result<Self> {
        let (live_vertices, live_faces) = object.require_mesh()?.selection_flags();
        Ok(Self {
            object,
            live_vertices,
            live_faces,
        })
    }

    /// The object as measurements see it: mesh flags are the committed snapshot
    pub fn committed_object(&self) -> &SceneObject {
        &self.object
    }

    /// Change the live selection state of a vertex
    pub fn select_vertex(&mut self, index: usize, selected: bool) -> Result<()> {
        let len = self.live_vertices.len();
        let flag = self
            .live_vertices
            .get_mut(index)
            .ok_or_else(|| Error::InvalidData(format!("vertex {index} out of range ({len} vertices)")))?;
        *flag = selected;
        Ok(())
    }

    /// Change the live selection state of a face
    pub fn select_face(&mut self, index: usize, selected: bool) -> Result<()> {
        let len = self.live_faces.len();
        let flag = self
            .live_faces
            .get_mut(index)
            .ok_or_else(|| Error::InvalidData(format!("face {index} out of range ({len} faces)")))?;
        *flag = selected;
        Ok(())
    }

    /// Clear the live selection
    pub fn deselect_all(&mut self) {
        self.live_vertices.iter_mut().for_each(|f| *f = false);
        self.live_faces.iter_mut().for_each(|f| *f = false);
    }

    pub fn live_selected_vertex_count(&self) -> usize {
        self.live_vertices.iter().filter(|&&f| f).count()
    }

    /// Whether a refresh would change what measurements see
    pub fn is_stale(&self) -> bool {
        self.object.mesh_data().is_some_and(|mesh| {
            let (vertices, faces) = mesh.selection_flags();
            vertices != self.live_vertices || faces != self.live_faces
        })
    }

    /// Commit the live selection, as if edit mode had been exited and re-entered
    pub fn refresh(&mut self) {
        if let Some(mesh) = self.object.mesh.as_mut() {
            for (vertex, &flag) in mesh.vertices.iter_mut().zip(&self.live_vertices) {
                vertex.selected = flag;
            }
            for (face, &flag) in mesh.faces.iter_mut().zip(&self.live_faces) {
                face.selected = flag;
            }
        }
    }

    /// Leave edit mode, committing the live selection
    pub fn exit(mut self) -> SceneObject {
        self.refresh();
        self.object
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::quad_grid;
    use crate::object::ObjectKind;
    use crate::transform::Transform3D;

    fn session() -> EditSession {
        let obj = SceneObject::mesh("Grid", Transform3D::identity(), quad_grid(2, 2.0));
        EditSession::enter(obj).unwrap()
    }

    #[test]
    fn test_live_selection_is_hidden_until_refresh() {
        let mut s = session();
        s.select_vertex(3, true).unwrap();
        s.select_face(1, true).unwrap();

        assert!(s.is_stale());
        assert_eq!(s.live_selected_vertex_count(), 1);
        let committed = s.committed_object().mesh_data().unwrap();
        assert_eq!(committed.selected_vertex_count(), 0);
        assert_eq!(committed.selected_face_count(), 0);

        s.refresh();
        assert!(!s.is_stale());
        let committed = s.committed_object().mesh_data().unwrap();
        assert_eq!(committed.selected_vertices().collect::<Vec<_>>(), vec![3]);
        assert_eq!(committed.selected_faces().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_out_of_range_selection() {
        let mut s = session();
        assert!(matches!(s.select_vertex(99, true), Err(Error::InvalidData(_))));
        assert!(s.select_face(4, true).is_err());
    }

    #[test]
    fn test_exit_commits() {
        let mut s = session();
        s.select_vertex(0, true).unwrap();
        let obj = s.exit();
        assert_eq!(obj.mesh_data().unwrap().selected_vertex_count(), 1);
    }

    #[test]
    fn test_enter_requires_mesh() {
        let empty = SceneObject::new("Empty", ObjectKind::Empty, Transform3D::identity());
        assert!(EditSession::enter(empty).is_err());
    }
}
