//! Core data structures for viewmeasure
//!
//! This crate provides the read-only scene snapshot a host hands to the
//! measurement engine: points, object transforms, polygon meshes with their
//! persisted selection flags, scene objects and the edit-mode session that
//! tracks when that selection was last committed.

pub mod point;
pub mod transform;
pub mod mesh;
pub mod object;
pub mod session;
pub mod error;

pub use point::*;
pub use transform::*;
pub use mesh::*;
pub use object::*;
pub use session::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector3, Matrix4, UnitQuaternion};
