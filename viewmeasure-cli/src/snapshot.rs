//! JSON scene snapshots standing in for a live host
//!
//! Object transforms are 4x4 matrices written column-major, the way nalgebra
//! serializes them.

use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;
use viewmeasure_core::{EditSession, Point3d, SceneObject};
use viewmeasure_engine::{InteractionMode, MeasureConfig, SelectionContext};

/// Selection made in edit mode after it was entered
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LiveSelection {
    #[serde(default)]
    pub vertices: Vec<usize>,
    #[serde(default)]
    pub faces: Vec<usize>,
}

/// Everything the engine needs from a host, in one file
#[derive(Debug, Clone, Deserialize)]
pub struct SceneSnapshot {
    pub mode: InteractionMode,
    #[serde(default = "default_cursor")]
    pub cursor: Point3d,
    #[serde(default)]
    pub objects: Vec<SceneObject>,
    /// Names of selected objects, in selection order
    #[serde(default)]
    pub selected: Vec<String>,
    /// Name of the object being edited
    #[serde(default)]
    pub active: Option<String>,
    /// Pending edit-mode clicks, not yet committed
    #[serde(default)]
    pub live_selection: Option<LiveSelection>,
    #[serde(default)]
    pub config: MeasureConfig,
}

fn default_cursor() -> Point3d {
    Point3d::origin()
}

impl SceneSnapshot {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading scene snapshot {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing scene snapshot {}", path.display()))
    }

    /// Decode a snapshot and reject object transforms that are not affine
    pub fn from_json(text: &str) -> Result<Self> {
        let snapshot: Self = serde_json::from_str(text)?;
        for object in &snapshot.objects {
            object
                .transform
                .validate()
                .with_context(|| format!("transform of object '{}'", object.name))?;
        }
        Ok(snapshot)
    }

    pub fn object(&self, name: &str) -> Result<&SceneObject> {
        self.objects
            .iter()
            .find(|o| o.name == name)
            .ok_or_else(|| anyhow!("no object named '{name}' in snapshot"))
    }

    /// Open an edit session on the active object, applying pending clicks
    /// to the live selection. Only edit-mode snapshots have one.
    pub fn edit_session(&self) -> Result<Option<EditSession>> {
        if self.mode != InteractionMode::EditMesh {
            return Ok(None);
        }
        let Some(name) = self.active.as_deref() else {
            bail!("edit-mode snapshot without an active object");
        };

        let mut session = EditSession::enter(self.object(name)?.clone())?;
        if let Some(live) = &self.live_selection {
            session.deselect_all();
            for &v in &live.vertices {
                session.select_vertex(v, true)?;
            }
            for &f in &live.faces {
                session.select_face(f, true)?;
            }
        }
        Ok(Some(session))
    }

    /// Selection context for object mode (or any non-edit mode)
    pub fn object_context(&self) -> Result<SelectionContext<'_>> {
        let selected = self
            .selected
            .iter()
            .map(|name| self.object(name))
            .collect::<Result<Vec<_>>>()?;
        Ok(SelectionContext {
            mode: self.mode,
            cursor: self.cursor,
            selected,
            active: None,
        })
    }
}
