//! Geometry evaluator: turns a resolved input into numbers

use tracing::{debug, trace, warn};
use viewmeasure_core::{Error, Result, Space, UnsupportedReason};

use crate::area::surface_area_report;
use crate::config::MeasureConfig;
use crate::distance::{distance, world_position};
use crate::input::{AreaQuery, AreaTarget, DistanceQuery, MeasurementInput};
use crate::overlay::Overlay;
use crate::result::{AreaFailure, AreaMeasurement, DistanceMeasurement, MeasurementResult, ObjectArea};
use crate::selection::{resolve_selection, SelectionContext};

/// Evaluate a measurement input
pub fn evaluate(input: &MeasurementInput<'_>, config: &MeasureConfig) -> Result<MeasurementResult> {
    match input {
        MeasurementInput::Distance(query) => evaluate_distance(query, config).map(MeasurementResult::Distance),
        MeasurementInput::Area(query) => evaluate_area(query, config).map(MeasurementResult::Area),
    }
}

/// Resolve the selection and evaluate it in one go
pub fn measure(ctx: &SelectionContext<'_>, config: &MeasureConfig) -> Result<MeasurementResult> {
    let input = resolve_selection(ctx, config)?;
    evaluate(&input, config)
}

fn evaluate_distance(query: &DistanceQuery<'_>, config: &MeasureConfig) -> Result<DistanceMeasurement> {
    let owner = query.owner.as_ref();
    let value = distance(&query.from, &query.to, query.space, owner)?;
    let overlay = Overlay::new(
        world_position(&query.from, owner),
        world_position(&query.to, owner),
        query.space,
    );

    let (areas, area_failures) = match &query.companion_areas {
        Some(areas) => companion_areas(areas, config),
        None => (Vec::new(), Vec::new()),
    };

    debug!(value, space = %query.space, "distance");
    Ok(DistanceMeasurement {
        value,
        space: query.space,
        from: query.from.anchor.clone(),
        to: query.to.anchor.clone(),
        overlay,
        areas,
        area_failures,
    })
}

fn evaluate_area(query: &AreaQuery<'_>, config: &MeasureConfig) -> Result<AreaMeasurement> {
    let entries = object_areas(query, config)?;
    if entries.is_empty() {
        return Err(match query.targets.as_slice() {
            [single] => Error::NotAMesh {
                name: single.object.name.clone(),
            },
            _ => Error::Unsupported(UnsupportedReason::NoMeshObjects),
        });
    }

    let total: f64 = entries.iter().map(|e| e.area).sum();
    debug!(total, objects = entries.len(), space = %query.space, "surface area");
    Ok(AreaMeasurement {
        space: query.space,
        selected_only: query.selected_only(),
        entries,
        total,
    })
}

/// Area of one target, `None` for objects without mesh data
fn object_area(target: &AreaTarget<'_>, space: Space, config: &MeasureConfig) -> Result<Option<ObjectArea>> {
    match surface_area_report(target.object, target.selected_only, space, config.face_policy) {
        Ok(report) => Ok(Some(ObjectArea {
            name: target.object.name.clone(),
            area: report.area,
            face_count: report.face_count,
            skipped_faces: report.skipped_faces,
        })),
        Err(Error::NotAMesh { name }) => {
            trace!(object = %name, "no area for non-mesh object");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Per-object areas; objects without mesh data are left out of the listing
fn object_areas(query: &AreaQuery<'_>, config: &MeasureConfig) -> Result<Vec<ObjectArea>> {
    let mut entries = Vec::with_capacity(query.targets.len());
    for target in &query.targets {
        entries.extend(object_area(target, query.space, config)?);
    }
    Ok(entries)
}

/// Areas shown next to a distance. A broken mesh is reported per object and
/// does not take the distance down with it.
fn companion_areas(query: &AreaQuery<'_>, config: &MeasureConfig) -> (Vec<ObjectArea>, Vec<AreaFailure>) {
    let mut entries = Vec::new();
    let mut failures = Vec::new();
    for target in &query.targets {
        match object_area(target, query.space, config) {
            Ok(entry) => entries.extend(entry),
            Err(e) => {
                warn!(object = %target.object.name, error = %e, "area not available");
                failures.push(AreaFailure {
                    name: target.object.name.clone(),
                    error: e.to_string(),
                });
            }
        }
    }
    (entries, failures)
}
