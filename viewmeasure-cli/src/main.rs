//! Measure a scene snapshot from the command line
//!
//! Stands in for the host application: loads a JSON snapshot of the
//! selection state, runs the engine once and prints what a viewport panel
//! would show.

mod snapshot;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use viewmeasure_core::Space;
use viewmeasure_engine::{format_area, measure, FacePolicy, MeasureConfig, MeasurementResult, SelectionContext};

use crate::snapshot::SceneSnapshot;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SpaceArg {
    Local,
    Global,
}

impl From<SpaceArg> for Space {
    fn from(arg: SpaceArg) -> Self {
        match arg {
            SpaceArg::Local => Space::Local,
            SpaceArg::Global => Space::Global,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "viewmeasure", version, about = "Measure distances and surface areas of a scene selection")]
struct Cli {
    /// Scene snapshot (JSON)
    scene: PathBuf,

    /// Space to measure in, overrides the snapshot's setting
    #[arg(long, value_enum)]
    space: Option<SpaceArg>,

    /// Calculate surface areas
    #[arg(long)]
    area: bool,

    /// Decimals to print
    #[arg(long)]
    precision: Option<usize>,

    /// Fail on faces that are neither triangles nor quads
    #[arg(long)]
    strict_faces: bool,

    /// Commit pending edit-mode selection before measuring
    #[arg(long)]
    refresh: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn config(&self, base: &MeasureConfig) -> MeasureConfig {
        let mut config = base.clone();
        if let Some(space) = self.space {
            config.space = space.into();
        }
        if self.area {
            config.calc_area = true;
        }
        if let Some(precision) = self.precision {
            config.precision = precision;
        }
        if self.strict_faces {
            config.face_policy = FacePolicy::Strict;
        }
        config
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let snapshot = SceneSnapshot::load(&cli.scene)?;
    let config = cli.config(&snapshot.config);
    info!(scene = %cli.scene.display(), mode = ?snapshot.mode, "loaded snapshot");

    let session = match snapshot.edit_session()? {
        Some(mut session) => {
            if cli.refresh {
                session.refresh();
            } else if session.is_stale() {
                warn!("edit-mode selection changed since it was last committed, pass --refresh to measure it");
            }
            Some(session)
        }
        None => None,
    };

    let ctx = match &session {
        Some(session) => SelectionContext::from_session(snapshot.cursor, session),
        None => snapshot.object_context()?,
    };

    match measure(&ctx, &config) {
        Ok(result) if cli.json => println!("{}", serde_json::to_string_pretty(&result)?),
        Ok(result) => print_result(&result, &config),
        Err(e) if e.is_unsupported() => println!("Selection not supported: {e}"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn print_result(result: &MeasurementResult, config: &MeasureConfig) {
    let precision = config.precision;
    println!("{}", result.summary(precision));

    match result {
        MeasurementResult::Distance(d) => {
            for area in &d.areas {
                println!("  {}: {}", area.name, format_area(area.area, precision));
            }
            for failure in &d.area_failures {
                println!("  {}: area unavailable ({})", failure.name, failure.error);
            }
            if config.draw_overlay {
                let o = &d.overlay;
                println!(
                    "  overlay: [{:.p$}, {:.p$}, {:.p$}] -> [{:.p$}, {:.p$}, {:.p$}]",
                    o.start.x, o.start.y, o.start.z, o.end.x, o.end.y, o.end.z,
                    p = precision
                );
            }
        }
        MeasurementResult::Area(a) => {
            for entry in &a.entries {
                println!(
                    "  {}: {} ({} faces)",
                    entry.name,
                    format_area(entry.area, precision),
                    entry.face_count
                );
                if entry.skipped_faces > 0 {
                    println!("    {} faces skipped (not tri/quad)", entry.skipped_faces);
                }
            }
        }
    }
}
