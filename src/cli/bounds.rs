//! Bounds command implementation.
//!
//! Prints the geometry a pan/zoom host needs to frame a map: the content
//! bounding box, the initial centre and zoom.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::discovery::load_sources;
use crate::document::compile_source;
use crate::error::{HexMapError, Result};
use crate::geometry::Point;
use crate::map::HexMap;
use crate::theme::Theme;

use super::{current_manifest, instance_token};

/// Print a map's bounds and initial view as JSON
#[derive(Args, Debug)]
pub struct BoundsArgs {
    /// Map file, or markdown document holding maps
    pub file: PathBuf,

    /// Theme prepended to maps that do not choose one
    #[arg(long)]
    pub theme: Option<String>,
}

/// Geometry summary of one map.
#[derive(Debug, Serialize)]
pub struct BoundsReport {
    pub name: String,
    /// `[min_x, min_y, max_x, max_y]`, or null for a map without regions.
    pub bounds: Option<[f64; 4]>,
    pub center: Point,
    pub zoom: Option<f64>,
    pub regions: usize,
    pub paths: usize,
    pub types: Vec<String>,
}

impl BoundsReport {
    pub fn new(name: &str, map: &HexMap) -> Self {
        Self {
            name: name.to_string(),
            bounds: map.content_bounds().map(|b| b.to_array()),
            center: map.initial_center(),
            zoom: map.initial_zoom(),
            regions: map.regions().len(),
            paths: map.splines().len(),
            types: map.types().into_iter().map(str::to_string).collect(),
        }
    }
}

pub fn reports(args: &BoundsArgs) -> Result<Vec<BoundsReport>> {
    let theme = match &args.theme {
        Some(name) => Theme::resolve(name),
        None => current_manifest()?.default_theme(),
    };

    let sources = load_sources(&args.file)?;
    if sources.is_empty() {
        return Err(HexMapError::Build {
            message: format!("No maps in {}", args.file.display()),
            help: Some("Markdown files need a ```text-mapper block".to_string()),
        });
    }

    Ok(sources
        .iter()
        .map(|source| {
            let map = compile_source(&instance_token(&source.name), &source.source, theme);
            BoundsReport::new(&source.name, &map)
        })
        .collect())
}

pub fn run(args: BoundsArgs) -> Result<()> {
    let reports = reports(&args)?;

    let json = if let [single] = reports.as_slice() {
        serde_json::to_string_pretty(single)
    } else {
        serde_json::to_string_pretty(&reports)
    }
    .map_err(|e| HexMapError::Build {
        message: format!("Failed to serialize bounds: {}", e),
        help: None,
    })?;

    println!("{json}");
    Ok(())
}
