//! Init command implementation.
//!
//! Writes a commented `hexmap.yaml` listing the directories that hold maps.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{discover, MANIFEST_FILENAME};
use crate::error::{HexMapError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::Viewport;
use crate::theme::DEFAULT_THEME;

/// Initialize a hexmap project by generating a hexmap.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing hexmap.yaml
    #[arg(long)]
    pub force: bool,
}

/// Manifest text for a project whose maps live in `source_dirs`.
pub fn manifest_yaml(source_dirs: &BTreeSet<String>) -> String {
    let viewport = Viewport::default();
    let mut yaml = String::from("# hexmap project settings\n");

    if !source_dirs.is_empty() && !(source_dirs.len() == 1 && source_dirs.contains(".")) {
        yaml.push_str("sources:\n");
        for dir in source_dirs {
            yaml.push_str(&format!("  - \"{}\"\n", dir));
        }
    }

    yaml.push_str("output: dist\n");
    yaml.push_str(&format!("theme: {}\n", DEFAULT_THEME));
    yaml.push_str("# viewport size of rendered SVGs\n");
    yaml.push_str(&format!("width: {}\n", viewport.width));
    yaml.push_str(&format!("height: {}\n", viewport.height));
    yaml
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(HexMapError::Build {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    printer.status("Scanning", &display_path(&args.path));
    let discovery = discover(&args.path)?;

    let mut source_dirs = BTreeSet::new();
    for file in discovery.scan.files() {
        if let Some(parent) = file.parent() {
            let relative = parent.strip_prefix(&discovery.root).unwrap_or(parent);
            let dir = if relative == Path::new("") {
                ".".to_string()
            } else {
                format!("{}/", relative.display())
            };
            source_dirs.insert(dir);
        }
    }

    fs::write(&manifest_path, manifest_yaml(&source_dirs)).map_err(|e| HexMapError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    printer.status(
        "Created",
        &format!(
            "{} ({} found)",
            MANIFEST_FILENAME,
            plural(discovery.scan.total(), "source file", "source files")
        ),
    );

    Ok(())
}
