//! Finding map sources in a project.
//!
//! A project is a directory of `.map` files and markdown documents,
//! optionally configured by a `hexmap.yaml` manifest at its root.
//!
//! # Example
//!
//! ```ignore
//! use hexmap::discovery::discover;
//!
//! let result = discover("./campaign")?;
//! println!("Found {} files", result.scan.total());
//! ```

mod loader;
mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use loader::{load_sources, MapSource};
pub use manifest::Manifest;
pub use scanner::{detect_source_kind, scan_directory, scan_sources, ScanResult, SourceKind};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "hexmap.yaml";

/// Result of discovering map sources.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (default if no hexmap.yaml was found).
    pub manifest: Manifest,

    /// Whether a hexmap.yaml manifest was found.
    pub has_manifest: bool,

    pub scan: ScanResult,
}

impl DiscoveryResult {
    /// Read every discovered file into map sources.
    pub fn load(&self) -> Result<Vec<MapSource>> {
        let mut sources = Vec::new();
        for path in self.scan.files() {
            sources.extend(load_sources(path)?);
        }
        Ok(sources)
    }
}

/// Load `hexmap.yaml` from a directory, if present.
pub fn find_manifest(root: &Path) -> Result<Option<Manifest>> {
    let path = root.join(MANIFEST_FILENAME);
    if path.exists() {
        Manifest::load(&path).map(Some)
    } else {
        Ok(None)
    }
}

/// Discover map sources in a project directory, honouring its manifest.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();
    let found = find_manifest(&root)?;
    let has_manifest = found.is_some();
    let manifest = found.unwrap_or_default();

    let scan = scan_sources(&manifest.effective_sources(), &root, &manifest);

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest,
        scan,
    })
}

/// Discover map sources from explicit files and directories.
///
/// Files are taken as given, whatever their extension; directories are
/// scanned with the manifest's excludes.
pub fn discover_paths(paths: &[PathBuf], manifest: Manifest) -> DiscoveryResult {
    let mut scan = ScanResult::new();

    for path in paths {
        if path.is_dir() {
            scan.merge(scan_directory(path, &manifest));
        } else if !scan.add(path) {
            scan.maps.push(path.clone());
        }
    }

    let root = paths
        .first()
        .and_then(|p| p.parent())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    DiscoveryResult {
        root,
        manifest,
        has_manifest: false,
        scan,
    }
}
