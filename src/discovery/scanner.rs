//! File system scanner for map sources.
//!
//! Recursively scans directories for `.map` files and markdown documents
//! that may embed maps.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::manifest::Manifest;

/// The kind of file a map can be read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Plain map source.
    Map,
    /// Markdown with fenced map blocks.
    Markdown,
}

/// Files found by a scan, in walk order.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub maps: Vec<PathBuf>,
    pub documents: Vec<PathBuf>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> usize {
        self.maps.len() + self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Record a file if it is a map source.
    pub fn add(&mut self, path: &Path) -> bool {
        match detect_source_kind(path) {
            Some(SourceKind::Map) => self.maps.push(path.to_path_buf()),
            Some(SourceKind::Markdown) => self.documents.push(path.to_path_buf()),
            None => return false,
        }
        true
    }

    /// All files, maps first.
    pub fn files(&self) -> impl Iterator<Item = &PathBuf> {
        self.maps.iter().chain(&self.documents)
    }

    pub fn merge(&mut self, other: ScanResult) {
        self.maps.extend(other.maps);
        self.documents.extend(other.documents);
    }
}

/// Scan a directory for map sources.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    if !root.exists() {
        return result;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if path.is_dir() || manifest.is_excluded(path) {
            continue;
        }

        result.add(path);
    }

    result
}

/// Scan multiple source paths relative to a base directory.
pub fn scan_sources(sources: &[String], base_path: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    for source in sources {
        let source_path = if Path::new(source).is_absolute() {
            PathBuf::from(source)
        } else {
            base_path.join(source)
        };

        result.merge(scan_directory(&source_path, manifest));
    }

    result
}

/// Detect the source kind from a file extension.
pub fn detect_source_kind(path: &Path) -> Option<SourceKind> {
    match path.extension()?.to_str()? {
        "map" | "txt" if is_map_name(path) => Some(SourceKind::Map),
        "md" | "markdown" => Some(SourceKind::Markdown),
        _ => None,
    }
}

/// `.map` files always qualify; `.txt` only as `name.map.txt`.
fn is_map_name(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.ends_with(".map") || name.ends_with(".map.txt")
}
