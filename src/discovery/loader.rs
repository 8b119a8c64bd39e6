//! Reading discovered files into map sources.

use std::fs;
use std::path::{Path, PathBuf};

use crate::document::extract_blocks;
use crate::error::{HexMapError, Result};

use super::scanner::{detect_source_kind, SourceKind};

/// One map's source text, ready to compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapSource {
    /// Output name: the file stem, with `-N` for the Nth block of a
    /// markdown document holding several maps.
    pub name: String,
    pub path: PathBuf,
    /// 1-based line in `path` where the source starts.
    pub line: usize,
    pub source: String,
}

fn file_stem(path: &Path) -> String {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("map");
    name.split('.').next().unwrap_or(name).to_string()
}

/// Load every map in a file. Markdown without map blocks yields nothing.
pub fn load_sources(path: &Path) -> Result<Vec<MapSource>> {
    let content = fs::read_to_string(path).map_err(|e| HexMapError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read file: {}", e),
    })?;

    let stem = file_stem(path);
    let kind = detect_source_kind(path).unwrap_or(SourceKind::Map);

    let sources = match kind {
        SourceKind::Map => vec![MapSource {
            name: stem,
            path: path.to_path_buf(),
            line: 1,
            source: content,
        }],
        SourceKind::Markdown => {
            let blocks = extract_blocks(&content);
            let numbered = blocks.len() > 1;
            blocks
                .into_iter()
                .enumerate()
                .map(|(i, block)| MapSource {
                    name: if numbered {
                        format!("{}-{}", stem, i + 1)
                    } else {
                        stem.clone()
                    },
                    path: path.to_path_buf(),
                    line: block.line,
                    source: block.source,
                })
                .collect()
        }
    };

    tracing::debug!(path = %path.display(), maps = sources.len(), "loaded");
    Ok(sources)
}
