//! Turning documents into compiled maps.
//!
//! A `.map` file is map source as is. A markdown file may embed any number
//! of maps in fenced code blocks:
//!
//! ````markdown
//! ```text-mapper
//! 0101 forest
//! ```
//! ````

use crate::map::{read_options, HexMap};
use crate::theme::Theme;

/// Info string that marks a fenced block as map source.
pub const FENCE_LANGUAGE: &str = "text-mapper";

/// Map source found in a markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapBlock {
    pub source: String,
    /// 1-based line of the document where the block's content starts.
    pub line: usize,
}

/// Choose the theme for a source: its own `option theme` wins over the
/// caller's default.
pub fn theme_for(lines: &[&str], default_theme: Theme) -> Theme {
    read_options(lines)
        .theme
        .map(|name| Theme::resolve(&name))
        .unwrap_or(default_theme)
}

/// Compile map source with its theme preamble prepended.
pub fn compile_source(instance: &str, source: &str, default_theme: Theme) -> HexMap {
    let lines: Vec<&str> = source.lines().collect();
    let theme = theme_for(&lines, default_theme);
    tracing::debug!(instance, %theme, "compiling source");

    let preamble: &str = theme.preamble();
    let all: Vec<&str> = preamble.lines().chain(lines.iter().copied()).collect();
    HexMap::compile(instance, &all)
}

fn is_opening_fence(line: &str) -> bool {
    line.trim_start()
        .strip_prefix("```")
        .is_some_and(|info| info.trim() == FENCE_LANGUAGE)
}

fn is_closing_fence(line: &str) -> bool {
    line.trim() == "```"
}

/// Every map block in a markdown document, in order.
///
/// An unclosed block runs to the end of the document.
pub fn extract_blocks(markdown: &str) -> Vec<MapBlock> {
    let mut blocks = Vec::new();
    let mut current: Option<MapBlock> = None;

    for (index, line) in markdown.lines().enumerate() {
        let Some(block) = current.as_mut() else {
            if is_opening_fence(line) {
                current = Some(MapBlock {
                    source: String::new(),
                    line: index + 2,
                });
            }
            continue;
        };

        if is_closing_fence(line) {
            blocks.extend(current.take());
        } else {
            block.source.push_str(line);
            block.source.push('\n');
        }
    }

    blocks.extend(current);
    blocks
}
