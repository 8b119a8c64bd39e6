pub mod bounds;
pub mod completions;
pub mod init;
pub mod render;

use std::path::Path;

use clap::{ArgAction, Parser, Subcommand};

use crate::discovery::{find_manifest, Manifest};
use crate::error::Result;

/// hexmap - compile text hex maps into layered SVG
#[derive(Parser, Debug)]
#[command(name = "hexmap")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render map files to SVG
    Render(render::RenderArgs),

    /// Print a map's bounds and initial view as JSON
    Bounds(bounds::BoundsArgs),

    /// Initialize a hexmap project (generates hexmap.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// The manifest of the current directory, or defaults.
pub(crate) fn current_manifest() -> Result<Manifest> {
    Ok(find_manifest(Path::new("."))?.unwrap_or_default())
}

/// Turn a map name into an identifier suffix: ASCII alphanumerics and
/// underscores only.
///
/// Suffixes are joined to identifiers with a dash, so a token without
/// dashes keeps `sun-small` + `a` apart from `sun` + `small-a`.
pub(crate) fn instance_token(name: &str) -> String {
    let token: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();
    let token = token.trim_matches('_');
    if token.is_empty() {
        "map".to_string()
    } else {
        token.to_string()
    }
}
