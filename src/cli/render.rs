//! Render command implementation.
//!
//! Compiles map files (or markdown documents embedding maps) and writes
//! one SVG per map.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use crate::discovery::{discover_paths, MapSource};
use crate::document::compile_source;
use crate::error::{HexMapError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::Viewport;
use crate::theme::Theme;

use super::{current_manifest, instance_token};

/// Render map files to SVG
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Map files or directories (default: manifest sources)
    pub paths: Vec<PathBuf>,

    /// Output directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Theme prepended to maps that do not choose one
    #[arg(long)]
    pub theme: Option<String>,

    /// Identifier suffix (default: derived from each map's name; dashes
    /// become underscores)
    #[arg(long)]
    pub id: Option<String>,

    /// Viewport width
    #[arg(long)]
    pub width: Option<f64>,

    /// Viewport height
    #[arg(long)]
    pub height: Option<f64>,

    /// Write SVG to stdout instead of files
    #[arg(long)]
    pub stdout: bool,
}

/// Settings after merging flags over the manifest.
struct Settings {
    output: PathBuf,
    theme: Theme,
    viewport: Viewport,
}

pub fn run(args: RenderArgs, printer: &Printer) -> Result<()> {
    let manifest = current_manifest()?;

    let viewport = Viewport::new(
        args.width.unwrap_or(manifest.width),
        args.height.unwrap_or(manifest.height),
    );
    if !(viewport.width > 0.0 && viewport.height > 0.0) {
        return Err(HexMapError::Build {
            message: format!("Invalid viewport {}x{}", viewport.width, viewport.height),
            help: Some("--width and --height must be positive".to_string()),
        });
    }

    let settings = Settings {
        output: args.output.clone().unwrap_or_else(|| manifest.output.clone()),
        theme: args
            .theme
            .as_deref()
            .map(Theme::resolve)
            .unwrap_or_else(|| manifest.default_theme()),
        viewport,
    };

    let paths = if args.paths.is_empty() {
        manifest
            .effective_sources()
            .into_iter()
            .map(PathBuf::from)
            .collect()
    } else {
        args.paths.clone()
    };

    let discovery = discover_paths(&paths, manifest);
    if discovery.scan.is_empty() {
        return Err(HexMapError::Build {
            message: "No map files found".to_string(),
            help: Some("Pass .map or .md files, or directories containing them".to_string()),
        });
    }

    let sources = discovery.load()?;
    if sources.is_empty() {
        printer.warning("Skipping", "no map blocks found");
        return Ok(());
    }

    if !args.stdout && !settings.output.exists() {
        fs::create_dir_all(&settings.output).map_err(|e| HexMapError::Io {
            path: settings.output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    for source in &sources {
        let svg = render_source(source, &args, &settings, printer);
        if args.stdout {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(svg.as_bytes())?;
        } else {
            let path = settings.output.join(format!("{}.svg", source.name));
            fs::write(&path, svg).map_err(|e| HexMapError::Io {
                path: path.clone(),
                message: format!("Failed to write SVG: {}", e),
            })?;
        }
    }

    if !args.stdout {
        printer.status(
            "Finished",
            &format!(
                "{} to {}",
                plural(sources.len(), "map", "maps"),
                printer.cyan(&display_path(&settings.output))
            ),
        );
    }

    Ok(())
}

fn render_source(
    source: &MapSource,
    args: &RenderArgs,
    settings: &Settings,
    printer: &Printer,
) -> String {
    let instance = instance_token(args.id.as_deref().unwrap_or(&source.name));
    let map = compile_source(&instance, &source.source, settings.theme);

    printer.status(
        "Rendering",
        &format!(
            "{} {}",
            source.name,
            printer.dim(&format!(
                "({}, {})",
                plural(map.regions().len(), "region", "regions"),
                plural(map.splines().len(), "path", "paths")
            ))
        ),
    );

    map.scene(settings.viewport).to_svg()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn args(paths: Vec<PathBuf>, output: PathBuf) -> RenderArgs {
        RenderArgs {
            paths,
            output: Some(output),
            theme: None,
            id: None,
            width: None,
            height: None,
            stdout: false,
        }
    }

    #[test]
    fn test_render_writes_svg() {
        let dir = tempdir().unwrap();
        let map = dir.path().join("valley.map");
        fs::write(&map, "0101 forest\n0102 plains \"Oakvale\"\n").unwrap();
        let out = dir.path().join("out");

        run(args(vec![map], out.clone()), &Printer::with_color(false)).unwrap();

        let svg = fs::read_to_string(out.join("valley.svg")).unwrap();
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains("id=\"hex.1.1-valley\""));
        assert!(svg.contains("Oakvale"));
    }

    #[test]
    fn test_render_markdown_blocks() {
        let dir = tempdir().unwrap();
        let doc = dir.path().join("campaign.md");
        fs::write(
            &doc,
            "```text-mapper\n0101 forest\n```\n\n```text-mapper\n0101 sea\n```\n",
        )
        .unwrap();
        let out = dir.path().join("out");

        run(args(vec![dir.path().to_path_buf()], out.clone()), &Printer::with_color(false))
            .unwrap();

        assert!(out.join("campaign-1.svg").exists());
        assert!(out.join("campaign-2.svg").exists());
    }

    #[test]
    fn test_render_fixed_id() {
        let dir = tempdir().unwrap();
        let map = dir.path().join("valley.map");
        fs::write(&map, "0101 forest\n").unwrap();
        let out = dir.path().join("out");

        let mut render_args = args(vec![map], out.clone());
        render_args.id = Some("main".to_string());
        render_args.theme = Some("plain".to_string());
        run(render_args, &Printer::with_color(false)).unwrap();

        let svg = fs::read_to_string(out.join("valley.svg")).unwrap();
        assert!(svg.contains("id=\"hex.1.1-main\""));
        assert!(!svg.contains("valley"));
    }

    #[test]
    fn test_render_id_is_sanitized() {
        let dir = tempdir().unwrap();
        let map = dir.path().join("valley.map");
        fs::write(&map, "0101 forest\n").unwrap();
        let out = dir.path().join("out");

        let mut render_args = args(vec![map], out.clone());
        render_args.id = Some("North-Ridge".to_string());
        render_args.theme = Some("plain".to_string());
        run(render_args, &Printer::with_color(false)).unwrap();

        let svg = fs::read_to_string(out.join("valley.svg")).unwrap();
        assert!(svg.contains("id=\"hex.1.1-north_ridge\""));
    }

    #[test]
    fn test_render_nothing_found() {
        let dir = tempdir().unwrap();
        let result = run(
            args(vec![dir.path().to_path_buf()], dir.path().join("out")),
            &Printer::with_color(false),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_render_rejects_bad_viewport() {
        let dir = tempdir().unwrap();
        let map = dir.path().join("valley.map");
        fs::write(&map, "0101 forest\n").unwrap();

        let mut render_args = args(vec![map], dir.path().join("out"));
        render_args.width = Some(0.0);

        assert!(run(render_args, &Printer::with_color(false)).is_err());
    }
}
