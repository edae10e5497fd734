//! Quokka CLI
//!
//! Lays out a JSON box scene and prints the resolved geometry.
//!
//! Usage:
//!   quokka <scene.json>                      Print the laid-out box tree
//!   quokka <scene.json> --json               Print the geometry as JSON
//!   quokka <scene.json> --viewport-width 1024
//!
//! Set `RUST_LOG=debug` (or `trace`) to follow the layout pass.

mod report;
mod scene;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use quokka_common::warning::clear_warnings;
use quokka_layout::{LayoutContext, Size};

use report::{print_report, scene_report};
use scene::Scene;

/// Quokka: out-of-flow box geometry for CSS scenes
#[derive(Parser, Debug)]
#[command(name = "quokka")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Lay out the bundled sample
    quokka quokka-cli/scenes/positioned.json

    # Same scene in a narrower viewport, as JSON
    quokka --json --viewport-width 480 quokka-cli/scenes/positioned.json
"#)]
struct Cli {
    /// Path to the scene file
    #[arg(value_name = "SCENE")]
    scene: PathBuf,

    /// Print the geometry as JSON instead of a tree
    #[arg(short, long)]
    json: bool,

    /// Override the scene's viewport width (CSS px)
    #[arg(long, value_name = "PX")]
    viewport_width: Option<u16>,

    /// Override the scene's viewport height (CSS px)
    #[arg(long, value_name = "PX")]
    viewport_height: Option<u16>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let text = fs::read_to_string(&cli.scene)
        .with_context(|| format!("cannot read {}", cli.scene.display()))?;
    let mut scene = Scene::from_json(&text)
        .with_context(|| format!("cannot load {}", cli.scene.display()))?;
    if let Some(width) = cli.viewport_width {
        scene.viewport.width = i32::from(width);
    }
    if let Some(height) = cli.viewport_height {
        scene.viewport.height = i32::from(height);
    }
    let loaded = scene.load()?;

    clear_warnings();
    let viewport = Size::from_px(loaded.viewport.width, loaded.viewport.height);
    let mut ctx = LayoutContext::new(&loaded.tree, viewport);
    ctx.layout();

    let report = scene_report(&ctx, &loaded.boxes);
    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("cannot encode report")?
        );
    } else {
        print_report(&report, &loaded.boxes);
    }
    Ok(())
}
