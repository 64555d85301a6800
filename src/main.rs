use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};

use flow_core::{MeasureMode, Orientation, Scene};
use flow_layout::{FlowLayout, FlowResult};

mod demo;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OrientationArg {
    Horizontal,
    Vertical,
}

impl From<OrientationArg> for Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Horizontal => Orientation::Horizontal,
            OrientationArg::Vertical => Orientation::Vertical,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON scene file (config, container, items)
    #[arg(value_name = "FILE")]
    scene: Option<String>,

    /// Lay out the built-in demo scene
    #[arg(long, conflicts_with = "scene")]
    demo: bool,

    /// Fix the container width
    #[arg(long)]
    width: Option<f32>,

    /// Fix the container height
    #[arg(long)]
    height: Option<f32>,

    /// Flow orientation
    #[arg(long, value_enum)]
    orientation: Option<OrientationArg>,

    /// Gap between items in a row and between columns
    #[arg(long)]
    spacing_h: Option<f32>,

    /// Gap between items in a column and between rows
    #[arg(long)]
    spacing_v: Option<f32>,

    /// Mirror the flow direction
    #[arg(long)]
    reverse: bool,

    /// Count right/bottom padding in a content-derived cross extent
    #[arg(long)]
    trailing_padding: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Save output to file instead of stdout
    #[arg(long)]
    output: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if args.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let mut scene = load_scene(&args)?;
    if let Some(width) = args.width {
        scene.container.width = MeasureMode::Exact(width);
    }
    if let Some(height) = args.height {
        scene.container.height = MeasureMode::Exact(height);
    }

    let mut layout = FlowLayout::with_config(scene.config)
        .context("Invalid flow configuration in scene")?
        .with_debug(args.debug);
    if let Some(orientation) = args.orientation {
        layout.set_orientation(orientation.into());
    }
    if let Some(spacing) = args.spacing_h {
        layout
            .set_line_spacing_horizontal(spacing)
            .context("Invalid --spacing-h")?;
    }
    if let Some(spacing) = args.spacing_v {
        layout
            .set_line_spacing_vertical(spacing)
            .context("Invalid --spacing-v")?;
    }
    if args.reverse {
        layout.set_reverse(true);
    }
    if args.trailing_padding {
        layout.set_include_trailing_padding(true);
    }

    info!(
        "Arranging {} items ({:?}, width={:?}, height={:?})",
        scene.items.len(),
        layout.config().orientation,
        scene.container.width,
        scene.container.height
    );

    let result = layout.compute(&scene.items, &scene.container);
    info!("Resolved container {} x {} in {} bands", result.size.x, result.size.y, result.band_count);

    let output_text = match args.format {
        OutputFormat::Text => generate_text_output(result),
        OutputFormat::Json => generate_json_output(result)?,
    };

    if let Some(output_file) = args.output {
        fs::write(&output_file, output_text)
            .with_context(|| format!("Failed to write to file: {}", output_file))?;
        info!("Output written to: {}", output_file);
    } else {
        print!("{}", output_text);
    }

    Ok(())
}

fn load_scene(args: &Args) -> Result<Scene> {
    if args.demo {
        info!("Using built-in demo scene");
        return Ok(demo::demo_scene());
    }

    let Some(path) = &args.scene else {
        anyhow::bail!("No scene given. Pass a scene FILE or --demo");
    };
    if !Path::new(path).exists() {
        anyhow::bail!("Scene file not found: {}", path);
    }
    if !path.ends_with(".json") {
        warn!("File doesn't have .json extension: {}", path);
    }

    info!("Loading scene: {}", path);
    Scene::load(path).with_context(|| format!("Failed to load scene: {}", path))
}

fn generate_text_output(result: &FlowResult) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Container: {} x {} ({} bands, max item {} x {})\n",
        result.size.x,
        result.size.y,
        result.band_count,
        result.extents.max_item_width,
        result.extents.max_item_height
    ));
    output.push_str(&format!(
        "{:>5} {:>9} {:>9} {:>9} {:>9}\n",
        "#", "x", "y", "width", "height"
    ));
    for (index, rect) in result.rects.iter().enumerate() {
        output.push_str(&format!(
            "{:>5} {:>9.1} {:>9.1} {:>9.1} {:>9.1}\n",
            index,
            rect.x(),
            rect.y(),
            rect.width(),
            rect.height()
        ));
    }
    output
}

fn generate_json_output(result: &FlowResult) -> Result<String> {
    let value = serde_json::json!({
        "size": result.size,
        "band_count": result.band_count,
        "max_item_width": result.extents.max_item_width,
        "max_item_height": result.extents.max_item_height,
        "rects": result.rects,
    });
    let mut text = serde_json::to_string_pretty(&value).context("Failed to serialize layout")?;
    text.push('\n');
    Ok(text)
}
