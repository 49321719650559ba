//! boxuv - UV unfold guide generator for rectangular boxes.

use std::io::Cursor;
use std::path::PathBuf;

use anyhow::{Context, Result};
use boxuv::{
    compute_layout, layout_record, render_layout, write_artifacts, BoxDimensions, LayoutConfig,
    RenderStyle,
};
use clap::Parser;
use image::ImageFormat;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generates UV unfold guides for a rectangular box", long_about = None)]
struct Args {
    /// Box width in real-world units (e.g. meters)
    width: f64,

    /// Box height in the same unit
    height: f64,

    /// Box depth in the same unit
    depth: f64,

    /// Atlas side length in pixels
    #[arg(long, default_value_t = boxuv::DEFAULT_ATLAS_SIZE)]
    atlas_size: u32,

    /// Margin between faces and around the border, fraction of the atlas side
    #[arg(long, default_value_t = boxuv::DEFAULT_MARGIN)]
    margin: f64,

    /// Safe-area inset, fraction of each face's shorter side
    #[arg(long, default_value_t = boxuv::DEFAULT_SAFE_INSET)]
    safe_inset: f64,

    /// Output guide image path (PNG)
    #[arg(long, default_value = "uv_layout.png")]
    output_image: PathBuf,

    /// Output coordinate record path (JSON)
    #[arg(long, default_value = "uv_layout.json")]
    output_meta: PathBuf,

    /// Outline width in pixels (0 = derive from atlas size)
    #[arg(long, default_value_t = 0)]
    line_width: u32,

    /// Label font size in pixels at a 2048 atlas
    #[arg(long, default_value_t = 24.0)]
    label_size: f32,

    /// Fill the background black instead of transparent
    #[arg(long)]
    opaque_background: bool,

    /// Skip face labels even when a system font is available
    #[arg(long)]
    no_labels: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();
    run(args)
}

fn run(args: Args) -> Result<()> {
    let dims = BoxDimensions::new(args.width, args.height, args.depth)?;
    let config = LayoutConfig {
        atlas_size: args.atlas_size,
        margin: args.margin,
        safe_inset: args.safe_inset,
    };
    let layout = compute_layout(&dims, &config)?;
    info!(
        "placed 6 faces at {:.2} px/unit in a {} px atlas",
        layout.scale, layout.atlas_size
    );

    let style = RenderStyle {
        outline_width: args.line_width,
        label_size: args.label_size,
        draw_labels: !args.no_labels,
        background: if args.opaque_background {
            [0, 0, 0, 255]
        } else {
            [0, 0, 0, 0]
        },
        ..RenderStyle::default()
    };

    let image = render_layout(&layout, &style)?;
    let mut png = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .context("failed to encode guide image")?;
    let json = layout_record(&layout).to_json_pretty()?;

    write_artifacts(&args.output_image, &png, &args.output_meta, json.as_bytes())?;
    info!(
        "wrote {} and {}",
        args.output_image.display(),
        args.output_meta.display()
    );
    Ok(())
}
