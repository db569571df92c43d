//! Headless garden-to-PNG render command

use anyhow::{Context, Result};
use bloom_core::Bounds;
use bloom_render::{Canvas, Renderer};
use bloom_sim::Garden;

pub struct RenderArgs {
    pub output: String,
    pub frames: u32,
    pub width: u32,
    pub height: u32,
    pub constrained: bool,
    pub seed: u32,
    pub config: Option<String>,
}

const FRAME_DT: f64 = 1.0 / 60.0;

pub fn run(args: RenderArgs) -> Result<()> {
    let config = super::load_config(args.constrained, args.config.as_deref())?;
    let bounds = Bounds::new(args.width as f32, args.height as f32);
    let mut garden = Garden::new(config, bounds, args.seed);

    for _ in 0..args.frames {
        garden.step(FRAME_DT, &[], None);
        garden.drain_events();
    }

    let renderer = Renderer::default();
    let mut canvas = Canvas::new(args.width, args.height);
    renderer.render(&garden, &mut canvas);

    let img = image::RgbaImage::from_raw(args.width, args.height, canvas.into_pixels())
        .context("Failed to create image from pixel data")?;
    img.save(&args.output)
        .context(format!("Failed to save image to {}", args.output))?;

    println!(
        "Rendered {}x{} garden ({} flowers after {} frames) to {}",
        args.width,
        args.height,
        garden.flowers().len(),
        args.frames,
        args.output
    );

    Ok(())
}
