//! Single-sprite rasterization command

use anyhow::{bail, Context, Result};
use bloom_sprite::{compose, Palette, VARIANT_COUNT};

pub struct SpriteArgs {
    pub variant: usize,
    pub output: String,
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

pub fn run(args: SpriteArgs) -> Result<()> {
    if args.variant >= VARIANT_COUNT {
        bail!("variant must be 0-{}", VARIANT_COUNT - 1);
    }

    let palette = Palette::from_hsl(args.hue, args.saturation, args.lightness);
    let sprite = compose(args.variant, &palette);

    let img = image::RgbaImage::from_raw(sprite.size(), sprite.size(), sprite.pixels().to_vec())
        .context("Failed to create image from sprite data")?;
    img.save(&args.output)
        .context(format!("Failed to save image to {}", args.output))?;

    println!(
        "Rasterized variant {} ({}x{}) to {}",
        args.variant,
        sprite.size(),
        sprite.size(),
        args.output
    );

    Ok(())
}
