//! Bloom CLI - Command-line interface for the Bloom garden engine

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{render, run, sprite};

#[derive(Parser)]
#[command(name = "bloom")]
#[command(about = "Procedural flower-garden simulation engine", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation headless and print population statistics
    Run {
        /// Number of frames to simulate
        #[arg(long, default_value = "600")]
        frames: u32,

        /// Fixed timestep in seconds (0 = wall-clock time)
        #[arg(long, default_value = "0.016666")]
        dt: f64,

        /// Garden width in pixels
        #[arg(long, default_value = "800")]
        width: u32,

        /// Garden height in pixels
        #[arg(long, default_value = "600")]
        height: u32,

        /// Use the reduced-population constrained profile
        #[arg(long)]
        constrained: bool,

        /// RNG seed
        #[arg(long, default_value = "1")]
        seed: u32,

        /// Path to a TOML config override file
        #[arg(long)]
        config: Option<String>,

        /// Place a vortex at the garden center for the whole run
        #[arg(long)]
        vortex: bool,
    },

    /// Render the garden to a PNG image (headless)
    Render {
        /// Output image path
        #[arg(short, long, default_value = "garden.png")]
        output: String,

        /// Frames to simulate before capturing
        #[arg(long, default_value = "600")]
        frames: u32,

        /// Image width in pixels
        #[arg(long, default_value = "800")]
        width: u32,

        /// Image height in pixels
        #[arg(long, default_value = "600")]
        height: u32,

        /// Use the reduced-population constrained profile
        #[arg(long)]
        constrained: bool,

        /// RNG seed
        #[arg(long, default_value = "1")]
        seed: u32,

        /// Path to a TOML config override file
        #[arg(long)]
        config: Option<String>,
    },

    /// Rasterize a single flower sprite to a PNG image
    Sprite {
        /// Shape variant, 0-6
        variant: usize,

        /// Output image path
        #[arg(short, long, default_value = "sprite.png")]
        output: String,

        /// Petal hue in degrees
        #[arg(long, default_value = "340")]
        hue: f32,

        /// Petal saturation, 0-100
        #[arg(long, default_value = "80")]
        saturation: f32,

        /// Petal lightness, 0-100
        #[arg(long, default_value = "70")]
        lightness: f32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            frames,
            dt,
            width,
            height,
            constrained,
            seed,
            config,
            vortex,
        } => run::run(run::RunArgs {
            frames,
            dt,
            width,
            height,
            constrained,
            seed,
            config,
            vortex,
        }),
        Commands::Render {
            output,
            frames,
            width,
            height,
            constrained,
            seed,
            config,
        } => render::run(render::RenderArgs {
            output,
            frames,
            width,
            height,
            constrained,
            seed,
            config,
        }),
        Commands::Sprite {
            variant,
            output,
            hue,
            saturation,
            lightness,
        } => sprite::run(sprite::SpriteArgs {
            variant,
            output,
            hue,
            saturation,
            lightness,
        }),
    }
}
