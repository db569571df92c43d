//! Headless simulation run with population statistics

use anyhow::Result;
use bloom_core::{Bounds, Vec2};
use bloom_sim::{FrameClock, Garden, GardenEvent};

pub struct RunArgs {
    pub frames: u32,
    pub dt: f64,
    pub width: u32,
    pub height: u32,
    pub constrained: bool,
    pub seed: u32,
    pub config: Option<String>,
    pub vortex: bool,
}

pub fn run(args: RunArgs) -> Result<()> {
    let config = super::load_config(args.constrained, args.config.as_deref())?;
    let bounds = Bounds::new(args.width as f32, args.height as f32);
    let mut garden = Garden::new(config, bounds, args.seed);

    let center = Vec2::new(bounds.width / 2.0, bounds.height / 2.0);
    let vortex = args.vortex.then(|| garden.vortex_zone(center));
    if vortex.is_some() {
        println!("Vortex active at ({:.0}, {:.0})", center.x, center.y);
    }

    let mut clock = FrameClock::new();
    let mut sparkles = 0u32;
    for frame in 0..args.frames {
        let dt = if args.dt > 0.0 { args.dt } else { clock.tick() };
        garden.step(dt, &[], vortex);

        for event in garden.drain_events() {
            let GardenEvent::Sparkle {
                position,
                intensity,
            } = event;
            sparkles += 1;
            println!(
                "[{:>8.3}s] sparkle at ({:.0}, {:.0}) intensity {}",
                garden.time(),
                position.x,
                position.y,
                intensity
            );
        }

        if (frame + 1) % 120 == 0 {
            println!(
                "[{:>8.3}s] flowers={} dust={} petals={} wind={:+.3}",
                garden.time(),
                garden.flowers().len(),
                garden.dust().len(),
                garden.petals().len(),
                garden.wind()
            );
        }
    }

    println!(
        "Simulated {} frames ({:.1}s): {} flowers, {} dust, {} petals, {} sparkles",
        args.frames,
        garden.time(),
        garden.flowers().len(),
        garden.dust().len(),
        garden.petals().len(),
        sparkles
    );

    Ok(())
}
