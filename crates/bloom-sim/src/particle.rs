//! Ambient particle pools: dust motes and falling petals
//!
//! Two independently bounded pools with the same shape but different
//! kinematic and visual parameters. Ceilings are enforced at creation by
//! refusing the spawn — existing particles are never evicted. Removal is
//! swap-with-last-then-pop, so iteration order is not stable.

use bloom_core::{Bounds, Color, Vec2};

use crate::rand::GardenRng;

/// How strongly the wind field drags each kind. Dust barely notices the
/// breeze; petals ride it.
const DUST_WIND_COUPLING: f32 = 20.0;
const PETAL_WIND_COUPLING: f32 = 100.0;

/// Triangular fade law: ramps 0→1 while life falls from 1 to 0.5, then
/// back 1→0 as life reaches 0
pub fn fade_opacity(life: f32) -> f32 {
    if life > 0.5 {
        (1.0 - life) * 2.0
    } else {
        (life * 2.0).max(0.0)
    }
}

/// A slow-drifting dust mote
#[derive(Clone, Debug)]
pub struct DustParticle {
    pub position: Vec2,
    pub size: f32,
    /// 1 = just born, 0 = dead
    pub life: f32,
    pub opacity: f32,
    duration: f32,
    velocity: Vec2,
}

/// A falling petal with its own tint and spin
#[derive(Clone, Debug)]
pub struct PetalParticle {
    pub position: Vec2,
    pub size: f32,
    pub life: f32,
    pub opacity: f32,
    pub color: Color,
    /// Degrees
    pub rotation: f32,
    duration: f32,
    velocity: Vec2,
    rotation_speed: f32,
}

/// Bounded pool of dust motes
pub struct DustPool {
    particles: Vec<DustParticle>,
    ceiling: usize,
}

impl DustPool {
    pub fn new(ceiling: usize) -> Self {
        Self {
            particles: Vec::with_capacity(ceiling),
            ceiling,
        }
    }

    /// Spawn one mote at a random surface position. Returns false when the
    /// pool is at its ceiling and the spawn was dropped.
    pub fn spawn(&mut self, rng: &mut GardenRng, bounds: Bounds) -> bool {
        if self.particles.len() >= self.ceiling {
            return false;
        }
        let factor = rng.next_f32();
        self.particles.push(DustParticle {
            position: Vec2::new(rng.range(0.0, bounds.width), rng.range(0.0, bounds.height)),
            size: 1.0 + factor * 3.0,
            life: 1.0,
            opacity: 0.0,
            duration: 5.0 + (1.0 - factor) * 10.0,
            velocity: Vec2::new(rng.range(-10.0, 10.0), rng.range(-10.0, 10.0)),
        });
        true
    }

    /// Age, drift, and fade every mote; expired ones are swap-removed
    pub fn tick(&mut self, dt: f32, wind: f32) {
        let mut i = 0;
        while i < self.particles.len() {
            let p = &mut self.particles[i];
            p.life -= dt / p.duration;
            if p.life <= 0.0 {
                self.particles.swap_remove(i);
                continue;
            }
            p.position.x += (p.velocity.x + wind * DUST_WIND_COUPLING) * dt;
            p.position.y += p.velocity.y * dt;
            p.opacity = fade_opacity(p.life);
            i += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DustParticle> {
        self.particles.iter()
    }
}

/// Bounded pool of falling petals
pub struct PetalPool {
    particles: Vec<PetalParticle>,
    ceiling: usize,
}

impl PetalPool {
    pub fn new(ceiling: usize) -> Self {
        Self {
            particles: Vec::with_capacity(ceiling),
            ceiling,
        }
    }

    /// Spawn one petal just above the surface. Returns false when dropped
    /// at the ceiling.
    pub fn spawn(&mut self, rng: &mut GardenRng, bounds: Bounds) -> bool {
        if self.particles.len() >= self.ceiling {
            return false;
        }
        let factor = rng.next_f32();
        let hue = rng.range(330.0, 390.0);
        self.particles.push(PetalParticle {
            position: Vec2::new(rng.range(0.0, bounds.width), -20.0),
            size: 5.0 + factor * 8.0,
            life: 1.0,
            opacity: 0.0,
            color: Color::from_hsla(
                hue,
                rng.range(70.0, 100.0),
                rng.range(65.0, 80.0),
                0.6,
            ),
            rotation: rng.range(0.0, 360.0),
            duration: 5.0 + (1.0 - factor) * 10.0,
            velocity: Vec2::new(rng.range(-20.0, 20.0), rng.range(20.0, 40.0)),
            rotation_speed: rng.range(-1.0, 1.0),
        });
        true
    }

    /// Age, fall, and spin every petal; expired or sunken ones are
    /// swap-removed
    pub fn tick(&mut self, dt: f32, wind: f32, bounds: Bounds) {
        let mut i = 0;
        while i < self.particles.len() {
            let p = &mut self.particles[i];
            p.life -= dt / p.duration;
            if p.life <= 0.0 || p.position.y > bounds.height + p.size {
                self.particles.swap_remove(i);
                continue;
            }
            p.position.x += (p.velocity.x + wind * PETAL_WIND_COUPLING) * dt;
            p.position.y += p.velocity.y * dt;
            p.rotation += p.rotation_speed * dt;
            p.opacity = fade_opacity(p.life);
            i += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PetalParticle> {
        self.particles.iter()
    }
}
