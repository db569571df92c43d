//! The frame-loop driver: one struct owning all simulation state
//!
//! There are no ambient globals — every population, the wind scalar, and
//! the spawn-throttle timestamps live in `Garden`, and all mutation flows
//! through `step`. The host (render loop, timer, or test harness) calls
//! `step` once per frame with the elapsed time and the frame's attractor
//! zones; the core assumes only that calls are monotonic in time and
//! non-overlapping.

use bloom_core::{Bounds, Vec2};

use crate::attractor::AttractorZone;
use crate::config::GardenConfig;
use crate::events::{EventBus, GardenEvent};
use crate::flower::FlowerBed;
use crate::particle::{DustPool, PetalPool};
use crate::rand::GardenRng;
use crate::wind::WindField;

/// Cadence of the two ambient generators, seconds
const DUST_SPAWN_INTERVAL: f64 = 0.5;
const PETAL_SPAWN_INTERVAL: f64 = 0.8;

/// The whole garden simulation
pub struct Garden {
    config: GardenConfig,
    bounds: Bounds,
    rng: GardenRng,
    wind: WindField,
    flowers: FlowerBed,
    dust: DustPool,
    petals: PetalPool,
    events: EventBus,
    /// Shape-variant bias while a themed visitor is active
    theme: Option<usize>,
    /// Simulation time, seconds
    time: f64,
    /// Sim time of the last admitted flower (automatic or pointer)
    last_flower_spawn: f64,
    dust_timer: f64,
    petal_timer: f64,
}

impl Garden {
    pub fn new(config: GardenConfig, bounds: Bounds, seed: u32) -> Self {
        let dust = DustPool::new(config.dust_ceiling);
        let petals = PetalPool::new(config.petal_ceiling);
        Self {
            config,
            bounds,
            rng: GardenRng::new(seed),
            wind: WindField::new(),
            flowers: FlowerBed::new(),
            dust,
            petals,
            events: EventBus::new(),
            theme: None,
            time: 0.0,
            last_flower_spawn: f64::NEG_INFINITY,
            dust_timer: 0.0,
            petal_timer: 0.0,
        }
    }

    /// Advance the simulation one frame.
    ///
    /// Order per frame: wind smoothing, particle ticks, flower tick
    /// (ageing + interaction resolution against this frame's zones),
    /// ambient generator timers, then flower spawn admission.
    pub fn step(&mut self, dt: f64, zones: &[AttractorZone], vortex: Option<AttractorZone>) {
        let dt = dt.max(0.0);
        self.time += dt;

        self.wind.step();
        let wind = self.wind.value();

        self.dust.tick(dt as f32, wind);
        self.petals.tick(dt as f32, wind, self.bounds);
        self.flowers.tick(
            self.time,
            self.bounds,
            self.config.flower_max_age,
            zones,
            vortex.as_ref(),
            &mut self.events,
        );

        // Ambient generators: fixed-interval timers folded into the frame;
        // each firing is a bounds-checked pool insertion
        self.dust_timer += dt;
        while self.dust_timer >= DUST_SPAWN_INTERVAL {
            self.dust_timer -= DUST_SPAWN_INTERVAL;
            self.dust.spawn(&mut self.rng, self.bounds);
        }
        self.petal_timer += dt;
        while self.petal_timer >= PETAL_SPAWN_INTERVAL {
            self.petal_timer -= PETAL_SPAWN_INTERVAL;
            self.petals.spawn(&mut self.rng, self.bounds);
        }

        // Spawn admission: at most one automatic flower per frame, and only
        // after the configured delay since the last admitted flower
        if self.time - self.last_flower_spawn > self.config.spawn_delay {
            let position = Vec2::new(
                self.rng.range(0.0, self.bounds.width),
                self.rng.range(0.0, self.bounds.height),
            );
            self.flowers.spawn(position, self.theme, self.time, &mut self.rng);
            self.last_flower_spawn = self.time;
        }
    }

    /// Pointer-requested flower at an explicit position, sharing the spawn
    /// throttle with automatic admission (pointer delay applies). Returns
    /// false when throttled.
    pub fn spawn_at(&mut self, position: Vec2) -> bool {
        if self.time - self.last_flower_spawn <= self.config.pointer_spawn_delay {
            return false;
        }
        self.flowers.spawn(position, self.theme, self.time, &mut self.rng);
        self.last_flower_spawn = self.time;
        true
    }

    /// Direct click removal; emits a burst event on a hit
    pub fn click_remove(&mut self, position: Vec2) -> bool {
        self.flowers.click_remove(position, &mut self.events)
    }

    /// Soft-fade all flowers of a variant (themed visitor departed)
    pub fn remove_variant(&mut self, variant: usize) {
        self.flowers.remove_by_variant(variant);
    }

    /// Set or clear the themed-visitor variant bias. An out-of-table
    /// variant is treated as no bias at spawn time.
    pub fn set_theme(&mut self, theme: Option<usize>) {
        self.theme = theme;
    }

    pub fn set_wind_target(&mut self, target: f32) {
        self.wind.set_target(target);
    }

    /// Manually spawn one dust mote (dropped at the ceiling)
    pub fn spawn_dust(&mut self) -> bool {
        self.dust.spawn(&mut self.rng, self.bounds)
    }

    /// Manually spawn one petal (dropped at the ceiling)
    pub fn spawn_petal(&mut self) -> bool {
        self.petals.spawn(&mut self.rng, self.bounds)
    }

    /// Build a character attractor zone at a position, using the
    /// display-class absorption radius
    pub fn character_zone(&self, center: Vec2) -> AttractorZone {
        AttractorZone::new(center, self.config.absorption_radius)
    }

    /// Build the vortex zone at a position, using the configured radius
    pub fn vortex_zone(&self, center: Vec2) -> AttractorZone {
        AttractorZone::new(center, self.config.vortex_radius)
    }

    /// Drain the effect events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GardenEvent> {
        self.events.drain()
    }

    pub fn wind(&self) -> f32 {
        self.wind.value()
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn config(&self) -> &GardenConfig {
        &self.config
    }

    pub fn flowers(&self) -> &FlowerBed {
        &self.flowers
    }

    pub fn dust(&self) -> &DustPool {
        &self.dust
    }

    pub fn petals(&self) -> &PetalPool {
        &self.petals
    }
}
