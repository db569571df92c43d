//! Bloom Sim - Garden simulation engine
//!
//! Provides the frame-loop building blocks for a procedural flower garden:
//! - `Garden` — host-driven simulation state stepped with an explicit delta
//! - `WindField` — exponentially smoothed horizontal wind scalar
//! - `FlowerBed` — bounded-lifetime flower population with O(1) removal
//! - `DustPool` / `PetalPool` — ambient particle pools with hard ceilings
//! - `AttractorZone` — character and vortex absorption zones
//! - `GardenEvent` / `EventBus` — typed event queue drained by the host

mod attractor;
mod clock;
mod config;
mod engine;
mod events;
mod flower;
mod particle;
mod rand;
mod wind;

pub use attractor::{resolve, Absorption, AttractorZone};
pub use clock::FrameClock;
pub use config::{DisplayClass, GardenConfig};
pub use engine::Garden;
pub use events::{EventBus, GardenEvent};
pub use flower::{Flower, FlowerBed};
pub use particle::{fade_opacity, DustParticle, DustPool, PetalParticle, PetalPool};
pub use rand::GardenRng;
pub use wind::{wind_target_for_pointer, WindField};
