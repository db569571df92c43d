//! Interaction resolver: attractor zones pulling and consuming flowers

use bloom_core::Vec2;

use crate::flower::Flower;

/// Fraction of the remaining distance a character zone pulls per frame
const CHARACTER_PULL: f32 = 0.05;
/// Vortex pull — the manually invoked zone converges harder
const VORTEX_PULL: f32 = 0.08;
/// Per-frame scale decay while a flower is being absorbed
const ABSORB_SHRINK: f32 = 0.98;
/// Extra rotation per frame under character / vortex pull, degrees
const CHARACTER_SPIN: f32 = 5.0;
const VORTEX_SPIN: f32 = 10.0;
/// A flower this small is consumed outright
const CONSUME_SCALE: f32 = 0.1;
/// Squared distance at which a flower is consumed regardless of scale
const CONSUME_DIST_SQ: f32 = 100.0;

/// A circular region that pulls nearby flowers toward its center.
/// Supplied fresh by collaborators each frame; never persisted by the core.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AttractorZone {
    pub center: Vec2,
    pub radius: f32,
}

impl AttractorZone {
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    fn contains_sq(&self, point: Vec2) -> Option<f32> {
        let d2 = point.distance_sq(self.center);
        (d2 < self.radius * self.radius).then_some(d2)
    }
}

/// What happened to one flower during this frame's interaction pass
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Absorption {
    /// Outside every zone
    None,
    /// Inside a zone and converging toward its center
    Pulled,
    /// Reached the zone center (or shrank away) — destroy and emit a spark
    Consumed,
}

/// Run the two attractor passes for one flower.
///
/// Character pass first: the first zone containing the flower wins and the
/// loop breaks — a flower inside two overlapping zones is pulled only toward
/// the earlier one (order-dependent by design). The vortex pass runs only
/// when no character zone captured the flower, with a stronger pull.
pub fn resolve(
    flower: &mut Flower,
    zones: &[AttractorZone],
    vortex: Option<&AttractorZone>,
) -> Absorption {
    flower.absorbed = false;

    for zone in zones {
        if let Some(d2) = zone.contains_sq(flower.position) {
            return converge(flower, zone.center, d2, CHARACTER_PULL, CHARACTER_SPIN);
        }
    }

    if let Some(zone) = vortex {
        if let Some(d2) = zone.contains_sq(flower.position) {
            return converge(flower, zone.center, d2, VORTEX_PULL, VORTEX_SPIN);
        }
    }

    Absorption::None
}

fn converge(flower: &mut Flower, center: Vec2, dist_sq: f32, pull: f32, spin: f32) -> Absorption {
    flower.absorbed = true;
    flower.position = flower.position - (flower.position - center) * pull;
    flower.scale *= ABSORB_SHRINK;
    flower.rotation += spin;

    if flower.scale < CONSUME_SCALE || dist_sq < CONSUME_DIST_SQ {
        Absorption::Consumed
    } else {
        Absorption::Pulled
    }
}
