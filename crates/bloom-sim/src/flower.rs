//! The flower population store: spawn, ageing, absorption, destruction

use bloom_core::{Bounds, Vec2};
use bloom_sprite::{compose, Palette, Sprite, VARIANT_COUNT};

use crate::attractor::{resolve, Absorption, AttractorZone};
use crate::events::{EventBus, GardenEvent};
use crate::rand::GardenRng;

/// A flower below this scale is destroyed
const DESTROY_SCALE: f32 = 0.05;
/// How far beyond the surface a flower may drift before destruction
const BOUNDS_MARGIN: f32 = 100.0;
/// Per-frame scale decay once a flower is disappearing
const DISAPPEAR_SHRINK: f32 = 0.95;
/// Extra spin while disappearing, degrees per frame
const DISAPPEAR_SPIN: f32 = 10.0;
/// Idle rotation for flowers not being absorbed, degrees per frame
const IDLE_SPIN: f32 = 0.1;
/// Chance to draw from the special palette table instead of the warm range
const SPECIAL_PALETTE_CHANCE: f32 = 0.15;
/// Chance a themed spawn actually uses the bias variant
const THEME_BIAS_CHANCE: f32 = 0.4;
/// Variants used when no theme bias applies
const DEFAULT_VARIANTS: usize = 3;
/// Base hit-test radius for click removal, scaled by the flower's scale
const CLICK_RADIUS: f32 = 30.0;

/// Fixed "special" palette table: (hue, saturation, lightness)
const SPECIAL_PALETTES: [(f32, f32, f32); 3] =
    [(350.0, 80.0, 65.0), (20.0, 90.0, 60.0), (250.0, 70.0, 70.0)];

/// One flower entity. Owns its pre-rendered sprite for its whole lifetime.
pub struct Flower {
    pub position: Vec2,
    /// Starts in 0.7–1.3; non-increasing once `disappearing` is set
    pub scale: f32,
    /// Degrees, monotonically increasing
    pub rotation: f32,
    /// Simulation time at creation, seconds
    pub created_at: f64,
    /// Shape archetype index, 0..VARIANT_COUNT
    pub variant: usize,
    /// Set each frame by the interaction resolver
    pub absorbed: bool,
    /// Once true, never reset; the flower decays until destroyed
    pub disappearing: bool,
    sprite: Sprite,
}

impl Flower {
    pub(crate) fn new(
        position: Vec2,
        scale: f32,
        rotation: f32,
        created_at: f64,
        variant: usize,
        sprite: Sprite,
    ) -> Self {
        Self {
            position,
            scale,
            rotation,
            created_at,
            variant,
            absorbed: false,
            disappearing: false,
            sprite,
        }
    }

    /// The flower's immutable pre-rendered bitmap
    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    /// Seconds since creation
    pub fn age(&self, now: f64) -> f64 {
        now - self.created_at
    }
}

enum Fate {
    Keep,
    Discard,
    Consume(Vec2),
}

/// Bounded-lifetime collection of flowers.
///
/// Insertion is most-recent-first and removal is swap-with-last-then-pop,
/// so store order is NOT stable across removals. Nothing semantic depends
/// on order; it only decides hit-test priority for click removal.
#[derive(Default)]
pub struct FlowerBed {
    flowers: Vec<Flower>,
}

impl FlowerBed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a flower at `position`.
    ///
    /// Picks a random scale and rotation, a palette (15% from the special
    /// table, else the warm default range), and a shape variant: a theme
    /// bias variant is used with 40% probability when supplied, otherwise
    /// the three default archetypes are drawn uniformly. The sprite is
    /// composed here, once, and owned by the flower.
    pub fn spawn(
        &mut self,
        position: Vec2,
        theme_bias: Option<usize>,
        now: f64,
        rng: &mut GardenRng,
    ) {
        let scale = 0.7 + rng.next_f32() * 0.6;
        let rotation = rng.range(0.0, 360.0);

        let palette = if rng.chance(SPECIAL_PALETTE_CHANCE) {
            let (h, s, l) = SPECIAL_PALETTES[rng.index(SPECIAL_PALETTES.len())];
            Palette::from_hsl(h, s, l)
        } else {
            Palette::from_hsl(
                rng.range(40.0, 60.0),
                rng.range(80.0, 100.0),
                rng.range(50.0, 70.0),
            )
        };

        let variant = match theme_bias {
            Some(v) if v < VARIANT_COUNT && rng.chance(THEME_BIAS_CHANCE) => v,
            _ => rng.index(DEFAULT_VARIANTS),
        };

        let sprite = compose(variant, &palette);
        self.flowers
            .insert(0, Flower::new(position, scale, rotation, now, variant, sprite));
    }

    /// Soft-delete every flower of a variant: they fade out over the next
    /// frames instead of vanishing abruptly. Used when a themed visitor
    /// departs.
    pub fn remove_by_variant(&mut self, variant: usize) {
        for flower in &mut self.flowers {
            if flower.variant == variant {
                flower.disappearing = true;
            }
        }
    }

    /// Remove the first flower (in store order) whose scale-adjusted radius
    /// contains `point`, regardless of age or absorption state. Emits a
    /// burst event on a hit.
    pub fn click_remove(&mut self, point: Vec2, events: &mut EventBus) -> bool {
        for (i, flower) in self.flowers.iter().enumerate() {
            let r = CLICK_RADIUS * flower.scale;
            if point.distance_sq(flower.position) < r * r {
                events.push(GardenEvent::Sparkle {
                    position: point,
                    intensity: 20,
                });
                self.flowers.swap_remove(i);
                return true;
            }
        }
        false
    }

    /// Advance every flower one frame: ageing, disappearance decay, bounds
    /// destruction, then attractor resolution. Iterates in reverse index
    /// order so swap-remove never skips an element.
    pub fn tick(
        &mut self,
        now: f64,
        bounds: Bounds,
        max_age: f64,
        zones: &[AttractorZone],
        vortex: Option<&AttractorZone>,
        events: &mut EventBus,
    ) {
        for i in (0..self.flowers.len()).rev() {
            let flower = &mut self.flowers[i];

            if !flower.disappearing && flower.age(now) > max_age {
                flower.disappearing = true;
            }
            if flower.disappearing {
                flower.scale *= DISAPPEAR_SHRINK;
                flower.rotation += DISAPPEAR_SPIN;
            }

            let fate = if flower.scale < DESTROY_SCALE
                || !bounds.contains_with_margin(flower.position, BOUNDS_MARGIN)
            {
                Fate::Discard
            } else {
                match resolve(flower, zones, vortex) {
                    Absorption::Consumed => Fate::Consume(flower.position),
                    Absorption::Pulled => Fate::Keep,
                    Absorption::None => {
                        flower.rotation += IDLE_SPIN;
                        Fate::Keep
                    }
                }
            };

            match fate {
                Fate::Keep => {}
                Fate::Discard => {
                    self.flowers.swap_remove(i);
                }
                Fate::Consume(position) => {
                    events.push(GardenEvent::Sparkle {
                        position,
                        intensity: 5,
                    });
                    self.flowers.swap_remove(i);
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.flowers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flowers.is_empty()
    }

    /// Newest flower first. Rendering walks this in reverse so the most
    /// recent flower paints on top of its elders.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Flower> {
        self.flowers.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Bounds = Bounds::new(800.0, 600.0);
    const MAX_AGE: f64 = 60.0;
    const DT: f64 = 0.016;

    fn spawn_one(bed: &mut FlowerBed, rng: &mut GardenRng, x: f32, y: f32) {
        bed.spawn(Vec2::new(x, y), None, 0.0, rng);
    }

    #[test]
    fn stationary_flower_only_rotates() {
        let mut bed = FlowerBed::new();
        let mut rng = GardenRng::new(42);
        spawn_one(&mut bed, &mut rng, 100.0, 100.0);
        let start_rotation = bed.iter().next().map(|f| f.rotation).unwrap_or(0.0);

        let mut events = EventBus::new();
        for tick in 1..=10 {
            bed.tick(tick as f64 * DT, BOUNDS, MAX_AGE, &[], None, &mut events);
        }

        let flower = bed.iter().next().expect("flower still alive");
        assert_eq!(flower.position, Vec2::new(100.0, 100.0));
        assert!((flower.rotation - start_rotation - 10.0 * IDLE_SPIN).abs() < 1e-4);
        assert!(events.is_empty());
    }

    #[test]
    fn spawn_scale_and_variant_ranges() {
        let mut bed = FlowerBed::new();
        let mut rng = GardenRng::new(1);
        for i in 0..50 {
            spawn_one(&mut bed, &mut rng, i as f32, 0.0);
        }
        for flower in bed.iter() {
            assert!((0.7..1.3).contains(&flower.scale));
            assert!(flower.variant < DEFAULT_VARIANTS, "no bias → default variants only");
        }
    }

    #[test]
    fn theme_bias_produces_biased_variant_sometimes() {
        let mut bed = FlowerBed::new();
        let mut rng = GardenRng::new(9);
        for _ in 0..100 {
            bed.spawn(Vec2::ZERO, Some(4), 0.0, &mut rng);
        }
        let biased = bed.iter().filter(|f| f.variant == 4).count();
        // 40% expected; with 100 spawns anything in a broad band is fine
        assert!(biased > 10 && biased < 80, "got {biased} biased spawns");
    }

    #[test]
    fn disappearing_scale_is_strictly_decreasing_until_destruction() {
        let mut bed = FlowerBed::new();
        let mut rng = GardenRng::new(5);
        spawn_one(&mut bed, &mut rng, 200.0, 200.0);
        let variant = bed.iter().next().map(|f| f.variant).unwrap_or(0);
        bed.remove_by_variant(variant);

        let mut events = EventBus::new();
        let mut prev = f32::MAX;
        let mut ticks = 0;
        while !bed.is_empty() {
            let scale = bed.iter().next().map(|f| f.scale).unwrap_or(0.0);
            assert!(scale < prev, "scale must strictly decrease while disappearing");
            prev = scale;
            bed.tick(ticks as f64 * DT, BOUNDS, MAX_AGE, &[], None, &mut events);
            ticks += 1;
            assert!(ticks < 1000, "flower failed to decay away");
        }
    }

    #[test]
    fn max_age_forces_disappearance_and_destruction() {
        let mut bed = FlowerBed::new();
        let mut rng = GardenRng::new(2);
        spawn_one(&mut bed, &mut rng, 300.0, 300.0);

        let mut events = EventBus::new();
        // jump past max age, then sweep a bounded number of frames
        let mut now = MAX_AGE + 1.0;
        for _ in 0..200 {
            bed.tick(now, BOUNDS, MAX_AGE, &[], None, &mut events);
            now += DT;
            if bed.is_empty() {
                return;
            }
        }
        panic!("aged-out flower was never destroyed");
    }

    #[test]
    fn out_of_bounds_flower_is_destroyed() {
        let mut bed = FlowerBed::new();
        let mut rng = GardenRng::new(8);
        spawn_one(&mut bed, &mut rng, -150.0, 100.0);

        let mut events = EventBus::new();
        bed.tick(DT, BOUNDS, MAX_AGE, &[], None, &mut events);
        assert!(bed.is_empty());
        assert!(events.is_empty(), "bounds destruction emits no spark");
    }

    #[test]
    fn click_remove_respects_scaled_radius() {
        let mut bed = FlowerBed::new();
        let mut rng = GardenRng::new(3);
        spawn_one(&mut bed, &mut rng, 100.0, 100.0);
        let scale = bed.iter().next().map(|f| f.scale).unwrap_or(1.0);

        let mut events = EventBus::new();
        // just outside the scaled radius: no hit
        let miss = Vec2::new(100.0 + CLICK_RADIUS * scale + 1.0, 100.0);
        assert!(!bed.click_remove(miss, &mut events));
        assert_eq!(bed.len(), 1);

        // well inside: removed with a burst event
        assert!(bed.click_remove(Vec2::new(102.0, 99.0), &mut events));
        assert!(bed.is_empty());
        assert_eq!(
            events.drain(),
            vec![GardenEvent::Sparkle {
                position: Vec2::new(102.0, 99.0),
                intensity: 20
            }]
        );
    }

    #[test]
    fn consumption_emits_sparkle() {
        let mut bed = FlowerBed::new();
        let mut rng = GardenRng::new(6);
        spawn_one(&mut bed, &mut rng, 400.0, 300.0);

        let zone = AttractorZone::new(Vec2::new(402.0, 300.0), 250.0);
        let mut events = EventBus::new();
        bed.tick(DT, BOUNDS, MAX_AGE, &[zone], None, &mut events);

        assert!(bed.is_empty(), "flower inside the inner threshold is consumed");
        let drained = events.drain();
        assert_eq!(drained.len(), 1);
        assert!(matches!(
            drained[0],
            GardenEvent::Sparkle { intensity: 5, .. }
        ));
    }

    #[test]
    fn remove_by_variant_spares_others() {
        let mut bed = FlowerBed::new();
        let mut rng = GardenRng::new(12);
        for _ in 0..20 {
            spawn_one(&mut bed, &mut rng, 100.0, 100.0);
        }
        bed.remove_by_variant(1);
        for flower in bed.iter() {
            assert_eq!(flower.disappearing, flower.variant == 1);
        }
    }

    #[test]
    fn newest_flower_sits_at_the_front() {
        let mut bed = FlowerBed::new();
        let mut rng = GardenRng::new(4);
        bed.spawn(Vec2::new(1.0, 0.0), None, 0.0, &mut rng);
        bed.spawn(Vec2::new(2.0, 0.0), None, 1.0, &mut rng);
        let first = bed.iter().next().expect("non-empty");
        assert_eq!(first.position.x, 2.0);
    }
}
