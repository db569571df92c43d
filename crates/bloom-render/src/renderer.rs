//! Draws a garden frame onto a canvas
//!
//! The renderer is a pure consumer: it reads the simulation state and never
//! mutates it. Draw order is dust, then petals, then flowers, so flowers sit
//! on top of the ambient particles.

use bloom_core::Color;
use bloom_sim::Garden;

use crate::canvas::Canvas;

/// New flowers scale from zero to full size over this many seconds
const GROWTH_DURATION: f64 = 0.5;

/// Pulsing center disc drawn over the three default variants
const CENTER_DISC_RADIUS: f32 = 12.0;
const CENTER_RIM_WIDTH: f32 = 1.5;
const CENTER_RIM_COLOR: Color = Color::new(92.0 / 255.0, 51.0 / 255.0, 23.0 / 255.0, 0.8);

const DUST_ALPHA: f32 = 0.4;

pub struct Renderer {
    background: Color,
}

impl Renderer {
    pub fn new(background: Color) -> Self {
        Self { background }
    }

    /// Draw one frame of the garden into `canvas`
    pub fn render(&self, garden: &Garden, canvas: &mut Canvas) {
        canvas.clear(self.background);
        self.draw_dust(garden, canvas);
        self.draw_petals(garden, canvas);
        self.draw_flowers(garden, canvas);
    }

    fn draw_dust(&self, garden: &Garden, canvas: &mut Canvas) {
        for p in garden.dust().iter() {
            let color = Color::WHITE.with_alpha(DUST_ALPHA * p.opacity);
            canvas.fill_circle(p.position.x, p.position.y, p.size, color);
        }
    }

    fn draw_petals(&self, garden: &Garden, canvas: &mut Canvas) {
        for p in garden.petals().iter() {
            let color = p.color.with_alpha(p.color.a * p.opacity);
            canvas.fill_rotated_ellipse(
                p.position.x,
                p.position.y,
                p.size,
                p.size / 2.0,
                p.rotation.to_radians(),
                color,
            );
        }
    }

    fn draw_flowers(&self, garden: &Garden, canvas: &mut Canvas) {
        let now = garden.time();
        let wind = garden.wind();
        // oldest first, so the most recent flower ends up on top
        for flower in garden.flowers().iter().rev() {
            let age = flower.age(now);
            let growth = if age < GROWTH_DURATION {
                (age / GROWTH_DURATION) as f32
            } else {
                1.0
            };
            let scale = flower.scale * growth;
            if scale <= 0.0 {
                continue;
            }
            let rotation = wind + flower.rotation.to_radians();
            canvas.blit_sprite(
                flower.sprite(),
                flower.position.x,
                flower.position.y,
                scale,
                rotation,
                1.0,
            );
            if flower.variant < 3 {
                self.draw_center_pulse(canvas, flower.position.x, flower.position.y, scale, age);
            }
        }
    }

    /// Warm disc over the flower center whose lightness breathes with age,
    /// ringed by a thin dark rim
    fn draw_center_pulse(&self, canvas: &mut Canvas, cx: f32, cy: f32, scale: f32, age: f64) {
        let lightness = (age / 0.4).sin() as f32 * 5.0 + 40.0;
        let disc = Color::from_hsla(24.0, 55.0, lightness, 0.9);
        let outer = (CENTER_DISC_RADIUS + CENTER_RIM_WIDTH / 2.0) * scale;
        let inner = (CENTER_DISC_RADIUS - CENTER_RIM_WIDTH / 2.0) * scale;
        canvas.fill_circle(cx, cy, outer, CENTER_RIM_COLOR);
        canvas.fill_circle(cx, cy, inner, disc);
    }
}

impl Default for Renderer {
    fn default() -> Self {
        // deep blue-gray dusk
        Self::new(Color::from_hex(0x1A2238))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloom_core::{Bounds, Vec2};
    use bloom_sim::{DisplayClass, GardenConfig};

    const WIDTH: u32 = 800;
    const HEIGHT: u32 = 600;

    fn quiet_config() -> GardenConfig {
        // no ambient particles, no automatic flowers after the first frame
        let mut config = GardenConfig::for_display(DisplayClass::Full);
        config.dust_ceiling = 0;
        config.petal_ceiling = 0;
        config.spawn_delay = 1000.0;
        config
    }

    fn background_pixel(renderer: &Renderer) -> [u8; 4] {
        let mut canvas = Canvas::new(1, 1);
        canvas.clear(renderer.background);
        canvas.pixel(0, 0)
    }

    #[test]
    fn empty_garden_renders_background_only() {
        let garden = Garden::new(quiet_config(), Bounds::new(WIDTH as f32, HEIGHT as f32), 7);
        let renderer = Renderer::default();
        let mut canvas = Canvas::new(WIDTH, HEIGHT);
        renderer.render(&garden, &mut canvas);
        let bg = background_pixel(&renderer);
        for y in (0..HEIGHT).step_by(17) {
            for x in (0..WIDTH).step_by(17) {
                assert_eq!(canvas.pixel(x, y), bg);
            }
        }
    }

    #[test]
    fn grown_flower_paints_a_stem() {
        let mut garden = Garden::new(quiet_config(), Bounds::new(WIDTH as f32, HEIGHT as f32), 7);
        assert!(garden.spawn_at(Vec2::new(400.0, 300.0)));
        // past the growth ramp, with negligible idle rotation
        garden.step(1.0, &[], None);
        assert_eq!(garden.flowers().len(), 1);

        let renderer = Renderer::default();
        let mut canvas = Canvas::new(WIDTH, HEIGHT);
        renderer.render(&garden, &mut canvas);

        // the flower covers a real footprint around its anchor
        let bg = background_pixel(&renderer);
        let mut painted = 0;
        for y in 260..340 {
            for x in 360..440 {
                if canvas.pixel(x, y) != bg {
                    painted += 1;
                }
            }
        }
        assert!(painted > 100, "expected a visible flower, got {painted} pixels");

        // the stem runs 38 local units from the anchor along the flower's
        // own rotation, past the petals and the center disc
        let flower = garden.flowers().iter().next().unwrap();
        let (sin, cos) = flower.rotation.to_radians().sin_cos();
        let reach = 38.0 * flower.scale;
        let stem_x = (400.0 - reach * sin).round() as u32;
        let stem_y = (300.0 + reach * cos).round() as u32;
        let [r, g, _, _] = canvas.pixel(stem_x, stem_y);
        assert!(g > r, "expected stem green along the flower's stem axis");
    }

    #[test]
    fn default_variant_gets_a_warm_center() {
        let mut garden = Garden::new(quiet_config(), Bounds::new(WIDTH as f32, HEIGHT as f32), 7);
        assert!(garden.spawn_at(Vec2::new(400.0, 300.0)));
        garden.step(1.0, &[], None);
        let flower = garden.flowers().iter().next().unwrap();
        assert!(flower.variant < 3, "unthemed spawns stay in the default trio");

        let renderer = Renderer::default();
        let mut canvas = Canvas::new(WIDTH, HEIGHT);
        renderer.render(&garden, &mut canvas);

        let [r, _, b, _] = canvas.pixel(400, 300);
        assert!(r > b, "center disc should read warm, got r={r} b={b}");
    }

    #[test]
    fn newest_flower_draws_on_top() {
        let mut garden = Garden::new(quiet_config(), Bounds::new(WIDTH as f32, HEIGHT as f32), 7);
        assert!(garden.spawn_at(Vec2::new(400.0, 300.0)));
        // by render time the first pulse sits at its dim trough
        // (age 0.6pi: sin(age / 0.4) = -1) and the second at its bright
        // crest (age 0.2pi: sin = +1); both are past the growth ramp
        garden.step(0.4 * std::f64::consts::PI, &[], None);
        assert!(garden.spawn_at(Vec2::new(400.0, 300.0)));
        garden.step(0.2 * std::f64::consts::PI, &[], None);
        assert_eq!(garden.flowers().len(), 2);
        for flower in garden.flowers().iter() {
            assert!(flower.variant < 3, "both flowers need a pulsing center");
        }

        let renderer = Renderer::default();
        let mut canvas = Canvas::new(WIDTH, HEIGHT);
        renderer.render(&garden, &mut canvas);

        // the crest disc reads red >= 160 when it paints last; if the old
        // trough disc painted over it the center would read <= 150
        let [r, _, _, _] = canvas.pixel(400, 300);
        assert!(r >= 155, "newest flower's bright pulse should win, got r={r}");
    }

    #[test]
    fn fresh_flower_is_invisible_until_it_grows() {
        let mut garden = Garden::new(quiet_config(), Bounds::new(WIDTH as f32, HEIGHT as f32), 7);
        assert!(garden.spawn_at(Vec2::new(400.0, 300.0)));
        // age zero: the growth ramp keeps the blit at scale zero
        let renderer = Renderer::default();
        let mut canvas = Canvas::new(WIDTH, HEIGHT);
        renderer.render(&garden, &mut canvas);
        let bg = background_pixel(&renderer);
        assert_eq!(canvas.pixel(400, 300), bg);
    }

    #[test]
    fn petals_show_up_near_the_top_edge() {
        let mut config = quiet_config();
        config.petal_ceiling = 30;
        let mut garden = Garden::new(config, Bounds::new(WIDTH as f32, HEIGHT as f32), 7);
        for _ in 0..10 {
            garden.spawn_petal();
        }
        // one second of fall brings them on screen with nonzero opacity
        garden.step(1.0, &[], None);
        assert!(!garden.petals().is_empty());

        let renderer = Renderer::default();
        let mut canvas = Canvas::new(WIDTH, HEIGHT);
        renderer.render(&garden, &mut canvas);
        let bg = background_pixel(&renderer);
        let mut touched = 0;
        for y in 0..60 {
            for x in 0..WIDTH {
                if canvas.pixel(x, y) != bg {
                    touched += 1;
                }
            }
        }
        assert!(touched > 0, "expected petal pixels near the top edge");
    }
}
