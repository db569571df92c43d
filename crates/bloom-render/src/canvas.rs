//! RGBA8 framebuffer with alpha-blended fills and affine sprite blits

use bloom_core::Color;
use bloom_sprite::Sprite;

/// Offscreen RGBA8 render target
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height * 4) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 pixel data, row-major
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Overwrite every pixel with an opaque color
    pub fn clear(&mut self, color: Color) {
        let [r, g, b, _] = color.to_rgba8();
        for px in self.pixels.chunks_exact_mut(4) {
            px[0] = r;
            px[1] = g;
            px[2] = b;
            px[3] = 255;
        }
    }

    /// Sampled color at a pixel, transparent black outside the framebuffer
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        if x >= self.width || y >= self.height {
            return [0, 0, 0, 0];
        }
        let i = ((y * self.width + x) * 4) as usize;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    /// Filled disc, alpha-blended over the existing contents
    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        if radius <= 0.0 {
            return;
        }
        let (x0, y0, x1, y1) = self.clip_box(cx - radius, cy - radius, cx + radius, cy + radius);
        let r_sq = radius * radius;
        for py in y0..y1 {
            for px in x0..x1 {
                let dx = px as f32 + 0.5 - cx;
                let dy = py as f32 + 0.5 - cy;
                if dx * dx + dy * dy <= r_sq {
                    self.blend(px, py, color);
                }
            }
        }
    }

    /// Filled ellipse rotated by `rotation` radians about its center
    pub fn fill_rotated_ellipse(
        &mut self,
        cx: f32,
        cy: f32,
        rx: f32,
        ry: f32,
        rotation: f32,
        color: Color,
    ) {
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let extent = rx.max(ry);
        let (x0, y0, x1, y1) =
            self.clip_box(cx - extent, cy - extent, cx + extent, cy + extent);
        let (sin, cos) = rotation.sin_cos();
        for py in y0..y1 {
            for px in x0..x1 {
                let dx = px as f32 + 0.5 - cx;
                let dy = py as f32 + 0.5 - cy;
                // rotate the sample into the ellipse's local frame
                let lx = dx * cos + dy * sin;
                let ly = -dx * sin + dy * cos;
                if (lx / rx).powi(2) + (ly / ry).powi(2) <= 1.0 {
                    self.blend(px, py, color);
                }
            }
        }
    }

    /// Blit a sprite centered at (cx, cy) under rotate-then-scale, with a
    /// global opacity multiplier. Nearest-neighbor sampling through the
    /// inverse transform.
    pub fn blit_sprite(
        &mut self,
        sprite: &Sprite,
        cx: f32,
        cy: f32,
        scale: f32,
        rotation: f32,
        opacity: f32,
    ) {
        if scale <= 0.0 || opacity <= 0.0 {
            return;
        }
        let half = sprite.size() as f32 / 2.0;
        let extent = half * scale * std::f32::consts::SQRT_2;
        let (x0, y0, x1, y1) =
            self.clip_box(cx - extent, cy - extent, cx + extent, cy + extent);
        let (sin, cos) = rotation.sin_cos();
        let inv_scale = 1.0 / scale;
        for py in y0..y1 {
            for px in x0..x1 {
                let dx = (px as f32 + 0.5 - cx) * inv_scale;
                let dy = (py as f32 + 0.5 - cy) * inv_scale;
                let sx = dx * cos + dy * sin + half;
                let sy = -dx * sin + dy * cos + half;
                if sx < 0.0 || sy < 0.0 {
                    continue;
                }
                let [r, g, b, a] = sprite.pixel(sx as u32, sy as u32);
                if a == 0 {
                    continue;
                }
                let src = Color::new(
                    r as f32 / 255.0,
                    g as f32 / 255.0,
                    b as f32 / 255.0,
                    a as f32 / 255.0 * opacity,
                );
                self.blend(px, py, src);
            }
        }
    }

    /// Pixel range covered by a bounding box, clipped to the framebuffer
    fn clip_box(&self, min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> (u32, u32, u32, u32) {
        let x0 = min_x.floor().max(0.0) as u32;
        let y0 = min_y.floor().max(0.0) as u32;
        let x1 = (max_x.ceil().max(0.0) as u32).min(self.width);
        let y1 = (max_y.ceil().max(0.0) as u32).min(self.height);
        (x0, y0, x1, y1)
    }

    /// Source-over blend of `src` onto the pixel at (x, y)
    fn blend(&mut self, x: u32, y: u32, src: Color) {
        let i = ((y * self.width + x) * 4) as usize;
        let sa = src.a.clamp(0.0, 1.0);
        if sa <= 0.0 {
            return;
        }
        let dst = [
            self.pixels[i] as f32 / 255.0,
            self.pixels[i + 1] as f32 / 255.0,
            self.pixels[i + 2] as f32 / 255.0,
            self.pixels[i + 3] as f32 / 255.0,
        ];
        let out_a = sa + dst[3] * (1.0 - sa);
        if out_a <= 0.0 {
            return;
        }
        let blend_ch = |s: f32, d: f32| (s * sa + d * dst[3] * (1.0 - sa)) / out_a;
        self.pixels[i] = (blend_ch(src.r, dst[0]) * 255.0).round() as u8;
        self.pixels[i + 1] = (blend_ch(src.g, dst[1]) * 255.0).round() as u8;
        self.pixels[i + 2] = (blend_ch(src.b, dst[2]) * 255.0).round() as u8;
        self.pixels[i + 3] = (out_a * 255.0).round() as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloom_sprite::{compose, Palette};

    #[test]
    fn clear_fills_every_pixel() {
        let mut canvas = Canvas::new(4, 4);
        canvas.clear(Color::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(canvas.pixel(0, 0), [255, 0, 0, 255]);
        assert_eq!(canvas.pixel(3, 3), [255, 0, 0, 255]);
    }

    #[test]
    fn circle_covers_center_not_corner() {
        let mut canvas = Canvas::new(20, 20);
        canvas.clear(Color::BLACK);
        canvas.fill_circle(10.0, 10.0, 5.0, Color::WHITE);
        assert_eq!(canvas.pixel(10, 10), [255, 255, 255, 255]);
        assert_eq!(canvas.pixel(0, 0), [0, 0, 0, 255]);
    }

    #[test]
    fn half_alpha_disc_blends() {
        let mut canvas = Canvas::new(10, 10);
        canvas.clear(Color::BLACK);
        canvas.fill_circle(5.0, 5.0, 3.0, Color::new(1.0, 1.0, 1.0, 0.5));
        let [r, _, _, a] = canvas.pixel(5, 5);
        assert_eq!(a, 255);
        assert!(r > 100 && r < 160, "expected mid-gray, got {r}");
    }

    #[test]
    fn rotated_ellipse_respects_orientation() {
        let mut canvas = Canvas::new(40, 40);
        canvas.clear(Color::BLACK);
        // long axis vertical after a quarter turn
        canvas.fill_rotated_ellipse(
            20.0,
            20.0,
            12.0,
            3.0,
            std::f32::consts::FRAC_PI_2,
            Color::WHITE,
        );
        assert_eq!(canvas.pixel(20, 10), [255, 255, 255, 255]);
        assert_eq!(canvas.pixel(10, 20), [0, 0, 0, 255]);
    }

    #[test]
    fn primitives_clip_at_the_edges() {
        let mut canvas = Canvas::new(8, 8);
        canvas.fill_circle(0.0, 0.0, 100.0, Color::WHITE);
        canvas.fill_rotated_ellipse(7.5, 7.5, 50.0, 50.0, 0.3, Color::WHITE);
        assert_eq!(canvas.pixel(4, 4), [255, 255, 255, 255]);
        // nothing outside the framebuffer
        assert_eq!(canvas.pixel(8, 8), [0, 0, 0, 0]);
    }

    #[test]
    fn blit_places_stem_below_center() {
        let sprite = compose(0, &Palette::from_hsl(340.0, 80.0, 70.0));
        let mut canvas = Canvas::new(200, 200);
        canvas.clear(Color::BLACK);
        canvas.blit_sprite(&sprite, 100.0, 100.0, 1.0, 0.0, 1.0);
        // the stem runs straight down from the sprite center
        let [_, g, _, _] = canvas.pixel(100, 130);
        assert!(g > 50, "expected stem green below center");
    }

    #[test]
    fn blit_scale_shrinks_footprint() {
        let sprite = compose(0, &Palette::from_hsl(340.0, 80.0, 70.0));
        let mut full = Canvas::new(200, 200);
        full.clear(Color::BLACK);
        full.blit_sprite(&sprite, 100.0, 100.0, 1.0, 0.0, 1.0);
        let mut tiny = Canvas::new(200, 200);
        tiny.clear(Color::BLACK);
        tiny.blit_sprite(&sprite, 100.0, 100.0, 0.2, 0.0, 1.0);

        let coverage = |c: &Canvas| {
            let mut n = 0;
            for y in 0..200 {
                for x in 0..200 {
                    if c.pixel(x, y) != [0, 0, 0, 255] {
                        n += 1;
                    }
                }
            }
            n
        };
        assert!(coverage(&tiny) < coverage(&full) / 4);
    }

    #[test]
    fn zero_opacity_blit_is_invisible() {
        let sprite = compose(0, &Palette::from_hsl(340.0, 80.0, 70.0));
        let mut canvas = Canvas::new(200, 200);
        canvas.clear(Color::BLACK);
        canvas.blit_sprite(&sprite, 100.0, 100.0, 1.0, 0.0, 0.0);
        for y in 0..200 {
            for x in 0..200 {
                assert_eq!(canvas.pixel(x, y), [0, 0, 0, 255]);
            }
        }
    }
}
