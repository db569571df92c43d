//! The generic compositor: executes a variant recipe into a Sprite
//!
//! Rasterization is a one-shot cost per flower (10k pixels), so the fills
//! are straightforward coverage tests over bounding boxes rather than
//! scanline machinery. Curved outlines are flattened to polygons first.

use std::f32::consts::{PI, TAU};

use bloom_core::Color;

use crate::recipe::{Fill, PetalShape, Primitive, Recipe, Stroke};
use crate::sprite::{Palette, Sprite, SPRITE_SIZE};

const STEM_COLOR: Color = Color::new(0.2, 0.412, 0.118, 1.0);
const LEAF_COLOR: Color = Color::new(0.298, 0.686, 0.314, 1.0);

/// Segments per quadratic curve / quarter ellipse when flattening
const CURVE_SEGMENTS: usize = 16;

/// Inner and outer radius of the radial petal gradient
const GRADIENT_INNER: f32 = 1.0;
const GRADIENT_OUTER: f32 = 25.0;

/// Compose the pre-rendered bitmap for one flower.
///
/// Pure: the same variant and palette always produce identical pixels.
/// The stem anchor lands at the bitmap midpoint, so later transforms can
/// treat the flower's position as (0, 0).
pub fn compose(variant: usize, palette: &Palette) -> Sprite {
    let mut raster = Raster::new(SPRITE_SIZE);

    // Shared base: stem down from the anchor, two tilted leaves
    raster.fill_polygon(
        &[[-1.5, 0.0], [1.5, 0.0], [1.5, 40.0], [-1.5, 40.0]],
        Fill::Solid(STEM_COLOR),
        palette,
    );
    raster.fill_polygon(
        &ellipse_polygon([5.0, 20.0], 12.0, 6.0, -PI / 5.0),
        Fill::Solid(LEAF_COLOR),
        palette,
    );
    raster.fill_polygon(
        &ellipse_polygon([-5.0, 25.0], 12.0, 6.0, PI / 5.0),
        Fill::Solid(LEAF_COLOR),
        palette,
    );

    for primitive in Recipe::for_variant(variant).primitives {
        raster.paint(primitive, palette);
    }

    raster.into_sprite()
}

struct Raster {
    size: u32,
    pixels: Vec<u8>,
}

impl Raster {
    fn new(size: u32) -> Self {
        Self {
            size,
            pixels: vec![0; (size * size * 4) as usize],
        }
    }

    fn into_sprite(self) -> Sprite {
        Sprite::from_pixels(self.size, self.pixels)
    }

    fn paint(&mut self, primitive: &Primitive, palette: &Palette) {
        match *primitive {
            Primitive::Ring {
                count,
                phase,
                shape,
                fill,
                stroke,
            } => {
                let base = petal_polygon(&shape);
                for i in 0..count {
                    let angle = i as f32 / count as f32 * TAU + phase;
                    let rotated: Vec<[f32; 2]> =
                        base.iter().map(|p| rotate(*p, angle)).collect();
                    // fill-then-stroke per petal, so a petal's rim can sit
                    // under its neighbor's fill
                    self.fill_polygon(&rotated, fill, palette);
                    self.stroke_polygon(&rotated, stroke, palette);
                }
            }
            Primitive::Ellipse {
                center,
                rx,
                ry,
                rotation,
                fill,
                stroke,
            } => {
                let points = ellipse_polygon(center, rx, ry, rotation);
                self.fill_polygon(&points, fill, palette);
                self.stroke_polygon(&points, stroke, palette);
            }
            Primitive::Disc {
                center,
                radius,
                fill,
                stroke,
            } => {
                let points = ellipse_polygon(center, radius, radius, 0.0);
                self.fill_polygon(&points, fill, palette);
                self.stroke_polygon(&points, stroke, palette);
            }
            Primitive::Rect {
                min,
                size,
                fill,
                stroke,
            } => {
                let points = [
                    [min[0], min[1]],
                    [min[0] + size[0], min[1]],
                    [min[0] + size[0], min[1] + size[1]],
                    [min[0], min[1] + size[1]],
                ];
                self.fill_polygon(&points, fill, palette);
                self.stroke_polygon(&points, stroke, palette);
            }
            Primitive::Arch {
                from,
                ctrl,
                to,
                fill,
                stroke,
            } => {
                let mut points = Vec::with_capacity(CURVE_SEGMENTS + 1);
                flatten_quad(&mut points, from, ctrl, to);
                // chord back to `from` closes the shape implicitly
                self.fill_polygon(&points, fill, palette);
                self.stroke_polygon(&points, stroke, palette);
            }
        }
    }

    /// Even-odd fill of a closed polygon given in flower-centered coordinates
    fn fill_polygon(&mut self, points: &[[f32; 2]], fill: Fill, palette: &Palette) {
        if points.len() < 3 {
            return;
        }
        let half = self.size as f32 / 2.0;

        let (mut min_x, mut min_y) = (f32::MAX, f32::MAX);
        let (mut max_x, mut max_y) = (f32::MIN, f32::MIN);
        for p in points {
            min_x = min_x.min(p[0]);
            min_y = min_y.min(p[1]);
            max_x = max_x.max(p[0]);
            max_y = max_y.max(p[1]);
        }

        let px_min = ((min_x + half).floor().max(0.0)) as u32;
        let py_min = ((min_y + half).floor().max(0.0)) as u32;
        let px_max = ((max_x + half).ceil().min(self.size as f32 - 1.0)) as u32;
        let py_max = ((max_y + half).ceil().min(self.size as f32 - 1.0)) as u32;

        for py in py_min..=py_max {
            for px in px_min..=px_max {
                let sample = [px as f32 + 0.5 - half, py as f32 + 0.5 - half];
                if point_in_polygon(points, sample) {
                    let color = resolve_fill(fill, palette, sample);
                    self.blend(px, py, color);
                }
            }
        }
    }

    /// Outline a closed polygon: every pixel whose center lies within the
    /// stroke's half-width of an edge is painted in the stroke color
    fn stroke_polygon(&mut self, points: &[[f32; 2]], stroke: Stroke, palette: &Palette) {
        let (color, width) = match stroke {
            Stroke::None => return,
            Stroke::Darker => (palette.darker, 1.0),
            Stroke::Solid(c, w) => (c, w),
        };
        if points.len() < 2 {
            return;
        }
        let half = self.size as f32 / 2.0;
        // half the line width on either side of the edge, padded so a
        // one-unit stroke still lands on pixel centers along diagonals
        let reach = width / 2.0 + 0.5;

        let (mut min_x, mut min_y) = (f32::MAX, f32::MAX);
        let (mut max_x, mut max_y) = (f32::MIN, f32::MIN);
        for p in points {
            min_x = min_x.min(p[0]);
            min_y = min_y.min(p[1]);
            max_x = max_x.max(p[0]);
            max_y = max_y.max(p[1]);
        }

        let px_min = ((min_x - reach + half).floor().max(0.0)) as u32;
        let py_min = ((min_y - reach + half).floor().max(0.0)) as u32;
        let px_max = ((max_x + reach + half).ceil().min(self.size as f32 - 1.0)) as u32;
        let py_max = ((max_y + reach + half).ceil().min(self.size as f32 - 1.0)) as u32;

        for py in py_min..=py_max {
            for px in px_min..=px_max {
                let sample = [px as f32 + 0.5 - half, py as f32 + 0.5 - half];
                let mut dist = f32::MAX;
                let mut j = points.len() - 1;
                for i in 0..points.len() {
                    dist = dist.min(segment_distance(points[j], points[i], sample));
                    j = i;
                }
                if dist <= reach {
                    self.blend(px, py, color);
                }
            }
        }
    }

    /// Source-over blend one pixel
    fn blend(&mut self, x: u32, y: u32, src: Color) {
        let i = ((y * self.size + x) * 4) as usize;
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

fn resolve_fill(fill: Fill, palette: &Palette, point: [f32; 2]) -> Color {
    match fill {
        Fill::Solid(c) => c,
        Fill::Gradient => {
            // Radial lighter→base from the flower center; rotation-invariant,
            // so ring petals can share one gradient
            let d = (point[0] * point[0] + point[1] * point[1]).sqrt();
            let t = ((d - GRADIENT_INNER) / (GRADIENT_OUTER - GRADIENT_INNER)).clamp(0.0, 1.0);
            palette.lighter.lerp(palette.base, t)
        }
    }
}

fn rotate(p: [f32; 2], angle: f32) -> [f32; 2] {
    let (sin, cos) = angle.sin_cos();
    [p[0] * cos - p[1] * sin, p[0] * sin + p[1] * cos]
}

/// Flatten a quadratic curve into line segments, appending to `out`.
/// The start point is included, the end point is the final entry.
fn flatten_quad(out: &mut Vec<[f32; 2]>, from: [f32; 2], ctrl: [f32; 2], to: [f32; 2]) {
    for i in 0..=CURVE_SEGMENTS {
        let t = i as f32 / CURVE_SEGMENTS as f32;
        let u = 1.0 - t;
        out.push([
            u * u * from[0] + 2.0 * u * t * ctrl[0] + t * t * to[0],
            u * u * from[1] + 2.0 * u * t * ctrl[1] + t * t * to[1],
        ]);
    }
}

fn ellipse_polygon(center: [f32; 2], rx: f32, ry: f32, rotation: f32) -> Vec<[f32; 2]> {
    let steps = CURVE_SEGMENTS * 2;
    (0..steps)
        .map(|i| {
            let a = i as f32 / steps as f32 * TAU;
            let local = [rx * a.cos(), ry * a.sin()];
            let r = rotate(local, rotation);
            [center[0] + r[0], center[1] + r[1]]
        })
        .collect()
}

fn petal_polygon(shape: &PetalShape) -> Vec<[f32; 2]> {
    match *shape {
        PetalShape::Lobe { base_y, ctrl, tip_y } => {
            let mut points = Vec::with_capacity(CURVE_SEGMENTS * 2 + 2);
            flatten_quad(&mut points, [0.0, base_y], ctrl, [0.0, tip_y]);
            flatten_quad(&mut points, [0.0, tip_y], [-ctrl[0], ctrl[1]], [0.0, base_y]);
            points
        }
        PetalShape::Ellipse { cy, rx, ry } => ellipse_polygon([0.0, cy], rx, ry, 0.0),
        PetalShape::Triangle { half_width, length } => {
            vec![[0.0, 0.0], [half_width, length], [-half_width, length]]
        }
        PetalShape::Fan { tip_y, ctrl, base } => {
            let mut points = Vec::with_capacity(CURVE_SEGMENTS * 2 + 2);
            flatten_quad(&mut points, [0.0, tip_y], ctrl, [base[0], base[1]]);
            // flat base edge, then the mirrored side back up to the tip
            flatten_quad(&mut points, [-base[0], base[1]], [-ctrl[0], ctrl[1]], [0.0, tip_y]);
            points
        }
    }
}

/// Distance from `p` to the segment `a`..`b`
fn segment_distance(a: [f32; 2], b: [f32; 2], p: [f32; 2]) -> f32 {
    let (abx, aby) = (b[0] - a[0], b[1] - a[1]);
    let (apx, apy) = (p[0] - a[0], p[1] - a[1]);
    let len_sq = abx * abx + aby * aby;
    let t = if len_sq > 0.0 {
        ((apx * abx + apy * aby) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let (dx, dy) = (apx - t * abx, apy - t * aby);
    (dx * dx + dy * dy).sqrt()
}

fn point_in_polygon(points: &[[f32; 2]], p: [f32; 2]) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (xi, yi) = (points[i][0], points[i][1]);
        let (xj, yj) = (points[j][0], points[j][1]);
        if (yi > p[1]) != (yj > p[1]) && p[0] < (xj - xi) * (p[1] - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}
