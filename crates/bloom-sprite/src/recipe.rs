//! The closed variant → recipe table
//!
//! Seven archetypes, each a fixed list of tagged primitives in paint order.
//! The compositor prepends the shared stem-and-leaves base before executing
//! the recipe, so recipes only describe the flower head.

use bloom_core::Color;

/// Number of shape variants in the table
pub const VARIANT_COUNT: usize = 7;

/// How a primitive is colored
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fill {
    /// Radial lighter→base gradient from the palette chosen at spawn
    Gradient,
    /// Fixed color, independent of the palette (themed archetypes)
    Solid(Color),
}

/// How a primitive is outlined
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Stroke {
    /// No outline
    None,
    /// One-pixel rim in the palette's darker tone, the default petal edge
    Darker,
    /// Fixed color and line width (themed archetypes)
    Solid(Color, f32),
}

/// The outline of a single petal, described in petal-local coordinates
/// (origin at the flower center, petal pointing toward +y).
#[derive(Clone, Copy, Debug)]
pub enum PetalShape {
    /// Symmetric lobe: quadratic curve from (0, base_y) to (0, tip_y) via
    /// `ctrl`, mirrored back on the other side
    Lobe { base_y: f32, ctrl: [f32; 2], tip_y: f32 },
    /// Axis-aligned ellipse centered at (0, cy)
    Ellipse { cy: f32, rx: f32, ry: f32 },
    /// Isoceles triangle from the origin to a flat base
    Triangle { half_width: f32, length: f32 },
    /// Tulip fan: quadratic sides from (0, tip_y) down to the flat base
    /// corners at (±base[0], base[1]), curving out through ±ctrl
    Fan { tip_y: f32, ctrl: [f32; 2], base: [f32; 2] },
}

/// One drawing primitive. Coordinates are relative to the flower center.
/// Each shape is filled first, then its boundary is stroked.
#[derive(Clone, Copy, Debug)]
pub enum Primitive {
    /// `count` copies of `shape` evenly rotated around the center,
    /// starting at `phase` radians
    Ring {
        count: u32,
        phase: f32,
        shape: PetalShape,
        fill: Fill,
        stroke: Stroke,
    },
    /// Rotated ellipse
    Ellipse {
        center: [f32; 2],
        rx: f32,
        ry: f32,
        rotation: f32,
        fill: Fill,
        stroke: Stroke,
    },
    /// Filled circle
    Disc {
        center: [f32; 2],
        radius: f32,
        fill: Fill,
        stroke: Stroke,
    },
    /// Axis-aligned rectangle from `min`, extending `size`
    Rect {
        min: [f32; 2],
        size: [f32; 2],
        fill: Fill,
        stroke: Stroke,
    },
    /// Quadratic arch from `from` to `to` via `ctrl`, closed by the chord
    Arch {
        from: [f32; 2],
        ctrl: [f32; 2],
        to: [f32; 2],
        fill: Fill,
        stroke: Stroke,
    },
}

/// A fixed vector recipe for one archetype
pub struct Recipe {
    pub primitives: &'static [Primitive],
}

impl Recipe {
    /// Look up the recipe for a shape variant. Out-of-table indices clamp
    /// to the last variant — spawn only ever produces 0..VARIANT_COUNT.
    pub fn for_variant(variant: usize) -> &'static Recipe {
        &RECIPES[variant.min(VARIANT_COUNT - 1)]
    }
}

const WHITE_PETAL: Color = Color::new(1.0, 1.0, 1.0, 1.0);
const WHITE_PETAL_RIM: Color = Color::new(0.878, 0.878, 0.878, 1.0);
const SOFT_WHITE: Color = Color::new(1.0, 1.0, 1.0, 0.9);
const SOFT_WHITE_RIM: Color = Color::new(0.784, 0.784, 0.784, 0.7);
const CENTER_BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
const HAT_GOLD: Color = Color::new(1.0, 0.843, 0.0, 1.0);
const HAT_GOLD_RIM: Color = Color::new(0.855, 0.647, 0.125, 1.0);
const HAT_BRIM: Color = Color::new(0.984, 0.753, 0.176, 1.0);
const HAT_BAND: Color = Color::new(1.0, 0.09, 0.267, 1.0);
const HAT_BAND_RIM: Color = Color::new(0.769, 0.0, 0.114, 1.0);
const LEAF_GREEN_DARK: Color = Color::new(0.0, 0.502, 0.0, 1.0);
const LEAF_GREEN_RIM: Color = Color::new(0.0, 0.392, 0.0, 1.0);
const CENTER_SLATE: Color = Color::new(0.184, 0.31, 0.31, 1.0);
const GLASSES_RED: Color = Color::new(1.0, 0.078, 0.078, 1.0);
const GLASSES_RED_RIM: Color = Color::new(0.588, 0.0, 0.0, 1.0);

static RECIPES: [Recipe; VARIANT_COUNT] = [
    // 0: classic — eight curved lobes
    Recipe {
        primitives: &[Primitive::Ring {
            count: 8,
            phase: 0.0,
            shape: PetalShape::Lobe {
                base_y: 0.0,
                ctrl: [15.0, 15.0],
                tip_y: 30.0,
            },
            fill: Fill::Gradient,
            stroke: Stroke::Darker,
        }],
    },
    // 1: daisy — twelve slender ellipse petals
    Recipe {
        primitives: &[Primitive::Ring {
            count: 12,
            phase: 0.0,
            shape: PetalShape::Ellipse {
                cy: 18.0,
                rx: 4.0,
                ry: 15.0,
            },
            fill: Fill::Gradient,
            stroke: Stroke::Darker,
        }],
    },
    // 2: tulip — three broad fans
    Recipe {
        primitives: &[Primitive::Ring {
            count: 3,
            phase: 0.0,
            shape: PetalShape::Fan {
                tip_y: -10.0,
                ctrl: [25.0, 10.0],
                base: [20.0, 30.0],
            },
            fill: Fill::Gradient,
            stroke: Stroke::Darker,
        }],
    },
    // 3: beagle daisy — white petals around a black nose
    Recipe {
        primitives: &[
            Primitive::Ring {
                count: 12,
                phase: 0.0,
                shape: PetalShape::Ellipse {
                    cy: 18.0,
                    rx: 6.0,
                    ry: 15.0,
                },
                fill: Fill::Solid(WHITE_PETAL),
                stroke: Stroke::Solid(WHITE_PETAL_RIM, 1.0),
            },
            Primitive::Disc {
                center: [0.0, 0.0],
                radius: 10.0,
                fill: Fill::Solid(CENTER_BLACK),
                stroke: Stroke::None,
            },
        ],
    },
    // 4: straw hat — crown, arched brim, red band
    Recipe {
        primitives: &[
            Primitive::Ellipse {
                center: [0.0, 5.0],
                rx: 35.0,
                ry: 15.0,
                rotation: 0.0,
                fill: Fill::Solid(HAT_GOLD),
                stroke: Stroke::Solid(HAT_GOLD_RIM, 2.0),
            },
            Primitive::Arch {
                from: [-20.0, -5.0],
                ctrl: [0.0, -30.0],
                to: [20.0, -5.0],
                fill: Fill::Solid(HAT_BRIM),
                stroke: Stroke::Solid(HAT_GOLD_RIM, 2.0),
            },
            Primitive::Rect {
                min: [-22.0, -8.0],
                size: [44.0, 10.0],
                fill: Fill::Solid(HAT_BAND),
                stroke: Stroke::Solid(HAT_BAND_RIM, 1.5),
            },
        ],
    },
    // 5: hero burst — eight dark-green spikes around a slate core
    Recipe {
        primitives: &[
            Primitive::Ring {
                count: 8,
                phase: std::f32::consts::PI / 8.0,
                shape: PetalShape::Triangle {
                    half_width: 10.0,
                    length: 30.0,
                },
                fill: Fill::Solid(LEAF_GREEN_DARK),
                stroke: Stroke::Solid(LEAF_GREEN_RIM, 1.0),
            },
            Primitive::Disc {
                center: [0.0, 0.0],
                radius: 8.0,
                fill: Fill::Solid(CENTER_SLATE),
                stroke: Stroke::None,
            },
        ],
    },
    // 6: turbo bloom — seven flowing white lobes and red glasses
    Recipe {
        primitives: &[
            Primitive::Ring {
                count: 7,
                phase: 0.0,
                shape: PetalShape::Lobe {
                    base_y: 10.0,
                    ctrl: [20.0, 25.0],
                    tip_y: 45.0,
                },
                fill: Fill::Solid(SOFT_WHITE),
                stroke: Stroke::Solid(SOFT_WHITE_RIM, 1.0),
            },
            Primitive::Rect {
                min: [-12.0, -6.0],
                size: [24.0, 12.0],
                fill: Fill::Solid(GLASSES_RED),
                stroke: Stroke::Solid(GLASSES_RED_RIM, 2.0),
            },
        ],
    },
];
