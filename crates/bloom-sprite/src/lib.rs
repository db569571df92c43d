//! Bloom Sprite - procedural flower archetypes rasterized once per entity
//!
//! Each flower pays the vector-drawing cost exactly once: `compose` executes
//! the shape variant's fixed recipe into a small RGBA bitmap at creation
//! time, and the renderer thereafter only blits that bitmap under a cheap
//! affine transform. Cost per flower per frame is O(1) regardless of how
//! many petals the archetype has.
//!
//! The recipes form a closed table of tagged drawing primitives consumed by
//! one generic compositor — adding an archetype means adding a table entry,
//! not a drawing routine.

mod compose;
mod recipe;
mod sprite;

pub use compose::compose;
pub use recipe::{Fill, PetalShape, Primitive, Recipe, Stroke, VARIANT_COUNT};
pub use sprite::{Palette, Sprite, SPRITE_SIZE};
