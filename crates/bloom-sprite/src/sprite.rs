//! The immutable pre-rendered bitmap and the palette that keys it

use bloom_core::Color;

/// Side length of every sprite bitmap, sized to fit the largest archetype
/// with a little padding. The drawing origin (the flower's stem anchor)
/// sits at the bitmap midpoint.
pub const SPRITE_SIZE: u32 = 100;

/// Color parameters selected at flower creation. Together with the shape
/// variant these fully determine the composed bitmap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub base: Color,
    pub lighter: Color,
    pub darker: Color,
}

impl Palette {
    /// Derive the three-tone palette from a single HSL pick: the petal
    /// gradient runs lighter → base, outlines use darker.
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            base: Color::from_hsl(hue, saturation, lightness),
            lighter: Color::from_hsl(hue, saturation, (lightness + 20.0).min(100.0)),
            darker: Color::from_hsl(hue, saturation, (lightness - 20.0).max(0.0)),
        }
    }
}

/// A pre-rendered flower bitmap. Immutable after composition: callers may
/// translate, rotate, and scale it while drawing, but never touch pixels.
#[derive(Clone)]
pub struct Sprite {
    size: u32,
    pixels: Vec<u8>,
}

impl Sprite {
    pub(crate) fn from_pixels(size: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), (size * size * 4) as usize);
        Self { size, pixels }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Raw RGBA8 pixel data, row-major
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Fetch one pixel; out-of-range coordinates read as transparent
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        if x >= self.size || y >= self.size {
            return [0; 4];
        }
        let i = ((y * self.size + x) * 4) as usize;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }
}
