//! Bloom Core - Foundational types for the Bloom garden engine
//!
//! This crate provides the types the other Bloom crates depend on:
//! - `Vec2`, `Bounds` - Surface-space geometry
//! - `Color` - RGBA color with HSL construction and interpolation
//! - Error types and Result alias

mod error;
mod types;

pub use error::{BloomError, Result};
pub use types::{lerp, Bounds, Color, Vec2};
