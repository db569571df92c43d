//! Garden configuration: display-class scaling and TOML overrides

use bloom_core::{BloomError, Result};
use serde::{Deserialize, Serialize};

/// Boot-time display classification. Chosen once at construction and never
/// re-evaluated; scales population ceilings, absorption radii, spawn delay,
/// and flower lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayClass {
    /// Full-size display
    Full,
    /// Constrained display (small screens): tighter ceilings, slower spawns
    Constrained,
}

/// Tunable simulation parameters. Built from a display class; individual
/// fields may be overridden from a TOML table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GardenConfig {
    /// Hard ceiling on simultaneous dust particles
    pub dust_ceiling: usize,
    /// Hard ceiling on simultaneous petal particles
    pub petal_ceiling: usize,
    /// Radius of character attractor zones
    pub absorption_radius: f32,
    /// Radius of the (optional, single) vortex zone
    pub vortex_radius: f32,
    /// Minimum seconds between automatically admitted flowers
    pub spawn_delay: f64,
    /// Minimum seconds between pointer-requested flowers
    pub pointer_spawn_delay: f64,
    /// Seconds a flower may live before it is forced to start disappearing
    pub flower_max_age: f64,
}

impl GardenConfig {
    pub fn for_display(class: DisplayClass) -> Self {
        match class {
            DisplayClass::Full => Self {
                dust_ceiling: 50,
                petal_ceiling: 30,
                absorption_radius: 250.0,
                vortex_radius: 150.0,
                spawn_delay: 0.075,
                pointer_spawn_delay: 0.1,
                flower_max_age: 60.0,
            },
            DisplayClass::Constrained => Self {
                dust_ceiling: 30,
                petal_ceiling: 15,
                absorption_radius: 120.0,
                vortex_radius: 150.0,
                spawn_delay: 0.2,
                pointer_spawn_delay: 0.1,
                flower_max_age: 45.0,
            },
        }
    }

    /// Parse overrides from a TOML string on top of the display-class
    /// defaults. Unknown keys are rejected.
    pub fn from_toml(class: DisplayClass, source: &str) -> Result<Self> {
        let defaults = Self::for_display(class);
        let table: toml::value::Table = toml::from_str(source)
            .map_err(|e| BloomError::ConfigError(e.to_string()))?;

        let mut config = defaults;
        for (key, value) in &table {
            match key.as_str() {
                "dust_ceiling" => config.dust_ceiling = toml_usize(value, config.dust_ceiling),
                "petal_ceiling" => config.petal_ceiling = toml_usize(value, config.petal_ceiling),
                "absorption_radius" => {
                    config.absorption_radius = toml_f32(value, config.absorption_radius)
                }
                "vortex_radius" => config.vortex_radius = toml_f32(value, config.vortex_radius),
                "spawn_delay" => config.spawn_delay = toml_f64(value, config.spawn_delay),
                "pointer_spawn_delay" => {
                    config.pointer_spawn_delay = toml_f64(value, config.pointer_spawn_delay)
                }
                "flower_max_age" => {
                    config.flower_max_age = toml_f64(value, config.flower_max_age)
                }
                other => {
                    return Err(BloomError::ConfigError(format!(
                        "unknown config key: {other}"
                    )))
                }
            }
        }
        Ok(config)
    }
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self::for_display(DisplayClass::Full)
    }
}

// ── TOML helpers (handle integer/float coercion) ──

fn toml_f32(v: &toml::Value, default: f32) -> f32 {
    v.as_float()
        .map(|f| f as f32)
        .or_else(|| v.as_integer().map(|i| i as f32))
        .unwrap_or(default)
}

fn toml_f64(v: &toml::Value, default: f64) -> f64 {
    v.as_float()
        .or_else(|| v.as_integer().map(|i| i as f64))
        .unwrap_or(default)
}

fn toml_usize(v: &toml::Value, default: usize) -> usize {
    v.as_integer()
        .filter(|i| *i >= 0)
        .map(|i| i as usize)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_classes_scale_limits() {
        let full = GardenConfig::for_display(DisplayClass::Full);
        let small = GardenConfig::for_display(DisplayClass::Constrained);
        assert!(small.dust_ceiling < full.dust_ceiling);
        assert!(small.petal_ceiling < full.petal_ceiling);
        assert!(small.absorption_radius < full.absorption_radius);
        assert!(small.spawn_delay > full.spawn_delay);
        assert!(small.flower_max_age < full.flower_max_age);
    }

    #[test]
    fn parse_overrides_from_toml() {
        let config = GardenConfig::from_toml(
            DisplayClass::Full,
            "dust_ceiling = 10\nspawn_delay = 0.5\nabsorption_radius = 90",
        )
        .unwrap();
        assert_eq!(config.dust_ceiling, 10);
        assert!((config.spawn_delay - 0.5).abs() < 1e-9);
        assert!((config.absorption_radius - 90.0).abs() < 0.01);
        // untouched fields keep display-class defaults
        assert_eq!(config.petal_ceiling, 30);
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(GardenConfig::from_toml(DisplayClass::Full, "max_flowers = 3").is_err());
    }
}
