//! CLI command implementations

pub mod render;
pub mod run;
pub mod sprite;

use anyhow::{Context, Result};
use bloom_sim::{DisplayClass, GardenConfig};

/// Display-class defaults, optionally overridden from a TOML file
pub fn load_config(constrained: bool, path: Option<&str>) -> Result<GardenConfig> {
    let class = if constrained {
        DisplayClass::Constrained
    } else {
        DisplayClass::Full
    };
    match path {
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .context(format!("Failed to read config file {path}"))?;
            GardenConfig::from_toml(class, &source)
                .context(format!("Failed to parse config file {path}"))
        }
        None => Ok(GardenConfig::for_display(class)),
    }
}
