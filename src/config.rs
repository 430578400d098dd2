use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::core::placement::TooltipGeometry;

pub const DEFAULT_CONFIG_PATH: &str = "siteboard.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    FSError(#[from] std::io::Error),
    #[error(transparent)]
    SerdeError(#[from] toml::de::Error),
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct MapConfig {
    /// Initial map centre as `[lat, lon]`
    pub center: [f64; 2],
    pub zoom: f64,
    /// Map viewport size in pixels as `[width, height]`
    pub viewport: [f64; 2],
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            // Singapore
            center: [1.3521, 103.8198],
            zoom: 11.0,
            viewport: [960.0, 500.0],
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct TooltipConfig {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        let geometry = TooltipGeometry::default();
        Self {
            width: geometry.width,
            height: geometry.height,
            margin: geometry.margin,
        }
    }
}

impl From<&TooltipConfig> for TooltipGeometry {
    fn from(value: &TooltipConfig) -> Self {
        TooltipGeometry {
            width: value.width,
            height: value.height,
            margin: value.margin,
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct GridConfig {
    pub columns: u8,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { columns: 3 }
    }
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub map: MapConfig,
    pub tooltip: TooltipConfig,
    pub grid: GridConfig,
}

impl Config {
    /// Load the config from `path`, or from `siteboard.toml` when no path is given.
    ///
    /// A missing default file yields the built-in defaults; a missing file that
    /// was asked for explicitly is an error.
    pub fn parse(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path,
            None => {
                let default = Path::new(DEFAULT_CONFIG_PATH);
                if !default.exists() {
                    tracing::debug!("no {} found, using defaults", DEFAULT_CONFIG_PATH);
                    return Ok(Self::default());
                }
                default
            }
        };
        let config_text = fs::read_to_string(path)?;
        Self::from_toml(&config_text)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text)?;
        Ok(config)
    }

    pub fn tooltip_geometry(&self) -> TooltipGeometry {
        TooltipGeometry::from(&self.tooltip)
    }
}
