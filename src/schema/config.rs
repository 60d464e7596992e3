//! Configuration types for toroidal Life simulations.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{Color, RuleSet};
use crate::compute::{Coordinate, Neighborhood};

fn default_refresh_rate() -> u32 {
    30
}

/// Top-level simulation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Grid width in cells (X dimension).
    pub width: usize,
    /// Grid height in cells (Y dimension).
    pub height: usize,
    #[serde(default)]
    pub neighborhood: Neighborhood,
    /// Birth/survival rules, e.g. `"B3/S23"`.
    #[serde(default)]
    pub rules: RuleSet,
    /// Palette override, alive color first. Missing entries keep the defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<Color>>,
    /// Generations per second. 0 runs uncapped.
    #[serde(default = "default_refresh_rate")]
    pub refresh_rate: u32,
    /// Generations to run. 0 runs until interrupted.
    #[serde(default)]
    pub generations: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 48,
            neighborhood: Neighborhood::Moore,
            rules: RuleSet::default(),
            colors: None,
            refresh_rate: default_refresh_rate(),
            generations: 0,
        }
    }
}

impl SimulationConfig {
    /// Largest x coordinate on the grid.
    #[inline]
    pub fn xmax(&self) -> i32 {
        self.width as i32 - 1
    }

    /// Largest y coordinate on the grid.
    #[inline]
    pub fn ymax(&self) -> i32 {
        self.height as i32 - 1
    }

    #[inline]
    pub fn max_coord(&self) -> Coordinate {
        Coordinate::new(self.xmax(), self.ymax())
    }

    /// Get total grid size (width * height).
    #[inline]
    pub fn grid_size(&self) -> usize {
        self.width * self.height
    }

    /// Pause between generations, `None` when uncapped.
    pub fn frame_interval(&self) -> Option<Duration> {
        match self.refresh_rate {
            0 => None,
            fps => Some(Duration::from_secs_f64(1.0 / fps as f64)),
        }
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions);
        }
        let limit = i32::MAX as usize;
        if self.width > limit || self.height > limit {
            return Err(ConfigError::DimensionsTooLarge {
                width: self.width,
                height: self.height,
            });
        }
        if self.width.checked_mul(self.height).is_none() {
            return Err(ConfigError::DimensionsTooLarge {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid dimensions (width, height) must be non-zero")]
    InvalidDimensions,
    #[error("Grid dimensions {width}x{height} exceed the addressable range")]
    DimensionsTooLarge { width: usize, height: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid_size(), 80 * 48);
        assert_eq!(config.max_coord(), Coordinate::new(79, 47));
        assert_eq!(config.rules, RuleSet::default());
    }

    #[test]
    fn test_validate_rejects_empty_grid() {
        let config = SimulationConfig {
            width: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidDimensions));

        let config = SimulationConfig {
            height: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidDimensions));
    }

    #[test]
    fn test_validate_rejects_oversized_grid() {
        let config = SimulationConfig {
            width: i32::MAX as usize + 1,
            height: 1,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DimensionsTooLarge { .. })
        ));
    }

    #[test]
    fn test_frame_interval() {
        let config = SimulationConfig {
            refresh_rate: 4,
            ..Default::default()
        };
        assert_eq!(config.frame_interval(), Some(Duration::from_millis(250)));

        let config = SimulationConfig {
            refresh_rate: 0,
            ..Default::default()
        };
        assert_eq!(config.frame_interval(), None);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: SimulationConfig =
            serde_json::from_str(r#"{ "width": 10, "height": 5 }"#).unwrap();
        assert_eq!(config.neighborhood, Neighborhood::Moore);
        assert_eq!(config.rules, RuleSet::default());
        assert_eq!(config.colors, None);
        assert_eq!(config.refresh_rate, 30);
        assert_eq!(config.generations, 0);
    }

    #[test]
    fn test_deserialize_full() {
        let json = r##"{
            "width": 32,
            "height": 16,
            "neighborhood": "von_neumann",
            "rules": "B36/S23",
            "colors": ["red", "#000000"],
            "refresh_rate": 0,
            "generations": 100
        }"##;
        let config: SimulationConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.neighborhood, Neighborhood::VonNeumann);
        assert_eq!(config.rules, RuleSet::high_life());
        let colors = config.colors.unwrap();
        assert_eq!(colors[0].as_str(), "red");
        assert_eq!(colors[1].as_str(), "#000000");
        assert_eq!(config.generations, 100);
    }

    #[test]
    fn test_deserialize_rejects_bad_values() {
        assert!(
            serde_json::from_str::<SimulationConfig>(
                r#"{ "width": 4, "height": 4, "rules": "23/3" }"#
            )
            .is_err()
        );
        assert!(
            serde_json::from_str::<SimulationConfig>(
                r#"{ "width": 4, "height": 4, "colors": ["mauve"] }"#
            )
            .is_err()
        );
    }

    #[test]
    fn test_round_trip_json() {
        let config = SimulationConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: SimulationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
