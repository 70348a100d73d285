//! Session configuration, optionally loaded from a TOML file.
//!
//! Every field falls back to the compile-time default from
//! [`crate::constants`], so a file only needs the keys it overrides:
//!
//! ```toml
//! seed = 7
//! canvas_width = 1920.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;
use crate::types::Viewport;

/// Tunables for a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed. Same seed and same commands give the same session.
    pub seed: u64,
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Lives at session start and after every restart.
    pub starting_lives: u32,
    /// Cap on lives; health refills stop spawning here.
    pub max_lives: u32,
    /// Background stars.
    pub star_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            starting_lives: STARTING_LIVES,
            max_lives: MAX_LIVES,
            star_count: STAR_COUNT,
        }
    }
}

impl GameConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas_width.is_nan() || self.canvas_width <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "canvas_width",
                reason: format!("must be positive, got {}", self.canvas_width),
            });
        }
        if self.canvas_height.is_nan() || self.canvas_height <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "canvas_height",
                reason: format!("must be positive, got {}", self.canvas_height),
            });
        }
        if self.max_lives == 0 || self.max_lives > MAX_LIVES {
            return Err(ConfigError::Invalid {
                field: "max_lives",
                reason: format!("must be in 1..={MAX_LIVES}, got {}", self.max_lives),
            });
        }
        if self.starting_lives == 0 || self.starting_lives > self.max_lives {
            return Err(ConfigError::Invalid {
                field: "starting_lives",
                reason: format!(
                    "must be in 1..={}, got {}",
                    self.max_lives, self.starting_lives
                ),
            });
        }
        Ok(())
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.canvas_width, self.canvas_height)
    }
}
