use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming a JSON config file
pub const CONFIG_ENV_VAR: &str = "DRAW_SHAPES_CONFIG";

/// Errors that can occur while loading the editor configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid config data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tunables for the editor front end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing keys fall back to the defaults below
pub struct EditorConfig {
    /// Pixels moved per arrow key press in move mode
    pub move_step: i32,
    pub square_size: i32,
    pub circle_diameter: i32,
    pub rectangle_width: i32,
    pub rectangle_height: i32,
    /// None keeps every snapshot
    pub undo_limit: Option<usize>,
    pub canvas_size: [f32; 2],
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            move_step: 10,
            square_size: 100,
            circle_diameter: 100,
            rectangle_width: 100,
            rectangle_height: 200,
            undo_limit: None,
            canvas_size: [700.0, 600.0],
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load the file named by [`CONFIG_ENV_VAR`], or the defaults when unset
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
