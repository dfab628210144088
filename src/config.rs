//! Generator Configuration
//!
//! Every field has a default, so an empty TOML file is a valid config.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::generator::GenerateError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct GeneratorConfig {
    /// Scratch directory generated logos are written into.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Preferred font candidates, tried in order.
    #[serde(default = "default_font_paths")]
    pub font_paths: Vec<PathBuf>,
}

fn default_output_dir() -> PathBuf {
    std::env::temp_dir()
}

fn default_font_paths() -> Vec<PathBuf> {
    [
        "arial.ttf",
        "/usr/share/fonts/truetype/msttcorefonts/Arial.ttf",
        "/usr/share/fonts/truetype/msttcorefonts/arial.ttf",
        "/usr/share/fonts/TTF/arial.ttf",
        "/Library/Fonts/Arial.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            font_paths: default_font_paths(),
        }
    }
}

impl GeneratorConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, GenerateError> {
        toml::from_str(content).map_err(|e| GenerateError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, GenerateError> {
        let content = fs::read_to_string(path)
            .map_err(|e| GenerateError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }
}
