//! Engine configuration
//!
//! Loaded from a RON file next to the executable. Every field has a
//! default, so a config file only needs the values it changes:
//!
//! ```text
//! (
//!     window: (title: "spacegame", width: 800, height: 600),
//!     animation: (frame_rate: 60, seconds: 2.0),
//!     textures: { "stars": "assets/stars.png" },
//! )
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default config file name
pub const CONFIG_FILE: &str = "spacegame.ron";

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(ron::error::SpannedError),
    Serialize(ron::Error),
    Validation(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::Parse(e)
    }
}

impl From<ron::Error> for ConfigError {
    fn from(e: ron::Error) -> Self {
        ConfigError::Serialize(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Serialize(e) => write!(f, "Serialize error: {}", e),
            ConfigError::Validation(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "spacegame".to_string(),
            width: 800,
            height: 600,
            resizable: true,
        }
    }
}

impl WindowConfig {
    pub fn conf(&self) -> macroquad::window::Conf {
        macroquad::window::Conf {
            window_title: self.title.clone(),
            window_width: self.width as i32,
            window_height: self.height as i32,
            window_resizable: self.resizable,
            ..Default::default()
        }
    }
}

/// Defaults for new path animations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub frame_rate: u32,
    pub seconds: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self { frame_rate: 60, seconds: 1.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub window: WindowConfig,
    /// Target frames per second
    pub frame_rate: u32,
    pub animation: AnimationConfig,
    /// `env_logger` filter, overridden by `RUST_LOG`
    pub log_filter: String,
    /// Texture key -> file path
    pub textures: BTreeMap<String, PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            frame_rate: 60,
            animation: AnimationConfig::default(),
            log_filter: "info".to_string(),
            textures: BTreeMap::new(),
        }
    }
}

impl EngineConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_ron_str(&contents)?;
        log::info!("loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Like [`load`](Self::load), but a missing file yields the defaults.
    /// A file that exists and fails to parse is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        match Self::load(path.as_ref()) {
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("no config at {}, using defaults", path.as_ref().display());
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn from_ron_str(s: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = ron::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let pretty = ron::ser::PrettyConfig::new().depth_limit(3);
        let text = ron::ser::to_string_pretty(self, pretty)?;
        std::fs::write(path, text)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Validation(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if self.frame_rate == 0 {
            return Err(ConfigError::Validation("frame_rate must be non-zero".to_string()));
        }
        if self.animation.frame_rate == 0 {
            return Err(ConfigError::Validation("animation.frame_rate must be non-zero".to_string()));
        }
        if !(self.animation.seconds > 0.0) {
            return Err(ConfigError::Validation(format!(
                "animation.seconds must be positive, got {}",
                self.animation.seconds
            )));
        }
        Ok(())
    }
}
