//! Configuration system
//!
//! Every setting defaults to the values the bootstrap was written around:
//! an 800x600 window titled "Learn OpenGL", a GL 3.3 core context and a
//! teal-gray clear color. Settings can also be read from `.toml` or `.ron`
//! files through the [`Config`] trait.

pub use serde::{Deserialize, Serialize};

use crate::render::Rgba;
use crate::window::ResizePolicy;

/// Default window width in pixels
pub const SCREEN_WIDTH: u32 = 800;

/// Default window height in pixels
pub const SCREEN_HEIGHT: u32 = 600;

/// Default window title
pub const APP_NAME: &str = "Learn OpenGL";

/// Largest accepted window dimension
pub const MAX_DIMENSION: u32 = 16384;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A value is outside its accepted range
    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Window settings
    pub window: WindowConfig,

    /// GL context hints
    pub context: ContextConfig,

    /// Per-frame rendering settings
    pub render: RenderConfig,
}

impl Config for AppConfig {}

impl AppConfig {
    /// Check every setting, reporting the first one that is out of range
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] naming the offending setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.window.validate()?;
        self.context.validate()?;
        self.render.validate()
    }
}

/// Window configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,

    /// Window width
    pub width: u32,

    /// Window height
    pub height: u32,

    /// Whether the OS may resize the window
    pub resizable: bool,

    /// How the viewport reacts to framebuffer size changes
    pub resize_policy: ResizePolicy,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: APP_NAME.to_string(),
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            resizable: true,
            resize_policy: ResizePolicy::default(),
        }
    }
}

impl WindowConfig {
    /// Configured `(width, height)`
    #[must_use]
    pub const fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::Invalid("window.title must not be empty".to_string()));
        }
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 || value > MAX_DIMENSION {
                return Err(ConfigError::Invalid(format!(
                    "window.{name} must be in 1..={MAX_DIMENSION}, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// GL context hints passed to the window system before window creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Requested context major version
    pub version_major: u32,

    /// Requested context minor version
    pub version_minor: u32,

    /// Request a core (non-legacy) profile
    pub core_profile: bool,

    /// Request a forward-compatible context; macOS refuses core contexts without it
    pub forward_compat: bool,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            version_major: 3,
            version_minor: 3,
            core_profile: true,
            forward_compat: cfg!(target_os = "macos"),
        }
    }
}

impl ContextConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        // Profiles only exist from 3.2 onwards
        if self.core_profile && (self.version_major, self.version_minor) < (3, 2) {
            return Err(ConfigError::Invalid(format!(
                "context {}.{} cannot use a core profile (requires 3.2+)",
                self.version_major, self.version_minor
            )));
        }
        Ok(())
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Color the framebuffer is cleared to every frame
    pub clear_color: Rgba,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            clear_color: Rgba::TEAL_GRAY,
        }
    }
}

impl RenderConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.clear_color.is_normalized() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(format!(
                "render.clear_color components must be within [0, 1], got {:?}",
                self.clear_color
            )))
        }
    }
}
