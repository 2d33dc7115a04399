//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`CSTL_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use constellation_math::{ColorParseError, Rgba};
use constellation_render::RenderStyle;
use constellation_sim::SimConfig;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Simulation configuration
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Rendering configuration
    #[serde(default)]
    pub render: RenderConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            simulation: SimulationConfig::default(),
            render: RenderConfig::default(),
            debug: DebugConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`CSTL_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        // Load default config (required)
        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // CSTL_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("CSTL_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Constellation".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

/// Simulation configuration, with palette colors as hex strings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Particles per batch
    pub particle_count: usize,
    /// Maximum distance at which two particles link up
    pub max_link_distance: f32,
    /// Bound on initial particle speed
    pub particle_speed: f32,
    /// Particle radius range [min, max] in pixels
    pub radius_range: [f32; 2],
    /// Scale applied to every connection's opacity
    pub connection_opacity: f32,
    /// Base particle opacity range [min, max]
    pub opacity_range: [f32; 2],
    /// Pointer interaction radius in pixels
    pub pointer_radius: f32,
    /// Gain on the pointer attraction force
    pub pointer_gain: f32,
    /// How strongly pointer proximity raises opacity
    pub pointer_glow: f32,
    /// Per-tick velocity damping factor
    pub damping: f32,
    /// Twinkle rate in radians per tick
    pub twinkle_rate: f32,
    /// Twinkle amplitude in opacity units
    pub twinkle_amplitude: f32,
    /// Particle colors as `#rrggbb` strings
    pub palette: Vec<String>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            particle_count: 120,
            max_link_distance: 120.0,
            particle_speed: 0.5,
            radius_range: [1.0, 3.0],
            connection_opacity: 0.3,
            opacity_range: [0.2, 0.8],
            pointer_radius: 150.0,
            pointer_gain: 0.003,
            pointer_glow: 0.5,
            damping: 0.999,
            twinkle_rate: 0.02,
            twinkle_amplitude: 0.1,
            palette: vec![
                "#3b82f6".to_string(),
                "#2563eb".to_string(),
                "#60a5fa".to_string(),
                "#ffffff".to_string(),
            ],
        }
    }
}

impl SimulationConfig {
    /// Convert into the engine's configuration, parsing palette colors
    pub fn to_sim_config(&self) -> Result<SimConfig, ConfigError> {
        let palette = self
            .palette
            .iter()
            .map(|hex| Rgba::from_hex(hex))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SimConfig {
            particle_count: self.particle_count,
            max_link_distance: self.max_link_distance,
            particle_speed: self.particle_speed,
            radius_range: self.radius_range,
            connection_opacity: self.connection_opacity,
            opacity_range: self.opacity_range,
            pointer_radius: self.pointer_radius,
            pointer_gain: self.pointer_gain,
            pointer_glow: self.pointer_glow,
            damping: self.damping,
            twinkle_rate: self.twinkle_rate,
            twinkle_amplitude: self.twinkle_amplitude,
            palette,
        })
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Background and trail-overlay color as `#rrggbb`
    pub background: String,
    /// Alpha of the per-frame trail overlay
    pub trail_alpha: f32,
    /// Link midpoint color as `#rrggbb`
    pub link_color: String,
    /// Particle-to-pointer link color as `#rrggbb`
    pub pointer_link_color: String,
    /// Peak alpha of a pointer link
    pub pointer_link_alpha: f32,
    /// Links dimmer than this are not drawn
    pub min_link_alpha: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background: "#667eea".to_string(),
            trail_alpha: 0.05,
            link_color: "#ffffff".to_string(),
            pointer_link_color: "#ffffff".to_string(),
            pointer_link_alpha: 0.4,
            min_link_alpha: 0.01,
        }
    }
}

impl RenderConfig {
    /// Convert into the renderer's style, parsing colors
    pub fn to_render_style(&self) -> Result<RenderStyle, ConfigError> {
        Ok(RenderStyle {
            background: Rgba::from_hex(&self.background)?,
            trail_alpha: self.trail_alpha,
            link_color: Rgba::from_hex(&self.link_color)?,
            pointer_link_color: Rgba::from_hex(&self.pointer_link_color)?,
            pointer_link_alpha: self.pointer_link_alpha,
            min_link_alpha: self.min_link_alpha,
        })
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Show particle/link counts in the window title
    pub show_overlay: bool,
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            show_overlay: false,
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl From<ColorParseError> for ConfigError {
    fn from(e: ColorParseError) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
