use crate::error::{PlantcastError, Result};
use dialoguer::{Input, Password};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub garden: GardenConfig,
    pub weatherapi: WeatherApiConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GardenConfig {
    /// Location used when a subcommand is invoked without one.
    pub default_location: String,
}

#[derive(Clone, Deserialize, Serialize)]
pub struct WeatherApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub api_key: String,
}

fn default_base_url() -> String {
    "https://api.weatherapi.com/v1".to_string()
}

impl std::fmt::Debug for WeatherApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    #[serde(default = "default_ttl_minutes")]
    pub ttl_minutes: u64,
}

fn default_ttl_minutes() -> u64 {
    10
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_minutes: default_ttl_minutes(),
        }
    }
}

impl Config {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p,
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(PlantcastError::Config(format!(
                "Config file not found at {:?}. Run `plantcast init` to set up.",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| PlantcastError::Config(format!("Failed to read config: {}", e)))?;

        // Substitute environment variables
        let config_str = Self::substitute_env_vars(&config_str);

        let config: Config = serde_yaml::from_str(&config_str)
            .map_err(|e| PlantcastError::Config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        // Try current directory first
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        // Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("plantcast").join("config.yaml");
            if xdg_config.exists() {
                return Ok(xdg_config);
            }
        }

        // Return XDG path as the default (will trigger "not found" in load)
        let default_path = dirs::config_dir()
            .ok_or_else(|| PlantcastError::Config("Cannot determine config directory".into()))?
            .join("plantcast")
            .join("config.yaml");
        Ok(default_path)
    }

    /// Returns true if a config file can be found in any standard location.
    pub fn exists(config_override: Option<&PathBuf>) -> bool {
        match config_override {
            Some(p) => p.exists(),
            None => Self::find_config_path()
                .map(|p| p.exists())
                .unwrap_or(false),
        }
    }

    /// Default path for writing new config files (~/.config/plantcast/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| PlantcastError::Config("Cannot determine config directory".into()))?
            .join("plantcast");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the loaded Config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("No configuration found. Let's set up Plantcast!");
        println!();

        println!("Garden");
        let default_location: String = Input::new()
            .with_prompt("  Default location (city name)")
            .default("Manila".into())
            .interact_text()
            .map_err(|e| PlantcastError::Config(format!("Input error: {}", e)))?;

        println!();

        println!("WeatherAPI");
        let base_url: String = Input::new()
            .with_prompt("  Base URL")
            .default(default_base_url())
            .interact_text()
            .map_err(|e| PlantcastError::Config(format!("Input error: {}", e)))?;

        let api_key: String = Password::new()
            .with_prompt("  API key")
            .interact()
            .map_err(|e| PlantcastError::Config(format!("Input error: {}", e)))?;

        println!();

        println!("Cache");
        let ttl_minutes: u64 = Input::new()
            .with_prompt("  Weather cache TTL (minutes)")
            .default(default_ttl_minutes())
            .interact_text()
            .map_err(|e| PlantcastError::Config(format!("Input error: {}", e)))?;

        println!();

        let config = Config {
            garden: GardenConfig { default_location },
            weatherapi: WeatherApiConfig { base_url, api_key },
            cache: CacheConfig { ttl_minutes },
        };

        // Write to default config path
        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| PlantcastError::Config(format!("Failed to serialize config: {}", e)))?;

        // Write with a header comment
        let content = format!(
            "# Plantcast Configuration\n# Generated by `plantcast init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        // Find all ${VAR_NAME} patterns and substitute
        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            garden: GardenConfig {
                default_location: "Manila".into(),
            },
            weatherapi: WeatherApiConfig {
                base_url: default_base_url(),
                api_key: String::new(),
            },
            cache: CacheConfig::default(),
        }
    }
}
