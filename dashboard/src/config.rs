//! Configuration management for the FarmAssist dashboard
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with FARMASSIST_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Prediction endpoint configuration
    pub prediction: PredictionConfig,

    /// Initial form values for headless runs
    pub dashboard: DashboardConfig,

    /// Toast notification configuration
    pub notifications: NotificationConfig,

    /// Simulated sign-in configuration
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PredictionConfig {
    /// Origin of the prediction service
    pub base_url: String,

    /// Path of the predict endpoint
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub default_country: String,
    pub default_crop: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NotificationConfig {
    /// How long a toast stays visible, in milliseconds
    pub display_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Delay of the simulated sign-in, in milliseconds
    pub simulated_delay_ms: u64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("FARMASSIST_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("prediction.base_url", "http://localhost:5000")?
            .set_default("prediction.path", "/api/predict")?
            .set_default("dashboard.default_country", "")?
            .set_default("dashboard.default_crop", "")?
            .set_default("notifications.display_ms", 3000)?
            .set_default("auth.simulated_delay_ms", 1500)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (FARMASSIST_ prefix)
            .add_source(
                Environment::with_prefix("FARMASSIST")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            prediction: PredictionConfig::default(),
            dashboard: DashboardConfig {
                default_country: String::new(),
                default_crop: String::new(),
            },
            notifications: NotificationConfig { display_ms: 3000 },
            auth: AuthConfig {
                simulated_delay_ms: 1500,
            },
        }
    }
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            path: "/api/predict".to_string(),
        }
    }
}

impl PredictionConfig {
    /// Full URL of the predict endpoint
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        assert_eq!(
            PredictionConfig::default().endpoint(),
            "http://localhost:5000/api/predict"
        );
    }

    #[test]
    fn test_endpoint_joins_slashes_once() {
        let config = PredictionConfig {
            base_url: "http://127.0.0.1:8080/".to_string(),
            path: "api/predict".to_string(),
        };
        assert_eq!(config.endpoint(), "http://127.0.0.1:8080/api/predict");
    }
}
