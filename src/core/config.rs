use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::core::dirs::get_config_directory;
use crate::core::error::{ProfileDirError, Result};
use crate::core::record::AddressPrecision;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ListingConfig {
    pub base_url: String,
    pub app_id: String,
    pub page_limit: u32,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            base_url: "https://dummyapi.io/data/v1".to_string(),
            app_id: "6149ac924e29ce2338d6f836".to_string(),
            page_limit: 10,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AuthConfig {
    pub login_url: String,
    pub api_key: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_url: "https://reqres.in/api/login".to_string(),
            api_key: "reqres-free-v1".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GeocodingConfig {
    pub search_url: String,
    /// Nominatim rejects requests without an identifying agent
    pub user_agent: String,
    #[serde(default)]
    pub precision: AddressPrecision,
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            search_url: "https://nominatim.openstreetmap.org/search".to_string(),
            user_agent: format!("profile-directory/{}", env!("CARGO_PKG_VERSION")),
            precision: AddressPrecision::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub listing: ListingConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub geocoding: GeocodingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            created_at: chrono::Utc::now(),
            listing: ListingConfig::default(),
            auth: AuthConfig::default(),
            geocoding: GeocodingConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn load_or_create() -> Result<Self> {
        let config_dir = get_config_directory()?;
        Self::load_or_create_in(&config_dir)
    }

    pub fn load_or_create_in(config_dir: &Path) -> Result<Self> {
        let config_file = config_dir.join("config.json");

        if config_file.exists() {
            log::debug!("Loading config from {}", config_file.display());
            let content = std::fs::read_to_string(&config_file)?;
            let config: Self = serde_json::from_str(&content).map_err(|e| {
                ProfileDirError::config_error(format!(
                    "Invalid config file '{}': {e}",
                    config_file.display()
                ))
            })?;
            config.validate()?;
            log::debug!("Config created {}", config.created_at.to_rfc3339());
            Ok(config)
        } else {
            log::debug!("Creating default config at {}", config_file.display());
            let config = Self::default();
            config.save_in(config_dir)?;
            Ok(config)
        }
    }

    pub fn save_in(&self, config_dir: &Path) -> Result<()> {
        std::fs::create_dir_all(config_dir)?;

        let config_file = config_dir.join("config.json");
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_file, content)?;

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.listing.page_limit == 0 {
            return Err(ProfileDirError::config_error(
                "listing.page_limit must be at least 1",
            ));
        }
        Ok(())
    }
}
