//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use thiserror::Error;

/// Where the image generation UI listens when nothing else is configured
pub const DEFAULT_STUDIO_URL: &str = "http://localhost:7862";

/// Directory served under `/static`
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("STUDIO_URL must be an http(s) URL, got {0:?}")]
    InvalidStudioUrl(String),
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address of the image generation engine that `/app` redirects to
    /// Example: http://localhost:7862
    pub studio_url: String,

    /// Directory holding the images and stylesheet served under `/static`
    pub static_dir: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var("STUDIO_URL").ok(),
            std::env::var("STATIC_DIR").ok(),
        )
    }

    /// Build a configuration from raw values, applying defaults for missing ones
    pub fn from_values(
        studio_url: Option<String>,
        static_dir: Option<String>,
    ) -> Result<Self, ConfigError> {
        let studio_url = studio_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_STUDIO_URL.to_string());

        if !(studio_url.starts_with("http://") || studio_url.starts_with("https://")) {
            return Err(ConfigError::InvalidStudioUrl(studio_url));
        }

        let static_dir = static_dir
            .filter(|dir| !dir.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string());

        Ok(Self {
            studio_url,
            static_dir,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            studio_url: DEFAULT_STUDIO_URL.to_string(),
            static_dir: DEFAULT_STATIC_DIR.to_string(),
        }
    }
}
