use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// Fallback base URL when `API_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "https://api.example.com";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub resolver: ResolverConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    pub base_url: String,
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Settings {
            resolver: ResolverConfig { base_url },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.resolver.base_url.trim().is_empty() {
            return Err(Error::Config("Base URL must not be empty".to_string()));
        }

        let url = Url::parse(&self.resolver.base_url)?;
        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(Error::Config(format!(
                    "Base URL must use http or https scheme, got: {other}"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_validation() {
        let mut settings = Settings {
            resolver: ResolverConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
            },
        };

        assert!(settings.validate().is_ok());

        settings.resolver.base_url = "https://api.example.com/".to_string();
        assert!(settings.validate().is_ok());

        settings.resolver.base_url = String::new();
        assert!(settings.validate().is_err());

        settings.resolver.base_url = "ftp://api.example.com".to_string();
        assert!(settings.validate().is_err());

        settings.resolver.base_url = "not a url".to_string();
        assert!(settings.validate().is_err());
    }
}
