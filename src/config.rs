//! Process configuration
//!
//! The API credential and base URL are read once at startup and passed into
//! the FDC client explicitly, so tests can construct configs without touching
//! the process environment.

/// Default base URL for the FoodData Central API
pub const DEFAULT_BASE_URL: &str = "https://api.nal.usda.gov/fdc/v1";

/// Configuration for the FoodData Central client
#[derive(Debug, Clone)]
pub struct FdcConfig {
    /// API key (free from https://fdc.nal.usda.gov/api-key-signup.html).
    /// When absent, every data-fetching tool returns an error text instead
    /// of issuing a request.
    pub api_key: Option<String>,
    /// Base URL for the FDC API, overridable for testing against a stub
    pub base_url: String,
}

impl FdcConfig {
    /// Read configuration from the environment (FDC_API_KEY, FDC_BASE_URL)
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("FDC_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            base_url: std::env::var("FDC_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        }
    }

    /// Config with the given key and the production base URL
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }
}

impl Default for FdcConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = FdcConfig::default();
        assert_eq!(config.base_url, "https://api.nal.usda.gov/fdc/v1");
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_with_api_key() {
        let config = FdcConfig::with_api_key("DEMO_KEY");
        assert_eq!(config.api_key.as_deref(), Some("DEMO_KEY"));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
