use serde::{Deserialize, Serialize};

/// connection parameters for an OpenRouteService instance
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct OrsConfig {
    /// API root, without the `/v2` version path
    #[serde(default = "OrsConfig::default_base_url")]
    pub base_url: String,
    /// sent as the `Authorization` header when present. self-hosted instances
    /// usually do not require one.
    #[serde(default)]
    pub api_key: Option<String>,
    /// routing profile, such as "driving-car" or "driving-hgv"
    #[serde(default = "OrsConfig::default_profile")]
    pub profile: String,
    /// per-request timeout
    #[serde(default = "OrsConfig::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl OrsConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openrouteservice.org";
    pub const DEFAULT_PROFILE: &'static str = "driving-car";
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    fn default_base_url() -> String {
        String::from(Self::DEFAULT_BASE_URL)
    }

    fn default_profile() -> String {
        String::from(Self::DEFAULT_PROFILE)
    }

    fn default_timeout_secs() -> u64 {
        Self::DEFAULT_TIMEOUT_SECS
    }

    pub fn directions_url(&self) -> String {
        format!(
            "{}/v2/directions/{}/geojson",
            self.base_url.trim_end_matches('/'),
            self.profile
        )
    }

    pub fn matrix_url(&self) -> String {
        format!(
            "{}/v2/matrix/{}",
            self.base_url.trim_end_matches('/'),
            self.profile
        )
    }
}

impl Default for OrsConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            api_key: None,
            profile: Self::default_profile(),
            timeout_secs: Self::DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let conf = OrsConfig {
            base_url: String::from("http://localhost:8082/ors/"),
            ..Default::default()
        };
        assert_eq!(
            conf.directions_url(),
            "http://localhost:8082/ors/v2/directions/driving-car/geojson"
        );
        assert_eq!(conf.matrix_url(), "http://localhost:8082/ors/v2/matrix/driving-car");
    }

    #[test]
    fn test_defaults_from_empty_json() {
        let conf: OrsConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(conf.base_url, OrsConfig::DEFAULT_BASE_URL);
        assert_eq!(conf.profile, OrsConfig::DEFAULT_PROFILE);
        assert_eq!(conf.timeout_secs, 30);
        assert!(conf.api_key.is_none());
    }
}
