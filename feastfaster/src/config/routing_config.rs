use feastfaster_ors::OrsConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// routing provider connection plus the retry policy wrapped around it
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RoutingConfig {
    #[serde(default = "RoutingConfig::default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "RoutingConfig::default_profile")]
    pub profile: String,
    #[serde(default = "RoutingConfig::default_timeout_secs")]
    pub timeout_secs: u64,
    /// retries after a timeout, transport failure or server error. 0 disables retrying.
    #[serde(default)]
    pub max_retries: u32,
    /// wait before the first retry, growing linearly with each attempt
    #[serde(default = "RoutingConfig::default_retry_backoff_millis")]
    pub retry_backoff_millis: u64,
}

impl RoutingConfig {
    pub const DEFAULT_RETRY_BACKOFF_MILLIS: u64 = 500;

    fn default_base_url() -> String {
        String::from(OrsConfig::DEFAULT_BASE_URL)
    }

    fn default_profile() -> String {
        String::from(OrsConfig::DEFAULT_PROFILE)
    }

    fn default_timeout_secs() -> u64 {
        OrsConfig::DEFAULT_TIMEOUT_SECS
    }

    fn default_retry_backoff_millis() -> u64 {
        Self::DEFAULT_RETRY_BACKOFF_MILLIS
    }

    pub fn ors_config(&self) -> OrsConfig {
        OrsConfig {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone().filter(|k| !k.trim().is_empty()),
            profile: self.profile.clone(),
            timeout_secs: self.timeout_secs,
        }
    }

    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_millis)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(format!(
                "routing base_url must be an http(s) url, found '{}'",
                self.base_url
            ));
        }
        if self.profile.trim().is_empty() {
            return Err(String::from("routing profile must not be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(String::from("routing timeout_secs must be positive"));
        }
        Ok(())
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            api_key: None,
            profile: Self::default_profile(),
            timeout_secs: Self::default_timeout_secs(),
            max_retries: 0,
            retry_backoff_millis: Self::DEFAULT_RETRY_BACKOFF_MILLIS,
        }
    }
}
