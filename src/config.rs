use http::Uri;
use std::env;
use std::time::Duration;

use crate::types::ApiKey;

/// Environment variable holding the device directory credential.
pub const API_KEY_VAR: &str = "MBED_CLOUD_API_KEY";

/// Device directory endpoint used by the test deployment.
pub const API_HOST: &str = "https://api-os2.mbedcloudstaging.net";

/// Upper bound on a single directory request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(59);

/// Device directory API configuration
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub api_key: ApiKey,
    pub host: Uri,
    pub request_timeout: Duration,
}

impl ApiConfig {
    /// Build the configuration from the environment.
    ///
    /// A missing `MBED_CLOUD_API_KEY` yields an empty key rather than an
    /// error; the directory rejects the credential at lookup time.
    pub fn from_env() -> Self {
        let api_key = env::var(API_KEY_VAR).map(ApiKey::from).unwrap_or_default();

        Self {
            api_key,
            host: Uri::from_static(API_HOST),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Set and unset cases share one test body so nothing else races on the
    // process environment.
    #[test]
    fn from_env_reads_the_key_and_tolerates_its_absence() {
        env::set_var(API_KEY_VAR, "ak_test");
        let config = ApiConfig::from_env();
        assert_eq!(*config.api_key, "ak_test");
        assert_eq!(config.host.host(), Some("api-os2.mbedcloudstaging.net"));

        env::remove_var(API_KEY_VAR);
        let config = ApiConfig::from_env();
        assert!(config.api_key.is_empty());
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
    }
}
