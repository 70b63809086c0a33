use async_trait::async_trait;
use tracing::warn;

use crate::config::ApiConfig;
use crate::host::{Event, HostTest, KvChannel};
use crate::registry::DeviceDirectory;

/// Callback key raised by the device under test once it has attempted cloud
/// registration. The event value carries the device identifier.
pub const REGISTRATION_EVENT: &str = "device_api_registration";

/// Reply key for the registration state sent back to the device.
pub const REGISTRATION_STATUS: &str = "registration_status";

/// Status reported when the lookup fails, whatever the cause.
pub const STATUS_ERROR: &str = "error";

/// Host test that reports a device's registration state from the directory.
///
/// For every registration event it performs one directory lookup and sends
/// exactly one status reply: the directory's state string verbatim, or
/// `"error"` when the lookup fails.
pub struct RegistrationStatus {
    config: ApiConfig,
    directory: Option<DeviceDirectory>,
}

impl RegistrationStatus {
    /// Adapter configured from the environment, see [`ApiConfig::from_env`].
    pub fn new() -> Self {
        Self::with_config(ApiConfig::from_env())
    }

    pub fn with_config(config: ApiConfig) -> Self {
        Self {
            config,
            directory: None,
        }
    }
}

impl Default for RegistrationStatus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HostTest for RegistrationStatus {
    fn subscriptions(&self) -> &[&str] {
        &[REGISTRATION_EVENT]
    }

    fn configure(&mut self) {
        // Cannot fail: a missing or bad credential is only rejected by the
        // directory at lookup time
        self.directory = Some(DeviceDirectory::new(&self.config));
    }

    async fn handle(&mut self, event: &Event, channel: &mut dyn KvChannel) {
        let status = match &self.directory {
            Some(directory) => match directory.get_device(&event.value).await {
                Ok(device) => device.state,
                Err(err) => {
                    // Every failure kind looks the same to the device
                    warn!("device lookup failed: {err}");
                    STATUS_ERROR.to_string()
                }
            },
            None => {
                warn!("registration event delivered before configure");
                STATUS_ERROR.to_string()
            }
        };

        channel.send_kv(REGISTRATION_STATUS, &status);
    }
}
