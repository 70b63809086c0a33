/*
Client for the cloud device directory.

The directory is the backend's catalogue of known devices and their
registration lifecycle. Host tests only ever read from it; the single
operation here is a device lookup by the identifier the device reports
for itself.
*/

mod models;

pub use models::Device;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, field, instrument, Span};

use crate::config::ApiConfig;
use crate::util::uri::{make_uri, UriError};

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Invalid directory endpoint URI: {0}")]
    InvalidEndpoint(#[from] UriError),

    #[error("no device matching the identifier")]
    NotFound,

    #[error("credential rejected by the directory")]
    Unauthorized,

    #[error("request timed out")]
    Timeout,

    #[error("Directory returned error: ({0}) {1}")]
    Status(StatusCode, String),

    #[error("Connection to directory failed: {0}")]
    Transport(reqwest::Error),

    #[error("Response decoding failed: {0}")]
    ResponseDecoding(reqwest::Error),
}

impl From<reqwest::Error> for DirectoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            DirectoryError::Timeout
        } else if err.is_decode() {
            DirectoryError::ResponseDecoding(err)
        } else {
            DirectoryError::Transport(err)
        }
    }
}

/// Device directory client.
///
/// Construction never fails; a missing or bogus credential only surfaces
/// as [`DirectoryError::Unauthorized`] once a lookup is attempted.
pub struct DeviceDirectory {
    client: Client,
    config: ApiConfig,
}

impl DeviceDirectory {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    /// Look up a device by the identifier it reports for itself.
    #[instrument(skip_all, fields(device = %device_id, result = field::Empty), err)]
    pub async fn get_device(&self, device_id: &str) -> Result<Device, DirectoryError> {
        let endpoint = make_uri(self.config.host.clone(), &format!("/v3/devices/{device_id}/"))?;

        debug!("calling directory");
        let response = self
            .client
            .get(endpoint.to_string())
            .bearer_auth(self.config.api_key.as_str())
            .timeout(self.config.request_timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(match status {
                StatusCode::NOT_FOUND => DirectoryError::NotFound,
                StatusCode::UNAUTHORIZED => DirectoryError::Unauthorized,
                _ => {
                    let err_msg = response.text().await.unwrap_or_default();
                    DirectoryError::Status(status, err_msg)
                }
            });
        }

        Span::current().record("result", field::display(status));

        let device: Device = response.json().await?;
        Ok(device)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use std::time::Duration;

    fn test_config(endpoint: &str) -> ApiConfig {
        ApiConfig {
            api_key: "ak_test".into(),
            host: endpoint.parse().unwrap(),
            request_timeout: Duration::from_secs(10),
        }
    }

    #[tokio::test]
    async fn test_get_device_decodes_id_and_state() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/v3/devices/node-123/")
            .match_header("authorization", "Bearer ak_test")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id": "node-123", "state": "registered", "account_id": "a1"}"#)
            .create_async()
            .await;

        let directory = DeviceDirectory::new(&test_config(&server.url()));
        let device = directory.get_device("node-123").await.unwrap();

        assert_eq!(device.id, "node-123");
        assert_eq!(device.state, "registered");

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_device_not_found() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/v3/devices/missing/")
            .with_status(404)
            .with_body(r#"{"code": 404, "message": "Not Found"}"#)
            .create_async()
            .await;

        let directory = DeviceDirectory::new(&test_config(&server.url()));
        let result = directory.get_device("missing").await;

        assert!(matches!(result, Err(DirectoryError::NotFound)));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_device_unauthorized() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/v3/devices/node-123/")
            .with_status(401)
            .create_async()
            .await;

        let directory = DeviceDirectory::new(&test_config(&server.url()));
        let result = directory.get_device("node-123").await;

        assert!(matches!(result, Err(DirectoryError::Unauthorized)));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_device_server_error_carries_status_and_body() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/v3/devices/node-123/")
            .with_status(500)
            .with_body("upstream exploded")
            .create_async()
            .await;

        let directory = DeviceDirectory::new(&test_config(&server.url()));
        let result = directory.get_device("node-123").await;

        match result {
            Err(DirectoryError::Status(status, msg)) => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(msg, "upstream exploded");
            }
            other => panic!("expected Status error, got {other:?}"),
        }

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_device_malformed_body() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/v3/devices/node-123/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("not json")
            .create_async()
            .await;

        let directory = DeviceDirectory::new(&test_config(&server.url()));
        let result = directory.get_device("node-123").await;

        assert!(matches!(result, Err(DirectoryError::ResponseDecoding(_))));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_device_unreachable_directory() {
        // Nothing listens here; depending on the platform this fails as a
        // connection error or runs into the request timeout. Either way it
        // must not surface as NotFound or Unauthorized.
        let config = ApiConfig {
            api_key: "ak_test".into(),
            host: "http://127.0.0.1:9".parse().unwrap(),
            request_timeout: Duration::from_millis(200),
        };

        let directory = DeviceDirectory::new(&config);
        let result = directory.get_device("node-123").await;

        assert!(matches!(
            result,
            Err(DirectoryError::Transport(_)) | Err(DirectoryError::Timeout)
        ));
    }
}
