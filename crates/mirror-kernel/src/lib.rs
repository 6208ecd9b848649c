//! HTTP client for the external state kernel.
//!
//! The kernel is assumed to be listening on localhost unless overridden via
//! `MIRROR_KERNEL_URL`. Its internals are out of scope here; the only
//! contract is a single `POST /state` accepting the JSON state payload.

use std::time::Duration;

use mirror_core::StatePayload;
use thiserror::Error;
use tracing::debug;

/// Default kernel base URL when `MIRROR_KERNEL_URL` is not set.
pub const DEFAULT_KERNEL_URL: &str = "http://localhost:8080";

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Errors from kernel communication.
#[derive(Error, Debug)]
pub enum KernelError {
    #[error("Kernel request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Client for the kernel's state endpoint.
pub struct KernelClient {
    client: reqwest::Client,
    base_url: String,
}

impl KernelClient {
    /// Creates a client for the given base URL (trailing slashes ignored).
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self { client, base_url }
    }

    /// Creates a client from `MIRROR_KERNEL_URL`, falling back to localhost.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("MIRROR_KERNEL_URL").unwrap_or_else(|_| DEFAULT_KERNEL_URL.to_string());
        Self::new(base_url)
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submits a state payload and returns the response status code verbatim.
    ///
    /// The kernel signals success with a 200; any other code is reported back
    /// to the caller unchanged. Only transport failures are errors.
    pub async fn sync_state(&self, payload: &StatePayload) -> Result<u16, KernelError> {
        let url = format!("{}/state", self.base_url);
        debug!("POST {} (step {})", url, payload.step);

        let response = self.client.post(&url).json(payload).send().await?;
        Ok(response.status().as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mirror_core::SyncStatus;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn sync_state_posts_payload_as_json() {
        let server = MockServer::start().await;
        let payload = StatePayload::new(SyncStatus::Active, json!({"node": "local"}), 3);

        Mock::given(method("POST"))
            .and(path("/state"))
            .and(body_json(&payload))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = KernelClient::new(server.uri());
        let code = client.sync_state(&payload).await.unwrap();
        assert_eq!(code, 200);
    }

    #[tokio::test]
    async fn non_200_codes_are_returned_verbatim() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/state"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = KernelClient::new(server.uri());
        let payload = StatePayload::new(SyncStatus::Drifted, json!({}), 1);
        assert_eq!(client.sync_state(&payload).await.unwrap(), 503);
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = KernelClient::new("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}
