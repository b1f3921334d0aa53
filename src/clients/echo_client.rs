// Thin wrapper around reqwest for the outbound call to the echo service

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

/// Public echo service that forwarded greetings are sent to.
pub const ECHO_ENDPOINT: &str = "https://httpbin.org/post";

/// HTTP client for the external echo service.
///
/// The endpoint is supplied at construction time; production wiring passes
/// [`ECHO_ENDPOINT`], tests pass a local double. Nothing is configured on the
/// underlying client, so its default timeout and redirect behavior apply.
#[derive(Debug, Clone)]
pub struct EchoClient {
    client: Client,
    endpoint: String,
}

impl EchoClient {
    /// Create a new echo client pointed at the given endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// POSTs the payload as plain text and returns the response body.
    ///
    /// Any non-success status counts as a failure, like a connection error.
    pub async fn forward(&self, payload: &str) -> Result<String, reqwest::Error> {
        let response: reqwest::Response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "text/plain")
            .body(payload.to_owned())
            .send()
            .await?;

        response.error_for_status()?.text().await
    }
}
