//! Blocking HTTP client for the Exoframe server API.

use log::{debug, trace};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Config;
use crate::error::TransportError;

pub const TOKEN_HEADER: &str = "x-access-token";

/// Authenticated client bound to one server endpoint.
///
/// Every request carries the access token and the configured timeout.
#[derive(Clone)]
pub struct ServerClient {
    client: Client,
    config: Config,
}

impl ServerClient {
    pub fn new(config: &Config) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("exoframe/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// GET `path` and decode a JSON body.
    pub fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, TransportError> {
        let url = self.config.api_url(path);
        debug!("GET {}", url);
        self.send(self.client.get(&url))
    }

    /// POST `body` as JSON to `path` and decode a JSON body.
    pub fn post_json<B, T>(&self, path: &str, body: &B) -> Result<Option<T>, TransportError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.config.api_url(path);
        let payload = serde_json::to_vec(body).map_err(|e| TransportError::Decode(e.to_string()))?;
        debug!("POST {} ({} bytes)", url, payload.len());
        self.send(
            self.client
                .post(&url)
                .header(CONTENT_TYPE, "application/json")
                .body(payload),
        )
    }

    fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<Option<T>, TransportError> {
        let response = request
            .header(TOKEN_HEADER, self.config.token.as_str())
            .send()
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|e| TransportError::Request(e.to_string()))?;
        trace!("response {}: {}", status, text);

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        decode_body(&text)
    }
}

/// Empty body and JSON `null` both decode to `None`.
pub(crate) fn decode_body<T: DeserializeOwned>(text: &str) -> Result<Option<T>, TransportError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str::<Option<T>>(text).map_err(|e| TransportError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ContainerRecord;

    #[test]
    fn decode_empty_body_is_none() {
        let decoded: Option<Vec<ContainerRecord>> = decode_body("").unwrap();
        assert!(decoded.is_none());
        let decoded: Option<Vec<ContainerRecord>> = decode_body("null").unwrap();
        assert!(decoded.is_none());
    }

    #[test]
    fn decode_container_list() {
        let decoded: Option<Vec<ContainerRecord>> =
            decode_body(r#"[{"id":"abc123"},{"id":"def456","name":"web"}]"#).unwrap();
        let ids: Vec<String> = decoded.unwrap().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["abc123", "def456"]);
    }

    #[test]
    fn decode_wrong_shape_is_decode_error() {
        let err = decode_body::<Vec<ContainerRecord>>(r#"{"error":"boom"}"#).unwrap_err();
        assert!(matches!(err, TransportError::Decode(_)));
    }

    #[test]
    fn client_builds_from_default_config() {
        let client = ServerClient::new(&Config::default()).unwrap();
        assert_eq!(client.endpoint(), crate::config::DEFAULT_ENDPOINT);
    }
}
