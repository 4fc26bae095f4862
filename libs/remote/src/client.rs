use crate::error::{RemoteError, RemoteResult};
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Fixed socket timeout for every downstream call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// JSON REST client bound to a single base URL.
///
/// Bearer credentials are scoped to a client instance: `with_bearer_token`
/// returns a new client carrying the token, so one caller's credential can
/// never leak into another caller's concurrent request.
#[derive(Clone)]
pub struct RestClient {
    client: reqwest::Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl RestClient {
    /// Create a client for the given base URL with a 5 s timeout.
    pub fn new(base_url: impl Into<String>) -> RemoteResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| RemoteError::Other(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            bearer_token: None,
        })
    }

    /// A copy of this client that attaches `Authorization: Bearer <token>`
    /// to every request it sends.
    pub fn with_bearer_token(&self, token: impl Into<String>) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            bearer_token: Some(token.into()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> RemoteResult<R> {
        self.dispatch(self.request(Method::GET, path)).await
    }

    pub async fn post<B, R>(&self, path: &str, body: &B) -> RemoteResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.dispatch(self.request(Method::POST, path).json(body))
            .await
    }

    pub async fn put<B, R>(&self, path: &str, body: &B) -> RemoteResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.dispatch(self.request(Method::PUT, path).json(body))
            .await
    }

    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> RemoteResult<R> {
        self.dispatch(self.request(Method::DELETE, path)).await
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.client.request(method, url);

        if let Some(token) = &self.bearer_token {
            builder = builder.bearer_auth(token);
        }

        builder
    }

    async fn dispatch<R: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> RemoteResult<R> {
        let response = builder.send().await.map_err(RemoteError::from)?;
        let status = response.status();
        let text = response.text().await.map_err(RemoteError::from)?;

        if !status.is_success() {
            return Err(RemoteError::Status {
                status: status.as_u16(),
                body: parse_body(&text),
            });
        }

        if text.trim().is_empty() {
            // Some endpoints answer 2xx with no body (e.g. deletes)
            return serde_json::from_value(serde_json::Value::Null)
                .map_err(|e| RemoteError::Other(format!("failed to parse response: {}", e)));
        }

        serde_json::from_str(&text)
            .map_err(|e| RemoteError::Other(format!("failed to parse response: {}", e)))
    }
}

/// Keep non-JSON error bodies as a plain string rather than dropping them.
fn parse_body(text: &str) -> serde_json::Value {
    serde_json::from_str(text).unwrap_or_else(|_| serde_json::Value::String(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let client = RestClient::new("http://localhost:5000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
    }

    #[test]
    fn test_with_bearer_token_returns_scoped_copy() {
        let client = RestClient::new("http://localhost:5000").unwrap();
        let scoped = client.with_bearer_token("abc");

        assert!(client.bearer_token.is_none());
        assert_eq!(scoped.bearer_token.as_deref(), Some("abc"));
    }

    #[test]
    fn test_parse_body_json_and_plain_text() {
        assert_eq!(
            parse_body(r#"{"message":"bad"}"#),
            serde_json::json!({"message": "bad"})
        );
        assert_eq!(
            parse_body("gateway exploded"),
            serde_json::Value::String("gateway exploded".to_string())
        );
    }
}
