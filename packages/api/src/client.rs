//! # HTTP client for the friends endpoints
//!
//! [`FriendsSource`] is the seam between the widgets and the network: the UI only
//! ever talks to the trait, so tests drive it with in-memory fakes while the web
//! build uses [`FriendsClient`].
//!
//! [`FriendsClient`] holds the CSRF token read once from the page and attaches it
//! to every request. On WASM reqwest goes through the browser's `fetch`, which
//! needs absolute URLs, so endpoint paths are resolved against the page origin
//! when the client is built.
//!
//! Status handling follows the server contract: only `200 OK` is a success for
//! list endpoints, anything else is [`FetchError::Server`].

use std::future::Future;

use reqwest::{StatusCode, Url};

use crate::config::FriendsConfig;
use crate::error::FetchError;
use crate::models::{Friend, FriendListResponse};

/// Async source of friend data.
pub trait FriendsSource {
    /// The current user's friends, in server order.
    fn friends(&self) -> impl Future<Output = Result<Vec<Friend>, FetchError>>;
    /// Users the current user may know.
    fn suggestions(&self) -> impl Future<Output = Result<Vec<Friend>, FetchError>>;
    /// Create a mutual friendship with `user_id`.
    fn add_friend(&self, user_id: i64) -> impl Future<Output = Result<(), FetchError>>;
}

/// reqwest-backed [`FriendsSource`].
#[derive(Clone, Debug)]
pub struct FriendsClient {
    http: reqwest::Client,
    origin: Url,
    csrf_token: String,
    config: FriendsConfig,
}

impl FriendsClient {
    /// Build a client for the page served from `origin` (e.g. `https://example.com`).
    pub fn new(
        origin: &str,
        csrf_token: impl Into<String>,
        config: FriendsConfig,
    ) -> Result<Self, FetchError> {
        let origin = Url::parse(origin).map_err(|e| FetchError::Config(e.to_string()))?;
        Ok(Self {
            http: reqwest::Client::new(),
            origin,
            csrf_token: csrf_token.into(),
            config,
        })
    }

    pub fn config(&self) -> &FriendsConfig {
        &self.config
    }

    fn url(&self, path: &str) -> Result<Url, FetchError> {
        self.origin
            .join(path)
            .map_err(|e| FetchError::Config(format!("{path}: {e}")))
    }

    async fn get_list(&self, path: &str) -> Result<Vec<Friend>, FetchError> {
        let url = self.url(path)?;
        tracing::debug!(%url, "requesting friend list");

        let response = self
            .http
            .get(url)
            .header(self.config.csrf_header.as_str(), self.csrf_token.as_str())
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        parse_list_response(status, &body)
    }
}

impl FriendsSource for FriendsClient {
    async fn friends(&self) -> Result<Vec<Friend>, FetchError> {
        self.get_list(&self.config.endpoint).await
    }

    async fn suggestions(&self) -> Result<Vec<Friend>, FetchError> {
        self.get_list(&self.config.suggestions_endpoint).await
    }

    async fn add_friend(&self, user_id: i64) -> Result<(), FetchError> {
        let url = self.url(&self.config.add_path(user_id))?;
        tracing::debug!(%url, user_id, "adding friend");

        let response = self
            .http
            .post(url)
            .header(self.config.csrf_header.as_str(), self.csrf_token.as_str())
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Server {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

/// Turn a list endpoint response into friends.
pub fn parse_list_response(status: StatusCode, body: &str) -> Result<Vec<Friend>, FetchError> {
    if status != StatusCode::OK {
        return Err(FetchError::Server {
            status: status.as_u16(),
        });
    }
    let envelope: FriendListResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    Ok(envelope.data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> FriendsClient {
        FriendsClient::new("https://gym.example.com", "tok3n", FriendsConfig::default()).unwrap()
    }

    #[test]
    fn test_ok_response() {
        let body = r#"{"data":[{"user_id":1,"first_name":"Rose","last_name":"Camel"}]}"#;
        let friends = parse_list_response(StatusCode::OK, body).unwrap();
        assert_eq!(friends.len(), 1);
        assert_eq!(friends[0].first_name, "Rose");
    }

    #[test]
    fn test_non_200_is_server_error() {
        let err = parse_list_response(StatusCode::FORBIDDEN, "{}").unwrap_err();
        assert_eq!(err, FetchError::Server { status: 403 });

        // Only 200 counts, even for other success codes.
        let err = parse_list_response(StatusCode::NO_CONTENT, "").unwrap_err();
        assert_eq!(err, FetchError::Server { status: 204 });
    }

    #[test]
    fn test_bad_body_is_decode_error() {
        let err = parse_list_response(StatusCode::OK, "<html>login</html>").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn test_endpoint_resolution() {
        let client = client();
        assert_eq!(
            client.url(&client.config().endpoint).unwrap().as_str(),
            "https://gym.example.com/api/friends/"
        );
        assert_eq!(
            client.url(&client.config().add_path(9)).unwrap().as_str(),
            "https://gym.example.com/api/friend/9/"
        );
    }

    #[test]
    fn test_invalid_origin() {
        let err = FriendsClient::new("not a url", "t", FriendsConfig::default()).unwrap_err();
        assert!(matches!(err, FetchError::Config(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        // A port that was just free: bind an ephemeral one, then release it.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let origin = format!("http://127.0.0.1:{port}");
        let client = FriendsClient::new(&origin, "t", FriendsConfig::default()).unwrap();
        let err = client.friends().await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }
}
