//! HTTP client for the guild engine.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use guildhall_shared::{
    AcceptQuestRequest, CharacterState, CompletionSummary, Confirmation, CreateCharacterRequest,
    ErrorBody, ErrorCode, QuestState,
};

/// Default engine address.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Errors returned by [`GuildClient`].
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// The engine answered with a structured error.
    #[error("{message}")]
    Api {
        status: StatusCode,
        code: ErrorCode,
        message: String,
    },

    /// The engine answered with a non-success status and no error body.
    #[error("Unexpected response ({status}): {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// Error code reported by the engine, if any.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            ClientError::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Typed client over the engine's character endpoints.
#[derive(Clone)]
pub struct GuildClient {
    client: Client,
    base_url: Url,
}

impl GuildClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(base_url.trim()).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn create_character(
        &self,
        name: &str,
        class: &str,
    ) -> Result<CharacterState, ClientError> {
        let request = CreateCharacterRequest {
            name: name.to_string(),
            class: class.to_string(),
        };
        self.send(self.request(Method::POST, &["characters"])?.json(&request))
            .await
    }

    pub async fn get_character(&self, id: i64) -> Result<CharacterState, ClientError> {
        let id = id.to_string();
        self.send(self.request(Method::GET, &["characters", &id])?)
            .await
    }

    pub async fn find_by_name(&self, name: &str) -> Result<CharacterState, ClientError> {
        self.send(self.request(Method::GET, &["characters", "by-name", name])?)
            .await
    }

    pub async fn list_quests(&self, id: i64) -> Result<Vec<QuestState>, ClientError> {
        let id = id.to_string();
        self.send(self.request(Method::GET, &["characters", &id, "quests"])?)
            .await
    }

    /// Accept a quest. `experience_reward: None` lets the engine apply its default.
    pub async fn accept_quest(
        &self,
        id: i64,
        name: &str,
        description: &str,
        experience_reward: Option<u64>,
    ) -> Result<Confirmation, ClientError> {
        let id = id.to_string();
        let request = AcceptQuestRequest {
            name: name.to_string(),
            description: description.to_string(),
            experience_reward,
        };
        self.send(
            self.request(Method::POST, &["characters", &id, "quests"])?
                .json(&request),
        )
        .await
    }

    pub async fn complete_quest(&self, id: i64) -> Result<CompletionSummary, ClientError> {
        let id = id.to_string();
        self.send(self.request(Method::POST, &["characters", &id, "quests", "complete"])?)
            .await
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, ClientError> {
        let url = endpoint(&self.base_url, segments)?;
        tracing::debug!(%method, %url, "Sending request");
        Ok(self.client.request(method, url))
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(error_from_response(status, &body));
        }

        serde_json::from_str(&body).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}

/// Build `{base}/api/{segments...}`, percent-encoding each segment.
fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, ClientError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| ClientError::InvalidUrl(base.to_string()))?
        .pop_if_empty()
        .push("api")
        .extend(segments);
    Ok(url)
}

fn error_from_response(status: StatusCode, body: &str) -> ClientError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(error) => ClientError::Api {
            status,
            code: error.code,
            message: error.message,
        },
        Err(_) => ClientError::UnexpectedStatus {
            status,
            body: body.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_api_prefix() {
        let base = Url::parse("http://localhost:8000").unwrap();
        let url = endpoint(&base, &["characters", "7", "quests"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/characters/7/quests");
    }

    #[test]
    fn endpoint_keeps_base_path_and_drops_trailing_slash() {
        let base = Url::parse("https://guild.example/v1/").unwrap();
        let url = endpoint(&base, &["health"]).unwrap();
        assert_eq!(url.as_str(), "https://guild.example/v1/api/health");
    }

    #[test]
    fn endpoint_encodes_names() {
        let base = Url::parse("http://localhost:8000").unwrap();
        let url = endpoint(&base, &["characters", "by-name", "Sir Brom/the Bold"]).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/characters/by-name/Sir%20Brom%2Fthe%20Bold"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(matches!(
            GuildClient::new("not a url"),
            Err(ClientError::InvalidUrl(_))
        ));
        assert!(matches!(
            GuildClient::new("mailto:guild@example.com"),
            Err(ClientError::InvalidUrl(_))
        ));
    }

    #[test]
    fn structured_error_bodies_are_decoded() {
        let err = error_from_response(
            StatusCode::CONFLICT,
            r#"{"code":"empty_state","message":"Brom has no quests to complete"}"#,
        );
        assert_eq!(err.code(), Some(ErrorCode::EmptyState));
        assert_eq!(err.to_string(), "Brom has no quests to complete");
    }

    #[test]
    fn plain_error_bodies_are_kept() {
        let err = error_from_response(StatusCode::BAD_GATEWAY, "upstream down");
        assert!(matches!(
            err,
            ClientError::UnexpectedStatus { status, ref body }
                if status == StatusCode::BAD_GATEWAY && body == "upstream down"
        ));
        assert_eq!(err.code(), None);
    }
}
