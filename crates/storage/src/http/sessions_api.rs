use std::env;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use cardio_core::model::{ProgressSummary, Session, SessionId, VideoLink};

use crate::repository::{ApiError, SessionsApi, SessionsOverview};

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:3001/api";

    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            env::var("CARDIO_API_URL").unwrap_or_else(|_| Self::DEFAULT_BASE_URL.into());
        Self { base_url }
    }
}

/// [`SessionsApi`] over the HTTP backend. The wire format keeps the
/// backend's camelCase field names and Mongo-style `_id`.
#[derive(Clone)]
pub struct HttpSessionsApi {
    client: Client,
    config: ApiConfig,
}

impl HttpSessionsApi {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.config.base_url.trim_end_matches('/'))
    }

    async fn post_json<T: Serialize + Sync>(
        &self,
        url: String,
        payload: &T,
    ) -> Result<(), ApiError> {
        let response = self.client.post(url).json(payload).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(())
    }
}

#[async_trait]
impl SessionsApi for HttpSessionsApi {
    async fn fetch_overview(&self) -> Result<SessionsOverview, ApiError> {
        let response = self.client.get(self.endpoint("sessions")).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        let body: OverviewResponse = response.json().await?;
        body.into_overview()
    }

    async fn add_session(&self, description: &str, length_secs: u32) -> Result<(), ApiError> {
        let payload = AddSessionRequest {
            description,
            length: length_secs,
        };
        self.post_json(self.endpoint("sessions"), &payload).await
    }

    async fn copy_session(
        &self,
        description: &str,
        video: Option<&VideoLink>,
        length_secs: u32,
    ) -> Result<(), ApiError> {
        let payload = CopySessionRequest {
            description,
            you_tube_url: video.map(VideoLink::youtube_url),
            length: length_secs,
            thumbnail_url: video.map(VideoLink::thumbnail_url),
        };
        self.post_json(self.endpoint("sessions/copy"), &payload)
            .await
    }

    async fn toggle_favorite(&self, id: &SessionId) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("sessions/{id}/toggle"));
        let response = self.client.post(url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OverviewResponse {
    sessions: Vec<SessionDto>,
    #[serde(default)]
    types_of_cardio: Vec<String>,
    #[serde(default)]
    minutes_done_this_week: u32,
    #[serde(default)]
    minutes_done_this_month: u32,
}

impl OverviewResponse {
    fn into_overview(self) -> Result<SessionsOverview, ApiError> {
        let sessions = self
            .sessions
            .into_iter()
            .map(SessionDto::into_session)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SessionsOverview {
            sessions,
            known_descriptions: self.types_of_cardio,
            progress: ProgressSummary::new(
                self.minutes_done_this_week,
                self.minutes_done_this_month,
            ),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionDto {
    #[serde(rename = "_id")]
    id: String,
    description: String,
    #[serde(default)]
    you_tube_url: Option<String>,
    #[serde(default)]
    thumbnail_url: Option<String>,
    length: u32,
    finish_time: DateTime<Utc>,
    #[serde(default)]
    is_favorite: bool,
}

impl SessionDto {
    fn into_session(self) -> Result<Session, ApiError> {
        let video = VideoLink::from_parts(self.you_tube_url, self.thumbnail_url)?;
        Ok(Session::new(
            SessionId::new(self.id),
            self.description,
            video,
            self.length,
            self.finish_time,
            self.is_favorite,
        ))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AddSessionRequest<'a> {
    description: &'a str,
    length: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CopySessionRequest<'a> {
    description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    you_tube_url: Option<&'a str>,
    length: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    thumbnail_url: Option<&'a str>,
}
