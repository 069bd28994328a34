use chrono::{DateTime, Utc};
use thiserror::Error;
use url::Url;

use crate::model::ids::SessionId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum VideoLinkError {
    #[error("video link has a thumbnail but no YouTube URL")]
    MissingUrl,

    #[error("video link has a YouTube URL but no thumbnail")]
    MissingThumbnail,

    #[error("invalid YouTube URL: {raw}")]
    InvalidUrl { raw: String },
}

//
// ─── VIDEO LINK ────────────────────────────────────────────────────────────────
//

/// An optional YouTube attachment on a session.
///
/// The backend stores the URL and the thumbnail as two flat fields that are
/// either both present or both absent. Bundling them here keeps half-present
/// pairs unrepresentable past the decode boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoLink {
    youtube_url: String,
    thumbnail_url: String,
}

impl VideoLink {
    /// Builds a video link, validating that the YouTube URL parses.
    ///
    /// # Errors
    ///
    /// Returns `VideoLinkError::InvalidUrl` if the URL is not well formed.
    pub fn new(
        youtube_url: impl Into<String>,
        thumbnail_url: impl Into<String>,
    ) -> Result<Self, VideoLinkError> {
        let youtube_url = youtube_url.into();
        if Url::parse(&youtube_url).is_err() {
            return Err(VideoLinkError::InvalidUrl { raw: youtube_url });
        }
        Ok(Self {
            youtube_url,
            thumbnail_url: thumbnail_url.into(),
        })
    }

    /// Rebuilds the link from the two flat wire fields.
    ///
    /// Returns `Ok(None)` when both halves are absent.
    ///
    /// # Errors
    ///
    /// Returns `VideoLinkError::MissingUrl` / `VideoLinkError::MissingThumbnail`
    /// when exactly one half is present, or `VideoLinkError::InvalidUrl` when
    /// the URL does not parse.
    pub fn from_parts(
        youtube_url: Option<String>,
        thumbnail_url: Option<String>,
    ) -> Result<Option<Self>, VideoLinkError> {
        match (youtube_url, thumbnail_url) {
            (None, None) => Ok(None),
            (Some(url), Some(thumb)) => Self::new(url, thumb).map(Some),
            (None, Some(_)) => Err(VideoLinkError::MissingUrl),
            (Some(_), None) => Err(VideoLinkError::MissingThumbnail),
        }
    }

    #[must_use]
    pub fn youtube_url(&self) -> &str {
        &self.youtube_url
    }

    #[must_use]
    pub fn thumbnail_url(&self) -> &str {
        &self.thumbnail_url
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One logged cardio activity instance.
///
/// Sessions are created and mutated server-side; the client only ever holds a
/// read-only snapshot that is replaced wholesale on every fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: SessionId,
    description: String,
    video: Option<VideoLink>,
    length_secs: u32,
    finish_time: DateTime<Utc>,
    is_favorite: bool,
}

impl Session {
    #[must_use]
    pub fn new(
        id: SessionId,
        description: impl Into<String>,
        video: Option<VideoLink>,
        length_secs: u32,
        finish_time: DateTime<Utc>,
        is_favorite: bool,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            video,
            length_secs,
            finish_time,
            is_favorite,
        }
    }

    #[must_use]
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn video(&self) -> Option<&VideoLink> {
        self.video.as_ref()
    }

    /// Duration of the session in seconds.
    #[must_use]
    pub fn length_secs(&self) -> u32 {
        self.length_secs
    }

    #[must_use]
    pub fn finish_time(&self) -> DateTime<Utc> {
        self.finish_time
    }

    #[must_use]
    pub fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    pub fn set_favorite(&mut self, is_favorite: bool) {
        self.is_favorite = is_favorite;
    }
}

/// Returns the sessions to display for the given filter setting.
///
/// With the filter off this is the full set; with it on, exactly the
/// favorite-flagged subset. Relative order is preserved either way, so the
/// displayed list is always a pure filter of the last-fetched snapshot.
#[must_use]
pub fn filter_favorites(sessions: &[Session], only_favorites: bool) -> Vec<Session> {
    sessions
        .iter()
        .filter(|session| !only_favorites || session.is_favorite())
        .cloned()
        .collect()
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
