//! Contracts between the services layer and the places data actually
//! lives: the remote sessions API and the local display preferences.
//!
//! The in-memory implementations back tests and let the UI crates run
//! without a server.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Duration;
use thiserror::Error;

use cardio_core::model::{DisplayPrefs, ProgressSummary, Session, SessionId, VideoLink};
use cardio_core::time::fixed_now;

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Failures talking to the sessions backend.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The backend refused the request (validation, unknown id).
    #[error("request rejected: {reason}")]
    Rejected { reason: String },

    /// The backend answered with a non-success status code.
    #[error("request failed with status {0}")]
    Status(reqwest::StatusCode),

    /// A session in the response could not be mapped to the domain model.
    #[error("invalid session payload: {0}")]
    InvalidData(#[from] cardio_core::model::VideoLinkError),

    /// The backend could not be reached at all.
    #[error("connection error: {0}")]
    Connection(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Failures loading or persisting display preferences.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PrefsError {
    #[error("prefs store io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prefs store unavailable: {0}")]
    Unavailable(String),

    #[error("prefs could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
}

// ─── Sessions API ────────────────────────────────────────────────────────────

/// Everything one fetch from the backend returns: the sessions plus the
/// derived data the page needs (known descriptions for the picker, the
/// minute totals for the progress chips).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionsOverview {
    pub sessions: Vec<Session>,
    pub known_descriptions: Vec<String>,
    pub progress: ProgressSummary,
}

impl SessionsOverview {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            sessions: Vec::new(),
            known_descriptions: Vec::new(),
            progress: ProgressSummary::new(0, 0),
        }
    }
}

/// The remote backend that owns all session data. Mutations return no
/// payload; callers re-fetch the overview to observe their effect.
#[async_trait]
pub trait SessionsApi: Send + Sync {
    /// # Errors
    ///
    /// Returns an error when the backend is unreachable, answers with a
    /// non-success status, or returns a payload that cannot be decoded.
    async fn fetch_overview(&self) -> Result<SessionsOverview, ApiError>;

    /// Records a new session. `length_secs` is the duration in seconds.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the session or is
    /// unreachable.
    async fn add_session(&self, description: &str, length_secs: u32) -> Result<(), ApiError>;

    /// Records a fresh session with the metadata of an existing one. The
    /// backend assigns a new id and finish time.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the copy or is
    /// unreachable.
    async fn copy_session(
        &self,
        description: &str,
        video: Option<&VideoLink>,
        length_secs: u32,
    ) -> Result<(), ApiError>;

    /// Flips the favorite flag of the session with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error when the id is unknown to the backend or the
    /// backend is unreachable.
    async fn toggle_favorite(&self, id: &SessionId) -> Result<(), ApiError>;
}

// ─── Display preferences store ───────────────────────────────────────────────

/// Local, synchronous storage for [`DisplayPrefs`]. Implementations are
/// expected to be cheap enough to call from UI code.
pub trait PrefsStore: Send + Sync {
    /// Returns `Ok(None)` when nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying store cannot be read.
    fn load(&self) -> Result<Option<DisplayPrefs>, PrefsError>;

    /// # Errors
    ///
    /// Returns an error when the underlying store cannot be written.
    fn save(&self, prefs: &DisplayPrefs) -> Result<(), PrefsError>;
}

// ─── In-memory sessions API ──────────────────────────────────────────────────

#[derive(Debug, Default)]
struct InMemoryState {
    sessions: Vec<Session>,
    minutes_this_week: u32,
    minutes_this_month: u32,
    added: Vec<(String, u32)>,
    copied: Vec<(String, Option<VideoLink>, u32)>,
    toggled: Vec<SessionId>,
    next_id: u64,
}

/// A [`SessionsApi`] that lives entirely in process. New sessions are
/// prepended, matching the newest-first order of the real backend, and
/// every mutation call is recorded so tests can assert on it. The minute
/// totals stay as seeded; the calendar windowing of the real backend is
/// not modelled.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionsApi {
    state: Arc<Mutex<InMemoryState>>,
}

impl InMemorySessionsApi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_session(&self, session: Session) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.sessions.push(session);
    }

    pub fn seed_progress(&self, minutes_this_week: u32, minutes_this_month: u32) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.minutes_this_week = minutes_this_week;
        state.minutes_this_month = minutes_this_month;
    }

    #[must_use]
    pub fn sessions(&self) -> Vec<Session> {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.sessions.clone()
    }

    /// `(description, length_secs)` pairs received by [`SessionsApi::add_session`],
    /// including rejected calls.
    #[must_use]
    pub fn added_calls(&self) -> Vec<(String, u32)> {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.added.clone()
    }

    #[must_use]
    pub fn copied_calls(&self) -> Vec<(String, Option<VideoLink>, u32)> {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.copied.clone()
    }

    #[must_use]
    pub fn toggled_calls(&self) -> Vec<SessionId> {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.toggled.clone()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, InMemoryState>, ApiError> {
        self.state
            .lock()
            .map_err(|e| ApiError::Connection(e.to_string()))
    }
}

fn distinct_descriptions(sessions: &[Session]) -> Vec<String> {
    let mut seen = Vec::new();
    for session in sessions {
        if !seen.iter().any(|d| d == session.description()) {
            seen.push(session.description().to_owned());
        }
    }
    seen
}

#[async_trait]
impl SessionsApi for InMemorySessionsApi {
    async fn fetch_overview(&self) -> Result<SessionsOverview, ApiError> {
        let state = self.lock()?;
        Ok(SessionsOverview {
            sessions: state.sessions.clone(),
            known_descriptions: distinct_descriptions(&state.sessions),
            progress: ProgressSummary::new(state.minutes_this_week, state.minutes_this_month),
        })
    }

    async fn add_session(&self, description: &str, length_secs: u32) -> Result<(), ApiError> {
        let mut state = self.lock()?;
        state.added.push((description.to_owned(), length_secs));
        if description.trim().is_empty() {
            return Err(ApiError::Rejected {
                reason: "description must not be empty".into(),
            });
        }
        let session = next_session(&mut state, description, None, length_secs);
        state.sessions.insert(0, session);
        Ok(())
    }

    async fn copy_session(
        &self,
        description: &str,
        video: Option<&VideoLink>,
        length_secs: u32,
    ) -> Result<(), ApiError> {
        let mut state = self.lock()?;
        state
            .copied
            .push((description.to_owned(), video.cloned(), length_secs));
        if description.trim().is_empty() {
            return Err(ApiError::Rejected {
                reason: "description must not be empty".into(),
            });
        }
        let session = next_session(&mut state, description, video.cloned(), length_secs);
        state.sessions.insert(0, session);
        Ok(())
    }

    async fn toggle_favorite(&self, id: &SessionId) -> Result<(), ApiError> {
        let mut state = self.lock()?;
        state.toggled.push(id.clone());
        let Some(session) = state.sessions.iter_mut().find(|s| s.id() == id) else {
            return Err(ApiError::Rejected {
                reason: format!("unknown session id {id}"),
            });
        };
        session.set_favorite(!session.is_favorite());
        Ok(())
    }
}

fn next_session(
    state: &mut InMemoryState,
    description: &str,
    video: Option<VideoLink>,
    length_secs: u32,
) -> Session {
    state.next_id += 1;
    let offset = Duration::minutes(i64::from(u32::try_from(state.next_id).unwrap_or(u32::MAX)));
    Session::new(
        SessionId::new(format!("s-{}", state.next_id)),
        description,
        video,
        length_secs,
        fixed_now() + offset,
        false,
    )
}

// ─── In-memory prefs store ───────────────────────────────────────────────────

/// A [`PrefsStore`] holding a single value in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPrefs {
    value: Arc<Mutex<Option<DisplayPrefs>>>,
}

impl InMemoryPrefs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_prefs(prefs: DisplayPrefs) -> Self {
        Self {
            value: Arc::new(Mutex::new(Some(prefs))),
        }
    }
}

impl PrefsStore for InMemoryPrefs {
    fn load(&self) -> Result<Option<DisplayPrefs>, PrefsError> {
        let value = self
            .value
            .lock()
            .map_err(|e| PrefsError::Unavailable(e.to_string()))?;
        Ok(*value)
    }

    fn save(&self, prefs: &DisplayPrefs) -> Result<(), PrefsError> {
        let mut value = self
            .value
            .lock()
            .map_err(|e| PrefsError::Unavailable(e.to_string()))?;
        *value = Some(*prefs);
        Ok(())
    }
}
