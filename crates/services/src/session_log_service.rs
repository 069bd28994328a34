use std::sync::Arc;

use cardio_core::model::{SessionId, VideoLink};
use storage::repository::{SessionsApi, SessionsOverview};

use crate::error::SessionLogError;

/// Coordinates the session log against the remote backend.
///
/// The form hands over length as the raw minutes string the user typed;
/// the backend stores seconds. The conversion and its validation live
/// here so every caller gets the same rules.
#[derive(Clone)]
pub struct SessionLogService {
    api: Arc<dyn SessionsApi>,
}

impl SessionLogService {
    #[must_use]
    pub fn new(api: Arc<dyn SessionsApi>) -> Self {
        Self { api }
    }

    /// Current sessions plus the derived picker and progress data.
    ///
    /// # Errors
    ///
    /// Passes backend failures through.
    pub async fn overview(&self) -> Result<SessionsOverview, SessionLogError> {
        Ok(self.api.fetch_overview().await?)
    }

    /// Validates the raw minutes input and records the session.
    ///
    /// # Errors
    ///
    /// Returns `SessionLogError::InvalidLength` when `length_minutes` does
    /// not parse as a whole number of minutes, and passes backend failures
    /// through.
    pub async fn add_session(
        &self,
        description: &str,
        length_minutes: &str,
    ) -> Result<(), SessionLogError> {
        let length_secs = parse_length_minutes(length_minutes)?;
        self.api.add_session(description, length_secs).await?;
        Ok(())
    }

    /// Records a fresh session with the metadata of an existing one.
    ///
    /// # Errors
    ///
    /// Passes backend failures through.
    pub async fn copy_session(
        &self,
        description: &str,
        video: Option<&VideoLink>,
        length_secs: u32,
    ) -> Result<(), SessionLogError> {
        self.api.copy_session(description, video, length_secs).await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Passes backend failures through.
    pub async fn toggle_favorite(&self, id: &SessionId) -> Result<(), SessionLogError> {
        self.api.toggle_favorite(id).await?;
        Ok(())
    }
}

fn parse_length_minutes(raw: &str) -> Result<u32, SessionLogError> {
    let invalid = || SessionLogError::InvalidLength {
        raw: raw.to_owned(),
    };
    let minutes: u32 = raw.trim().parse().map_err(|_| invalid())?;
    minutes.checked_mul(60).ok_or_else(invalid)
}
