use cardio_core::model::{Session, SessionId, VideoLink};

use crate::vm::time_fmt::{format_finish_time, format_length};

/// Everything one table row needs, precomputed from the domain session.
///
/// The raw length and video link ride along so the copy action can send
/// them back to the backend unchanged.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionRowVm {
    pub id: SessionId,
    pub description: String,
    pub video: Option<VideoLink>,
    pub length_secs: u32,
    pub length_str: String,
    pub finish_time_str: String,
    pub is_favorite: bool,
}

impl From<&Session> for SessionRowVm {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id().clone(),
            description: session.description().to_owned(),
            video: session.video().cloned(),
            length_secs: session.length_secs(),
            length_str: format_length(session.length_secs()),
            finish_time_str: format_finish_time(session.finish_time()),
            is_favorite: session.is_favorite(),
        }
    }
}

#[must_use]
pub fn map_session_rows(sessions: &[Session]) -> Vec<SessionRowVm> {
    sessions.iter().map(SessionRowVm::from).collect()
}

#[cfg(test)]
mod tests {
    use cardio_core::time::fixed_now;

    use super::*;

    #[test]
    fn rows_precompute_display_strings() {
        let video = VideoLink::new("https://youtu.be/abc", "https://img.example/abc.jpg").unwrap();
        let sessions = vec![Session::new(
            SessionId::new("a"),
            "Running",
            Some(video.clone()),
            1800,
            fixed_now(),
            true,
        )];

        let rows = map_session_rows(&sessions);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].description, "Running");
        assert_eq!(rows[0].length_str, "30 minutes");
        assert_eq!(rows[0].video.as_ref(), Some(&video));
        assert!(rows[0].is_favorite);
    }
}
