use std::sync::Arc;

use cardio_core::model::{DisplayPrefs, Session, SessionId, VideoLink};
use cardio_core::time::fixed_now;
use storage::repository::{
    ApiError, InMemoryPrefs, InMemorySessionsApi, SessionsApi, SessionsOverview,
};

use super::test_harness::{setup_view_harness, setup_view_harness_with_api};

fn session(id: &str, description: &str, length_secs: u32, favorite: bool) -> Session {
    Session::new(
        SessionId::new(id),
        description,
        None,
        length_secs,
        fixed_now(),
        favorite,
    )
}

#[tokio::test(flavor = "current_thread")]
async fn sessions_view_renders_rows_and_progress() {
    let api = InMemorySessionsApi::new();
    api.seed_session(session("a", "Running", 1800, false));
    api.seed_session(session("b", "Rowing", 61, true));
    api.seed_progress(75, 300);

    let mut harness = setup_view_harness(api, InMemoryPrefs::new(), None);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Cardio Sessions"), "missing title in {html}");
    assert!(html.contains("Running"), "missing row text in {html}");
    assert!(html.contains("30 minutes"), "missing length in {html}");
    assert!(
        html.contains("1 minute 1 second"),
        "missing mixed length in {html}"
    );
    assert_eq!(
        html.matches("Copy Session").count(),
        2,
        "expected two rows in {html}"
    );
    assert!(
        html.contains("This week: 75/150"),
        "missing weekly chip in {html}"
    );
    assert!(
        html.contains("This month: 300/600"),
        "missing monthly chip in {html}"
    );
    assert!(html.contains("#ffff00"), "missing chip color in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn seeded_favorites_filter_renders_only_favorites() {
    let api = InMemorySessionsApi::new();
    api.seed_session(session("a", "Running", 600, false));
    api.seed_session(session("b", "Rowing", 600, true));

    let prefs = InMemoryPrefs::with_prefs(DisplayPrefs::new(true));
    let mut harness = setup_view_harness(api, prefs, None);
    harness.settle().await;

    let html = harness.render();
    assert_eq!(
        html.matches("Copy Session").count(),
        1,
        "expected a single row in {html}"
    );
    assert!(html.contains("Rowing"), "missing favorite row in {html}");
    assert!(
        !html.contains(r#"class="cardio-description">Running"#),
        "non-favorite row leaked into {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn video_rows_render_a_thumbnail() {
    let api = InMemorySessionsApi::new();
    let video = VideoLink::new("https://youtu.be/abc", "https://img.example/abc.jpg").unwrap();
    api.seed_session(Session::new(
        SessionId::new("a"),
        "Rowing",
        Some(video),
        900,
        fixed_now(),
        false,
    ));

    let mut harness = setup_view_harness(api, InMemoryPrefs::new(), None);
    harness.settle().await;

    let html = harness.render();
    assert!(
        html.contains("https://img.example/abc.jpg"),
        "missing thumbnail in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn seed_description_prefills_the_form() {
    let mut harness = setup_view_harness(
        InMemorySessionsApi::new(),
        InMemoryPrefs::new(),
        Some("Walking"),
    );
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Walking"), "missing seed value in {html}");
}

struct FailingApi;

#[async_trait::async_trait]
impl SessionsApi for FailingApi {
    async fn fetch_overview(&self) -> Result<SessionsOverview, ApiError> {
        Err(ApiError::Connection("offline".into()))
    }

    async fn add_session(&self, _description: &str, _length_secs: u32) -> Result<(), ApiError> {
        Err(ApiError::Connection("offline".into()))
    }

    async fn copy_session(
        &self,
        _description: &str,
        _video: Option<&VideoLink>,
        _length_secs: u32,
    ) -> Result<(), ApiError> {
        Err(ApiError::Connection("offline".into()))
    }

    async fn toggle_favorite(&self, _id: &SessionId) -> Result<(), ApiError> {
        Err(ApiError::Connection("offline".into()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn failing_backend_still_renders_the_page_shell() {
    let mut harness =
        setup_view_harness_with_api(Arc::new(FailingApi), InMemoryPrefs::new(), None);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Cardio Sessions"), "missing title in {html}");
    assert!(html.contains("Minutes"), "missing form in {html}");
    assert!(html.contains("Finish Time"), "missing table head in {html}");
    assert_eq!(html.matches("Copy Session").count(), 0, "no rows expected");
    assert!(
        !html.contains("This week:"),
        "chips should wait for a successful fetch in {html}"
    );
    assert!(
        !html.contains("Something went wrong"),
        "fetch failure must not take down the page in {html}"
    );
}
