use std::sync::Arc;

use services::{DisplayPrefsService, SessionLogService};

use crate::platform::LinkOpenerRef;

/// What the composition root (the binary, or a test harness) hands the UI.
pub trait UiApp: Send + Sync {
    fn session_log(&self) -> Arc<SessionLogService>;
    fn display_prefs(&self) -> Arc<DisplayPrefsService>;
    fn link_opener(&self) -> LinkOpenerRef;

    /// Optional description the form starts out with (e.g. "Walking").
    fn seed_description(&self) -> Option<String>;
}

#[derive(Clone)]
pub struct AppContext {
    session_log: Arc<SessionLogService>,
    display_prefs: Arc<DisplayPrefsService>,
    link_opener: LinkOpenerRef,
    seed_description: Option<String>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            session_log: app.session_log(),
            display_prefs: app.display_prefs(),
            link_opener: app.link_opener(),
            seed_description: app.seed_description(),
        }
    }

    #[must_use]
    pub fn session_log(&self) -> Arc<SessionLogService> {
        Arc::clone(&self.session_log)
    }

    #[must_use]
    pub fn display_prefs(&self) -> Arc<DisplayPrefsService> {
        Arc::clone(&self.display_prefs)
    }

    #[must_use]
    pub fn link_opener(&self) -> LinkOpenerRef {
        Arc::clone(&self.link_opener)
    }

    #[must_use]
    pub fn seed_description(&self) -> Option<&str> {
        self.seed_description.as_deref()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
