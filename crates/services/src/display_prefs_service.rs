use std::sync::Arc;

use cardio_core::model::DisplayPrefs;
use storage::repository::PrefsStore;

use crate::error::DisplayPrefsError;

/// Loads and persists how the session table is displayed.
#[derive(Clone)]
pub struct DisplayPrefsService {
    store: Arc<dyn PrefsStore>,
}

impl DisplayPrefsService {
    #[must_use]
    pub fn new(store: Arc<dyn PrefsStore>) -> Self {
        Self { store }
    }

    /// Persisted prefs, or defaults when nothing usable is stored.
    /// Load failures are logged and read as defaults.
    #[must_use]
    pub fn load(&self) -> DisplayPrefs {
        match self.store.load() {
            Ok(prefs) => prefs.unwrap_or_default(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to load display prefs");
                DisplayPrefs::default()
            }
        }
    }

    /// # Errors
    ///
    /// Returns an error when the prefs store cannot be written.
    pub fn save(&self, prefs: DisplayPrefs) -> Result<(), DisplayPrefsError> {
        self.store.save(&prefs)?;
        Ok(())
    }
}
