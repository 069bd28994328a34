use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use cardio_core::model::DisplayPrefs;

use crate::repository::{PrefsError, PrefsStore};

/// [`PrefsStore`] backed by a single JSON file.
///
/// A missing file means nothing has been saved yet. A file that fails to
/// parse is treated the same way, with a warning, so one bad write can
/// never wedge startup.
#[derive(Debug, Clone)]
pub struct JsonFilePrefs {
    path: PathBuf,
}

impl JsonFilePrefs {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PrefsStore for JsonFilePrefs {
    fn load(&self) -> Result<Option<DisplayPrefs>, PrefsError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        match serde_json::from_str(&raw) {
            Ok(prefs) => Ok(Some(prefs)),
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "ignoring unreadable prefs file"
                );
                Ok(None)
            }
        }
    }

    fn save(&self, prefs: &DisplayPrefs) -> Result<(), PrefsError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(prefs)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}
