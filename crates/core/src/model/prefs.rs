use serde::{Deserialize, Serialize};

/// Display preferences persisted on the client.
///
/// The only flag today is the favorites filter; it survives restarts while
/// the session cache does not. Serialized as JSON with the key the original
/// web client used in local storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayPrefs {
    #[serde(default)]
    pub show_only_favorites: bool,
}

impl DisplayPrefs {
    #[must_use]
    pub fn new(show_only_favorites: bool) -> Self {
        Self { show_only_favorites }
    }
}
