mod ids;
mod options;
mod prefs;
mod progress;
mod session;

pub use ids::SessionId;
pub use options::CardioOption;
pub use prefs::DisplayPrefs;
pub use progress::ProgressSummary;
pub use session::{Session, VideoLink, VideoLinkError, filter_favorites};
