#![forbid(unsafe_code)]

pub mod display_prefs_service;
pub mod error;
pub mod session_log_service;

pub use display_prefs_service::DisplayPrefsService;
pub use error::{DisplayPrefsError, SessionLogError};
pub use session_log_service::SessionLogService;

pub use storage::repository::SessionsOverview;
