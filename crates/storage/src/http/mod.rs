mod sessions_api;

pub use sessions_api::{ApiConfig, HttpSessionsApi};
