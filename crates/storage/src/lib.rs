#![forbid(unsafe_code)]

pub mod http;
pub mod json_prefs;
pub mod repository;
