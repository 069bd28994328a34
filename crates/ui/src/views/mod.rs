mod sessions;

pub use sessions::{SessionForm, SessionsView};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
