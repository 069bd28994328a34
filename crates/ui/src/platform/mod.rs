use std::sync::Arc;

mod desktop;

/// Opens URLs outside the app webview. Session video links go through
/// this so YouTube lands in the system browser, not in the page.
pub trait UiLinkOpener: Send + Sync {
    fn open_url(&self, url: &str);
}

pub type LinkOpenerRef = Arc<dyn UiLinkOpener>;

pub use desktop::DesktopLinkOpener;

/// Ignores every request. Used by tests.
pub struct NoopLinkOpener;

impl UiLinkOpener for NoopLinkOpener {
    fn open_url(&self, _url: &str) {}
}
