use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use services::{DisplayPrefsService, SessionLogService};
use storage::repository::{InMemoryPrefs, InMemorySessionsApi, SessionsApi};

use crate::context::{UiApp, build_app_context};
use crate::platform::{LinkOpenerRef, NoopLinkOpener};
use crate::toast::{ToastHost, provide_toasts};
use crate::views::SessionsView;

#[derive(Clone)]
struct TestApp {
    session_log: Arc<SessionLogService>,
    display_prefs: Arc<DisplayPrefsService>,
    seed_description: Option<String>,
}

impl UiApp for TestApp {
    fn session_log(&self) -> Arc<SessionLogService> {
        Arc::clone(&self.session_log)
    }

    fn display_prefs(&self) -> Arc<DisplayPrefsService> {
        Arc::clone(&self.display_prefs)
    }

    fn link_opener(&self) -> LinkOpenerRef {
        Arc::new(NoopLinkOpener)
    }

    fn seed_description(&self) -> Option<String> {
        self.seed_description.clone()
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for HarnessProps {}

#[component]
fn HarnessRoot(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    provide_toasts();
    rsx! {
        SessionsView {}
        ToastHost {}
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub api: InMemorySessionsApi,
    pub prefs: InMemoryPrefs,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// First render plus enough async turns for the fetch resource to land
    /// and re-render.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..3 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(
    api: InMemorySessionsApi,
    prefs: InMemoryPrefs,
    seed_description: Option<&str>,
) -> ViewHarness {
    let session_log = Arc::new(SessionLogService::new(Arc::new(api.clone())));
    let dom = harness_dom(session_log, &prefs, seed_description);
    ViewHarness { dom, api, prefs }
}

/// Variant for backends that are not the in-memory fake (e.g. one that
/// always fails). The harness `api` field is a fresh, unused fake.
pub fn setup_view_harness_with_api(
    api: Arc<dyn SessionsApi>,
    prefs: InMemoryPrefs,
    seed_description: Option<&str>,
) -> ViewHarness {
    let session_log = Arc::new(SessionLogService::new(api));
    let dom = harness_dom(session_log, &prefs, seed_description);
    ViewHarness {
        dom,
        api: InMemorySessionsApi::new(),
        prefs,
    }
}

fn harness_dom(
    session_log: Arc<SessionLogService>,
    prefs: &InMemoryPrefs,
    seed_description: Option<&str>,
) -> VirtualDom {
    let display_prefs = Arc::new(DisplayPrefsService::new(Arc::new(prefs.clone())));
    let app = Arc::new(TestApp {
        session_log,
        display_prefs,
        seed_description: seed_description.map(str::to_owned),
    });
    VirtualDom::new_with_props(HarnessRoot, HarnessProps { app })
}
