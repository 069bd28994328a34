use std::time::Duration;

use dioxus::prelude::*;

const DISMISS_AFTER: Duration = Duration::from_secs(5);

/// Transient confirmation shown after a successful mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

/// Handle for pushing toasts from event handlers. Copy, like the
/// signals it wraps.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    /// Shows a toast and schedules its dismissal.
    pub fn push(&mut self, message: impl Into<String>) {
        let mut next_id = self.next_id;
        let id = next_id() + 1;
        next_id.set(id);

        let mut items = self.items;
        items.write().push(Toast {
            id,
            message: message.into(),
        });
        spawn(async move {
            tokio::time::sleep(DISMISS_AFTER).await;
            items.write().retain(|toast| toast.id != id);
        });
    }

    #[must_use]
    pub fn current(&self) -> Vec<Toast> {
        self.items.read().clone()
    }
}

/// Provides the toast channel for a subtree. Call once from the layout
/// (or a test root), above every pusher and the host.
pub fn provide_toasts() -> Toasts {
    use_context_provider(|| Toasts {
        items: Signal::new(Vec::new()),
        next_id: Signal::new(0),
    })
}

#[must_use]
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

#[component]
pub fn ToastHost() -> Element {
    let toasts = use_toasts();
    let items = toasts.current();

    rsx! {
        if !items.is_empty() {
            div { class: "toast-stack",
                for toast in items {
                    div { class: "toast", key: "{toast.id}", "{toast.message}" }
                }
            }
        }
    }
}
