use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::toast::{ToastHost, provide_toasts};
use crate::views::SessionsView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", SessionsView)] Sessions {},
}

#[component]
fn Layout() -> Element {
    provide_toasts();

    rsx! {
        div { class: "app",
            main { class: "content",
                Outlet::<Route> {}
            }
            ToastHost {}
        }
    }
}
