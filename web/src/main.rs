use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::toast::{use_toast_center, ToastViewport};
use ui::views::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Home {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__home",
        to: Route::Home {},
        span { class: "navbar__home-icon", title: "{label}", aria_hidden: "true", "☕" }
        span { class: "visually-hidden", "{label}" }
    })
}

fn main() {
    #[cfg(feature = "server")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Register the home link builder so the shared navbar can route here.
    register_nav(NavBuilder { home: nav_home });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Web shell around the routed views: shared navbar, suspense fallback for
/// the session/list fetches, and the toast viewport.
#[component]
fn WebShell() -> Element {
    let toasts = use_toast_center();

    rsx! {
        SuspenseBoundary {
            fallback: |_| rsx! {
                div { class: "app-loading", "Loading…" }
            },
            AppNavbar {}
            Outlet::<Route> {}
        }
        ToastViewport { toasts }
    }
}
