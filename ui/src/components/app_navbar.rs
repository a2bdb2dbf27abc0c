use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use api::session::{resolve_session, sign_out, Session};

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Platforms register a `NavBuilder` providing a fully constructed home
/// `Link` (so this crate does not need to know each platform's `Route`
/// enum). The closure receives the localizable label and returns a link
/// that already contains it. Without a registration the navbar falls back
/// to a plain anchor.
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

/// Session-aware application navbar.
///
/// Rendering suspends on session resolution, so the bar first paints with
/// the session already known. A resolution failure falls open to the
/// signed-out bar rather than surfacing an error.
#[component]
pub fn AppNavbar() -> Element {
    let mut session = use_server_future(resolve_session)?;
    let current: Option<Session> = session().and_then(Result::ok).flatten();

    #[cfg(debug_assertions)]
    println!("[session] navbar render authenticated={}", current.is_some());

    let mut menu_open = use_signal(|| false);

    let home_link = match NAV_BUILDER.get() {
        Some(builder) => (builder.home)("Home"),
        None => rsx! {
            a { class: "navbar__home", href: "/",
                span { class: "navbar__home-icon", title: "Home", aria_hidden: "true", "☕" }
                span { class: "visually-hidden", "Home" }
            }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header { class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    {home_link}
                    span { class: "navbar__brand-mark", "Roastery" }
                }

                div { class: "navbar__session",
                    if let Some(user) = current {
                        button {
                            r#type: "button",
                            class: "navbar__avatar-trigger",
                            aria_haspopup: "true",
                            aria_expanded: menu_open(),
                            onclick: move |_| menu_open.toggle(),
                            img {
                                class: "navbar__avatar",
                                src: "{user.avatar_url}",
                                alt: "{user.name}",
                            }
                        }
                        if menu_open() {
                            div { class: "navbar__popover",
                                button {
                                    r#type: "button",
                                    class: "button button--primary navbar__signout",
                                    onclick: move |_| {
                                        menu_open.set(false);
                                        spawn(async move {
                                            // Re-resolve either way; a failed
                                            // sign-out keeps the session visible.
                                            let _ = sign_out().await;
                                            session.restart();
                                        });
                                    },
                                    "Sign "
                                    span { class: "navbar__signout-name", "{user.name}" }
                                    " Out"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
