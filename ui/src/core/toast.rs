//! Transient outcome notifications.
//!
//! The app shell calls [`use_toast_center`] once; that registers a
//! coroutine any descendant can reach with
//! `use_coroutine_handle::<ToastRequest>()` to push a toast. Each pushed
//! toast queues its own dismissal through a detached timer future, so a
//! toast never outlives [`AUTO_DISMISS_MS`] unless the user dismisses it
//! first.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;

use super::{platform, timing};

const TOAST_CSS: Asset = asset!("/assets/styling/toast.css");

/// How long a toast stays on screen.
pub const AUTO_DISMISS_MS: u64 = 5_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

#[derive(Debug)]
pub enum ToastRequest {
    Push {
        title: String,
        description: String,
        variant: ToastVariant,
    },
    Dismiss(u64),
}

impl ToastRequest {
    pub fn push(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::Push {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn push_destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::Push {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Destructive,
        }
    }
}

/// Host the toast queue. Returns the live toast list for [`ToastViewport`].
pub fn use_toast_center() -> Signal<Vec<Toast>> {
    let mut toasts = use_signal(Vec::<Toast>::new);

    let sender_slot: Rc<RefCell<Option<UnboundedSender<ToastRequest>>>> =
        Rc::new(RefCell::new(None));
    let sender_slot_for_loop = sender_slot.clone();

    let center = use_coroutine(move |mut rx: UnboundedReceiver<ToastRequest>| {
        let sender_slot = sender_slot_for_loop.clone();

        async move {
            let mut next_id: u64 = 0;
            while let Some(request) = rx.next().await {
                match request {
                    ToastRequest::Push {
                        title,
                        description,
                        variant,
                    } => {
                        next_id += 1;
                        toasts.write().push(Toast {
                            id: next_id,
                            title,
                            description,
                            variant,
                        });
                        queue_dismiss(sender_slot.clone(), next_id);
                    }
                    ToastRequest::Dismiss(id) => {
                        toasts.write().retain(|toast| toast.id != id);
                    }
                }
            }
        }
    });

    sender_slot.borrow_mut().replace(center.tx());

    toasts
}

fn queue_dismiss(sender_slot: Rc<RefCell<Option<UnboundedSender<ToastRequest>>>>, id: u64) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        platform::spawn_future(async move {
            timing::sleep_ms(AUTO_DISMISS_MS).await;
            let _ = sender.unbounded_send(ToastRequest::Dismiss(id));
        });
    }
}

#[component]
pub fn ToastViewport(toasts: Signal<Vec<Toast>>) -> Element {
    let center = use_coroutine_handle::<ToastRequest>();

    rsx! {
        document::Link { rel: "stylesheet", href: TOAST_CSS }
        div { class: "toast-viewport", aria_live: "polite",
            for toast in toasts().into_iter() {
                {
                    let toast_id = toast.id;
                    let variant_class = match toast.variant {
                        ToastVariant::Default => "toast",
                        ToastVariant::Destructive => "toast toast--destructive",
                    };
                    rsx! {
                        div { key: "{toast.id}", class: "{variant_class}",
                            div { class: "toast__body",
                                p { class: "toast__title", "{toast.title}" }
                                p { class: "toast__description", "{toast.description}" }
                            }
                            button {
                                r#type: "button",
                                class: "toast__dismiss",
                                aria_label: "Dismiss notification",
                                onclick: move |_| center.send(ToastRequest::Dismiss(toast_id)),
                                "×"
                            }
                        }
                    }
                }
            }
        }
    }
}
