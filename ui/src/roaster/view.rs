use dioxus::prelude::*;
use futures_util::StreamExt;

use api::roaster::{create_roaster, NewRoaster, Roaster};

use super::form::RoasterFormModel;
use crate::core::toast::ToastRequest;

const ROASTER_FORM_CSS: Asset = asset!("/assets/styling/roaster_form.css");

/// Dialog for proposing a new roaster.
///
/// `on_roaster_added` fires exactly once per confirmed creation, with the
/// record exactly as the server returned it; the caller owns whatever list
/// it lands in.
#[component]
pub fn RoasterForm(on_roaster_added: EventHandler<Roaster>) -> Element {
    let mut model = use_signal(RoasterFormModel::default);
    let toasts = use_coroutine_handle::<ToastRequest>();

    let submit = use_coroutine(move |mut rx: UnboundedReceiver<NewRoaster>| async move {
        while let Some(payload) = rx.next().await {
            match create_roaster(payload).await {
                Ok(roaster) => {
                    toasts.send(ToastRequest::push(
                        "Roaster added",
                        format!("{} has been successfully added.", roaster.name),
                    ));
                    model.with_mut(RoasterFormModel::resolve_success);
                    on_roaster_added.call(roaster);
                }
                Err(err) => {
                    toasts.send(ToastRequest::push_destructive("Error", server_message(&err)));
                    model.with_mut(RoasterFormModel::resolve_failure);
                }
            }
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if let Some(payload) = model.with_mut(RoasterFormModel::submit) {
            submit.send(payload);
        }
    };

    let snapshot = model();

    rsx! {
        document::Link { rel: "stylesheet", href: ROASTER_FORM_CSS }

        button {
            r#type: "button",
            class: "button roaster-form__open",
            onclick: move |_| model.with_mut(RoasterFormModel::open),
            "Add New Roaster"
        }

        if snapshot.is_open() {
            div { class: "dialog__backdrop",
                div {
                    class: "dialog",
                    role: "dialog",
                    aria_modal: "true",
                    aria_labelledby: "roaster-dialog-title",

                    header { class: "dialog__header",
                        h2 { id: "roaster-dialog-title", "Add New Roaster" }
                    }

                    form { class: "roaster-form", onsubmit: on_submit,
                        div { class: "roaster-form__field",
                            label { r#for: "roaster-name", "Roaster Name" }
                            input {
                                id: "roaster-name",
                                placeholder: "Enter roaster name",
                                value: "{snapshot.values.name}",
                                oninput: move |evt| model.with_mut(|m| m.set_name(evt.value())),
                            }
                            if let Some(message) = snapshot.errors.name {
                                p { class: "roaster-form__error", "{message}" }
                            }
                        }

                        div { class: "roaster-form__field",
                            label { r#for: "roaster-location", "Location" }
                            input {
                                id: "roaster-location",
                                placeholder: "Enter roaster location",
                                value: "{snapshot.values.location}",
                                oninput: move |evt| model.with_mut(|m| m.set_location(evt.value())),
                            }
                            if let Some(message) = snapshot.errors.location {
                                p { class: "roaster-form__error", "{message}" }
                            }
                        }

                        div { class: "roaster-form__actions",
                            button {
                                r#type: "submit",
                                class: "button button--primary",
                                disabled: snapshot.is_submitting(),
                                if snapshot.is_submitting() { "Adding..." } else { "Add Roaster" }
                            }
                            button {
                                r#type: "button",
                                class: "button button--ghost",
                                onclick: move |_| model.with_mut(RoasterFormModel::close),
                                "Close"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Unwrap the server's own message so the toast shows it verbatim; other
/// failure shapes (transport, deserialization) keep their full rendering.
fn server_message(err: &ServerFnError) -> String {
    match err {
        ServerFnError::ServerError(message) => message.clone(),
        other => other.to_string(),
    }
}
