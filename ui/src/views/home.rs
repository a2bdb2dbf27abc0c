use dioxus::prelude::*;

use api::roaster::{list_roasters, Roaster};

use crate::core::format;
use crate::roaster::RoasterForm;

/// Home view: the roster of roasters plus the creation dialog. This view
/// owns the displayed list; the dialog only hands confirmed records back.
#[component]
pub fn Home() -> Element {
    let initial = use_server_future(list_roasters)?;

    let mut roasters = use_signal(Vec::<Roaster>::new);
    use_effect(move || {
        if let Some(Ok(list)) = initial() {
            roasters.set(list);
        }
    });

    let load_error = match initial() {
        Some(Err(err)) => Some(err.to_string()),
        _ => None,
    };

    rsx! {
        section { class: "page page-home",
            h1 { "Roasters" }
            p { class: "page-home__intro",
                "Track the roasters behind every bag on your shelf."
            }

            RoasterForm {
                // The list is newest-first; confirmed records go on top.
                on_roaster_added: move |roaster: Roaster| roasters.write().insert(0, roaster),
            }

            if let Some(message) = load_error {
                p { class: "page-home__error", "⚠️ Couldn't load roasters: {message}" }
            }

            if roasters().is_empty() {
                p { class: "page-home__placeholder",
                    "No roasters yet. Add the first one to start your shelf."
                }
            } else {
                ul { class: "roaster-list",
                    for roaster in roasters().into_iter() {
                        li { key: "{roaster.id}", class: "roaster-list__item",
                            span { class: "roaster-list__name", "{roaster.name}" }
                            span { class: "roaster-list__location", "{roaster.location}" }
                            span { class: "roaster-list__added",
                                {format::format_created_at(&roaster.created_at)}
                            }
                        }
                    }
                }
            }
        }
    }
}
