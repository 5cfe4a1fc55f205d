use std::str::FromStr;

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaXmark;
use dioxus_free_icons::Icon;

use crate::client::form::{DraftError, FormState};
use crate::model::champion::{Category, MAX_IMAGE_BYTES};

/// Add/edit modal bound to the editor state.
///
/// Renders nothing while idle. Field edits mutate the draft in place;
/// submit is delegated to the parent which validates and writes.
#[component]
pub fn ChampionFormModal(
    form_state: Signal<FormState>,
    error: Signal<Option<String>>,
    on_submit: EventHandler<()>,
) -> Element {
    let state = form_state.read();
    let Some(draft) = state.draft() else {
        return rsx!();
    };

    let editing = matches!(&*state, FormState::Composing { editing_id: Some(_), .. });
    let title = if editing { "Edit Champion" } else { "Add Champion" };
    let tournament = draft.tournament.clone();
    let date = draft.date.clone();
    let winner = draft.winner.clone();
    let category = draft.category;
    let image = draft.image.clone();
    drop(state);

    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box max-w-lg",
                div { class: "flex justify-between items-center mb-4",
                    h3 { class: "text-lg font-bold",
                        "{title}"
                    }
                    button {
                        class: "btn btn-ghost btn-sm",
                        onclick: move |_| {
                            form_state.write().cancel();
                            error.set(None);
                        },
                        Icon {
                            width: 16,
                            height: 16,
                            icon: FaXmark
                        }
                    }
                }
                div { class: "flex flex-col gap-3",
                    label { class: "form-control",
                        span { class: "label-text",
                            "Tournament"
                        }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "text",
                            value: "{tournament}",
                            oninput: move |evt| {
                                form_state.write().with_draft(|draft| draft.tournament = evt.value());
                            },
                        }
                    }
                    label { class: "form-control",
                        span { class: "label-text",
                            "Date"
                        }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "date",
                            value: "{date}",
                            oninput: move |evt| {
                                form_state.write().with_draft(|draft| draft.date = evt.value());
                            },
                        }
                    }
                    label { class: "form-control",
                        span { class: "label-text",
                            "Winner"
                        }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "text",
                            value: "{winner}",
                            oninput: move |evt| {
                                form_state.write().with_draft(|draft| draft.winner = evt.value());
                            },
                        }
                    }
                    label { class: "form-control",
                        span { class: "label-text",
                            "Category"
                        }
                        select {
                            class: "select select-bordered w-full",
                            value: category.as_str(),
                            onchange: move |evt| {
                                // Unknown values coerce to the default tier.
                                let category = Category::from_str(&evt.value()).unwrap_or_default();
                                form_state.write().with_draft(|draft| draft.category = category);
                            },
                            {Category::ALL.iter().map(|c| rsx! {
                                option {
                                    value: c.as_str(),
                                    selected: *c == category,
                                    "{c}"
                                }
                            })}
                        }
                    }
                    label { class: "form-control",
                        span { class: "label-text",
                            "Photo"
                        }
                        input {
                            class: "file-input file-input-bordered w-full",
                            r#type: "file",
                            accept: "image/*",
                            onchange: move |evt| async move {
                                let Some(file) = evt.files().into_iter().next() else {
                                    return;
                                };

                                // Refuse oversized files before reading them.
                                let size = file.size() as usize;
                                if size > MAX_IMAGE_BYTES {
                                    error.set(Some(DraftError::OversizedImage { size }.to_string()));
                                    return;
                                }

                                let name = file.name();
                                match file.read_bytes().await {
                                    Ok(bytes) => {
                                        match form_state.write().attach_image(&name, &bytes) {
                                            Ok(()) => error.set(None),
                                            Err(err) => error.set(Some(err.to_string())),
                                        }
                                    }
                                    Err(err) => {
                                        error.set(Some(format!("Failed to read file: {err}")));
                                    }
                                }
                            },
                        }
                    }
                    if !image.is_empty() {
                        div { class: "flex items-center gap-2",
                            img {
                                class: "h-20 rounded",
                                src: "{image}",
                                alt: "Preview",
                            }
                            button {
                                class: "btn btn-ghost btn-xs",
                                onclick: move |_| form_state.write().clear_image(),
                                "Remove photo"
                            }
                        }
                    }
                    if let Some(message) = error.read().as_ref() {
                        div { class: "alert alert-error text-sm",
                            "{message}"
                        }
                    }
                }
                div { class: "modal-action",
                    button {
                        class: "btn",
                        onclick: move |_| {
                            form_state.write().cancel();
                            error.set(None);
                        },
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_submit.call(()),
                        "Save"
                    }
                }
            }
        }
    )
}
