use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPlus;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{ChampionFormModal, HeroCard, HistorySection, Page},
        form::FormState,
        store::UserState,
        util::api,
    },
    model::{
        champion::ChampionDto,
        view::{build_view, YearFilter},
    },
};

#[component]
pub fn Home() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let mut selected_year = use_signal(YearFilter::default);
    let mut form_state = use_signal(FormState::default);
    let mut form_error = use_signal(|| None::<String>);
    let pending_delete = use_signal(|| None::<i32>);
    let mut records = use_signal(|| None::<Result<Vec<ChampionDto>, String>>);

    // Snapshot subscription, held until session resolution settles and gated
    // on a live identity. An initial fetch fills the view, then the stream
    // replaces the record set wholesale on each emission; on stream failure
    // the last known set stays on screen, without retry.
    let _subscription = use_resource(move || {
        let state = user_state.read().clone();
        async move {
            if !state.fetched {
                return;
            }
            if !state.has_identity() {
                if records.peek().is_none() {
                    records.set(Some(Err(
                        "No session identity could be established".to_string(),
                    )));
                }
                return;
            }
            match api::fetch_champions().await {
                Ok(snapshot) => records.set(Some(Ok(snapshot))),
                Err(err) => {
                    tracing::error!("Failed to load champions: {err}");
                    if records.peek().is_none() {
                        records.set(Some(Err(err)));
                    }
                }
            }
            if let Err(err) = api::stream_snapshots(move |snapshot| {
                records.set(Some(Ok(snapshot)));
            })
            .await
            {
                tracing::error!("Snapshot subscription failed: {err}");
                if records.peek().is_none() {
                    records.set(Some(Err(err)));
                }
            }
        }
    });

    let editable = user_state.read().has_identity();

    let on_edit = move |champion: ChampionDto| {
        form_state.write().open_edit(&champion);
        form_error.set(None);
    };

    // The updated record set arrives through the snapshot subscription, so
    // writes never refetch on their own.
    let on_delete = move |id: i32| {
        spawn(async move {
            if let Err(err) = api::delete_champion(id).await {
                tracing::error!("Failed to delete champion: {err}");
            }
        });
    };

    let on_submit = move |_| {
        let has_identity = user_state.read().has_identity();
        let submission = match form_state.read().validate(has_identity) {
            Ok(submission) => submission,
            Err(err) => {
                form_error.set(Some(err.to_string()));
                return;
            }
        };

        spawn(async move {
            let result = match submission.editing_id {
                Some(id) => api::update_champion(id, &submission.form).await.map(|_| ()),
                None => api::create_champion(&submission.form).await.map(|_| ()),
            };

            match result {
                Ok(()) => {
                    form_state.write().finish();
                    form_error.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to save champion: {err}");
                    form_error.set(Some(err));
                }
            }
        });
    };

    rsx!(
        Title { "Podium | Badminton Champions" }
        Meta {
            name: "description",
            content: "Hall of fame for badminton tournament champions."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1024px] p-2 flex flex-col gap-6",
                match &*records.read() {
                    Some(Ok(list)) => {
                        let view = build_view(list, *selected_year.read());

                        rsx!(
                            div { class: "flex justify-between items-center flex-wrap gap-2",
                                div { class: "flex gap-1 flex-wrap",
                                    {view.available_years.iter().copied().map(|filter| {
                                        let active = *selected_year.read() == filter;
                                        let class = if active {
                                            "btn btn-sm btn-primary"
                                        } else {
                                            "btn btn-sm btn-ghost"
                                        };

                                        rsx! {
                                            button {
                                                key: "{filter}",
                                                class,
                                                onclick: move |_| selected_year.set(filter),
                                                "{filter}"
                                            }
                                        }
                                    })}
                                }
                                if editable {
                                    button {
                                        class: "btn btn-sm btn-primary flex gap-2",
                                        onclick: move |_| {
                                            form_state.write().open_add();
                                            form_error.set(None);
                                        },
                                        Icon {
                                            width: 14,
                                            height: 14,
                                            icon: FaPlus
                                        }
                                        "Add Champion"
                                    }
                                }
                            }
                            if let Some(latest) = view.latest.clone() {
                                HeroCard {
                                    champion: latest,
                                    editable,
                                    on_edit,
                                    on_delete,
                                    pending_delete,
                                }
                            } else {
                                div { class: "hero bg-base-200 rounded-box py-12",
                                    div { class: "hero-content text-center",
                                        p { class: "text-lg opacity-70",
                                            "No champions recorded yet."
                                        }
                                    }
                                }
                            }
                            HistorySection {
                                grouped: view.grouped.clone(),
                                editable,
                                on_edit,
                                on_delete,
                                pending_delete,
                            }
                        )
                    }
                    Some(Err(err)) => rsx!(
                        div { class: "alert alert-error",
                            "Failed to load champions: {err}"
                        }
                    ),
                    None => rsx!(
                        div { class: "flex flex-col gap-4",
                            div { class: "skeleton h-64 w-full" }
                            div { class: "skeleton h-32 w-full" }
                        }
                    ),
                }
            }
        }
        ChampionFormModal {
            form_state,
            error: form_error,
            on_submit,
        }
    )
}
