use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaEllipsisVertical;
use dioxus_free_icons::Icon;

use crate::model::champion::ChampionDto;

/// Edit/delete dropdown shared by the hero card and history cards.
///
/// Delete is two-step: the first click arms `pending_delete` for this
/// record and the menu swaps to an inline confirm row.
#[component]
pub fn CardMenu(
    champion: ChampionDto,
    on_edit: EventHandler<ChampionDto>,
    on_delete: EventHandler<i32>,
    pending_delete: Signal<Option<i32>>,
) -> Element {
    let armed = *pending_delete.read() == Some(champion.id);

    rsx!(
        div { class: "dropdown dropdown-end",
            button {
                class: "btn btn-ghost btn-xs",
                tabindex: 0,
                Icon {
                    width: 16,
                    height: 16,
                    icon: FaEllipsisVertical
                }
            }
            ul {
                class: "dropdown-content menu bg-base-100 rounded-box z-10 w-40 p-2 shadow-sm",
                tabindex: 0,
                if armed {
                    li {
                        button {
                            class: "text-error",
                            onclick: {
                                let mut pending_delete = pending_delete;
                                move |_| {
                                    pending_delete.set(None);
                                    on_delete.call(champion.id);
                                }
                            },
                            "Confirm delete"
                        }
                    }
                    li {
                        button {
                            onclick: {
                                let mut pending_delete = pending_delete;
                                move |_| pending_delete.set(None)
                            },
                            "Keep"
                        }
                    }
                } else {
                    li {
                        button {
                            onclick: {
                                let champion = champion.clone();
                                move |_| on_edit.call(champion.clone())
                            },
                            "Edit"
                        }
                    }
                    li {
                        button {
                            onclick: {
                                let mut pending_delete = pending_delete;
                                move |_| pending_delete.set(Some(champion.id))
                            },
                            "Delete"
                        }
                    }
                }
            }
        }
    )
}

#[component]
pub fn ChampionCard(
    champion: ChampionDto,
    editable: bool,
    on_edit: EventHandler<ChampionDto>,
    on_delete: EventHandler<i32>,
    pending_delete: Signal<Option<i32>>,
) -> Element {
    rsx!(
        div { class: "card bg-base-100 shadow-sm",
            if !champion.image.is_empty() {
                figure {
                    img {
                        class: "h-40 w-full object-cover",
                        src: "{champion.image}",
                        alt: "{champion.tournament}",
                    }
                }
            }
            div { class: "card-body p-4",
                div { class: "flex justify-between items-start",
                    h3 { class: "card-title text-base",
                        "{champion.tournament}"
                    }
                    if editable {
                        CardMenu {
                            champion: champion.clone(),
                            on_edit,
                            on_delete,
                            pending_delete,
                        }
                    }
                }
                p { class: "font-semibold",
                    "{champion.winner}"
                }
                div { class: "flex items-center gap-2",
                    span { class: "badge badge-outline badge-sm",
                        "{champion.category}"
                    }
                    span { class: "text-xs opacity-70",
                        {champion.date.format("%B %-d, %Y").to_string()}
                    }
                }
            }
        }
    )
}

/// Year-grouped past champions, most recent group first.
#[component]
pub fn HistorySection(
    grouped: Vec<(i32, Vec<ChampionDto>)>,
    editable: bool,
    on_edit: EventHandler<ChampionDto>,
    on_delete: EventHandler<i32>,
    pending_delete: Signal<Option<i32>>,
) -> Element {
    if grouped.is_empty() {
        return rsx!(
            p { class: "text-center opacity-70 py-8",
                "No past champions yet."
            }
        );
    }

    rsx!(
        div { class: "flex flex-col gap-6",
            {grouped.iter().map(|(year, records)| rsx! {
                div { key: "{year}",
                    h2 { class: "text-lg font-bold mb-2",
                        "{year}"
                    }
                    div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4",
                        {records.iter().map(|champion| rsx! {
                            ChampionCard {
                                key: "{champion.id}",
                                champion: champion.clone(),
                                editable,
                                on_edit,
                                on_delete,
                                pending_delete,
                            }
                        })}
                    }
                }
            })}
        }
    )
}
