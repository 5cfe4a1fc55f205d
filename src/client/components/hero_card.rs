use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaTrophy;
use dioxus_free_icons::Icon;

use crate::client::components::history::CardMenu;
use crate::model::champion::ChampionDto;

/// Prominent card for the most recent champion overall; the year filter
/// only narrows the history below it.
#[component]
pub fn HeroCard(
    champion: ChampionDto,
    editable: bool,
    on_edit: EventHandler<ChampionDto>,
    on_delete: EventHandler<i32>,
    pending_delete: Signal<Option<i32>>,
) -> Element {
    rsx!(
        div { class: "card lg:card-side bg-base-100 shadow-md",
            if !champion.image.is_empty() {
                figure { class: "lg:w-1/2",
                    img {
                        class: "h-64 w-full object-cover",
                        src: "{champion.image}",
                        alt: "{champion.tournament}",
                    }
                }
            }
            div { class: "card-body",
                div { class: "flex justify-between items-start",
                    div { class: "flex items-center gap-2",
                        Icon {
                            width: 20,
                            height: 20,
                            icon: FaTrophy
                        }
                        span { class: "text-sm uppercase tracking-wide opacity-70",
                            "Reigning Champion"
                        }
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
                h2 { class: "card-title text-2xl",
                    "{champion.winner}"
                }
                p { class: "text-lg",
                    "{champion.tournament}"
                }
                div { class: "flex items-center gap-2",
                    span { class: "badge badge-primary",
                        "{champion.category}"
                    }
                    span { class: "opacity-70",
                        {champion.date.format("%B %-d, %Y").to_string()}
                    }
                }
            }
        }
    )
}
