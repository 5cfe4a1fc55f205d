use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaTrophy;
use dioxus_free_icons::Icon;

use crate::client::store::UserState;

pub use crate::client::router::Route;

#[component]
pub fn Navbar() -> Element {
    let user_state = use_context::<Signal<UserState>>();

    let state = user_state.read();
    let status = if !state.fetched {
        "Connecting..."
    } else if state.user.is_some() {
        "Live"
    } else {
        "Read only"
    };

    rsx! {
        div {
            class: "navbar bg-base-200",
            div {
                class: "navbar-start",
                div { class: "flex items-center gap-2",
                    Icon {
                        width: 24,
                        height: 24,
                        icon: FaTrophy
                    }
                    p { class: "text-xl",
                        "Podium"
                    }
                    p { class: "text-xs",
                        "Badminton Champions"
                    }
                }
            }
            div {
                class: "navbar-end",
                div { class: "badge badge-outline",
                    "{status}"
                }
            }
        }

        Outlet::<Route> {}
    }
}
