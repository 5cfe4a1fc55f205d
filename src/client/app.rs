use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{router::Route, store::UserState, util::api};

#[component]
pub fn App() -> Element {
    let mut user_state = use_context_provider(|| Signal::new(UserState::default()));

    // Resolve-or-create the session identity once on mount. On failure the
    // UI proceeds with no identity and writes stay disabled.
    use_future(move || async move {
        match api::resolve_session().await {
            Ok(user) => user_state.set(UserState::resolved(Some(user))),
            Err(err) => {
                tracing::error!("Failed to resolve identity: {err}");
                user_state.set(UserState::resolved(None));
            }
        }
    });

    rsx!(Router::<Route> {})
}
