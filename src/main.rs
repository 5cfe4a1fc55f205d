#![allow(non_snake_case)]

mod client;
mod model;

#[cfg(feature = "server")]
use podium::server;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{config::Config, model::app::AppState, startup};

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        let session = startup::session_layer();
        let db = startup::connect_to_database(&config).await.unwrap();

        tracing::info!("Starting server");

        let mut router = dioxus::server::router(client::App);
        let server_routes = server::router::routes()
            .with_state(AppState::new(db, config.auth_token_secret))
            .layer(session);
        router = router.merge(server_routes);

        Ok(router)
    })
}
