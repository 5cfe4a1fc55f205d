//! HTTP calls against the champion API.
//!
//! Browser-only; in non-web builds every call returns an error so the
//! shared component code still compiles.

use crate::model::{champion::ChampionDto, champion::ChampionForm, user::UserDto};

#[cfg(feature = "web")]
async fn error_message(response: reqwasm::http::Response) -> String {
    use crate::model::api::ErrorDto;

    if let Ok(error_dto) = response.json::<ErrorDto>().await {
        format!(
            "Request failed with status {}: {}",
            response.status(),
            error_dto.error
        )
    } else {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        format!(
            "Request failed with status {}: {}",
            response.status(),
            error_text
        )
    }
}

/// Resolve-or-create the session identity.
pub async fn resolve_session() -> Result<UserDto, String> {
    #[cfg(feature = "web")]
    {
        use reqwasm::http::Request;

        let response = Request::post("/api/auth/session")
            .credentials(reqwasm::http::RequestCredentials::Include)
            .header("Content-Type", "application/json")
            .body("{}")
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        match response.status() {
            200 => response
                .json::<UserDto>()
                .await
                .map_err(|e| format!("Failed to parse user data: {}", e)),
            _ => Err(error_message(response).await),
        }
    }
    #[cfg(not(feature = "web"))]
    Err("Session resolution requires a browser context".to_string())
}

/// Retrieve the full ordered champion snapshot.
pub async fn fetch_champions() -> Result<Vec<ChampionDto>, String> {
    #[cfg(feature = "web")]
    {
        use reqwasm::http::Request;

        let response = Request::get("/api/champions")
            .credentials(reqwasm::http::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        match response.status() {
            200 => response
                .json::<Vec<ChampionDto>>()
                .await
                .map_err(|e| format!("Failed to parse champion data: {}", e)),
            _ => Err(error_message(response).await),
        }
    }
    #[cfg(not(feature = "web"))]
    Err("Champion retrieval requires a browser context".to_string())
}

/// Subscribe to champion snapshot events, applying each full snapshot as it
/// arrives. Resolves only when the stream ends or fails.
pub async fn stream_snapshots(mut apply: impl FnMut(Vec<ChampionDto>)) -> Result<(), String> {
    #[cfg(feature = "web")]
    {
        use futures::StreamExt;
        use gloo_net::eventsource::futures::EventSource;

        // `source` must outlive the subscription; dropping it closes the
        // underlying connection.
        let mut source = EventSource::new("/api/champions/events")
            .map_err(|e| format!("Failed to open snapshot stream: {}", e))?;
        let mut events = source
            .subscribe("snapshot")
            .map_err(|e| format!("Failed to subscribe to snapshot events: {}", e))?;

        while let Some(event) = events.next().await {
            let (_, message) = event.map_err(|e| format!("Snapshot stream failed: {}", e))?;
            let data = message
                .data()
                .as_string()
                .ok_or_else(|| "Snapshot event carried a non-text payload".to_string())?;
            apply(parse_snapshot(&data)?);
        }

        Ok(())
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = &mut apply;
        Err("Snapshot streaming requires a browser context".to_string())
    }
}

/// Decode one snapshot event payload into the full record set.
fn parse_snapshot(data: &str) -> Result<Vec<ChampionDto>, String> {
    serde_json::from_str(data).map_err(|e| format!("Failed to parse snapshot data: {}", e))
}

/// Create a new champion record.
pub async fn create_champion(form: &ChampionForm) -> Result<ChampionDto, String> {
    #[cfg(feature = "web")]
    {
        use reqwasm::http::Request;

        let body = serde_json::to_string(form)
            .map_err(|e| format!("Failed to serialize champion form: {}", e))?;
        let response = Request::post("/api/champions")
            .credentials(reqwasm::http::RequestCredentials::Include)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        match response.status() {
            201 => response
                .json::<ChampionDto>()
                .await
                .map_err(|e| format!("Failed to parse champion data: {}", e)),
            _ => Err(error_message(response).await),
        }
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = form;
        Err("Champion creation requires a browser context".to_string())
    }
}

/// Overwrite an existing champion record.
pub async fn update_champion(id: i32, form: &ChampionForm) -> Result<ChampionDto, String> {
    #[cfg(feature = "web")]
    {
        use reqwasm::http::Request;

        let body = serde_json::to_string(form)
            .map_err(|e| format!("Failed to serialize champion form: {}", e))?;
        let response = Request::put(&format!("/api/champions/{}", id))
            .credentials(reqwasm::http::RequestCredentials::Include)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        match response.status() {
            200 => response
                .json::<ChampionDto>()
                .await
                .map_err(|e| format!("Failed to parse champion data: {}", e)),
            _ => Err(error_message(response).await),
        }
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = (id, form);
        Err("Champion update requires a browser context".to_string())
    }
}

/// Delete a champion record.
pub async fn delete_champion(id: i32) -> Result<(), String> {
    #[cfg(feature = "web")]
    {
        use reqwasm::http::Request;

        let response = Request::delete(&format!("/api/champions/{}", id))
            .credentials(reqwasm::http::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        match response.status() {
            204 => Ok(()),
            _ => Err(error_message(response).await),
        }
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = id;
        Err("Champion deletion requires a browser context".to_string())
    }
}
