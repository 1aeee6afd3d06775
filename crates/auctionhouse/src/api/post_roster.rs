use {
    crate::api::{AppState, AuctionErrorWrapper, error},
    axum::{
        body,
        extract::State,
        http::{HeaderMap, StatusCode},
        response::{IntoResponse, Json, Response},
    },
    serde::Serialize,
    std::sync::Arc,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterReply {
    /// Number of players that made it into the catalog.
    pub loaded: usize,
}

/// Accepts a roster CSV as the request body and replaces the catalog with
/// it. Malformed rows are skipped by the loader; a structurally broken file
/// is rejected as a whole.
pub async fn post_roster_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: body::Bytes,
) -> Response {
    let auth = state.authority(&headers);
    let players = match roster::parse_csv(body.as_ref()) {
        Ok(players) => players,
        Err(err) => {
            tracing::debug!(?err, "rejected roster upload");
            return (StatusCode::BAD_REQUEST, error("InvalidRoster", err.to_string()))
                .into_response();
        }
    };
    match state.house.reload_catalog(auth, players) {
        Ok(loaded) => (StatusCode::OK, Json(RosterReply { loaded })).into_response(),
        Err(err) => AuctionErrorWrapper(err).into_response(),
    }
}
