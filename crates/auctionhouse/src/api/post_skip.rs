use {
    crate::api::{AppState, AuctionErrorWrapper},
    axum::{
        extract::State,
        http::{HeaderMap, StatusCode},
        response::{IntoResponse, Response},
    },
    std::sync::Arc,
};

pub async fn post_skip_handler(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let auth = state.authority(&headers);
    match state.house.skip_player(auth) {
        Ok(()) => StatusCode::OK.into_response(),
        Err(err) => AuctionErrorWrapper(err).into_response(),
    }
}
